//! Uniform grid: columns derive from the viewport's cross extent, so a
//! resize re-wraps the same items.

use scrollport::{Extent2, GridConfig, LayoutSpec, Scroller, ScrollerOptions};

fn main() -> Result<(), scrollport::ConfigError> {
    let cfg = GridConfig::new(Extent2::new(120, 160));
    let options = ScrollerOptions::with_layout(500, LayoutSpec::Grid(cfg), |_| 120)
        .with_gap(12)
        .with_initial_rect(Some(Extent2::new(600, 700)));
    let mut scroller = Scroller::new(options)?;

    for cross in [700u32, 350] {
        scroller.set_viewport(Extent2::new(600, cross));
        println!(
            "viewport cross {cross}px -> {} columns, total {}px",
            scroller.columns().unwrap_or(0),
            scroller.total_extent()
        );
        let range = scroller.visible_range();
        println!("  visible rows cover items {}..{}", range.start, range.end);
        scroller.for_each_virtual_rect(|rect| {
            if rect.index < range.start + 4 {
                let (x, y) = rect.position(scrollport::Direction::Vertical);
                println!("  item {:>3} at ({x}, {y})", rect.index);
            }
        });
    }
    Ok(())
}
