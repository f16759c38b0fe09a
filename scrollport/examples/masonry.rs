//! Masonry: variable-height items fall into the currently shortest lane.

use scrollport::{Extent2, LayoutSpec, MasonryConfig, Scroller, ScrollerOptions};

fn main() -> Result<(), scrollport::ConfigError> {
    // Pseudo-random heights, stable per index.
    let height = |i: usize| 80 + ((i as u32).wrapping_mul(2654435761) % 140);

    let cfg = MasonryConfig::new(180);
    let options = ScrollerOptions::with_layout(200, LayoutSpec::Masonry(cfg), height)
        .with_gap(10)
        .with_initial_rect(Some(Extent2::new(500, 760)));
    let mut scroller = Scroller::new(options)?;

    println!(
        "{} lanes, total {}px",
        scroller.columns().unwrap_or(0),
        scroller.total_extent()
    );

    scroller.set_scroll_offset_clamped(2_000);
    let range = scroller.visible_range();
    println!("window at 2000px covers items {}..{}", range.start, range.end);
    scroller.for_each_virtual_rect(|rect| {
        println!(
            "  item {:>3} lane-x {:>3} y {:>5} h {}",
            rect.index, rect.cross_start, rect.main_start, rect.main
        );
    });
    Ok(())
}
