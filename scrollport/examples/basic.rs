//! Minimal fixed-size list: scroll through 10k rows and print the
//! materialized window.

use scrollport::{Align, Extent2, Scroller, ScrollerOptions};

fn main() -> Result<(), scrollport::ConfigError> {
    let options = ScrollerOptions::new(10_000, |_| 40)
        .with_initial_rect(Some(Extent2::new(600, 800)))
        .with_overscan(2)
        .with_gap(8);
    let mut scroller = Scroller::new(options)?;

    println!("total extent: {}px", scroller.total_extent());

    for offset in [0, 12_345, 200_000] {
        scroller.set_scroll_offset_clamped(offset);
        let range = scroller.virtual_range();
        println!(
            "\noffset {} -> items {}..{} ({} materialized)",
            scroller.scroll_offset(),
            range.start,
            range.end,
            range.len()
        );
        scroller.for_each_virtual_rect(|rect| {
            println!("  item {:>5} at {:>7}px (h {})", rect.index, rect.main_start, rect.main);
        });
    }

    let offset = scroller.scroll_to_index(9_999, Align::End);
    println!("\nscrolled to last item, offset {offset}");
    Ok(())
}
