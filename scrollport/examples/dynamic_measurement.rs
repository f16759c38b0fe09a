//! Measured list: items start from an estimate, then real sizes arrive
//! asynchronously and are applied in one coalesced pass. The scroll offset
//! shifts so the anchor item stays visually fixed.

use scrollport::{Extent2, Scroller, ScrollerOptions};

fn main() -> Result<(), scrollport::ConfigError> {
    let options = ScrollerOptions::new(1_000, |_| 50)
        .with_initial_rect(Some(Extent2::new(400, 600)))
        .with_initial_offset(5_000);
    let mut scroller = Scroller::new(options)?;

    let anchor = scroller.index_at_offset(scroller.scroll_offset()).unwrap();
    let on_screen =
        scroller.item_start(anchor).unwrap() as i64 - scroller.scroll_offset() as i64;
    println!("anchor: item {anchor} at {on_screen}px on screen");

    // The host measured a handful of items above the viewport; each came out
    // taller than the estimate.
    for index in [10, 11, 12, 13] {
        scroller.observe(index);
        scroller.resolve_measurement(index, 80);
    }
    let shift = scroller.apply_resolved_measurements();
    println!("applied 4 measurements, offset shifted by {shift}px");

    let after =
        scroller.item_start(anchor).unwrap() as i64 - scroller.scroll_offset() as i64;
    println!("anchor: item {anchor} at {after}px on screen (unchanged: {})", after == on_screen);
    println!("total extent now {}px", scroller.total_extent());
    Ok(())
}
