//! Simulated host: a tiny in-memory scroll container driven through the
//! coordinator. Prints the placeholder churn as the user "scrolls".

use scrollport::{Direction, ScrollerOptions};
use scrollport_host::{Coordinator, HostSurface, PlaceholderId};

#[derive(Default)]
struct SimSurface {
    next_id: u64,
    scroll_offset: u64,
    created: usize,
    removed: usize,
    placed: usize,
    total_extent: u64,
}

impl HostSurface for SimSurface {
    fn create_placeholder(&mut self, _index: usize) -> PlaceholderId {
        self.next_id += 1;
        self.created += 1;
        PlaceholderId(self.next_id)
    }

    fn remove_placeholder(&mut self, _id: PlaceholderId) {
        self.removed += 1;
    }

    fn assign_placeholder(&mut self, _id: PlaceholderId, _index: usize) {}

    fn place(&mut self, _id: PlaceholderId, _x: u64, _y: u64, _width: u32, _height: u32) {
        self.placed += 1;
    }

    fn set_total_extent(&mut self, _direction: Direction, extent: u64) {
        self.total_extent = extent;
    }

    fn viewport(&self) -> (u32, u32) {
        (400, 600)
    }

    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    fn is_attached(&self) -> bool {
        true
    }
}

fn main() -> Result<(), scrollport::ConfigError> {
    let mut surface = SimSurface::default();
    let mut coord = Coordinator::new(ScrollerOptions::new(100_000, |_| 48).with_overscan(3))?;

    let mut now_ms = 0u64;
    coord.run_pending(&mut surface, now_ms);
    println!(
        "initial pass: {} placeholders, content {}px",
        coord.pool().active_len(),
        surface.total_extent
    );

    // Simulate a fling: 60 frames of accelerating scroll.
    for frame in 1..=60u64 {
        now_ms += 16;
        surface.scroll_offset += frame * 10;
        coord.on_scroll(now_ms);
        coord.run_pending(&mut surface, now_ms);
    }
    println!(
        "after fling to {}px: created {} total, removed {}, {} place() calls",
        surface.scroll_offset, surface.created, surface.removed, surface.placed
    );

    // Items around the viewport report their real heights.
    let range = coord.virtual_range();
    for i in range.start..range.end {
        coord.on_measurement(i, 40 + (i as u32 % 30));
    }
    now_ms += 16;
    coord.run_pending(&mut surface, now_ms);
    println!(
        "after measurements: content {}px, surface offset {}px",
        surface.total_extent, surface.scroll_offset
    );
    Ok(())
}
