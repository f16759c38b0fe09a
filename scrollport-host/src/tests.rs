use crate::*;

use std::collections::{HashMap, HashSet};
use std::vec::Vec;

use scrollport::{
    Align, Direction, Extent2, ItemRect, ItemRectKeyed, LayoutSpec, Scroller, ScrollerOptions,
};

/// Records every surface write so tests can assert on exact churn.
struct MockSurface {
    next_id: u64,
    width: u32,
    height: u32,
    scroll_offset: u64,
    attached: bool,
    alive: HashSet<PlaceholderId>,
    created: usize,
    removed: usize,
    assigned: usize,
    placements: Vec<(PlaceholderId, u64, u64, u32, u32)>,
    total_extent: Option<(Direction, u64)>,
}

impl MockSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            next_id: 0,
            width,
            height,
            scroll_offset: 0,
            attached: true,
            alive: HashSet::new(),
            created: 0,
            removed: 0,
            assigned: 0,
            placements: Vec::new(),
            total_extent: None,
        }
    }
}

impl HostSurface for MockSurface {
    fn create_placeholder(&mut self, _index: usize) -> PlaceholderId {
        let id = PlaceholderId(self.next_id);
        self.next_id += 1;
        self.created += 1;
        self.alive.insert(id);
        id
    }

    fn remove_placeholder(&mut self, id: PlaceholderId) {
        assert!(self.alive.remove(&id), "removed unknown placeholder {id:?}");
        self.removed += 1;
    }

    fn assign_placeholder(&mut self, id: PlaceholderId, _index: usize) {
        assert!(self.alive.contains(&id), "assigned dead placeholder {id:?}");
        self.assigned += 1;
    }

    fn place(&mut self, id: PlaceholderId, x: u64, y: u64, width: u32, height: u32) {
        assert!(self.alive.contains(&id), "placed dead placeholder {id:?}");
        self.placements.push((id, x, y, width, height));
    }

    fn set_total_extent(&mut self, direction: Direction, extent: u64) {
        self.total_extent = Some((direction, extent));
    }

    fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

fn keyed(index: usize, key: u64) -> ItemRectKeyed<u64> {
    ItemRectKeyed {
        key,
        rect: ItemRect {
            index,
            main_start: index as u64 * 50,
            cross_start: 0,
            main: 50,
            cross: 100,
        },
    }
}

fn window(range: core::ops::Range<usize>) -> Vec<ItemRectKeyed<u64>> {
    range.map(|i| keyed(i, i as u64)).collect()
}

// --- pool ------------------------------------------------------------------

#[test]
fn pool_reuses_freed_placeholders() {
    let mut surface = MockSurface::new(100, 200);
    let mut pool = ChildPool::new();

    let out = pool.reconcile(&window(0..10), &mut surface);
    assert_eq!(out.entered.len(), 10);
    assert!(out.kept.is_empty());
    assert_eq!(surface.created, 10);

    // Shift by two: the two that left are reused for the two that entered.
    let mut out = pool.reconcile(&window(2..12), &mut surface);
    assert_eq!(out.kept, (2..10).collect::<Vec<_>>());
    assert_eq!(out.entered.len(), 2);
    out.left.sort_unstable();
    assert_eq!(out.left, alloc::vec![0, 1]);
    assert_eq!(surface.created, 10, "no new placeholders for a window shift");
    assert_eq!(surface.removed, 0);
    assert_eq!(pool.active_len(), 10);
    assert_eq!(pool.free_len(), 0);

    // A no-op reconcile touches nothing.
    let before = surface.assigned;
    let out = pool.reconcile(&window(2..12), &mut surface);
    assert_eq!(out.kept, (2..12).collect::<Vec<_>>());
    assert!(out.entered.is_empty() && out.left.is_empty());
    assert_eq!(surface.assigned, before);
}

#[test]
fn pool_keeps_placeholder_across_index_shift() {
    let mut surface = MockSurface::new(100, 200);
    let mut pool = ChildPool::new();

    // Key 7 at index 0.
    pool.reconcile(&[keyed(0, 7)], &mut surface);
    let id = pool.id_for(&7).unwrap();

    // Same key, shifted to index 3 (a prepend happened upstream).
    let out = pool.reconcile(&[keyed(3, 7)], &mut surface);
    assert_eq!(out.kept, alloc::vec![3]);
    assert!(out.entered.is_empty());
    assert_eq!(pool.id_for(&7), Some(id));
    assert_eq!(surface.assigned, 1, "rebind, not recreate");
    assert_eq!(surface.created, 1);
}

#[test]
fn pool_free_list_is_bounded() {
    let mut surface = MockSurface::new(100, 200);
    let mut pool = ChildPool::with_free_cap(1);

    pool.reconcile(&window(0..4), &mut surface);
    let out = pool.reconcile(&[], &mut surface);
    assert_eq!(out.left.len(), 4);
    assert_eq!(pool.free_len(), 1);
    assert_eq!(surface.removed, 3);

    pool.clear(&mut surface);
    assert_eq!(pool.free_len(), 0);
    assert_eq!(surface.alive.len(), 0);
}

#[test]
fn pool_releases_everything_outside_target() {
    // `left` order depends on map iteration; normalize before asserting.
    let mut surface = MockSurface::new(100, 200);
    let mut pool = ChildPool::new();
    pool.reconcile(&window(0..6), &mut surface);
    let mut out = pool.reconcile(&window(4..6), &mut surface);
    out.left.sort_unstable();
    assert_eq!(out.left, alloc::vec![0, 1, 2, 3]);
}

// --- coordinator -----------------------------------------------------------

fn list_coordinator(count: usize, item: u32) -> Coordinator<u64> {
    Coordinator::new(ScrollerOptions::new(count, move |_| item)).unwrap()
}

#[test]
fn coordinator_initial_pass_materializes_window() {
    // Physical 100x200, vertical: main 200.
    let mut surface = MockSurface::new(100, 200);
    let mut coord = list_coordinator(50, 20);

    assert!(coord.is_pending());
    assert!(coord.run_pending(&mut surface, 0));
    assert_eq!(coord.phase(), Phase::Idle);

    // Visible 0..10 plus one overscan row.
    assert_eq!(coord.virtual_range().start, 0);
    assert_eq!(coord.virtual_range().end, 11);
    assert_eq!(coord.pool().active_len(), 11);
    assert_eq!(surface.created, 11);
    assert_eq!(surface.total_extent, Some((Direction::Vertical, 1000)));

    // Placements are physical: x from cross, y from main.
    let (_, x, y, w, h) = surface.placements[5];
    assert_eq!((x, y, w, h), (0, 100, 100, 20));

    // Entered items are observed for measurement.
    assert!(coord.scroller().is_measurement_pending(0));

    // Nothing pending: the next tick is a no-op.
    assert!(!coord.run_pending(&mut surface, 16));
}

#[test]
fn coordinator_coalesces_events_into_one_pass() {
    let mut surface = MockSurface::new(100, 200);
    let mut coord = list_coordinator(50, 20);
    coord.run_pending(&mut surface, 0);

    surface.scroll_offset = 100;
    coord.on_scroll(10);
    coord.on_scroll(12);
    coord.on_resize();

    assert!(coord.run_pending(&mut surface, 16));
    assert_eq!(coord.virtual_range().start, 4);
    assert_eq!(coord.virtual_range().end, 16);
    assert!(coord.scroller().is_scrolling());

    // Only one pass ran for the three events.
    assert!(!coord.run_pending(&mut surface, 17));

    // Debounce expires even with no pending work.
    coord.run_pending(&mut surface, 400);
    assert!(!coord.scroller().is_scrolling());
}

#[test]
fn coordinator_recycles_on_scroll() {
    let mut surface = MockSurface::new(100, 200);
    let mut coord = list_coordinator(500, 20);
    coord.run_pending(&mut surface, 0);
    let created_initial = surface.created;

    // Scroll one viewport down; the window shifts by ten items.
    surface.scroll_offset = 200;
    coord.on_scroll(10);
    coord.run_pending(&mut surface, 16);

    // Window sizes differ by at most overscan clamping, so almost every
    // departing placeholder is reused.
    assert!(surface.created <= created_initial + 2, "created {} placeholders", surface.created);
    assert_eq!(surface.removed, 0);
}

#[test]
fn coordinator_discards_stale_pass_after_epoch_bump() {
    let mut surface = MockSurface::new(100, 200);
    let mut coord = list_coordinator(50, 20);
    coord.run_pending(&mut surface, 0);

    coord.on_scroll(10);
    // The collection is replaced after the pass was scheduled.
    coord.scroller_mut().set_count(10);

    assert!(!coord.run_pending(&mut surface, 16), "stale pass dropped");
    assert!(coord.is_pending());
    assert!(coord.run_pending(&mut surface, 32), "rescheduled pass runs");
    assert_eq!(coord.scroller().count(), 10);
    assert_eq!(surface.total_extent, Some((Direction::Vertical, 200)));
}

#[test]
fn coordinator_aborts_on_detached_surface() {
    let mut surface = MockSurface::new(100, 200);
    let mut coord = list_coordinator(50, 20);

    surface.attached = false;
    assert!(!coord.run_pending(&mut surface, 0));
    assert_eq!(surface.created, 0);
    assert!(surface.placements.is_empty());
    assert!(coord.is_pending(), "work survives the detach");

    surface.attached = true;
    assert!(coord.run_pending(&mut surface, 16));
    assert_eq!(coord.pool().active_len(), 11);
}

#[test]
fn coordinator_writes_back_measurement_shift() {
    let mut surface = MockSurface::new(100, 100);
    let mut coord = Coordinator::new(ScrollerOptions::new(100, |_| 50)).unwrap();
    surface.scroll_offset = 1000;
    coord.run_pending(&mut surface, 0);
    assert_eq!(surface.scroll_offset, 1000);

    // Item 2 sits above the viewport; growing it must not move the content
    // on screen, so the surface offset is corrected.
    coord.on_measurement(2, 70);
    coord.run_pending(&mut surface, 16);
    assert_eq!(surface.scroll_offset, 1020);
    assert_eq!(coord.scroller().scroll_offset(), 1020);
}

#[test]
fn coordinator_scroll_to_index_goes_through_surface() {
    let mut surface = MockSurface::new(100, 200);
    let mut coord = list_coordinator(500, 20);
    coord.run_pending(&mut surface, 0);

    let offset = coord.scroll_to_index(&mut surface, 100, Align::Start, 10);
    assert_eq!(offset, 2000);
    assert_eq!(surface.scroll_offset, 2000);
    assert!(coord.is_pending());

    coord.run_pending(&mut surface, 16);
    assert_eq!(coord.visible_range().start, 100);
}

// --- anchors ---------------------------------------------------------------

#[test]
fn anchor_preserves_scroll_across_prepend() {
    let mut s1 = Scroller::new(ScrollerOptions::new_with_key(
        100,
        LayoutSpec::default(),
        |_| 1,
        |i| 1000u64 + i as u64,
    ))
    .unwrap();
    s1.set_viewport(Extent2::new(10, 50));
    s1.set_scroll_offset(50);

    let anchor = capture_first_visible_anchor(&s1).unwrap();
    assert_eq!(anchor.key, 1050);
    assert_eq!(anchor.offset_in_viewport, 0);

    // Prepend 10 items: old items shift by +10 indexes.
    let mut s2 = Scroller::new(ScrollerOptions::new_with_key(
        110,
        LayoutSpec::default(),
        |_| 1,
        |i| {
            if i < 10 {
                2000u64 + i as u64
            } else {
                1000u64 + (i - 10) as u64
            }
        },
    ))
    .unwrap();
    s2.set_viewport(Extent2::new(10, 50));
    s2.set_scroll_offset(50);

    let mut map = HashMap::<u64, usize>::new();
    for i in 0..110usize {
        map.insert(s2.key_for(i), i);
    }

    assert!(apply_anchor(&mut s2, &anchor, |k| map.get(k).copied()));
    assert_eq!(s2.scroll_offset(), 60);
}

#[test]
fn anchor_mid_item_offset_round_trips() {
    let mut s = Scroller::new(ScrollerOptions::new(100, |_| 20)).unwrap();
    s.set_viewport(Extent2::new(100, 50));
    s.set_scroll_offset(130);

    let anchor = capture_first_visible_anchor(&s).unwrap();
    assert_eq!(anchor.key, 6);
    assert_eq!(anchor.offset_in_viewport, 10);

    s.set_scroll_offset(0);
    assert!(apply_anchor(&mut s, &anchor, |&k| Some(k as usize)));
    assert_eq!(s.scroll_offset(), 130);
}

#[test]
fn anchor_lookup_failure_leaves_offset_alone() {
    let mut s = Scroller::new(ScrollerOptions::new(100, |_| 20)).unwrap();
    s.set_viewport(Extent2::new(100, 50));
    s.set_scroll_offset(130);

    let anchor = ScrollAnchor {
        key: 9999u64,
        offset_in_viewport: 0,
    };
    assert!(!apply_anchor(&mut s, &anchor, |_| None));
    assert_eq!(s.scroll_offset(), 130);
}
