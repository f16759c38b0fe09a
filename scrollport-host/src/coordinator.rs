use alloc::vec::Vec;

use scrollport::{
    Align, ConfigError, Extent2, IndexRange, ItemRectKeyed, Scroller, ScrollerOptions,
};

use crate::{ChildPool, HostKey, HostSurface};

/// Where a layout pass currently is. Useful for hosts that want to assert
/// they are not re-entering the coordinator from a surface callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Applying queued measurements and recomputing the range.
    Measuring,
    /// Writing placements back to the surface.
    Applying,
}

/// Drives a [`Scroller`] against a [`HostSurface`].
///
/// Event handlers (`on_scroll`, `on_resize`, ...) only mark work as pending;
/// the host calls [`Coordinator::run_pending`] once per frame/tick and gets a
/// single coalesced pass no matter how many events arrived in between. A pass
/// reads geometry from the surface, applies queued measurements, reconciles
/// the placeholder pool and writes placements back.
///
/// The coordinator does not own the surface. Every pass checks
/// [`HostSurface::is_attached`] before writing and aborts cleanly on a
/// detached surface; the pending work survives for after a reattach.
#[derive(Clone, Debug)]
pub struct Coordinator<K> {
    scroller: Scroller<K>,
    pool: ChildPool<K>,
    phase: Phase,
    pending: bool,
    scheduled_epoch: u64,
    targets: Vec<ItemRectKeyed<K>>,
}

impl<K: HostKey> Coordinator<K> {
    pub fn new(options: ScrollerOptions<K>) -> Result<Self, ConfigError> {
        Ok(Self::from_scroller(Scroller::new(options)?))
    }

    pub fn from_scroller(scroller: Scroller<K>) -> Self {
        let scheduled_epoch = scroller.epoch();
        Self {
            scroller,
            pool: ChildPool::new(),
            phase: Phase::Idle,
            pending: true,
            scheduled_epoch,
            targets: Vec::new(),
        }
    }

    pub fn scroller(&self) -> &Scroller<K> {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut Scroller<K> {
        &mut self.scroller
    }

    pub fn pool(&self) -> &ChildPool<K> {
        &self.pool
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Marks a pass as needed. Safe to call any number of times; passes
    /// coalesce.
    pub fn schedule(&mut self) {
        htrace!(epoch = self.scroller.epoch(), "schedule");
        self.pending = true;
        self.scheduled_epoch = self.scroller.epoch();
    }

    /// The host's scroll event handler.
    pub fn on_scroll(&mut self, now_ms: u64) {
        self.scroller.notify_scroll_event(now_ms);
        self.schedule();
    }

    /// The host's viewport-resize handler.
    pub fn on_resize(&mut self) {
        self.schedule();
    }

    /// The host's data-change handler.
    pub fn on_items_changed(&mut self, count: usize) {
        self.scroller.set_count(count);
        self.schedule();
    }

    /// A measurement arrived for the item at `index`. Queued; the next pass
    /// applies the whole batch at once.
    pub fn on_measurement(&mut self, index: usize, main: u32) {
        self.scroller.resolve_measurement(index, main);
        self.schedule();
    }

    pub fn visible_range(&self) -> IndexRange {
        self.scroller.visible_range()
    }

    pub fn virtual_range(&self) -> IndexRange {
        self.scroller.virtual_range()
    }

    /// Scrolls to an index, writing the offset straight to the surface.
    pub fn scroll_to_index<S: HostSurface>(
        &mut self,
        surface: &mut S,
        index: usize,
        align: Align,
        now_ms: u64,
    ) -> u64 {
        let offset = self.scroller.scroll_to_index_offset(index, align);
        surface.set_scroll_offset(offset);
        self.on_scroll(now_ms);
        offset
    }

    /// Runs one layout pass if any work is pending.
    ///
    /// Returns `true` when a pass actually ran. Call once per frame/tick
    /// regardless; the debounced `is_scrolling` reset runs either way.
    pub fn run_pending<S: HostSurface>(&mut self, surface: &mut S, now_ms: u64) -> bool {
        if !self.pending {
            self.scroller.update_scrolling(now_ms);
            return false;
        }
        if !surface.is_attached() {
            // Drop all writes; the pending flag survives for a reattach.
            self.phase = Phase::Idle;
            return false;
        }
        if self.scheduled_epoch != self.scroller.epoch() {
            // The collection or configuration was replaced after this pass was
            // scheduled. Drop it and go again with fresh state.
            htrace!(
                scheduled = self.scheduled_epoch,
                current = self.scroller.epoch(),
                "discarding stale pass"
            );
            self.scheduled_epoch = self.scroller.epoch();
            return false;
        }

        self.phase = Phase::Measuring;
        let direction = self.scroller.options().direction;
        let (width, height) = surface.viewport();
        let rect = Extent2::from_physical(direction, width, height);
        let offset = surface.scroll_offset();
        self.scroller.batch_update(|s| {
            s.set_viewport(rect);
            s.set_scroll_offset_clamped(offset);
        });

        let shift = self.scroller.apply_resolved_measurements();
        if shift != 0 {
            surface.set_scroll_offset(self.scroller.scroll_offset());
        }

        self.phase = Phase::Applying;
        let Self {
            scroller,
            pool,
            targets,
            ..
        } = self;
        scroller.collect_virtual_rects_keyed(targets);
        let outcome = pool.reconcile(targets, surface);
        for &index in &outcome.left {
            scroller.unobserve(index);
        }
        for &(index, _) in &outcome.entered {
            scroller.observe(index);
        }
        for target in targets.iter() {
            if let Some(id) = pool.id_for(&target.key) {
                let (x, y) = target.rect.position(direction);
                let (w, h) = target.rect.size(direction);
                surface.place(id, x, y, w, h);
            }
        }
        surface.set_total_extent(direction, scroller.total_extent());
        hdebug!(
            entered = outcome.entered.len(),
            left = outcome.left.len(),
            kept = outcome.kept.len(),
            shift,
            "pass complete"
        );

        self.phase = Phase::Idle;
        self.pending = false;
        self.scroller.update_scrolling(now_ms);
        true
    }

    /// Tears down every placeholder on the surface and forgets the pool
    /// state. The next pass rebuilds from scratch.
    pub fn clear<S: HostSurface>(&mut self, surface: &mut S) {
        self.pool.clear(surface);
        self.schedule();
    }
}
