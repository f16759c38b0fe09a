use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::layout::{LayoutInputs, LayoutState};
use crate::measure::{SizeTracker, TrackerKey};
use crate::{
    Align, ConfigError, Extent2, FrameState, IndexRange, ItemKey, ItemRect, ItemRectKeyed,
    ScrollDirection, ScrollState, ScrollerOptions, ViewportState,
};

/// A headless virtual-scrolling engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any host objects.
/// - A host adapter drives it by providing viewport geometry, scroll offsets
///   and resolved measurements.
/// - Rendering is exposed via zero-allocation iteration APIs
///   (`for_each_virtual_*`).
///
/// The layout strategy (list, grid, masonry) is selected by
/// [`ScrollerOptions::layout`]; all strategies share the same query surface.
/// For the placeholder pool and the scroll/resize coordinator, see the
/// `scrollport-host` crate.
#[derive(Clone, Debug)]
pub struct Scroller<K = ItemKey> {
    options: ScrollerOptions<K>,
    layout: LayoutState,
    tracker: SizeTracker<K>,
    viewport: Extent2,
    scroll_offset: u64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,
    epoch: u64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
    scratch: Vec<(usize, K, u32)>,
}

impl<K: TrackerKey> Scroller<K> {
    /// Creates a new engine from options.
    ///
    /// Validates the configuration first; the engine never lays out with a
    /// malformed one.
    pub fn new(options: ScrollerOptions<K>) -> Result<Self, ConfigError> {
        options.validate()?;
        let viewport = options.initial_rect.unwrap_or_default();
        let scroll_offset = options.initial_offset;
        sdebug!(
            count = options.count,
            overscan = options.overscan,
            "Scroller::new"
        );
        let tracker = SizeTracker::new();
        let layout = Self::build_layout(&options, &tracker, viewport.cross);
        Ok(Self {
            options,
            layout,
            tracker,
            viewport,
            scroll_offset,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            epoch: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
            scratch: Vec::new(),
        })
    }

    fn build_layout(
        options: &ScrollerOptions<K>,
        tracker: &SizeTracker<K>,
        viewport_cross: u32,
    ) -> LayoutState {
        let estimate = &options.estimate_size;
        let key_of = &options.get_item_key;
        let size_of = move |i: usize| {
            let key = key_of(i);
            tracker.get(&key).unwrap_or_else(|| estimate(i)).max(1)
        };
        let inputs = LayoutInputs {
            count: options.count,
            gap: options.gap,
            padding_start: options.padding_start,
            padding_end: options.padding_end,
            viewport_cross,
            size_of: &size_of,
        };
        LayoutState::build(&options.layout, &inputs)
    }

    fn rebuild_layout(&mut self) {
        self.layout = Self::build_layout(&self.options, &self.tracker, self.viewport.cross);
    }

    pub fn options(&self) -> &ScrollerOptions<K> {
        &self.options
    }

    /// Replaces the whole configuration, invalidating cached layout state.
    pub fn set_options(&mut self, options: ScrollerOptions<K>) -> Result<(), ConfigError> {
        options.validate()?;
        self.options = options;
        strace!(
            count = self.options.count,
            overscan = self.options.overscan,
            "Scroller::set_options"
        );
        self.bump_epoch();
        self.rebuild_layout();
        self.notify();
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut ScrollerOptions<K>),
    ) -> Result<(), ConfigError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Monotonic counter, bumped whenever the item collection, key mapping or
    /// configuration is replaced. Hosts capture it when scheduling a layout
    /// pass and discard the pass if it moved.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for adapters: on a typical frame you might update the
    /// viewport rect, scroll offset and `is_scrolling` state together.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Scroller<K>, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// Replaces the item count (the engine reacts to collection length
    /// changes by invalidating cached layout state).
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.bump_epoch();
        self.rebuild_layout();
        self.notify();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn set_gap(&mut self, gap: u32) {
        if self.options.gap == gap {
            return;
        }
        self.options.gap = gap;
        self.rebuild_layout();
        self.notify();
    }

    pub fn set_padding(&mut self, padding_start: u32, padding_end: u32) {
        self.options.padding_start = padding_start;
        self.options.padding_end = padding_end;
        self.rebuild_layout();
        self.notify();
    }

    pub fn set_scroll_padding(&mut self, scroll_padding_start: u32, scroll_padding_end: u32) {
        self.options.scroll_padding_start = scroll_padding_start;
        self.options.scroll_padding_end = scroll_padding_end;
        self.notify();
    }

    pub fn set_scroll_margin(&mut self, scroll_margin: u32) {
        self.options.scroll_margin = scroll_margin;
        self.notify();
    }

    pub fn set_get_item_key(&mut self, f: impl Fn(usize) -> K + Send + Sync + 'static) {
        self.options.get_item_key = Arc::new(f);
        self.bump_epoch();
        self.rebuild_layout();
        self.notify();
    }

    pub fn set_estimate_size(&mut self, f: impl Fn(usize) -> u32 + Send + Sync + 'static) {
        self.options.estimate_size = Arc::new(f);
        self.rebuild_layout();
        self.notify();
    }

    pub fn set_adjust_on_resize(
        &mut self,
        f: Option<impl Fn(&Scroller<K>, ItemRect, i64) -> bool + Send + Sync + 'static>,
    ) {
        self.options.adjust_on_resize = f.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Rebuilds per-index state from the key-based caches.
    ///
    /// Call this after the data set is reordered while `count` stays the
    /// same (the `get_item_key` closure reads mutated external state).
    pub fn sync_item_keys(&mut self) {
        self.bump_epoch();
        self.rebuild_layout();
        self.notify();
    }

    // --- viewport + scroll state -------------------------------------------

    pub fn viewport(&self) -> Extent2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, rect: Extent2) {
        if self.viewport == rect {
            return;
        }
        let cross_changed = rect.cross != self.viewport.cross;
        self.viewport = rect;
        if cross_changed {
            // Column derivation and flex stretching depend on the cross
            // extent.
            self.rebuild_layout();
        }
        self.notify();
    }

    pub fn set_viewport_main(&mut self, main: u32) {
        self.set_viewport(Extent2::new(main, self.viewport.cross));
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_offset_in_content(&self) -> u64 {
        self.scroll_offset
            .saturating_sub(self.options.scroll_margin as u64)
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a scroll offset update from the host (wheel/drag), marking the
    /// engine as scrolling.
    pub fn apply_scroll_offset_event(&mut self, offset: u64, now_ms: u64) {
        strace!(offset, now_ms, "apply_scroll_offset_event");
        self.batch_update(|s| {
            s.set_scroll_offset(offset);
            s.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_offset_event`, but clamps the offset.
    pub fn apply_scroll_offset_event_clamped(&mut self, offset: u64, now_ms: u64) {
        strace!(offset, now_ms, "apply_scroll_offset_event_clamped");
        self.batch_update(|s| {
            s.set_scroll_offset_clamped(offset);
            s.notify_scroll_event(now_ms);
        });
    }

    /// Applies both viewport rect and scroll offset in a single coalesced
    /// update. Recommended entry point for hosts that receive scroll events
    /// along with updated geometry.
    pub fn apply_scroll_frame(&mut self, rect: Extent2, scroll_offset: u64, now_ms: u64) {
        strace!(
            rect_main = rect.main,
            rect_cross = rect.cross,
            scroll_offset,
            now_ms,
            "apply_scroll_frame"
        );
        self.batch_update(|s| {
            s.set_viewport(rect);
            s.set_scroll_offset(scroll_offset);
            s.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_frame`, but clamps the offset.
    pub fn apply_scroll_frame_clamped(&mut self, rect: Extent2, scroll_offset: u64, now_ms: u64) {
        self.batch_update(|s| {
            s.set_viewport(rect);
            s.set_scroll_offset_clamped(scroll_offset);
            s.notify_scroll_event(now_ms);
        });
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Debounced `is_scrolling` reset; call once per frame/tick.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    // --- measurements ------------------------------------------------------

    /// Marks the placeholder at `index` as awaiting a measurement.
    pub fn observe(&mut self, index: usize) {
        self.tracker.observe(index);
    }

    pub fn unobserve(&mut self, index: usize) {
        self.tracker.unobserve(index);
    }

    pub fn is_measurement_pending(&self, index: usize) -> bool {
        self.tracker.is_pending(index)
    }

    /// Queues a resolved measurement without relaying out.
    ///
    /// Measurement resolution is asynchronous: hosts report sizes as they
    /// arrive and the next [`Self::apply_resolved_measurements`] applies the
    /// whole batch in one pass.
    pub fn resolve_measurement(&mut self, index: usize, main: u32) {
        if index >= self.options.count {
            swarn!(index, count = self.options.count, "stale measurement dropped");
            return;
        }
        let key = self.key_for(index);
        self.tracker.resolve(index, key, main);
    }

    pub fn has_resolved_measurements(&self) -> bool {
        self.tracker.has_resolved()
    }

    /// Applies every queued measurement in a single coalesced relayout.
    ///
    /// Keeps the anchor visually fixed: measured changes for items before the
    /// current scroll offset shift the offset by the accumulated delta.
    /// Returns the applied shift so hosts can write it back to the real
    /// scroll position.
    pub fn apply_resolved_measurements(&mut self) -> i64 {
        if !self.tracker.has_resolved() {
            return 0;
        }
        let mut batch = core::mem::take(&mut self.scratch);
        self.tracker.take_resolved(&mut batch);
        sdebug!(resolved = batch.len(), "apply_resolved_measurements");

        let mut shift = 0i64;
        for (index, key, main) in batch.drain(..) {
            if index >= self.options.count {
                self.tracker.record(key, main);
                continue;
            }
            let rect = self.layout.item_rect(index);
            self.tracker.record(key, main);
            let delta = self.layout.apply_measurement(index, main);
            if delta != 0 && self.should_adjust(rect, delta) {
                shift += delta;
            }
        }
        self.scratch = batch;

        if shift != 0 {
            self.shift_scroll_offset(shift);
        }
        self.notify();
        shift
    }

    fn should_adjust(&self, rect: ItemRect, delta: i64) -> bool {
        if let Some(f) = &self.options.adjust_on_resize {
            return f(self, rect, delta);
        }
        // Default anchor policy: items starting before the viewport's leading
        // edge push the offset; the item under the leading edge and everything
        // after it must not move on screen.
        let start = (self.options.scroll_margin as u64).saturating_add(rect.main_start);
        start < self.scroll_offset
    }

    fn shift_scroll_offset(&mut self, delta: i64) {
        if delta > 0 {
            self.scroll_offset = self.scroll_offset.saturating_add(delta as u64);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }
    }

    /// Records a measurement immediately, without adjusting the scroll
    /// offset.
    pub fn measure(&mut self, index: usize, main: u32) {
        if index >= self.options.count {
            return;
        }
        let key = self.key_for(index);
        self.tracker.record(key, main);
        self.layout.apply_measurement(index, main);
        self.notify();
    }

    /// Records a batch of measurements with a single notification.
    pub fn measure_many(&mut self, measurements: impl IntoIterator<Item = (usize, u32)>) {
        for (index, main) in measurements {
            if index >= self.options.count {
                continue;
            }
            let key = self.key_for(index);
            self.tracker.record(key, main);
            self.layout.apply_measurement(index, main);
        }
        self.notify();
    }

    /// Records a measurement and applies the anchor-preserving offset
    /// adjustment. Returns the applied offset delta.
    pub fn resize_item(&mut self, index: usize, main: u32) -> i64 {
        if index >= self.options.count {
            return 0;
        }
        let rect = self.layout.item_rect(index);
        let key = self.key_for(index);
        self.tracker.record(key, main);
        let delta = self.layout.apply_measurement(index, main);
        if delta == 0 {
            self.notify();
            return 0;
        }
        if self.should_adjust(rect, delta) {
            self.shift_scroll_offset(delta);
            self.notify();
            delta
        } else {
            self.notify();
            0
        }
    }

    pub fn is_measured(&self, index: usize) -> bool {
        index < self.options.count && self.tracker.get(&self.key_for(index)).is_some()
    }

    /// Drops every cached measurement and relays out from estimates.
    pub fn reset_measurements(&mut self) {
        self.tracker.clear();
        self.rebuild_layout();
        self.notify();
    }

    /// Evicts one cached measurement; the item falls back to its estimate on
    /// the next rebuild. Running totals stay consistent (they are adjusted by
    /// delta, never recomputed from the cache).
    pub fn evict_measurement(&mut self, index: usize) {
        if index >= self.options.count {
            return;
        }
        let key = self.key_for(index);
        if self.tracker.invalidate(&key).is_some() {
            self.notify();
        }
    }

    /// Number of cached measured sizes (key → size).
    pub fn measurement_cache_len(&self) -> usize {
        self.tracker.len()
    }

    /// Iterates over the cached measured sizes without allocations.
    pub fn for_each_cached_size(&self, f: impl FnMut(&K, u32)) {
        self.tracker.for_each(f);
    }

    /// Exports the cached measured sizes (useful for persistence).
    pub fn export_measurement_cache(&self) -> Vec<(K, u32)>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.tracker.len());
        self.tracker.for_each(|k, v| out.push((k.clone(), v)));
        out
    }

    /// Replaces the cached measured sizes (useful when restoring state).
    pub fn import_measurement_cache(&mut self, entries: impl IntoIterator<Item = (K, u32)>) {
        self.tracker.clear();
        let mut n = 0usize;
        for (k, v) in entries {
            self.tracker.record(k, v);
            n = n.saturating_add(1);
        }
        sdebug!(entries = n, "import_measurement_cache");
        self.rebuild_layout();
        self.notify();
    }

    // --- queries -----------------------------------------------------------

    pub fn key_for(&self, index: usize) -> K {
        (self.options.get_item_key)(index)
    }

    /// Full virtual content length along the scroll axis.
    pub fn total_extent(&self) -> u64 {
        self.layout.total_extent()
    }

    pub fn max_scroll_offset(&self) -> u64 {
        let margin = self.options.scroll_margin as u64;
        margin.saturating_add(
            self.total_extent()
                .saturating_sub(self.viewport.main as u64),
        )
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Strictly visible indices (no overscan).
    pub fn visible_range(&self) -> IndexRange {
        self.visible_range_for(self.scroll_offset, self.viewport)
    }

    pub fn visible_range_for(&self, scroll_offset: u64, viewport: Extent2) -> IndexRange {
        let margin = self.options.scroll_margin as u64;
        if scroll_offset.saturating_add(viewport.main as u64) <= margin {
            return IndexRange::EMPTY;
        }
        let range = self
            .layout
            .visible_range(scroll_offset.saturating_sub(margin), viewport);
        debug_assert!(range.start <= range.end, "inverted visible range");
        range
    }

    /// Visible indices expanded by `overscan` on each side.
    pub fn virtual_range(&self) -> IndexRange {
        self.virtual_range_for(self.scroll_offset, self.viewport)
    }

    pub fn virtual_range_for(&self, scroll_offset: u64, viewport: Extent2) -> IndexRange {
        crate::range::overscanned(
            self.visible_range_for(scroll_offset, viewport),
            self.options.overscan,
            self.options.count,
        )
    }

    pub fn for_each_virtual_rect(&self, mut f: impl FnMut(ItemRect)) {
        let range = self.virtual_range();
        for i in range.start..range.end {
            f(self.layout.item_rect(i));
        }
    }

    pub fn for_each_virtual_rect_keyed(&self, mut f: impl FnMut(ItemRectKeyed<K>)) {
        let range = self.virtual_range();
        for i in range.start..range.end {
            f(ItemRectKeyed {
                key: self.key_for(i),
                rect: self.layout.item_rect(i),
            });
        }
    }

    /// Collects virtual item rects into `out` (clears `out` first).
    pub fn collect_virtual_rects(&self, out: &mut Vec<ItemRect>) {
        out.clear();
        self.for_each_virtual_rect(|r| out.push(r));
    }

    /// Collects keyed virtual item rects into `out` (clears `out` first).
    pub fn collect_virtual_rects_keyed(&self, out: &mut Vec<ItemRectKeyed<K>>) {
        out.clear();
        self.for_each_virtual_rect_keyed(|r| out.push(r));
    }

    /// Placement of `index` relative to the content origin, or `None` out of
    /// bounds.
    pub fn item_rect(&self, index: usize) -> Option<ItemRect> {
        (index < self.options.count).then(|| self.layout.item_rect(index))
    }

    /// Main-axis start of `index`, including `scroll_margin`.
    pub fn item_start(&self, index: usize) -> Option<u64> {
        let rect = self.item_rect(index)?;
        Some((self.options.scroll_margin as u64).saturating_add(rect.main_start))
    }

    pub fn item_main_size(&self, index: usize) -> Option<u32> {
        Some(self.item_rect(index)?.main)
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        let start = self.item_start(index)?;
        let size = self.item_main_size(index)? as u64;
        Some(start.saturating_add(size))
    }

    /// The item whose extent covers `offset` (leading-edge lookup).
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let margin = self.options.scroll_margin as u64;
        let index = if offset < margin {
            Some(0)
        } else {
            self.layout.index_at(offset - margin)
        };
        index.filter(|&i| i < self.options.count)
    }

    /// Resolved column count for grid/masonry layouts; `None` for lists.
    pub fn columns(&self) -> Option<usize> {
        match &self.layout {
            LayoutState::List(_) => None,
            LayoutState::Grid(g) => Some(g.columns()),
            LayoutState::Masonry(m) => Some(m.lane_count()),
        }
    }

    // --- scroll-to ---------------------------------------------------------

    /// Programmatically scrolls to an index.
    ///
    /// Sets the internal `scroll_offset` to the computed (clamped) target and
    /// triggers `on_change`; it does not mark the engine as "scrolling".
    /// Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.count == 0 {
            return 0;
        }
        let index = index.min(self.options.count - 1);
        let start = self.item_start(index).unwrap_or(0);
        let size = self.item_main_size(index).unwrap_or(0) as u64;
        let end = start.saturating_add(size);

        let sp_start = self.options.scroll_padding_start as u64;
        let sp_end = self.options.scroll_padding_end as u64;
        let view = self.viewport.main as u64;

        let target = match align {
            Align::Start => start.saturating_sub(sp_start),
            Align::End => end.saturating_add(sp_end).saturating_sub(view),
            Align::Center => {
                let center = start.saturating_add(size / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start.saturating_sub(sp_start)
                } else {
                    end.saturating_add(sp_end).saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    // --- snapshots ---------------------------------------------------------

    /// Returns a lightweight snapshot of the current viewport state.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            rect: self.viewport,
        }
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Returns a combined snapshot of viewport + scroll state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            scroll: self.scroll_state(),
        }
    }

    pub fn restore_viewport_state(&mut self, viewport: ViewportState) {
        self.set_viewport(viewport.rect);
    }

    /// Restores scroll state from a previously captured snapshot.
    ///
    /// When `scroll.is_scrolling` is `true`, the internal scrolling timers
    /// are updated as if a scroll event happened at `now_ms`.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState, now_ms: u64) {
        if scroll.is_scrolling {
            self.apply_scroll_offset_event_clamped(scroll.offset, now_ms);
            return;
        }
        self.batch_update(|s| {
            s.set_scroll_offset_clamped(scroll.offset);
            s.set_is_scrolling(false);
        });
    }

    /// Restores both viewport + scroll state from a previously captured
    /// snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        if frame.scroll.is_scrolling {
            self.apply_scroll_frame_clamped(frame.viewport.rect, frame.scroll.offset, now_ms);
            return;
        }
        self.batch_update(|s| {
            s.set_viewport(frame.viewport.rect);
            s.set_scroll_offset_clamped(frame.scroll.offset);
            s.set_is_scrolling(false);
        });
    }
}
