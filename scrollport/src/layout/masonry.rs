use alloc::vec;
use alloc::vec::Vec;

use crate::layout::LayoutInputs;
use crate::{Extent2, IndexRange, ItemRect, MasonryConfig};

#[derive(Clone, Copy, Debug)]
struct Slot {
    main_start: u64,
    lane: u32,
}

/// Masonry: fixed-cross lanes, variable (measured or estimated) main sizes.
///
/// Each item is placed at the end of the currently shortest lane, in index
/// order. Within a lane item offsets are strictly ascending, so the visible
/// range is the union of per-lane binary-searched windows, reported as one
/// contiguous index span.
#[derive(Clone, Debug)]
pub(crate) struct MasonryLayout {
    sizes: Vec<u32>,
    slots: Vec<Slot>,
    lanes: Vec<Vec<usize>>,
    columns: usize,
    item_cross: u32,
    gap: u32,
    padding_start: u32,
    padding_end: u32,
    content_end: u64,
}

impl MasonryLayout {
    pub(crate) fn build(cfg: &MasonryConfig, inputs: &LayoutInputs<'_>) -> Self {
        // item_cross > 0 is validated at configuration time.
        let columns = cfg.columns.unwrap_or_else(|| {
            let span = cfg.item_cross as u64 + inputs.gap as u64;
            (((inputs.viewport_cross as u64 + inputs.gap as u64) / span) as usize).max(1)
        });

        let mut sizes = Vec::with_capacity(inputs.count);
        for i in 0..inputs.count {
            sizes.push((inputs.size_of)(i));
        }

        let mut layout = Self {
            sizes,
            slots: Vec::new(),
            lanes: Vec::new(),
            columns,
            item_cross: cfg.item_cross,
            gap: inputs.gap,
            padding_start: inputs.padding_start,
            padding_end: inputs.padding_end,
            content_end: inputs.padding_start as u64,
        };
        layout.place();
        layout
    }

    /// Re-places every item into lanes. Runs after any size change: a resize
    /// can reshuffle which lane is shortest for every downstream item.
    fn place(&mut self) {
        let gap = self.gap as u64;
        let mut ends = vec![self.padding_start as u64; self.columns];

        self.slots.clear();
        self.slots.reserve(self.sizes.len());
        self.lanes.clear();
        self.lanes.resize(self.columns, Vec::new());

        for (i, &size) in self.sizes.iter().enumerate() {
            let lane = shortest_lane(&ends);
            self.slots.push(Slot {
                main_start: ends[lane],
                lane: lane as u32,
            });
            self.lanes[lane].push(i);
            ends[lane] = ends[lane].saturating_add(size as u64).saturating_add(gap);
        }

        self.content_end = self
            .lanes
            .iter()
            .zip(&ends)
            .filter(|(items, _)| !items.is_empty())
            .map(|(_, &end)| end.saturating_sub(gap))
            .max()
            .unwrap_or(self.padding_start as u64);
    }

    pub(crate) fn count(&self) -> usize {
        self.sizes.len()
    }

    pub(crate) fn lane_count(&self) -> usize {
        self.columns
    }

    pub(crate) fn total_extent(&self) -> u64 {
        self.content_end + self.padding_end as u64
    }

    pub(crate) fn apply_measurement(&mut self, index: usize, main: u32) -> i64 {
        if index >= self.sizes.len() {
            return 0;
        }
        let old = self.sizes[index];
        if old == main {
            return 0;
        }
        self.sizes[index] = main;
        self.place();
        main as i64 - old as i64
    }

    fn slot_end(&self, index: usize) -> u64 {
        self.slots[index]
            .main_start
            .saturating_add(self.sizes[index] as u64)
    }

    pub(crate) fn visible_range(&self, offset: u64, viewport: Extent2) -> IndexRange {
        if self.sizes.is_empty() || viewport.main == 0 {
            return IndexRange::EMPTY;
        }

        let total = self.total_extent();
        let offset = crate::range::clamp_offset(offset, total, viewport.main);
        let window_end = offset.saturating_add(viewport.main as u64);

        let mut first: Option<usize> = None;
        let mut last: Option<usize> = None;
        for lane in &self.lanes {
            let lo = lane.partition_point(|&i| self.slot_end(i) <= offset);
            let hi = lane.partition_point(|&i| self.slots[i].main_start < window_end);
            if lo >= hi {
                continue;
            }
            let lane_first = lane[lo];
            let lane_last = lane[hi - 1];
            first = Some(first.map_or(lane_first, |f| f.min(lane_first)));
            last = Some(last.map_or(lane_last, |l| l.max(lane_last)));
        }

        match (first, last) {
            (Some(start), Some(last)) => IndexRange {
                start,
                end: last + 1,
            },
            _ => IndexRange::EMPTY,
        }
    }

    pub(crate) fn item_rect(&self, index: usize) -> ItemRect {
        let slot = self.slots[index];
        ItemRect {
            index,
            main_start: slot.main_start,
            cross_start: slot.lane as u64 * (self.item_cross as u64 + self.gap as u64),
            main: self.sizes[index],
            cross: self.item_cross,
        }
    }

    /// Leading-edge anchor lookup: the item with the greatest start at or
    /// before `offset`; ties break to the lowest index.
    pub(crate) fn index_at(&self, offset: u64) -> Option<usize> {
        if self.sizes.is_empty() {
            return None;
        }
        if offset < self.padding_start as u64 {
            return Some(0);
        }
        if offset >= self.content_end {
            return None;
        }

        let mut best: Option<(u64, usize)> = None;
        for lane in &self.lanes {
            let at = lane.partition_point(|&i| self.slots[i].main_start <= offset);
            if at == 0 {
                continue;
            }
            let cand = lane[at - 1];
            let start = self.slots[cand].main_start;
            best = match best {
                None => Some((start, cand)),
                Some((bs, bi)) if start > bs || (start == bs && cand < bi) => Some((start, cand)),
                keep => keep,
            };
        }
        best.map(|(_, i)| i)
    }
}

// Ties resolve to the lowest lane index (strict `<`).
fn shortest_lane(ends: &[u64]) -> usize {
    let mut lane = 0usize;
    for (i, &end) in ends.iter().enumerate().skip(1) {
        if end < ends[lane] {
            lane = i;
        }
    }
    lane
}
