use alloc::vec::Vec;

use crate::extents::ExtentIndex;
use crate::layout::LayoutInputs;
use crate::{Extent2, IndexRange, ItemRect, ListConfig};

/// One-dimensional list, fixed-size or measured.
///
/// Per-item main extents (gap folded in) live in an [`ExtentIndex`], so both
/// `item_rect` and offset→index lookups are `O(log n)` and a measurement
/// updates the total by a delta instead of rescanning.
#[derive(Clone, Debug)]
pub(crate) struct ListLayout {
    sizes: Vec<u32>,
    extents: ExtentIndex,
    fixed: bool,
    gap: u32,
    padding_start: u32,
    padding_end: u32,
    cross: u32,
}

impl ListLayout {
    pub(crate) fn build(cfg: &ListConfig, inputs: &LayoutInputs<'_>) -> Self {
        let count = inputs.count;
        let mut sizes = Vec::with_capacity(count);
        for i in 0..count {
            sizes.push(cfg.item_size.unwrap_or_else(|| (inputs.size_of)(i)));
        }

        let mut layout = Self {
            sizes,
            extents: ExtentIndex::new(),
            fixed: cfg.item_size.is_some(),
            gap: inputs.gap,
            padding_start: inputs.padding_start,
            padding_end: inputs.padding_end,
            cross: inputs.viewport_cross,
        };
        layout.rebuild_extents();
        layout
    }

    fn rebuild_extents(&mut self) {
        let count = self.sizes.len();
        let gap = self.gap as u64;
        let values: Vec<u64> = self
            .sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let mut v = size as u64;
                if gap > 0 && i + 1 < count {
                    v = v.saturating_add(gap);
                }
                v
            })
            .collect();
        self.extents.rebuild(&values);
    }

    pub(crate) fn count(&self) -> usize {
        self.sizes.len()
    }

    pub(crate) fn total_extent(&self) -> u64 {
        self.padding_start as u64 + self.extents.total() + self.padding_end as u64
    }

    pub(crate) fn apply_measurement(&mut self, index: usize, main: u32) -> i64 {
        if self.fixed || index >= self.sizes.len() {
            return 0;
        }
        let old = self.sizes[index];
        if old == main {
            return 0;
        }
        self.sizes[index] = main;
        let mut value = main as u64;
        if self.gap > 0 && index + 1 < self.sizes.len() {
            value = value.saturating_add(self.gap as u64);
        }
        self.extents.set(index, value);
        main as i64 - old as i64
    }

    pub(crate) fn visible_range(&self, offset: u64, viewport: Extent2) -> IndexRange {
        let count = self.count();
        if count == 0 || viewport.main == 0 {
            return IndexRange::EMPTY;
        }

        let total = self.total_extent();
        let offset = crate::range::clamp_offset(offset, total, viewport.main);
        let view = viewport.main as u64;
        let last_visible = offset
            .saturating_add(view)
            .saturating_sub(1)
            .max(offset);

        // Window entirely inside the leading padding.
        if offset.saturating_add(view) <= self.padding_start as u64 {
            return IndexRange::EMPTY;
        }
        if offset.saturating_sub(self.padding_start as u64) >= self.extents.total() {
            return IndexRange {
                start: count,
                end: count,
            };
        }

        let mut start = self.index_covering(offset).min(count);
        // An offset inside the gap after an item covers that item for anchor
        // purposes, but the item does not intersect the window.
        if start < count {
            let start_end = self.padding_start as u64
                + self.extents.sum_below(start)
                + self.sizes[start] as u64;
            if start_end <= offset {
                start += 1;
            }
        }
        let end = (self.index_covering(last_visible) + 1).min(count);
        IndexRange {
            start,
            end: end.max(start),
        }
    }

    /// Like [`Self::index_at`] but total-clamping instead of returning `None`
    /// past the content end.
    fn index_covering(&self, offset: u64) -> usize {
        let ps = self.padding_start as u64;
        if offset < ps {
            return 0;
        }
        let count = self.count();
        if count == 0 {
            return 0;
        }
        self.extents
            .find(offset - ps)
            .min(count.saturating_sub(1))
    }

    pub(crate) fn item_rect(&self, index: usize) -> ItemRect {
        ItemRect {
            index,
            main_start: self.padding_start as u64 + self.extents.sum_below(index),
            cross_start: 0,
            main: self.sizes[index],
            cross: self.cross,
        }
    }

    pub(crate) fn index_at(&self, offset: u64) -> Option<usize> {
        let count = self.count();
        if count == 0 {
            return None;
        }
        let ps = self.padding_start as u64;
        if offset < ps {
            return Some(0);
        }
        if offset - ps >= self.extents.total() {
            return None;
        }
        Some(self.index_covering(offset))
    }
}
