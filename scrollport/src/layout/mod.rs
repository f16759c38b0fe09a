//! Layout strategies behind one contract.
//!
//! Each strategy maps (item count, per-item size hints, container
//! constraints, configuration) to item rects, a visible range and a total
//! extent. Strategies are deterministic for identical inputs; the caches they
//! own (prefix sums, lane placements) can always be rebuilt from scratch.

mod grid;
mod list;
mod masonry;

pub(crate) use grid::GridLayout;
pub(crate) use list::ListLayout;
pub(crate) use masonry::MasonryLayout;

use crate::{Extent2, IndexRange, ItemRect, LayoutSpec};

/// Container constraints plus size hints, assembled by the engine per
/// rebuild.
pub(crate) struct LayoutInputs<'a> {
    pub count: usize,
    pub gap: u32,
    pub padding_start: u32,
    pub padding_end: u32,
    /// Cross-axis size of the viewport (drives column derivation and flex
    /// stretching).
    pub viewport_cross: u32,
    /// Main-axis size of the item at an index: measured when known, estimate
    /// otherwise. Never zero.
    pub size_of: &'a dyn Fn(usize) -> u32,
}

/// Closed dispatch over the layout strategies.
#[derive(Clone, Debug)]
pub(crate) enum LayoutState {
    List(ListLayout),
    Grid(GridLayout),
    Masonry(MasonryLayout),
}

impl LayoutState {
    pub(crate) fn build(spec: &LayoutSpec, inputs: &LayoutInputs<'_>) -> Self {
        match spec {
            LayoutSpec::List(cfg) => Self::List(ListLayout::build(cfg, inputs)),
            LayoutSpec::Grid(cfg) => Self::Grid(GridLayout::build(cfg, inputs)),
            LayoutSpec::Masonry(cfg) => Self::Masonry(MasonryLayout::build(cfg, inputs)),
        }
    }

    pub(crate) fn count(&self) -> usize {
        match self {
            Self::List(l) => l.count(),
            Self::Grid(l) => l.count(),
            Self::Masonry(l) => l.count(),
        }
    }

    /// Full content length along the scroll axis, paddings included.
    pub(crate) fn total_extent(&self) -> u64 {
        match self {
            Self::List(l) => l.total_extent(),
            Self::Grid(l) => l.total_extent(),
            Self::Masonry(l) => l.total_extent(),
        }
    }

    /// Applies one measured main-axis size, returning the size delta.
    ///
    /// Aggregates adjust incrementally (or, for masonry, lanes re-place);
    /// fixed-cell layouts ignore measurements and return 0.
    pub(crate) fn apply_measurement(&mut self, index: usize, main: u32) -> i64 {
        match self {
            Self::List(l) => l.apply_measurement(index, main),
            Self::Grid(_) => 0,
            Self::Masonry(l) => l.apply_measurement(index, main),
        }
    }

    /// Indices whose extent intersects `[offset, offset + viewport.main)`,
    /// offsets relative to the content origin.
    pub(crate) fn visible_range(&self, offset: u64, viewport: Extent2) -> IndexRange {
        match self {
            Self::List(l) => l.visible_range(offset, viewport),
            Self::Grid(l) => l.visible_range(offset, viewport),
            Self::Masonry(l) => l.visible_range(offset, viewport),
        }
    }

    /// Placement of `index`, relative to the content origin.
    ///
    /// Callers bound `index` by `count()`.
    pub(crate) fn item_rect(&self, index: usize) -> ItemRect {
        match self {
            Self::List(l) => l.item_rect(index),
            Self::Grid(l) => l.item_rect(index),
            Self::Masonry(l) => l.item_rect(index),
        }
    }

    /// The item whose extent covers `offset` (leading-edge lookup, used for
    /// anchors). Offsets inside a gap map to the preceding item.
    pub(crate) fn index_at(&self, offset: u64) -> Option<usize> {
        match self {
            Self::List(l) => l.index_at(offset),
            Self::Grid(l) => l.index_at(offset),
            Self::Masonry(l) => l.index_at(offset),
        }
    }
}
