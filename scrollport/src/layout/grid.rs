use crate::layout::LayoutInputs;
use crate::{Extent2, GridConfig, IndexRange, ItemRect};

/// Uniform-cell grid. All positions are closed-form: `row = i / columns`,
/// `col = i % columns`, so no per-item caches are needed and measurements are
/// ignored (cells are configured, not measured).
#[derive(Clone, Debug)]
pub(crate) struct GridLayout {
    count: usize,
    columns: usize,
    cell: Extent2,
    gap: u32,
    padding_start: u32,
    padding_end: u32,
    cross_padding_start: u32,
}

impl GridLayout {
    pub(crate) fn build(cfg: &GridConfig, inputs: &LayoutInputs<'_>) -> Self {
        let usable = inputs
            .viewport_cross
            .saturating_sub(cfg.cross_padding_start)
            .saturating_sub(cfg.cross_padding_end);

        // item_size.cross > 0 is validated at configuration time.
        let columns = cfg.columns.unwrap_or_else(|| {
            let span = cfg.item_size.cross as u64 + inputs.gap as u64;
            (((usable as u64 + inputs.gap as u64) / span) as usize).max(1)
        });

        let cross = if cfg.flex {
            let gaps = (columns as u64 - 1) * inputs.gap as u64;
            let stretched = (usable as u64).saturating_sub(gaps) / columns as u64;
            (stretched as u32).max(1)
        } else {
            cfg.item_size.cross
        };

        Self {
            count: inputs.count,
            columns,
            cell: Extent2::new(cfg.item_size.main, cross),
            gap: inputs.gap,
            padding_start: inputs.padding_start,
            padding_end: inputs.padding_end,
            cross_padding_start: cfg.cross_padding_start,
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn columns(&self) -> usize {
        self.columns
    }

    fn rows(&self) -> usize {
        self.count.div_ceil(self.columns)
    }

    fn row_extent(&self) -> u64 {
        self.cell.main as u64 + self.gap as u64
    }

    pub(crate) fn total_extent(&self) -> u64 {
        let rows = self.rows() as u64;
        let padding = self.padding_start as u64 + self.padding_end as u64;
        if rows == 0 {
            return padding;
        }
        padding + rows * self.cell.main as u64 + (rows - 1) * self.gap as u64
    }

    pub(crate) fn visible_range(&self, offset: u64, viewport: Extent2) -> IndexRange {
        if self.count == 0 || viewport.main == 0 {
            return IndexRange::EMPTY;
        }

        let total = self.total_extent();
        let offset = crate::range::clamp_offset(offset, total, viewport.main);
        let view = viewport.main as u64;
        let last_visible = offset
            .saturating_add(view)
            .saturating_sub(1)
            .max(offset);

        let ps = self.padding_start as u64;
        // Windows entirely inside the leading or trailing padding.
        if offset.saturating_add(view) <= ps {
            return IndexRange::EMPTY;
        }
        if offset >= total.saturating_sub(self.padding_end as u64) {
            return IndexRange {
                start: self.count,
                end: self.count,
            };
        }

        let last_row = self.rows() - 1;
        let mut first = self.row_covering(offset).min(last_row);
        // An offset inside the gap after a row must not report that row.
        let first_end = ps + first as u64 * self.row_extent() + self.cell.main as u64;
        if first_end <= offset {
            first += 1;
        }
        let last = self.row_covering(last_visible).min(last_row);
        let start = first * self.columns;
        IndexRange {
            start,
            end: ((last + 1) * self.columns).min(self.count).max(start),
        }
    }

    /// Row whose band (cell plus trailing gap) covers `offset`; unclamped.
    fn row_covering(&self, offset: u64) -> usize {
        let rel = offset.saturating_sub(self.padding_start as u64);
        (rel / self.row_extent()) as usize
    }

    pub(crate) fn item_rect(&self, index: usize) -> ItemRect {
        let row = (index / self.columns) as u64;
        let col = (index % self.columns) as u64;
        ItemRect {
            index,
            main_start: self.padding_start as u64 + row * self.row_extent(),
            cross_start: self.cross_padding_start as u64
                + col * (self.cell.cross as u64 + self.gap as u64),
            main: self.cell.main,
            cross: self.cell.cross,
        }
    }

    pub(crate) fn index_at(&self, offset: u64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let ps = self.padding_start as u64;
        if offset < ps {
            return Some(0);
        }
        let rows = self.rows() as u64;
        let content_end = ps + rows * self.cell.main as u64 + (rows - 1) * self.gap as u64;
        if offset >= content_end {
            return None;
        }
        let row = self.row_covering(offset).min(self.rows() - 1);
        // First item of the covering row: the whole row shares the offset band.
        Some(row * self.columns)
    }
}
