use core::cmp;

use crate::IndexRange;

/// Expands a strictly-visible range by `overscan` whole items on each side,
/// clamped to `[0, count]`.
///
/// Pure and idempotent: identical inputs always produce an identical range,
/// so repeated no-op recomputation cannot make the materialized set flutter.
pub(crate) fn overscanned(range: IndexRange, overscan: usize, count: usize) -> IndexRange {
    if range.is_empty() {
        return range;
    }
    IndexRange {
        start: range.start.saturating_sub(overscan),
        end: cmp::min(count, range.end.saturating_add(overscan)),
    }
}

/// Clamps a scroll offset so the viewport never extends past the content.
pub(crate) fn clamp_offset(offset: u64, total: u64, viewport_main: u32) -> u64 {
    offset.min(total.saturating_sub(viewport_main as u64))
}
