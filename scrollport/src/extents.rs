use alloc::vec::Vec;
use core::cmp;

/// Running totals over per-item main-axis extents.
///
/// Stored values already fold the trailing gap into every entry except the
/// last, so `sum_below(i)` is the content offset of item `i` and
/// `find(offset)` maps a content offset back to the item covering it. Both
/// run in `O(log n)`; updating one entry adjusts the total by a delta instead
/// of rescanning, which is what lets measured sizes be replaced or evicted
/// without corrupting total-extent accounting.
#[derive(Clone, Debug, Default)]
pub(crate) struct ExtentIndex {
    tree: Vec<u64>, // 1-indexed binary indexed tree
    values: Vec<u64>,
    total: u64,
    top_bit: usize,
}

impl ExtentIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn rebuild(&mut self, values: &[u64]) {
        let n = values.len();
        self.values.clear();
        self.values.extend_from_slice(values);
        self.tree.clear();
        self.tree.resize(n + 1, 0);
        self.total = 0;
        self.top_bit = if n == 0 { 0 } else { top_power_of_two(n) };
        for i in 1..=n {
            let v = values[i - 1];
            self.total = self.total.saturating_add(v);
            self.tree[i] = self.tree[i].saturating_add(v);
            let parent = i + lowest_bit(i);
            if parent <= n {
                self.tree[parent] = self.tree[parent].saturating_add(self.tree[i]);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn value(&self, index: usize) -> u64 {
        self.values[index]
    }

    /// Replaces the value at `index`, returning the applied delta.
    pub(crate) fn set(&mut self, index: usize, value: u64) -> i64 {
        let n = self.len();
        if index >= n {
            return 0;
        }
        let old = self.values[index];
        if old == value {
            return 0;
        }
        self.values[index] = value;
        let delta = value as i64 - old as i64;
        if delta > 0 {
            self.total = self.total.saturating_add(delta as u64);
        } else {
            self.total = self.total.saturating_sub(delta.unsigned_abs());
        }
        let mut i = index + 1;
        while i <= n {
            let next = self.tree[i] as i128 + delta as i128;
            debug_assert!(next >= 0, "extent underflow (idx={i}, delta={delta})");
            self.tree[i] = next.clamp(0, u64::MAX as i128) as u64;
            i += lowest_bit(i);
        }
        delta
    }

    /// Sum of the first `count` values.
    pub(crate) fn sum_below(&self, count: usize) -> u64 {
        let mut i = cmp::min(count, self.len());
        let mut sum = 0u64;
        while i > 0 {
            sum = sum.saturating_add(self.tree[i]);
            i &= i - 1;
        }
        sum
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of whole leading values that fit at or before
    /// `offset`.
    ///
    /// Callers clamp to the last item to map an offset to the index covering
    /// it (offsets inside a gap map to the preceding item).
    pub(crate) fn find(&self, mut offset: u64) -> usize {
        let n = self.len();
        if n == 0 {
            return 0;
        }
        let mut idx = 0usize;
        let mut bit = self.top_bit;
        while bit != 0 {
            let probe = idx + bit;
            if probe <= n && self.tree[probe] <= offset {
                offset -= self.tree[probe];
                idx = probe;
            }
            bit >>= 1;
        }
        idx
    }
}

fn lowest_bit(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn top_power_of_two(n: usize) -> usize {
    let mut p = 1usize;
    while p <= n / 2 {
        p <<= 1;
    }
    p
}
