use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "std")]
type KeySizeMap<K> = HashMap<K, u32>;
#[cfg(not(feature = "std"))]
type KeySizeMap<K> = BTreeMap<K, u32>;

#[cfg(feature = "std")]
type IndexSet = HashSet<usize>;
#[cfg(not(feature = "std"))]
type IndexSet = BTreeSet<usize>;

/// Key bound for the measured-size cache.
#[cfg(feature = "std")]
pub trait TrackerKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> TrackerKey for K {}

/// Key bound for the measured-size cache.
#[cfg(not(feature = "std"))]
pub trait TrackerKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> TrackerKey for K {}

/// Records measured item sizes, keyed by stable identity.
///
/// Measurement is asynchronous with respect to layout: a placeholder is
/// `observe`d once it has content to render, and some time later the host
/// reports a main-axis size via `resolve`. Resolutions are queued rather than
/// applied inline; the engine drains the queue once per pass so a burst of
/// near-simultaneous measurements (e.g. initial load) coalesces into a single
/// relayout.
///
/// Items that never resolve simply keep their estimated size. There is no
/// failure mode for a missing measurement.
#[derive(Clone, Debug)]
pub struct SizeTracker<K> {
    sizes: KeySizeMap<K>,
    pending: IndexSet,
    resolved: Vec<(usize, K, u32)>,
}

impl<K: TrackerKey> SizeTracker<K> {
    pub fn new() -> Self {
        Self {
            sizes: KeySizeMap::new(),
            pending: IndexSet::new(),
            resolved: Vec::new(),
        }
    }

    /// Marks the placeholder at `index` as awaiting a measurement.
    pub fn observe(&mut self, index: usize) {
        self.pending.insert(index);
    }

    /// Drops pending state for `index` (e.g. the placeholder left the range).
    pub fn unobserve(&mut self, index: usize) {
        self.pending.remove(&index);
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }

    /// Queues a resolved measurement.
    ///
    /// Accepted regardless of pending state: re-measurement of an already
    /// known item is a legitimate size change.
    pub fn resolve(&mut self, index: usize, key: K, main: u32) {
        self.pending.remove(&index);
        self.resolved.push((index, key, main));
    }

    pub fn has_resolved(&self) -> bool {
        !self.resolved.is_empty()
    }

    /// Moves all queued resolutions into `out` (clears `out` first).
    pub fn take_resolved(&mut self, out: &mut Vec<(usize, K, u32)>) {
        out.clear();
        out.append(&mut self.resolved);
    }

    /// Inserts a measured size into the keyed cache.
    pub fn record(&mut self, key: K, main: u32) {
        self.sizes.insert(key, main);
    }

    pub fn get(&self, key: &K) -> Option<u32> {
        self.sizes.get(key).copied()
    }

    /// Evicts one cached measurement, returning it if present.
    ///
    /// Eviction only touches the cache; callers that keep running aggregates
    /// stay consistent because the next rebuild falls back to the estimate.
    pub fn invalidate(&mut self, key: &K) -> Option<u32> {
        self.sizes.remove(key)
    }

    pub fn clear(&mut self) {
        self.sizes.clear();
        self.pending.clear();
        self.resolved.clear();
    }

    /// Number of cached measured sizes (key → size).
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterates over the cached measured sizes without allocations.
    pub fn for_each(&self, mut f: impl FnMut(&K, u32)) {
        for (k, v) in self.sizes.iter() {
            f(k, *v);
        }
    }
}

impl<K: TrackerKey> Default for SizeTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
