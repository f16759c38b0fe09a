use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use scrollport::ItemRectKeyed;

use crate::{HostKey, HostSurface, PlaceholderId};

#[cfg(feature = "std")]
type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
type KeyMap<K, V> = BTreeMap<K, V>;

#[cfg(feature = "std")]
type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
type KeySet<K> = BTreeSet<K>;

/// Free-list retention limit. Beyond this, placeholders leaving the range are
/// destroyed instead of parked.
const FREE_LIST_CAP: usize = 16;

#[derive(Clone, Copy, Debug)]
struct ActiveChild {
    index: usize,
    id: PlaceholderId,
}

/// The outcome of one [`ChildPool::reconcile`] pass.
#[derive(Clone, Debug, Default)]
pub struct Reconciliation {
    /// Indexes that gained a placeholder this pass, with the id they got.
    pub entered: Vec<(usize, PlaceholderId)>,
    /// Indexes whose placeholder was released this pass.
    pub left: Vec<usize>,
    /// Indexes that kept their placeholder (matched by key). Hosts can skip
    /// re-rendering these.
    pub kept: Vec<usize>,
}

/// Recycles host placeholders as the materialized window moves.
///
/// Active placeholders are tracked by item key, so an item keeps its
/// placeholder across index shifts (prepend, reorder) as long as it stays in
/// the window. Placeholders that leave the window go to a bounded LIFO free
/// list and are handed out before any new one is created; steady-state
/// scrolling therefore churns at most the per-pass delta, not the window.
#[derive(Clone, Debug)]
pub struct ChildPool<K> {
    active: KeyMap<K, ActiveChild>,
    free: Vec<PlaceholderId>,
    free_cap: usize,
}

impl<K: HostKey> ChildPool<K> {
    pub fn new() -> Self {
        Self::with_free_cap(FREE_LIST_CAP)
    }

    pub fn with_free_cap(free_cap: usize) -> Self {
        Self {
            active: KeyMap::new(),
            free: Vec::new(),
            free_cap,
        }
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// The placeholder currently bound to `key`, if any.
    pub fn id_for(&self, key: &K) -> Option<PlaceholderId> {
        self.active.get(key).map(|c| c.id)
    }

    /// Diffs the active set against `targets` and applies the delta to the
    /// surface.
    ///
    /// Releases run before allocations so a placeholder freed this pass is
    /// first in line for reuse (LIFO).
    pub fn reconcile<S: HostSurface>(
        &mut self,
        targets: &[ItemRectKeyed<K>],
        surface: &mut S,
    ) -> Reconciliation {
        let mut out = Reconciliation::default();

        let next: KeySet<K> = targets.iter().map(|t| t.key.clone()).collect();

        // Release phase.
        let mut leaving: Vec<K> = Vec::new();
        for key in self.active.keys() {
            if !next.contains(key) {
                leaving.push(key.clone());
            }
        }
        for key in leaving {
            if let Some(child) = self.active.remove(&key) {
                out.left.push(child.index);
                if self.free.len() < self.free_cap {
                    self.free.push(child.id);
                } else {
                    surface.remove_placeholder(child.id);
                }
            }
        }

        // Acquire phase.
        for target in targets {
            let index = target.rect.index;
            if let Some(child) = self.active.get_mut(&target.key) {
                if child.index != index {
                    child.index = index;
                    surface.assign_placeholder(child.id, index);
                }
                out.kept.push(index);
                continue;
            }
            let id = match self.free.pop() {
                Some(id) => {
                    surface.assign_placeholder(id, index);
                    id
                }
                None => surface.create_placeholder(index),
            };
            self.active.insert(target.key.clone(), ActiveChild { index, id });
            out.entered.push((index, id));
        }

        debug_assert_eq!(
            self.active.len(),
            targets.len(),
            "placeholder count diverged from target (duplicate key or stale entry)"
        );
        debug_assert_eq!(
            out.entered.len() + out.kept.len(),
            targets.len(),
            "target index without exactly one placeholder"
        );

        out
    }

    /// Releases everything, destroying all placeholders on the surface.
    pub fn clear<S: HostSurface>(&mut self, surface: &mut S) {
        for (_, child) in core::mem::take(&mut self.active) {
            surface.remove_placeholder(child.id);
        }
        for id in self.free.drain(..) {
            surface.remove_placeholder(id);
        }
    }
}

impl<K: HostKey> Default for ChildPool<K> {
    fn default() -> Self {
        Self::new()
    }
}
