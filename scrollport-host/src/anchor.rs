use core::fmt;

use scrollport::Scroller;

use crate::HostKey;

/// A scroll anchor that preserves visual position across data changes.
///
/// Typical use: a timeline "prepend" (load older entries above) where the
/// viewport should stay glued to the same item even though every index moved.
#[derive(Clone, PartialEq, Eq)]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Distance from the anchor item's start to the viewport's scroll offset.
    pub offset_in_viewport: u64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_viewport", &self.offset_in_viewport)
            .finish()
    }
}

/// Captures an anchor for the first visible item (by key).
///
/// Returns `None` when the visible range is empty.
pub fn capture_first_visible_anchor<K: HostKey>(
    scroller: &Scroller<K>,
) -> Option<ScrollAnchor<K>> {
    let visible = scroller.visible_range();
    if visible.is_empty() {
        return None;
    }
    let index = visible.start;
    let start = scroller.item_start(index)?;
    let key = scroller.key_for(index);
    let offset_in_viewport = scroller.scroll_offset().saturating_sub(start);
    Some(ScrollAnchor {
        key,
        offset_in_viewport,
    })
}

/// Applies a previously captured anchor by adjusting the scroll offset.
///
/// The host must provide a `key_to_index` mapping for the *current* dataset.
/// Returns `true` when the anchor was found and applied.
pub fn apply_anchor<K: HostKey>(
    scroller: &mut Scroller<K>,
    anchor: &ScrollAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key) else {
        return false;
    };
    let Some(start) = scroller.item_start(index) else {
        return false;
    };
    let target = start.saturating_add(anchor.offset_in_viewport);
    scroller.set_scroll_offset_clamped(target);
    true
}
