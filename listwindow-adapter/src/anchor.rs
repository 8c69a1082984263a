use core::fmt;

use listwindow::{ListWindow, WindowKey};

/// A scroll anchor that preserves visual position across data changes.
///
/// Typical use cases:
/// - chat/timeline "prepend" (load older messages above) without content
///   jumping — pairs naturally with end-reached pagination
/// - any reorder/replace where the viewport should stay pinned to an item
///   identity rather than an index
#[derive(Clone, PartialEq)]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Distance from the anchor item's start to the viewport's scroll
    /// position.
    pub offset_in_viewport: f64,
}

impl<K: fmt::Debug> fmt::Debug for ScrollAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollAnchor")
            .field("key", &self.key)
            .field("offset_in_viewport", &self.offset_in_viewport)
            .finish()
    }
}

/// Captures an anchor for the first item visible at the current scroll
/// position (overscan rows above the viewport are skipped).
///
/// Returns `None` when nothing is rendered.
pub fn capture_first_visible_anchor<K: WindowKey>(
    engine: &ListWindow<K>,
) -> Option<ScrollAnchor<K>> {
    let window = engine.window();
    let scroll = engine.scroll_position();
    let item = window.items.iter().find(|it| it.end() > scroll)?;
    Some(ScrollAnchor {
        key: item.key.clone(),
        offset_in_viewport: (scroll - item.offset).max(0.0),
    })
}

/// Applies a previously captured anchor by adjusting the scroll position.
///
/// The host provides a `key_to_index` mapping for the *current* dataset.
/// Returns `true` when the anchor was applied.
pub fn apply_anchor<K: WindowKey>(
    engine: &mut ListWindow<K>,
    anchor: &ScrollAnchor<K>,
    mut key_to_index: impl FnMut(&K) -> Option<usize>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key) else {
        return false;
    };
    if index >= engine.item_count() {
        return false;
    }
    let start = engine.item_position(index).offset;
    engine.scroll_to_position(start + anchor.offset_in_viewport);
    true
}
