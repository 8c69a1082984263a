use core::cmp;

use crate::metadata::{ItemMetadataStore, WindowKey};
use crate::types::{Viewport, WindowRange};

/// Computes the minimal contiguous index range that must be rendered for
/// the given viewport, widened by `overscan` items on each side.
///
/// Guarantee: every item whose `[offset, offset + height)` box intersects
/// the (clamped) viewport `[scroll, scroll + container)` is inside the
/// returned range. Empty input or a zero-sized container yields an empty
/// range; a scroll position past the content is clamped back to the last
/// page, never an error.
pub fn compute_window<K: WindowKey>(
    viewport: Viewport,
    store: &ItemMetadataStore<K>,
    overscan: usize,
) -> WindowRange {
    let count = store.len();
    let view = if viewport.container_size.is_finite() {
        viewport.container_size.max(0.0)
    } else {
        0.0
    };
    if count == 0 || view <= 0.0 {
        return WindowRange::EMPTY;
    }

    let total = store.total_size();
    let max_scroll = (total - view).max(0.0);
    let scroll = if viewport.scroll_position.is_finite() {
        viewport.scroll_position.clamp(0.0, max_scroll)
    } else {
        0.0
    };
    let end_offset = scroll + view;

    let raw_start = store.find_index_at_offset(scroll);

    // Walk forward over the items actually on screen. Bounded by how many
    // items fit in the viewport, not by the list length.
    let mut raw_end = raw_start;
    while raw_end + 1 < count && store.offset(raw_end + 1) < end_offset {
        raw_end += 1;
    }

    WindowRange {
        start_index: raw_start.saturating_sub(overscan),
        end_index: cmp::min(count, raw_end + 1 + overscan),
    }
}
