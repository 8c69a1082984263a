use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::metadata::{ItemMetadataStore, WindowKey};
use crate::types::{ItemKey, RenderWindow, WindowRange};

/// Turns computed ranges into renderable windows while keeping the window
/// object referentially stable across no-op recomputes.
///
/// Consumers that memoize on window identity can skip re-render whenever
/// [`reconcile`](Self::reconcile) hands back the same `Arc`.
#[derive(Clone, Debug)]
pub struct RenderWindowReconciler<K = ItemKey> {
    current: Arc<RenderWindow<K>>,
}

impl<K: WindowKey> RenderWindowReconciler<K> {
    pub fn new() -> Self {
        Self {
            current: Arc::new(RenderWindow::empty()),
        }
    }

    /// The most recently reconciled window.
    pub fn current(&self) -> Arc<RenderWindow<K>> {
        Arc::clone(&self.current)
    }

    /// Reconciles a freshly computed range against the cached window.
    ///
    /// Returns `(window, changed)`. When the range matches the cached one
    /// and the layout did not move, the cached `Arc` comes back untouched
    /// and `changed` is `false`. When `layout_changed` forces a rebuild
    /// that produces an identical window (e.g. a redundant
    /// `recalculate_layout`), identity is still preserved.
    pub fn reconcile(
        &mut self,
        range: WindowRange,
        store: &ItemMetadataStore<K>,
        layout_changed: bool,
    ) -> (Arc<RenderWindow<K>>, bool) {
        if !layout_changed && range == self.current.range {
            return (Arc::clone(&self.current), false);
        }

        let next = build_window(range, store);
        if next == *self.current {
            return (Arc::clone(&self.current), false);
        }

        self.current = Arc::new(next);
        (Arc::clone(&self.current), true)
    }
}

impl<K: WindowKey> Default for RenderWindowReconciler<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn build_window<K: WindowKey>(range: WindowRange, store: &ItemMetadataStore<K>) -> RenderWindow<K> {
    let mut items = Vec::with_capacity(range.len());
    for index in range.start_index..range.end_index {
        if let Some(item) = store.item(index) {
            items.push(item);
        }
    }
    RenderWindow {
        range,
        total_size: store.total_size(),
        items,
    }
}
