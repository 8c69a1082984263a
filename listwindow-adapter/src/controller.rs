use crate::{Easing, ScrollAnchor, Tween, apply_anchor, capture_first_visible_anchor};

use listwindow::{Align, ItemKey, ListWindow, ListWindowOptions, WindowKey};

/// A framework-neutral controller that wraps a [`ListWindow`] and provides
/// common host workflows: tween-driven smooth scrolling and anchoring.
///
/// Hosts drive it by calling:
/// - [`on_scroll`](Self::on_scroll) / [`on_container_resize`](Self::on_container_resize)
///   when UI events occur
/// - [`tick`](Self::tick) each frame or timer tick (for tween scrolling and
///   is-scrolling debouncing)
///
/// The returned offset from `tick()` can be applied to the real scroll
/// container while the engine state stays in sync.
pub struct Controller<K = ItemKey> {
    engine: ListWindow<K>,
    tween: Option<Tween>,
}

impl<K: WindowKey> Controller<K> {
    pub fn new(options: ListWindowOptions<K>) -> Self {
        Self {
            engine: ListWindow::new(options),
            tween: None,
        }
    }

    pub fn from_engine(engine: ListWindow<K>) -> Self {
        Self {
            engine,
            tween: None,
        }
    }

    pub fn engine(&self) -> &ListWindow<K> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ListWindow<K> {
        &mut self.engine
    }

    pub fn into_engine(self) -> ListWindow<K> {
        self.engine
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call when the UI reports a scroll position change (wheel/drag).
    ///
    /// User input wins: any active tween is cancelled.
    pub fn on_scroll(&mut self, position: f64, now_ms: u64) {
        self.cancel_animation();
        self.engine.on_scroll(position, now_ms);
    }

    pub fn on_container_resize(&mut self, size: f64) {
        self.engine.set_container_size(size);
    }

    /// Advances the controller.
    ///
    /// - With an active tween: feeds the sampled offset into the engine and
    ///   returns the new position.
    /// - Otherwise: runs is-scrolling debouncing and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let Some(tween) = self.tween else {
            self.engine.update_scrolling(now_ms);
            return None;
        };

        let position = tween.sample(now_ms);
        self.engine.on_scroll(position, now_ms);

        if tween.is_done(now_ms) {
            self.tween = None;
            self.engine.set_is_scrolling(false);
        }

        Some(self.engine.scroll_position())
    }

    /// Jumps to an index immediately (no animation). Returns the applied
    /// target.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> f64 {
        self.cancel_animation();
        self.engine.scroll_to_index(index, align)
    }

    /// Starts a tween toward an index. Returns the clamped target.
    pub fn smooth_scroll_to_index(
        &mut self,
        index: usize,
        align: Align,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f64 {
        let to = self.engine.scroll_target_for_index(index, align);
        self.smooth_scroll_to_position(to, now_ms, duration_ms, easing)
    }

    /// Starts a tween toward a position. Returns the clamped target.
    pub fn smooth_scroll_to_position(
        &mut self,
        position: f64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> f64 {
        let to = self.engine.clamp_scroll_position(position);
        let from = self.engine.scroll_position();
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        to
    }

    pub fn capture_first_visible_anchor(&self) -> Option<ScrollAnchor<K>> {
        capture_first_visible_anchor(&self.engine)
    }

    /// Applies a previously captured anchor. Cancels any active tween.
    pub fn apply_anchor(
        &mut self,
        anchor: &ScrollAnchor<K>,
        key_to_index: impl FnMut(&K) -> Option<usize>,
    ) -> bool {
        self.cancel_animation();
        apply_anchor(&mut self.engine, anchor, key_to_index)
    }
}

impl<K: WindowKey + core::fmt::Debug> core::fmt::Debug for Controller<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("engine", &self.engine)
            .field("tween", &self.tween)
            .finish()
    }
}
