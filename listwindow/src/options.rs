use alloc::sync::Arc;

use crate::types::{ItemKey, RenderWindow};

/// Fired after a recompute whose reconciled window differs from the
/// previous one.
pub type OnWindowChange<K> = Arc<dyn Fn(&RenderWindow<K>) + Send + Sync>;

/// Fired at most once per data-length epoch when the scroll position comes
/// within `end_reached_threshold` of the end of the content.
pub type OnEndReached = Arc<dyn Fn() + Send + Sync>;

/// Receives every raw scroll position, synchronously from
/// [`crate::ListWindow::on_scroll`] (before the coalesced recompute runs).
pub type OnScrollCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Receives computed scroll targets. The host owns the real scroll
/// container; the engine only computes where it should go.
pub type ScrollHostCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Configuration for [`crate::ListWindow`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
pub struct ListWindowOptions<K = ItemKey> {
    /// Size of the scroll container in the scroll axis.
    pub container_size: f64,
    /// Height assumed for items that have not been measured.
    pub estimated_item_size: f64,
    /// Extra items rendered on each side of the visible range to mask
    /// scroll-induced pop-in.
    pub overscan: usize,
    /// When `true` (and a size observer is injected), item heights are
    /// measured per item instead of assumed uniform.
    pub dynamic_height: bool,
    /// Distance from the end of the content at which `on_end_reached` fires.
    pub end_reached_threshold: f64,
    /// Scroll position applied at construction.
    pub initial_scroll_position: f64,
    /// Debounce window for resetting the is-scrolling flag, driven by
    /// [`crate::ListWindow::update_scrolling`].
    pub is_scrolling_reset_delay_ms: u64,

    pub on_window_change: Option<OnWindowChange<K>>,
    pub on_end_reached: Option<OnEndReached>,
    pub on_scroll: Option<OnScrollCallback>,
    pub scroll_host: Option<ScrollHostCallback>,
}

impl<K> ListWindowOptions<K> {
    pub fn new(container_size: f64, estimated_item_size: f64) -> Self {
        Self {
            container_size,
            estimated_item_size,
            overscan: 3,
            dynamic_height: false,
            end_reached_threshold: 200.0,
            initial_scroll_position: 0.0,
            is_scrolling_reset_delay_ms: 150,
            on_window_change: None,
            on_end_reached: None,
            on_scroll: None,
            scroll_host: None,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_dynamic_height(mut self, dynamic_height: bool) -> Self {
        self.dynamic_height = dynamic_height;
        self
    }

    pub fn with_end_reached_threshold(mut self, threshold: f64) -> Self {
        self.end_reached_threshold = threshold;
        self
    }

    pub fn with_initial_scroll_position(mut self, position: f64) -> Self {
        self.initial_scroll_position = position;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_window_change(
        mut self,
        f: Option<impl Fn(&RenderWindow<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_window_change = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_end_reached(mut self, f: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_end_reached = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(mut self, f: Option<impl Fn(f64) + Send + Sync + 'static>) -> Self {
        self.on_scroll = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_scroll_host(mut self, f: Option<impl Fn(f64) + Send + Sync + 'static>) -> Self {
        self.scroll_host = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> Default for ListWindowOptions<K> {
    fn default() -> Self {
        Self::new(400.0, 50.0)
    }
}

impl<K> Clone for ListWindowOptions<K> {
    fn clone(&self) -> Self {
        Self {
            container_size: self.container_size,
            estimated_item_size: self.estimated_item_size,
            overscan: self.overscan,
            dynamic_height: self.dynamic_height,
            end_reached_threshold: self.end_reached_threshold,
            initial_scroll_position: self.initial_scroll_position,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
            on_window_change: self.on_window_change.clone(),
            on_end_reached: self.on_end_reached.clone(),
            on_scroll: self.on_scroll.clone(),
            scroll_host: self.scroll_host.clone(),
        }
    }
}

impl<K> core::fmt::Debug for ListWindowOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListWindowOptions")
            .field("container_size", &self.container_size)
            .field("estimated_item_size", &self.estimated_item_size)
            .field("overscan", &self.overscan)
            .field("dynamic_height", &self.dynamic_height)
            .field("end_reached_threshold", &self.end_reached_threshold)
            .field("initial_scroll_position", &self.initial_scroll_position)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
