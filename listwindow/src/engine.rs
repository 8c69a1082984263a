use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use crate::capability::{FrameScheduler, SizeObserver};
use crate::metadata::{ItemMetadataStore, WindowKey};
use crate::options::ListWindowOptions;
use crate::reconcile::RenderWindowReconciler;
use crate::types::{
    Align, ItemKey, ItemPosition, ItemSource, RenderWindow, ScrollDirection, Viewport, WindowRange,
};
use crate::window::compute_window;

/// The windowing engine.
///
/// Single-threaded and event-loop driven: the host feeds it items, raw
/// scroll positions, container resizes, and measured item sizes; the engine
/// coalesces them to one window recompute per animation frame and reports
/// results through the configured callbacks.
///
/// Ordering discipline replaces locking. Measurements arriving between
/// frames are queued and applied as one atomic batch at the start of
/// [`on_frame`](Self::on_frame), so a window is never computed against a
/// half-applied set of height updates.
///
/// All mutable state lives inside this object; hosts interact only through
/// its methods.
pub struct ListWindow<K = ItemKey> {
    options: ListWindowOptions<K>,
    store: ItemMetadataStore<K>,
    reconciler: RenderWindowReconciler<K>,

    scroll_position: f64,
    container_size: f64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    scheduler: Option<Box<dyn FrameScheduler + Send>>,
    observer: Option<Box<dyn SizeObserver<K> + Send>>,
    observed: Vec<K>,

    pending_measurements: Vec<(usize, f64)>,
    frame_requested: bool,
    layout_dirty: bool,
    end_reached_fired: bool,
    torn_down: bool,
}

impl<K: WindowKey> ListWindow<K> {
    /// Creates an engine with no capabilities: recomputes run synchronously
    /// on every input and heights stay fixed at the estimate.
    pub fn new(options: ListWindowOptions<K>) -> Self {
        Self::with_capabilities(options, None, None)
    }

    pub fn with_capabilities(
        options: ListWindowOptions<K>,
        scheduler: Option<Box<dyn FrameScheduler + Send>>,
        observer: Option<Box<dyn SizeObserver<K> + Send>>,
    ) -> Self {
        let dynamic = options.dynamic_height && observer.is_some();
        if options.dynamic_height && !dynamic {
            lwwarn!("dynamic_height requested without a size observer; using fixed item sizes");
        }
        let store = if dynamic {
            ItemMetadataStore::dynamic(options.estimated_item_size)
        } else {
            ItemMetadataStore::fixed(options.estimated_item_size)
        };
        lwdebug!(
            container_size = options.container_size,
            estimated_item_size = options.estimated_item_size,
            overscan = options.overscan,
            dynamic,
            "ListWindow::new"
        );
        Self {
            scroll_position: sanitize(options.initial_scroll_position),
            container_size: sanitize(options.container_size),
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            store,
            reconciler: RenderWindowReconciler::new(),
            scheduler,
            observer,
            observed: Vec::new(),
            pending_measurements: Vec::new(),
            frame_requested: false,
            layout_dirty: false,
            end_reached_fired: false,
            torn_down: false,
            options,
        }
    }

    pub fn options(&self) -> &ListWindowOptions<K> {
        &self.options
    }

    pub fn store(&self) -> &ItemMetadataStore<K> {
        &self.store
    }

    pub fn item_count(&self) -> usize {
        self.store.len()
    }

    pub fn total_size(&self) -> f64 {
        self.store.total_size()
    }

    /// The most recently reconciled window. Stable (pointer-equal) across
    /// recomputes that change nothing.
    pub fn window(&self) -> Arc<RenderWindow<K>> {
        self.reconciler.current()
    }

    /// Index range of the currently rendered window (overscan included).
    pub fn visible_range(&self) -> WindowRange {
        self.reconciler.current().range
    }

    /// Latest raw scroll position, readable synchronously (ahead of the
    /// coalesced recompute).
    pub fn scroll_position(&self) -> f64 {
        self.scroll_position
    }

    pub fn container_size(&self) -> f64 {
        self.container_size
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn item_key(&self, index: usize) -> Option<&K> {
        self.store.key_at(index)
    }

    /// Offset + height of the item at `index`, clamped to the nearest valid
    /// index; an empty engine reports zeros at the estimated height.
    pub fn item_position(&self, index: usize) -> ItemPosition {
        ItemPosition {
            offset: self.store.offset(index),
            height: self.store.height(index),
        }
    }

    /// Replaces the item list. Measured heights follow keys, so reorders
    /// and partial replacement keep their measurements. Growing the list
    /// starts a new end-reached epoch.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = ItemSource<K>>) {
        if self.torn_down {
            return;
        }
        let prev_count = self.store.len();
        self.store.initialize(items);
        if self.store.len() > prev_count {
            self.end_reached_fired = false;
        }
        self.layout_dirty = true;
        self.request_frame();
    }

    pub fn set_container_size(&mut self, size: f64) {
        if self.torn_down {
            return;
        }
        let size = sanitize(size);
        if self.container_size == size {
            return;
        }
        self.container_size = size;
        self.request_frame();
    }

    /// Ingests a raw scroll event from the host.
    ///
    /// The position is stored immediately for synchronous reads; the
    /// recompute is deferred to the next frame, so any number of scroll
    /// events within one frame cost a single window computation.
    pub fn on_scroll(&mut self, position: f64, now_ms: u64) {
        if self.torn_down {
            return;
        }
        let position = sanitize(position);
        if position != self.scroll_position {
            self.scroll_direction = Some(if position > self.scroll_position {
                ScrollDirection::Forward
            } else {
                ScrollDirection::Backward
            });
        }
        self.scroll_position = position;
        self.is_scrolling = true;
        self.last_scroll_event_ms = Some(now_ms);
        lwtrace!(position, now_ms, "on_scroll");
        if let Some(cb) = &self.options.on_scroll {
            cb(position);
        }
        self.request_frame();
    }

    /// Debounced is-scrolling reset; call from the host's tick.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
    }

    /// Queues a measured size for the item at `index`.
    ///
    /// Safe to call any number of times (in any order) between frames; the
    /// whole batch settles atomically before the next window read. Indices
    /// that no longer exist are dropped silently — late measurement
    /// callbacks for removed items are expected.
    pub fn report_measured_size(&mut self, index: usize, size: f64) {
        if self.torn_down || !self.store.is_dynamic() {
            return;
        }
        self.pending_measurements.push((index, size));
        self.request_frame();
    }

    /// Host-facing alias for [`report_measured_size`](Self::report_measured_size):
    /// manual height updates take the same batched path as observer
    /// callbacks so mutation ordering stays intact.
    pub fn update_item_height(&mut self, index: usize, height: f64) {
        self.report_measured_size(index, height);
    }

    /// Rebuilds all metadata from cached measurements and base heights,
    /// then recomputes. Escape hatch for out-of-band bulk size changes
    /// (e.g. after a filter toggles a CSS class on everything).
    pub fn recalculate_layout(&mut self) {
        if self.torn_down {
            return;
        }
        self.store.rebuild();
        self.layout_dirty = true;
        self.request_frame();
    }

    /// Runs the deferred recompute. Hosts call this when the frame
    /// requested through the [`FrameScheduler`] capability fires.
    pub fn on_frame(&mut self) {
        if self.torn_down {
            return;
        }
        self.frame_requested = false;
        self.run_frame();
    }

    /// Releases capabilities and silences the engine: no window or
    /// end-reached event fires after this returns. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.frame_requested = false;
        self.pending_measurements.clear();
        if let Some(observer) = &mut self.observer {
            for key in self.observed.drain(..) {
                observer.unobserve(&key);
            }
        }
        lwdebug!("teardown");
    }

    pub fn max_scroll_position(&self) -> f64 {
        (self.store.total_size() - self.container_size).max(0.0)
    }

    pub fn clamp_scroll_position(&self, position: f64) -> f64 {
        sanitize(position).min(self.max_scroll_position())
    }

    /// Computes the (clamped) scroll target that satisfies `align` for
    /// `index`, without applying it.
    pub fn scroll_target_for_index(&self, index: usize, align: Align) -> f64 {
        let count = self.store.len();
        if count == 0 {
            return 0.0;
        }
        let index = cmp::min(index, count - 1);
        let offset = self.store.offset(index);
        let height = self.store.height(index);
        let view = self.container_size;

        let target = match align {
            Align::Start => offset,
            Align::End => offset + height - view,
            Align::Center => offset + height / 2.0 - view / 2.0,
            Align::Auto => {
                let cur = self.clamp_scroll_position(self.scroll_position);
                if offset >= cur && offset + height <= cur + view {
                    cur
                } else if offset < cur {
                    offset
                } else {
                    offset + height - view
                }
            }
        };
        self.clamp_scroll_position(target)
    }

    /// Computes and applies a scroll target for `index`. Returns the target.
    ///
    /// The real scroll container belongs to the host: the target is handed
    /// to the injected scroll host (if any), and the engine does not assume
    /// the scroll completed — it only recomputes from the target.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> f64 {
        let target = self.scroll_target_for_index(index, align);
        self.apply_scroll_target(target)
    }

    pub fn scroll_to_position(&mut self, position: f64) -> f64 {
        let target = self.clamp_scroll_position(position);
        self.apply_scroll_target(target)
    }

    pub fn scroll_to_top(&mut self) -> f64 {
        self.scroll_to_position(0.0)
    }

    pub fn scroll_to_bottom(&mut self) -> f64 {
        self.scroll_to_position(self.store.total_size() - self.container_size)
    }

    fn apply_scroll_target(&mut self, target: f64) -> f64 {
        if self.torn_down {
            return target;
        }
        if target != self.scroll_position {
            self.scroll_direction = Some(if target > self.scroll_position {
                ScrollDirection::Forward
            } else {
                ScrollDirection::Backward
            });
            self.scroll_position = target;
        }
        lwtrace!(target, "scroll target applied");
        if let Some(host) = &self.options.scroll_host {
            host(target);
        }
        self.request_frame();
        target
    }

    fn request_frame(&mut self) {
        if self.torn_down {
            return;
        }
        if self.scheduler.is_none() {
            // No scheduler capability: recompute synchronously instead of
            // coalescing. Degraded but functional.
            self.run_frame();
            return;
        }
        if !self.frame_requested {
            self.frame_requested = true;
            if let Some(scheduler) = &mut self.scheduler {
                scheduler.request_frame();
            }
        }
    }

    fn run_frame(&mut self) {
        // The measurement batch settles fully before the window is read.
        if !self.pending_measurements.is_empty() {
            let pending = core::mem::take(&mut self.pending_measurements);
            let mut moved = false;
            for (index, size) in pending {
                moved |= self.store.update_height(index, size);
            }
            if moved {
                self.layout_dirty = true;
            }
        }

        let viewport = Viewport {
            scroll_position: self.scroll_position,
            container_size: self.container_size,
        };
        let range = compute_window(viewport, &self.store, self.options.overscan);
        let layout_changed = core::mem::take(&mut self.layout_dirty);
        let (window, changed) = self.reconciler.reconcile(range, &self.store, layout_changed);
        if changed {
            self.sync_observers(&window);
            if let Some(cb) = &self.options.on_window_change {
                cb(&window);
            }
        }
        self.check_end_reached();
    }

    fn check_end_reached(&mut self) {
        if self.end_reached_fired || self.store.is_empty() {
            return;
        }
        let total = self.store.total_size();
        let end = self.clamp_scroll_position(self.scroll_position) + self.container_size;
        if total - end <= self.options.end_reached_threshold {
            self.end_reached_fired = true;
            lwdebug!(total, "end reached");
            if let Some(cb) = &self.options.on_end_reached {
                cb();
            }
        }
    }

    fn sync_observers(&mut self, window: &RenderWindow<K>) {
        let Some(observer) = &mut self.observer else {
            return;
        };
        let next: Vec<K> = window.items.iter().map(|it| it.key.clone()).collect();
        for key in &self.observed {
            if !next.contains(key) {
                observer.unobserve(key);
            }
        }
        for key in &next {
            if !self.observed.contains(key) {
                observer.observe(key);
            }
        }
        self.observed = next;
    }
}

impl<K: WindowKey + core::fmt::Debug> core::fmt::Debug for ListWindow<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListWindow")
            .field("options", &self.options)
            .field("item_count", &self.store.len())
            .field("scroll_position", &self.scroll_position)
            .field("container_size", &self.container_size)
            .field("is_scrolling", &self.is_scrolling)
            .field("frame_requested", &self.frame_requested)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

fn sanitize(x: f64) -> f64 {
    if x.is_finite() { x.max(0.0) } else { 0.0 }
}
