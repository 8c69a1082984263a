//! Host capabilities injected into the engine.
//!
//! The engine is event-loop driven but owns no event loop. Frame timing and
//! size measurement come from the host through these traits, so the
//! coalescing and measurement logic stays deterministic under test: a test
//! double can count frame requests and deliver measurements synchronously.

/// Animation-frame scheduling capability.
///
/// The engine calls [`request_frame`](Self::request_frame) at most once per
/// pending recompute; the host invokes [`crate::ListWindow::on_frame`] when
/// its next animation tick fires. All inputs arriving in between coalesce
/// into that single recompute.
///
/// When no scheduler is injected, the engine recomputes synchronously on
/// every input instead — degraded (no coalescing) but functional.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Resize-observation capability for dynamic-height items.
///
/// The engine calls [`observe`](Self::observe) for items entering the
/// rendered window and [`unobserve`](Self::unobserve) for items leaving it
/// (and for everything on teardown). Implementations report sizes back
/// through [`crate::ListWindow::report_measured_size`].
pub trait SizeObserver<K> {
    fn observe(&mut self, key: &K);
    fn unobserve(&mut self, key: &K);
}
