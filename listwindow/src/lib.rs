//! A headless virtual-scroll windowing engine.
//!
//! Given a list of N items rendered inside a finite-height viewport, the
//! engine decides exactly which items must be mounted and at what offset,
//! supporting fixed-height and dynamically-measured items, overscan
//! buffering, programmatic scroll control, and end-reached detection for
//! incremental loading.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - container size and raw scroll offsets
//! - an animation-frame scheduler (so input events coalesce to one
//!   recompute per frame)
//! - optionally, a resize-observation capability for dynamic item heights
//!
//! For adapter-level utilities (smooth scrolling, anchoring), see the
//! `listwindow-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod capability;
mod engine;
mod fenwick;
mod metadata;
mod options;
mod reconcile;
mod types;
mod window;


pub use capability::{FrameScheduler, SizeObserver};
pub use engine::ListWindow;
pub use metadata::{ItemMetadataStore, SIZE_EPSILON, WindowKey};
pub use options::{
    ListWindowOptions, OnEndReached, OnScrollCallback, OnWindowChange, ScrollHostCallback,
};
pub use reconcile::RenderWindowReconciler;
pub use types::{
    Align, Item, ItemKey, ItemPosition, ItemSource, RenderWindow, ScrollDirection, Viewport,
    WindowRange,
};
pub use window::compute_window;
