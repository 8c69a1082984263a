//! Adapter utilities for the `listwindow` crate.
//!
//! The `listwindow` crate is UI-agnostic and focuses on window math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by hosts:
//!
//! - Scroll anchoring (e.g. prepend in chat/timelines without visual jumps)
//! - Tween-based smooth scrolling
//! - A [`Controller`] that wraps the engine and drives both per host tick
//!
//! It is intentionally framework-agnostic: no DOM, no widget toolkit.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod anchor;
mod controller;
mod tween;


pub use anchor::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};
pub use controller::Controller;
pub use tween::{Easing, Tween};
