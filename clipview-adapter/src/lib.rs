//! Adapter utilities for the `clipview` crate.
//!
//! The `clipview` crate is UI-agnostic and focuses on the core scroll math
//! and state. This crate provides the small, framework-neutral pieces a
//! host toolkit needs to put it on screen:
//!
//! - The [`ScrollLayer`] seam to a compositing layer, with a bridge that
//!   keeps the layer's content offset in lockstep with the logical origin
//! - A [`Controller`] that wires host events (resizes, wheel and momentum
//!   scrolls, frame ticks) into the clip view and re-syncs the layer after
//!   every origin mutation
//!
//! This crate is intentionally framework-agnostic (no winit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod layer;
mod source;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use layer::{LayerBridge, ScrollLayer};
pub use source::ScrollSource;
