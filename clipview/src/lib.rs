//! A headless compositing-layer clip view with decelerated scrolling.
//!
//! For the layer bridge and host-event controller, see the
//! `clipview-adapter` crate.
//!
//! This crate focuses on the core scroll-surface behavior: the logical
//! scroll origin, the immediate-vs-animated arbitration for
//! scroll-to-visible requests, and the deceleration curve that drives
//! animated scrolls one frame tick at a time.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - viewport and content geometry
//! - a per-frame tick (display refresh callback)
//! - scroll events, classified by input source (wheel click vs touch momentum)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animation;
mod clipview;
mod easing;
mod error;
mod geometry;
mod options;
mod state;


pub use animation::{FrameToken, ScrollAnimation};
pub use clipview::ClipView;
pub use easing::Easing;
pub use error::ScrollError;
pub use geometry::{Point, Rect, Size};
pub use options::{ClipViewOptions, OnChangeCallback};
pub use state::{FrameState, OriginState, ViewportState};
