// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carpinus Viewport: the pan/zoom state that maps a diagram's scene onto a canvas.
//!
//! A [`Viewport`] holds a uniform scale, a screen-space offset applied after scaling,
//! and the canvas size in device pixels. The mapping is always
//! `screen = scene * scale + offset`.
//!
//! ## Batching
//!
//! Pan and zoom changes are meant to be painted at most once per frame. Every
//! mutator returns a [`ViewportUpdate`] telling the caller what to do:
//!
//! - [`ViewportUpdate::Unchanged`]: nothing moved; do not notify.
//! - [`ViewportUpdate::Scheduled`]: first change since the last frame; request a frame.
//! - [`ViewportUpdate::Coalesced`]: a frame is already requested; do nothing.
//! - [`ViewportUpdate::Immediate`]: notify now (canvas resizes).
//!
//! The frame callback then calls [`Viewport::take_pending`], which yields one
//! [`ViewportSnapshot`] carrying the latest values, or `None` if it was already taken.
//!
//! ## Example
//!
//! ```rust
//! use carpinus_viewport::{Viewport, ViewportConfig, ViewportUpdate, ZoomDirection};
//! use kurbo::Point;
//!
//! let mut viewport = Viewport::new(ViewportConfig::default()).unwrap();
//! viewport.change_canvas_size(800.0, 600.0);
//!
//! let cursor = Point::new(100.0, 100.0);
//! let before = viewport.screen_to_scene(cursor);
//! assert_eq!(viewport.zoom_at(cursor, ZoomDirection::In).unwrap(), ViewportUpdate::Scheduled);
//! assert_eq!(viewport.zoom_at(cursor, ZoomDirection::In).unwrap(), ViewportUpdate::Coalesced);
//!
//! // The scene point under the cursor stays put.
//! let after = viewport.screen_to_scene(cursor);
//! assert!((before - after).hypot() < 1e-9);
//!
//! // One snapshot per frame.
//! assert!(viewport.take_pending().is_some());
//! assert!(viewport.take_pending().is_none());
//! ```

mod config;
mod error;
mod viewport;

pub use config::ViewportConfig;
pub use error::ViewportError;
pub use viewport::{Viewport, ViewportSnapshot, ViewportUpdate, ZoomDirection};
