// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carpinus Scene: interactive, collapsible tree diagrams on a pan/zoom canvas.
//!
//! This crate glues [`carpinus_layout`] and [`carpinus_viewport`] into a working
//! diagram:
//!
//! - [`Scheme`]: the laid-out tree on display, with hit testing and collapse toggles.
//! - [`State`]: single-threaded event hub publishing `draw` and `rebuild` signals
//!   for viewport and scheme changes, with per-frame batching of pan and zoom.
//! - [`InputController`]: drag to pan, wheel to zoom at the cursor, modifier-click to
//!   collapse or expand a node's children.
//! - [`render`]: the [`DrawingBackend`](render::DrawingBackend) abstraction, figure
//!   styles, connectors, and the frame-deferred [`Renderer`](render::Renderer).
//! - [`ExportPlan`]: off-screen rendering of the whole tree.
//! - [`Diagram`]: the composition root owning all of the above plus a host
//!   [`Surface`].
//!
//! Everything here is single-threaded. Listeners are plain closures; state shared
//! between a listener and its owner lives in `Rc<Cell<_>>`.
//!
//! ## Example
//!
//! ```rust
//! use carpinus_layout::{
//!     Category, LayoutConfig, LayoutEngine, MonospaceMeasurer, Size, SourceNode,
//! };
//! use carpinus_scene::render::RecordingBackend;
//! use carpinus_scene::{Diagram, InputConfig, Surface};
//! use carpinus_viewport::ViewportConfig;
//!
//! struct Canvas(RecordingBackend);
//!
//! impl Surface for Canvas {
//!     type Backend = RecordingBackend;
//!     fn size(&self) -> Size {
//!         Size::new(640.0, 480.0)
//!     }
//!     fn backend(&mut self) -> Option<&mut RecordingBackend> {
//!         Some(&mut self.0)
//!     }
//! }
//!
//! let engine = LayoutEngine::new(LayoutConfig::default(), MonospaceMeasurer::default()).unwrap();
//! let mut diagram = Diagram::new(
//!     engine,
//!     ViewportConfig::default(),
//!     InputConfig::default(),
//!     Canvas(RecordingBackend::new()),
//! )
//! .unwrap();
//!
//! diagram.create(
//!     &SourceNode::new("Conway", Category::Root)
//!         .with_child(SourceNode::new("General", Category::Context)),
//! );
//! diagram.to_center();
//! assert!(diagram.frame().unwrap());
//! assert!(diagram.surface().0.texts().any(|t| t == "General"));
//! ```

mod diagram;
mod error;
mod export;
mod input;
pub mod render;
mod scheme;
mod signal;
mod state;

pub use diagram::{Diagram, Surface};
pub use error::{RenderError, SceneError};
pub use export::ExportPlan;
pub use input::{
    Capture, InputConfig, InputController, InputResponse, Modifiers, PointerButton, PointerEvent,
};
pub use scheme::Scheme;
pub use signal::{Signal, SubscriptionId};
pub use state::{DrawCause, DrawEvent, FrameScheduler, RebuildEvent, State};
