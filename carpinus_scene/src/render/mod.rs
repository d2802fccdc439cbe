// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting: backend abstraction, figure styles, connectors, and the renderer.
//!
//! Painting is immediate mode. A [`TreePainter`] walks a tree and issues
//! [`DrawingBackend`] calls; [`Renderer`] wraps it with the viewport transform and
//! frame-deferred dirty tracking. [`RecordingBackend`] captures the calls as a list
//! of [`DrawCommand`]s.

mod backend;
mod connector;
mod figure;
mod recording;
mod renderer;
mod style;

pub use backend::{Color, DrawingBackend, EndMarker, Stroke, TextAlign, TextStyle};
pub use connector::{Connector, edges};
pub use figure::{
    Figure, HEADER_HEIGHT, LABEL_FONT_SIZE, TITLE_FONT_SIZE, TITLE_INSET, TreePainter,
};
pub use recording::{DrawCommand, RecordingBackend};
pub use renderer::Renderer;
pub use style::{FigureStyle, StyleTable};
