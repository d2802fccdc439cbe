// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering and diagram errors.

use carpinus_layout::{Category, LayoutError};
use carpinus_viewport::ViewportError;
use thiserror::Error;

/// Errors raised while painting a tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The [`StyleTable`](crate::render::StyleTable) has no entry for a node's category.
    #[error("no figure style registered for category `{0}`")]
    UnregisteredCategory(Category),
    /// A connector was drawn with fewer than two points.
    #[error("connector needs at least two points, has {points}")]
    DegenerateConnector {
        /// Number of points the connector had.
        points: usize,
    },
}

/// Errors surfaced by a [`Diagram`](crate::Diagram).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SceneError {
    /// The surface could not provide a drawing backend.
    #[error("drawing surface is unavailable")]
    SurfaceUnavailable,
    /// Layout configuration or input was rejected.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// A viewport change was rejected.
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    /// Painting failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}
