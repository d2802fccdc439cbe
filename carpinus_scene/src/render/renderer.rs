// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-deferred painting of the current state.

use std::cell::Cell;
use std::rc::Rc;

use tracing::trace;

use super::{DrawingBackend, StyleTable, TreePainter};
use crate::{RenderError, State, SubscriptionId};

/// Paints the scheme through the viewport transform.
///
/// Once [attached](Self::attach), every draw event marks the renderer dirty. The host
/// calls [`paint_if_dirty`](Self::paint_if_dirty) from its frame callback, so any
/// number of draws between two frames cost one paint, and that paint reads the
/// latest state.
#[derive(Debug)]
pub struct Renderer {
    styles: StyleTable,
    dirty: Rc<Cell<bool>>,
    subscription: Option<SubscriptionId>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(StyleTable::default())
    }
}

impl Renderer {
    /// A detached renderer. It starts dirty so the first frame paints.
    #[must_use]
    pub fn new(styles: StyleTable) -> Self {
        Self {
            styles,
            dirty: Rc::new(Cell::new(true)),
            subscription: None,
        }
    }

    /// The figure styles.
    #[must_use]
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Mutable figure styles. Marks the renderer dirty.
    pub fn styles_mut(&mut self) -> &mut StyleTable {
        self.dirty.set(true);
        &mut self.styles
    }

    /// Subscribe to `state`'s draw events. Re-attaching drops the old subscription.
    pub fn attach(&mut self, state: &mut State) -> SubscriptionId {
        self.detach(state);
        let dirty = Rc::clone(&self.dirty);
        let id = state.on_draw(move |_| dirty.set(true));
        self.subscription = Some(id);
        id
    }

    /// Drop the draw subscription. Returns whether one was active.
    pub fn detach(&mut self, state: &mut State) -> bool {
        self.subscription
            .take()
            .is_some_and(|id| state.off_draw(id))
    }

    /// Whether a draw arrived since the last paint.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Force the next [`paint_if_dirty`](Self::paint_if_dirty) to paint.
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Paint if dirty. Returns whether a paint happened.
    pub fn paint_if_dirty(
        &self,
        state: &State,
        backend: &mut impl DrawingBackend,
    ) -> Result<bool, RenderError> {
        if !self.dirty.replace(false) {
            return Ok(false);
        }
        self.paint(state, backend)?;
        Ok(true)
    }

    /// Clear the canvas and paint the scheme under the current viewport.
    pub fn paint(
        &self,
        state: &State,
        backend: &mut impl DrawingBackend,
    ) -> Result<(), RenderError> {
        let viewport = state.viewport().snapshot();
        backend.clear(viewport.canvas_size);
        backend.set_transform(viewport.transform());
        if let Some(root) = state.scheme().root() {
            TreePainter::new(&self.styles).paint(root, backend)?;
        }
        trace!(
            revision = state.scheme().revision(),
            scale = viewport.scale,
            "painted frame"
        );
        Ok(())
    }
}
