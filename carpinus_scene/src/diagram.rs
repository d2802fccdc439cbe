// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition root tying layout, state, input, and painting to one surface.

use core::fmt;
use std::cell::Cell;
use std::rc::Rc;

use carpinus_layout::{LayoutEngine, Size, SourceNode, TextMeasurer};
use carpinus_viewport::{Viewport, ViewportConfig, ViewportUpdate};
use tracing::debug;

use crate::render::{DrawingBackend, Renderer};
use crate::{
    DrawEvent, ExportPlan, FrameScheduler, InputConfig, InputController, InputResponse,
    PointerEvent, RebuildEvent, SceneError, State, SubscriptionId,
};

/// A host drawing surface, such as a canvas element or a window.
pub trait Surface {
    /// The backend painting onto this surface.
    type Backend: DrawingBackend;

    /// Current size in device pixels.
    fn size(&self) -> Size;

    /// The drawing backend, or `None` if the surface cannot provide one.
    fn backend(&mut self) -> Option<&mut Self::Backend>;
}

/// An interactive diagram on one surface.
///
/// The host forwards pointer events to [`handle_input`](Self::handle_input), size
/// changes to [`resize`](Self::resize), and its frame callback to
/// [`frame`](Self::frame). Collapse toggles triggered by input are re-laid out before
/// `handle_input` returns.
pub struct Diagram<M, S> {
    engine: LayoutEngine<M>,
    state: State,
    input: InputController,
    renderer: Renderer,
    surface: S,
    needs_rebuild: Rc<Cell<bool>>,
}

impl<M, S> fmt::Debug for Diagram<M, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagram")
            .field("engine", &self.engine)
            .field("state", &self.state)
            .field("input", &self.input)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}

impl<M: TextMeasurer, S: Surface> Diagram<M, S> {
    /// Set up a diagram on `surface`.
    ///
    /// Fails with [`SceneError::SurfaceUnavailable`] if the surface has no backend, or
    /// with [`SceneError::Viewport`] if `viewport_config` is invalid.
    pub fn new(
        engine: LayoutEngine<M>,
        viewport_config: ViewportConfig,
        input_config: InputConfig,
        mut surface: S,
    ) -> Result<Self, SceneError> {
        if surface.backend().is_none() {
            return Err(SceneError::SurfaceUnavailable);
        }
        let mut state = State::new(Viewport::new(viewport_config)?);
        let size = surface.size();
        state.change_canvas_size(size.width, size.height);

        let mut renderer = Renderer::default();
        renderer.attach(&mut state);

        let needs_rebuild = Rc::new(Cell::new(false));
        let flag = Rc::clone(&needs_rebuild);
        state.on_rebuild(move |_| flag.set(true));

        Ok(Self {
            engine,
            state,
            input: InputController::new(input_config),
            renderer,
            surface,
            needs_rebuild,
        })
    }

    /// Lay out `source` and display it.
    pub fn create(&mut self, source: &SourceNode) {
        let layout = self.engine.create(source);
        self.state.set_scheme(layout);
    }

    /// Re-pack the current tree after collapse flags changed.
    ///
    /// Returns `false` if there is no tree.
    pub fn rebuild(&mut self) -> bool {
        let Some(root) = self.state.take_scheme_root() else {
            return false;
        };
        let layout = self.engine.rebuild(root);
        self.state.set_scheme(layout);
        true
    }

    /// Fit the tree into the surface and center it.
    pub fn to_center(&mut self) -> ViewportUpdate {
        self.state.fit_scheme()
    }

    /// Bounding size of the current tree in scene units.
    #[must_use]
    pub fn scheme_size(&self) -> Size {
        self.state.scheme().measure()
    }

    /// Subscribe to draw events.
    pub fn on_draw(&mut self, listener: impl FnMut(&DrawEvent) + 'static) -> SubscriptionId {
        self.state.on_draw(listener)
    }

    /// Remove a draw listener.
    pub fn off_draw(&mut self, id: SubscriptionId) -> bool {
        self.state.off_draw(id)
    }

    /// Subscribe to rebuild requests.
    pub fn on_rebuild(&mut self, listener: impl FnMut(&RebuildEvent) + 'static) -> SubscriptionId {
        self.state.on_rebuild(listener)
    }

    /// Remove a rebuild listener.
    pub fn off_rebuild(&mut self, id: SubscriptionId) -> bool {
        self.state.off_rebuild(id)
    }

    /// Install the scheduler asked for frames when pan or zoom changes.
    pub fn set_frame_scheduler(&mut self, scheduler: impl FrameScheduler + 'static) {
        self.state.set_frame_scheduler(scheduler);
    }

    /// Apply a pointer event; re-lays out the tree if a node was toggled.
    pub fn handle_input(&mut self, event: PointerEvent) -> InputResponse {
        let response = self.input.handle(event, &mut self.state);
        if self.needs_rebuild.replace(false) {
            self.rebuild();
        }
        response
    }

    /// The surface changed size.
    pub fn resize(&mut self, width: f64, height: f64) -> ViewportUpdate {
        self.state.change_canvas_size(width, height)
    }

    /// Frame callback: publish batched viewport changes and repaint if needed.
    ///
    /// Returns whether the surface was painted.
    pub fn frame(&mut self) -> Result<bool, SceneError> {
        self.state.flush_frame();
        let backend = self
            .surface
            .backend()
            .ok_or(SceneError::SurfaceUnavailable)?;
        Ok(self.renderer.paint_if_dirty(&self.state, backend)?)
    }

    /// Paint the whole tree onto `backend` per `plan`. Returns the surface size used.
    pub fn export(
        &self,
        plan: &ExportPlan,
        backend: &mut impl DrawingBackend,
    ) -> Result<Size, SceneError> {
        Ok(plan.render_scheme(self.state.scheme(), backend)?)
    }

    /// Tear the diagram down and hand the surface back.
    ///
    /// Subscribers see a final draw with the tree removed before they are dropped.
    pub fn destroy(mut self) -> S {
        self.state.clear_scheme();
        self.renderer.detach(&mut self.state);
        self.state.clear_listeners();
        debug!("diagram destroyed");
        self.surface
    }

    /// The event hub.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Mutable event hub, for direct viewport control.
    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// The renderer, for restyling.
    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// The layout engine.
    #[must_use]
    pub fn engine(&self) -> &LayoutEngine<M> {
        &self.engine
    }

    /// The surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
