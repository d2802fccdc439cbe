// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event hub joining the viewport and the scheme.
//!
//! [`State`] owns a [`Viewport`] and a [`Scheme`] and is the only place that
//! publishes their changes. Two signals are exposed:
//!
//! - `draw`: something visible changed. Scheme replacements and canvas resizes are
//!   published synchronously. Pan and zoom changes are batched: the first change
//!   after a frame asks the [`FrameScheduler`] for a frame, and
//!   [`State::flush_frame`] publishes one [`DrawEvent`] with the latest values.
//! - `rebuild`: a collapse toggle changed which nodes are visible and rows need to
//!   be re-packed.

use carpinus_layout::{Layout, Point, Size, TreeNode, Vec2};
use carpinus_viewport::{Viewport, ViewportError, ViewportSnapshot, ViewportUpdate, ZoomDirection};
use tracing::trace;

use crate::{Scheme, Signal, SubscriptionId};

/// Asks the host to run a frame callback soon.
///
/// The host is expected to call [`State::flush_frame`] (or
/// [`Diagram::frame`](crate::Diagram::frame)) from that callback.
pub trait FrameScheduler {
    /// Request one frame. Called at most once between flushes.
    fn request_frame(&mut self);
}

impl<F: FnMut()> FrameScheduler for F {
    fn request_frame(&mut self) {
        self();
    }
}

/// What triggered a [`DrawEvent`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawCause {
    /// Pan, zoom, or canvas size changed.
    Viewport,
    /// The tree was replaced or cleared.
    Scheme,
}

/// Published on the `draw` signal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawEvent {
    /// Viewport values to paint with.
    pub viewport: ViewportSnapshot,
    /// Bounding size of the current tree.
    pub measure: Size,
    /// Scheme revision the event refers to.
    pub revision: u64,
    /// What changed.
    pub cause: DrawCause,
}

/// Published on the `rebuild` signal after a collapse toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RebuildEvent {
    /// Scheme point that was toggled.
    pub at: Point,
    /// Scheme revision at the time of the toggle.
    pub revision: u64,
}

/// Single-threaded hub for viewport and scheme notifications.
pub struct State {
    viewport: Viewport,
    scheme: Scheme,
    draw: Signal<DrawEvent>,
    rebuild: Signal<RebuildEvent>,
    scheduler: Option<Box<dyn FrameScheduler>>,
}

impl core::fmt::Debug for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("State")
            .field("viewport", &self.viewport)
            .field("scheme", &self.scheme)
            .field("draw", &self.draw)
            .field("rebuild", &self.rebuild)
            .field("scheduler", &self.scheduler.is_some())
            .finish()
    }
}

impl State {
    /// Create a hub around `viewport` with an empty scheme and no frame scheduler.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scheme: Scheme::new(),
            draw: Signal::new(),
            rebuild: Signal::new(),
            scheduler: None,
        }
    }

    /// Install the scheduler used to request frames for batched viewport changes.
    ///
    /// Without one, batched changes wait until [`flush_frame`](Self::flush_frame) is
    /// called anyway.
    pub fn set_frame_scheduler(&mut self, scheduler: impl FrameScheduler + 'static) {
        self.scheduler = Some(Box::new(scheduler));
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The scheme.
    #[must_use]
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Subscribe to draw events.
    pub fn on_draw(&mut self, listener: impl FnMut(&DrawEvent) + 'static) -> SubscriptionId {
        self.draw.subscribe(listener)
    }

    /// Remove a draw listener.
    pub fn off_draw(&mut self, id: SubscriptionId) -> bool {
        self.draw.unsubscribe(id)
    }

    /// Subscribe to rebuild requests.
    pub fn on_rebuild(&mut self, listener: impl FnMut(&RebuildEvent) + 'static) -> SubscriptionId {
        self.rebuild.subscribe(listener)
    }

    /// Remove a rebuild listener.
    pub fn off_rebuild(&mut self, id: SubscriptionId) -> bool {
        self.rebuild.unsubscribe(id)
    }

    /// Drop every listener and the frame scheduler.
    pub fn clear_listeners(&mut self) {
        self.draw.clear();
        self.rebuild.clear();
        self.scheduler = None;
    }

    /// Replace the tree and publish a draw.
    pub fn set_scheme(&mut self, layout: Layout) {
        self.scheme.set_layout(layout);
        self.emit_draw(self.viewport.snapshot(), DrawCause::Scheme);
    }

    /// Drop the tree and publish a draw.
    pub fn clear_scheme(&mut self) {
        self.scheme.clear();
        self.emit_draw(self.viewport.snapshot(), DrawCause::Scheme);
    }

    /// Move the tree out for a rebuild. Nothing is published.
    pub fn take_scheme_root(&mut self) -> Option<TreeNode> {
        self.scheme.take_root()
    }

    /// Toggle the node under a scene point and publish a rebuild request if one
    /// was toggled.
    pub fn find_node_by_mouse_coordinates(&mut self, scene_point: Point) -> bool {
        let toggled = self.scheme.find_node_by_mouse_coordinates(scene_point);
        if toggled {
            let event = RebuildEvent {
                at: scene_point,
                revision: self.scheme.revision(),
            };
            self.rebuild.emit(&event);
        }
        toggled
    }

    /// See [`Viewport::change_scale`].
    pub fn change_scale(
        &mut self,
        scale: f64,
        pivot_offset: Vec2,
    ) -> Result<ViewportUpdate, ViewportError> {
        let update = self.viewport.change_scale(scale, pivot_offset)?;
        Ok(self.route(update))
    }

    /// See [`Viewport::change_offset`].
    pub fn change_offset(&mut self, offset: Vec2) -> ViewportUpdate {
        let update = self.viewport.change_offset(offset);
        self.route(update)
    }

    /// See [`Viewport::translate`].
    pub fn translate(&mut self, delta: Vec2) -> ViewportUpdate {
        let update = self.viewport.translate(delta);
        self.route(update)
    }

    /// See [`Viewport::zoom_at`].
    pub fn zoom_at(
        &mut self,
        cursor: Point,
        direction: ZoomDirection,
    ) -> Result<ViewportUpdate, ViewportError> {
        let update = self.viewport.zoom_at(cursor, direction)?;
        Ok(self.route(update))
    }

    /// Fit the current scheme into the canvas. See [`Viewport::fit`].
    pub fn fit_scheme(&mut self) -> ViewportUpdate {
        let update = self.viewport.fit(self.scheme.measure());
        self.route(update)
    }

    /// See [`Viewport::reset`].
    pub fn reset_viewport(&mut self) -> ViewportUpdate {
        let update = self.viewport.reset();
        self.route(update)
    }

    /// Record a new canvas size and publish a draw immediately.
    pub fn change_canvas_size(&mut self, width: f64, height: f64) -> ViewportUpdate {
        let update = self.viewport.change_canvas_size(width, height);
        self.route(update)
    }

    /// Publish the batched viewport change, if any. Returns whether a draw was emitted.
    pub fn flush_frame(&mut self) -> bool {
        match self.viewport.take_pending() {
            Some(snapshot) => {
                self.emit_draw(snapshot, DrawCause::Viewport);
                true
            }
            None => false,
        }
    }

    fn route(&mut self, update: ViewportUpdate) -> ViewportUpdate {
        match update {
            ViewportUpdate::Scheduled => {
                if let Some(scheduler) = self.scheduler.as_mut() {
                    trace!("requesting frame");
                    scheduler.request_frame();
                }
            }
            ViewportUpdate::Immediate => {
                self.emit_draw(self.viewport.snapshot(), DrawCause::Viewport);
            }
            ViewportUpdate::Unchanged | ViewportUpdate::Coalesced => {}
        }
        update
    }

    fn emit_draw(&mut self, viewport: ViewportSnapshot, cause: DrawCause) {
        let event = DrawEvent {
            viewport,
            measure: self.scheme.measure(),
            revision: self.scheme.revision(),
            cause,
        };
        self.draw.emit(&event);
    }
}
