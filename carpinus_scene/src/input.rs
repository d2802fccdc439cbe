// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input: drag to pan, wheel to zoom, modifier-click to collapse.
//!
//! [`InputController`] turns canvas-local [`PointerEvent`]s into [`State`] calls and
//! reports what the host should do with the native event in an [`InputResponse`].
//!
//! ## Gestures
//!
//! - Primary button down without the collapse modifier starts a drag and asks the
//!   host to capture the pointer. Each move while dragging pans by the pointer delta.
//!   Up ends the drag and releases capture; a lost capture ends it too.
//! - Primary button down with the collapse modifier hit-tests the scheme at the
//!   pointer and toggles the node's children. No drag starts.
//! - The wheel always zooms around the pointer and always asks the host to suppress
//!   native scrolling. Negative `delta_y` (wheel away from the user) zooms in.
//!
//! ```
//! use carpinus_scene::{
//!     Capture, InputConfig, InputController, Modifiers, PointerButton, PointerEvent, State,
//! };
//! use carpinus_viewport::{Viewport, ViewportConfig};
//! use kurbo::{Point, Vec2};
//!
//! let mut state = State::new(Viewport::new(ViewportConfig::default()).unwrap());
//! let mut input = InputController::new(InputConfig::default());
//!
//! let down = PointerEvent::Down {
//!     position: Point::new(10.0, 10.0),
//!     button: PointerButton::Primary,
//!     modifiers: Modifiers::empty(),
//! };
//! assert_eq!(input.handle(down, &mut state).capture, Capture::Acquire);
//! let position = Point::new(25.0, 5.0);
//! input.handle(PointerEvent::Move { position }, &mut state);
//! let up = input.handle(PointerEvent::Up { position }, &mut state);
//! assert_eq!(up.capture, Capture::Release);
//!
//! assert_eq!(state.viewport().offset(), Vec2::new(15.0, -5.0));
//! ```

use carpinus_layout::Point;
use carpinus_viewport::ZoomDirection;
use tracing::{debug, warn};

use crate::State;

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

/// Pointer button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the middle button.
    Auxiliary,
    /// Any other button, by host index.
    Other(u16),
}

/// A canvas-local pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed.
    Down {
        /// Pointer position in canvas pixels.
        position: Point,
        /// Pressed button.
        button: PointerButton,
        /// Held modifiers.
        modifiers: Modifiers,
    },
    /// The pointer moved.
    Move {
        /// Pointer position in canvas pixels.
        position: Point,
    },
    /// A button was released.
    Up {
        /// Pointer position in canvas pixels.
        position: Point,
    },
    /// The host revoked pointer capture.
    CaptureLost,
    /// The wheel turned.
    Wheel {
        /// Pointer position in canvas pixels.
        position: Point,
        /// Vertical wheel delta; negative is away from the user.
        delta_y: f64,
        /// Held modifiers.
        modifiers: Modifiers,
    },
}

/// Pointer capture request for the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Capture {
    /// Leave capture as it is.
    #[default]
    Keep,
    /// Capture the pointer so moves outside the canvas still arrive.
    Acquire,
    /// Release a previous capture.
    Release,
}

/// What the host should do after an event was handled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputResponse {
    /// Capture change to apply.
    pub capture: Capture,
    /// Suppress the native default action (page scrolling for wheel events).
    pub prevent_default: bool,
    /// A node's children were toggled; the tree needs a rebuild.
    pub toggled: bool,
}

/// Input tunables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputConfig {
    /// Modifiers that turn a primary press into a collapse toggle.
    pub collapse_modifier: Modifiers,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            collapse_modifier: Modifiers::CTRL,
        }
    }
}

/// Tracks an in-progress drag and dispatches gestures to a [`State`].
#[derive(Clone, Debug, Default)]
pub struct InputController {
    config: InputConfig,
    /// Last pointer position of the active drag.
    drag: Option<Point>,
}

impl InputController {
    /// Create a controller with no active drag.
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self { config, drag: None }
    }

    /// The controller's configuration.
    #[must_use]
    pub const fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Forget any active drag.
    pub fn reset(&mut self) {
        self.drag = None;
    }

    /// Apply `event` to `state`.
    pub fn handle(&mut self, event: PointerEvent, state: &mut State) -> InputResponse {
        match event {
            PointerEvent::Down {
                position,
                button: PointerButton::Primary,
                modifiers,
            } => self.on_down(position, modifiers, state),
            PointerEvent::Down { .. } => InputResponse::default(),
            PointerEvent::Move { position } => {
                self.on_move(position, state);
                InputResponse::default()
            }
            PointerEvent::Up { .. } => self.on_up(),
            PointerEvent::CaptureLost => {
                self.drag = None;
                InputResponse::default()
            }
            PointerEvent::Wheel {
                position, delta_y, ..
            } => self.on_wheel(position, delta_y, state),
        }
    }

    fn on_down(
        &mut self,
        position: Point,
        modifiers: Modifiers,
        state: &mut State,
    ) -> InputResponse {
        if modifiers.contains(self.config.collapse_modifier) {
            let scene_point = state.viewport().screen_to_scene(position);
            let toggled = state.find_node_by_mouse_coordinates(scene_point);
            debug!(x = scene_point.x, y = scene_point.y, toggled, "collapse click");
            return InputResponse {
                toggled,
                ..InputResponse::default()
            };
        }
        self.drag = Some(position);
        InputResponse {
            capture: Capture::Acquire,
            ..InputResponse::default()
        }
    }

    fn on_move(&mut self, position: Point, state: &mut State) {
        let Some(last) = self.drag.as_mut() else {
            return;
        };
        let delta = position - *last;
        *last = position;
        state.translate(delta);
    }

    fn on_up(&mut self) -> InputResponse {
        if self.drag.take().is_some() {
            InputResponse {
                capture: Capture::Release,
                ..InputResponse::default()
            }
        } else {
            InputResponse::default()
        }
    }

    fn on_wheel(&mut self, position: Point, delta_y: f64, state: &mut State) -> InputResponse {
        let response = InputResponse {
            prevent_default: true,
            ..InputResponse::default()
        };
        let direction = if delta_y < 0.0 {
            ZoomDirection::In
        } else if delta_y > 0.0 {
            ZoomDirection::Out
        } else {
            return response;
        };
        if let Err(err) = state.zoom_at(position, direction) {
            warn!(%err, "zoom rejected");
        }
        response
    }
}
