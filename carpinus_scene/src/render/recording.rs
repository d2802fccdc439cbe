// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A backend that records drawing calls as a display list.

use carpinus_layout::{Affine, Point, Rect, Size};

use super::{Color, DrawingBackend, EndMarker, Stroke, TextStyle};

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`DrawingBackend::clear`].
    Clear(Size),
    /// [`DrawingBackend::set_transform`].
    SetTransform(Affine),
    /// [`DrawingBackend::fill_rect`].
    FillRect {
        /// Filled rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`DrawingBackend::polyline`].
    Polyline {
        /// Polyline points.
        points: Vec<Point>,
        /// Line style.
        stroke: Stroke,
        /// Marker at the last point.
        end: Option<EndMarker>,
    },
    /// [`DrawingBackend::fill_text`].
    FillText {
        /// The text.
        text: String,
        /// Anchor point.
        origin: Point,
        /// Text appearance.
        style: TextStyle,
    },
}

/// Records the calls of the latest frame.
///
/// [`clear`](DrawingBackend::clear) starts a new frame: earlier commands are dropped
/// and the frame counter advances. Useful for tests and for hosts that replay the
/// list into their own renderer.
#[derive(Clone, Debug, Default)]
pub struct RecordingBackend {
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl RecordingBackend {
    /// An empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear, including that clear.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of clears seen.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.frames
    }

    /// Labels passed to `fill_text`, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawingBackend for RecordingBackend {
    fn clear(&mut self, size: Size) {
        self.commands.clear();
        self.frames += 1;
        self.commands.push(DrawCommand::Clear(size));
    }

    fn set_transform(&mut self, transform: Affine) {
        self.commands.push(DrawCommand::SetTransform(transform));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke, end: Option<EndMarker>) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
            end,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            origin,
            style: *style,
        });
    }
}
