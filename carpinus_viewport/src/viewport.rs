// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport controller.

use kurbo::{Affine, Point, Size, Vec2};
use tracing::trace;

use crate::{ViewportConfig, ViewportError};

/// What the caller should do after a viewport mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ViewportUpdate {
    /// The values did not change.
    Unchanged,
    /// First change since the last [`Viewport::take_pending`]; a frame should be requested.
    Scheduled,
    /// A frame is already pending and will carry this change too.
    Coalesced,
    /// The change must be published right away.
    Immediate,
}

impl ViewportUpdate {
    /// Whether anything changed.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Direction of a zoom step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Magnify by `1 + zoom_factor`.
    In,
    /// Shrink by `1 - zoom_factor`.
    Out,
}

/// The viewport's values at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportSnapshot {
    /// Uniform scale from scene to screen.
    pub scale: f64,
    /// Screen-space translation applied after scaling.
    pub offset: Vec2,
    /// Canvas size in device pixels.
    pub canvas_size: Size,
}

impl ViewportSnapshot {
    /// Scene to screen transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }
}

/// Pan/zoom state for one canvas.
///
/// Scale and offset always change together through [`change_scale`](Self::change_scale),
/// which keeps `screen = scene * scale + offset` consistent for every observer.
#[derive(Clone, Debug)]
pub struct Viewport {
    config: ViewportConfig,
    scale: f64,
    offset: Vec2,
    canvas_size: Size,
    pending: bool,
}

impl Viewport {
    /// Create a viewport at the configured initial scale with no offset and an empty canvas.
    pub fn new(config: ViewportConfig) -> Result<Self, ViewportError> {
        config.validate()?;
        Ok(Self {
            config,
            scale: config.initial_scale,
            offset: Vec2::ZERO,
            canvas_size: Size::ZERO,
            pending: false,
        })
    }

    /// The viewport's configuration.
    #[must_use]
    pub const fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Current scale.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Current screen-space offset.
    #[must_use]
    pub const fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current canvas size in device pixels.
    #[must_use]
    pub const fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Current values.
    #[must_use]
    pub const fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            scale: self.scale,
            offset: self.offset,
            canvas_size: self.canvas_size,
        }
    }

    /// Scene to screen transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.snapshot().transform()
    }

    /// Map a canvas point to scene coordinates.
    #[must_use]
    pub fn screen_to_scene(&self, point: Point) -> Point {
        ((point.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Map a scene point to canvas coordinates.
    #[must_use]
    pub fn scene_to_screen(&self, point: Point) -> Point {
        (point.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Replace scale and offset together.
    ///
    /// Returns [`ViewportError::InvalidScale`] and leaves the viewport untouched if
    /// `scale` is not finite and positive.
    pub fn change_scale(
        &mut self,
        scale: f64,
        pivot_offset: Vec2,
    ) -> Result<ViewportUpdate, ViewportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale(scale));
        }
        Ok(self.apply(scale, pivot_offset))
    }

    /// Set the offset, keeping the scale.
    pub fn change_offset(&mut self, offset: Vec2) -> ViewportUpdate {
        self.apply(self.scale, offset)
    }

    /// Shift the offset by a screen-space `delta`.
    pub fn translate(&mut self, delta: Vec2) -> ViewportUpdate {
        self.change_offset(self.offset + delta)
    }

    /// Record a new canvas size. Negative or non-finite extents count as zero.
    pub fn change_canvas_size(&mut self, width: f64, height: f64) -> ViewportUpdate {
        let clamp = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        self.canvas_size = Size::new(clamp(width), clamp(height));
        trace!(
            width = self.canvas_size.width,
            height = self.canvas_size.height,
            "canvas resized"
        );
        ViewportUpdate::Immediate
    }

    /// Scale and center a scheme of `scheme_size` so it fills the canvas.
    ///
    /// Leaves the viewport unchanged if the scheme has a zero or non-finite extent or
    /// the canvas is empty.
    pub fn fit(&mut self, scheme_size: Size) -> ViewportUpdate {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        let canvas = self.canvas_size;
        if !(usable(scheme_size.width)
            && usable(scheme_size.height)
            && usable(canvas.width)
            && usable(canvas.height))
        {
            return ViewportUpdate::Unchanged;
        }
        let scale = (canvas.width / scheme_size.width).min(canvas.height / scheme_size.height);
        if !usable(scale) {
            return ViewportUpdate::Unchanged;
        }
        let offset = Vec2::new(
            (canvas.width - scheme_size.width * scale) / 2.0,
            (canvas.height - scheme_size.height * scale) / 2.0,
        );
        self.apply(scale, offset)
    }

    /// Zoom one step around `cursor`, keeping the scene point under it fixed on screen.
    pub fn zoom_at(
        &mut self,
        cursor: Point,
        direction: ZoomDirection,
    ) -> Result<ViewportUpdate, ViewportError> {
        let anchor = self.screen_to_scene(cursor);
        let factor = match direction {
            ZoomDirection::In => 1.0 + self.config.zoom_factor,
            ZoomDirection::Out => 1.0 - self.config.zoom_factor,
        };
        let scale = self.scale * factor;
        let offset = cursor.to_vec2() - anchor.to_vec2() * scale;
        self.change_scale(scale, offset)
    }

    /// Return to the initial scale with no offset.
    pub fn reset(&mut self) -> ViewportUpdate {
        self.apply(self.config.initial_scale, Vec2::ZERO)
    }

    /// Whether a change is waiting for [`take_pending`](Self::take_pending).
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending
    }

    /// Take the batched change, if any. Called once per frame.
    pub fn take_pending(&mut self) -> Option<ViewportSnapshot> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.snapshot())
    }

    fn apply(&mut self, scale: f64, offset: Vec2) -> ViewportUpdate {
        if scale == self.scale && offset == self.offset {
            return ViewportUpdate::Unchanged;
        }
        self.scale = scale;
        self.offset = offset;
        if self.pending {
            trace!(scale, x = offset.x, y = offset.y, "viewport change coalesced");
            ViewportUpdate::Coalesced
        } else {
            self.pending = true;
            trace!(scale, x = offset.x, y = offset.y, "viewport change scheduled");
            ViewportUpdate::Scheduled
        }
    }
}
