// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface abstraction and its value types.

use carpinus_layout::{Affine, Point, Rect, Size};

/// An 8-bit-per-channel sRGB color with alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb8(0xff, 0xff, 0xff);

    /// A color from channels.
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color from channels.
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 0xff)
    }

    /// An opaque color from a `0xRRGGBB` value.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "each channel is truncated to its low eight bits"
    )]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

/// Line style for connectors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width in scene units.
    pub width: f64,
    /// Line color.
    pub color: Color,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::BLACK,
        }
    }
}

/// A filled disc drawn at a connector's last point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EndMarker {
    /// Disc radius in scene units.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
}

impl Default for EndMarker {
    fn default() -> Self {
        Self {
            radius: 4.0,
            color: Color::BLACK,
        }
    }
}

/// Horizontal anchoring of text relative to its origin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Text starts at the origin.
    #[default]
    Left,
    /// Text is centered on the origin.
    Center,
    /// Text ends at the origin.
    Right,
}

/// Text appearance.
///
/// Text is always vertically centered on its origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in scene units.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Horizontal anchoring.
    pub align: TextAlign,
}

/// A 2D immediate-mode drawing target.
///
/// Coordinates passed to the drawing calls are transformed by the last
/// [`set_transform`](Self::set_transform) value.
pub trait DrawingBackend {
    /// Reset the transform and clear a `size` area in device pixels.
    fn clear(&mut self, size: Size);
    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Stroke an open polyline through `points`, optionally capped with a marker at the
    /// last point. `points` always has at least two entries.
    fn polyline(&mut self, points: &[Point], stroke: Stroke, end: Option<EndMarker>);
    /// Fill a single line of text anchored at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}

impl<B: DrawingBackend + ?Sized> DrawingBackend for &mut B {
    fn clear(&mut self, size: Size) {
        (**self).clear(size);
    }

    fn set_transform(&mut self, transform: Affine) {
        (**self).set_transform(transform);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color);
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke, end: Option<EndMarker>) {
        (**self).polyline(points, stroke, end);
    }

    fn fill_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        (**self).fill_text(text, origin, style);
    }
}
