// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label measurement.

use unicode_width::UnicodeWidthStr;

/// Reports how wide a node's box must be to hold a label.
///
/// The returned width includes any horizontal padding the painter adds around the text.
/// Layout clamps it to [`LayoutConfig::min_node_width`](crate::LayoutConfig::min_node_width),
/// so implementations may return `0.0` for empty labels.
pub trait TextMeasurer {
    /// Width in scene units needed to display `text`.
    fn block_width(&self, text: &str) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> f64,
{
    fn block_width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// A measurer assuming a fixed advance per display column.
///
/// Column counts come from `unicode-width`, so wide CJK glyphs count twice and
/// zero-width marks count zero. Results are rounded to whole units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance of one display column.
    pub advance: f64,
    /// Padding added on each side of the text.
    pub padding: f64,
}

impl MonospaceMeasurer {
    /// Create a measurer with the given column advance and per-side padding.
    pub const fn new(advance: f64, padding: f64) -> Self {
        Self { advance, padding }
    }
}

impl Default for MonospaceMeasurer {
    /// 8 units per column with 10 units of padding on each side.
    fn default() -> Self {
        Self::new(8.0, 10.0)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn block_width(&self, text: &str) -> f64 {
        let columns = text.width() as f64;
        (columns * self.advance + self.padding * 2.0).round()
    }
}
