// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Off-screen rendering of a whole scheme.

use carpinus_layout::{Affine, Rect, Size, TreeNode, Vec2};
use tracing::debug;

use crate::render::{Color, DrawingBackend, StyleTable, TreePainter};
use crate::{RenderError, Scheme};

/// How to paint a scheme onto an off-screen surface.
///
/// The surface is `(measure + padding) * scale` pixels in each direction. The tree is
/// drawn shifted by `padding` pixels and magnified by `scale`, over a solid
/// background. Encoding the surface into an image format is the host's job.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportPlan {
    /// Offset of the tree from the surface's top-left corner, in pixels.
    pub padding: f64,
    /// Magnification applied to the tree.
    pub scale: f64,
    /// Background fill.
    pub background: Color,
    /// Figure styles.
    pub styles: StyleTable,
    /// Stem for [`file_name`](Self::file_name).
    pub file_stem: String,
}

impl Default for ExportPlan {
    fn default() -> Self {
        Self {
            padding: 10.0,
            scale: 2.0,
            background: Color::WHITE,
            styles: StyleTable::default(),
            file_stem: "conway_errors_visualization".to_owned(),
        }
    }
}

impl ExportPlan {
    /// Surface size needed for a tree of `measure`.
    #[must_use]
    pub fn surface_size(&self, measure: Size) -> Size {
        Size::new(
            (measure.width + self.padding) * self.scale,
            (measure.height + self.padding) * self.scale,
        )
    }

    /// Transform from scene to surface coordinates.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(self.padding, self.padding)) * Affine::scale(self.scale)
    }

    /// Suggested PNG file name for an export taken at `unix_millis`.
    #[must_use]
    pub fn file_name(&self, unix_millis: u128) -> String {
        format!("{}_{unix_millis}.png", self.file_stem)
    }

    /// Paint `root`, laid out with bounding size `measure`, onto `backend`.
    ///
    /// Returns the surface size used. The tree is read only; hidden nodes stay hidden.
    pub fn render(
        &self,
        root: &TreeNode,
        measure: Size,
        backend: &mut impl DrawingBackend,
    ) -> Result<Size, RenderError> {
        let size = self.begin(measure, backend);
        backend.set_transform(self.transform());
        TreePainter::new(&self.styles).paint(root, backend)?;
        debug!(width = size.width, height = size.height, "exported scheme");
        Ok(size)
    }

    /// Paint the tree held by `scheme`. An empty scheme yields a bare background.
    pub fn render_scheme(
        &self,
        scheme: &Scheme,
        backend: &mut impl DrawingBackend,
    ) -> Result<Size, RenderError> {
        match scheme.root() {
            Some(root) => self.render(root, scheme.measure(), backend),
            None => Ok(self.begin(scheme.measure(), backend)),
        }
    }

    fn begin(&self, measure: Size, backend: &mut impl DrawingBackend) -> Size {
        let size = self.surface_size(measure);
        backend.clear(size);
        backend.set_transform(Affine::IDENTITY);
        backend.fill_rect(Rect::from_origin_size((0.0, 0.0), size), self.background);
        size
    }
}

#[cfg(test)]
mod tests {
    use carpinus_layout::{Category, LayoutConfig, LayoutEngine, MonospaceMeasurer, SourceNode};

    use super::*;
    use crate::render::{DrawCommand, RecordingBackend};

    #[test]
    fn surface_grows_with_padding_then_scale() {
        let plan = ExportPlan::default();
        assert_eq!(plan.surface_size(Size::new(380.0, 260.0)), Size::new(780.0, 540.0));
        assert_eq!(plan.file_name(42), "conway_errors_visualization_42.png");
    }

    #[test]
    fn render_fills_background_then_paints_tree() {
        let plan = ExportPlan::default();
        let engine =
            LayoutEngine::new(LayoutConfig::default(), MonospaceMeasurer::default()).unwrap();
        let layout = engine.create(&SourceNode::new("solo", Category::Root));
        let mut backend = RecordingBackend::new();

        let size = plan.render(&layout.root, layout.measure, &mut backend).unwrap();
        assert_eq!(size, Size::new(220.0, 120.0));
        let commands = backend.commands();
        assert_eq!(commands[0], DrawCommand::Clear(size));
        assert_eq!(
            commands[2],
            DrawCommand::FillRect {
                rect: Rect::new(0.0, 0.0, 220.0, 120.0),
                color: Color::WHITE
            }
        );
        assert_eq!(commands[3], DrawCommand::SetTransform(plan.transform()));
        assert_eq!(backend.texts().last(), Some("solo"));
    }

    #[test]
    fn empty_scheme_exports_background_only() {
        let plan = ExportPlan::default();
        let mut backend = RecordingBackend::new();
        let size = plan.render_scheme(&Scheme::new(), &mut backend).unwrap();
        assert_eq!(size, Size::new(20.0, 20.0));
        assert_eq!(backend.commands().len(), 3);
    }
}
