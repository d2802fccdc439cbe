// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node figures and the tree walk that paints them.

use carpinus_layout::{NodeView, Point, Rect, TreeNode};

use super::{
    DrawingBackend, EndMarker, FigureStyle, Stroke, StyleTable, TextAlign, TextStyle, edges,
};
use crate::RenderError;

/// Height of the header band.
pub const HEADER_HEIGHT: f64 = 20.0;
/// Font size of the header title.
pub const TITLE_FONT_SIZE: f64 = 8.0;
/// Left inset of the header title.
pub const TITLE_INSET: f64 = 4.0;
/// Font size of the body label.
pub const LABEL_FONT_SIZE: f64 = 14.0;

/// Collapsed nodes show this at the right end of their header.
const COLLAPSED_GLYPH: &str = "+";

/// A node's box: body, header band, title, label.
#[derive(Clone, Copy, Debug)]
pub struct Figure<'a> {
    node: &'a TreeNode,
    style: &'a FigureStyle,
}

impl<'a> Figure<'a> {
    /// Look up the style for `node`.
    pub fn new(node: &'a TreeNode, styles: &'a StyleTable) -> Result<Self, RenderError> {
        Ok(Self {
            node,
            style: styles.get(node.category)?,
        })
    }

    /// The header band in scene coordinates.
    #[must_use]
    pub fn header(&self) -> Rect {
        let body = self.node.bounds();
        Rect::new(body.x0, body.y0, body.x1, body.y0 + HEADER_HEIGHT)
    }

    /// Paint the figure.
    pub fn draw(&self, backend: &mut impl DrawingBackend) {
        let body = self.node.bounds();
        let header = self.header();
        backend.fill_rect(body, self.style.primary);
        backend.fill_rect(header, self.style.secondary);

        let title_y = header.center().y;
        backend.fill_text(
            &self.style.title,
            Point::new(header.x0 + TITLE_INSET, title_y),
            &TextStyle {
                size: TITLE_FONT_SIZE,
                color: self.style.text,
                align: TextAlign::Left,
            },
        );
        if self.node.view() == NodeView::Collapsed {
            backend.fill_text(
                COLLAPSED_GLYPH,
                Point::new(header.x1 - TITLE_INSET, title_y),
                &TextStyle {
                    size: TITLE_FONT_SIZE,
                    color: self.style.text,
                    align: TextAlign::Right,
                },
            );
        }

        let label_center = Point::new(body.center().x, body.center().y + HEADER_HEIGHT / 2.0);
        backend.fill_text(
            &self.node.label,
            label_center,
            &TextStyle {
                size: LABEL_FONT_SIZE,
                color: self.style.text,
                align: TextAlign::Center,
            },
        );
    }
}

/// Paints trees figure by figure.
#[derive(Clone, Debug)]
pub struct TreePainter<'a> {
    styles: &'a StyleTable,
    stroke: Stroke,
    marker: EndMarker,
}

impl<'a> TreePainter<'a> {
    /// A painter with the default edge stroke and marker.
    #[must_use]
    pub fn new(styles: &'a StyleTable) -> Self {
        Self {
            styles,
            stroke: Stroke::default(),
            marker: EndMarker::default(),
        }
    }

    /// Paint `node` and its visible descendants.
    ///
    /// Hidden nodes are skipped with their subtree. Children are painted before their
    /// parent's figure, and a parent's edges are painted last unless its children are
    /// collapsed. Stops at the first error.
    pub fn paint(
        &self,
        node: &TreeNode,
        backend: &mut impl DrawingBackend,
    ) -> Result<(), RenderError> {
        if node.is_collapsed {
            return Ok(());
        }
        for child in &node.children {
            self.paint(child, backend)?;
        }
        Figure::new(node, self.styles)?.draw(backend);
        if !node.is_children_collapsed {
            for connector in edges(node, self.stroke, self.marker) {
                connector.draw(backend)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use carpinus_layout::{Category, Size};

    use super::*;
    use crate::render::{Color, DrawCommand, FigureStyle, RecordingBackend};

    fn node(label: &str, category: Category, x: f64, y: f64) -> TreeNode {
        let mut n = TreeNode::new(label, category);
        n.position = Point::new(x, y);
        n.size = Size::new(100.0, 50.0);
        n
    }

    fn tree() -> TreeNode {
        let mut root = node("root", Category::Root, 0.0, 0.0);
        root.children.push(node("a", Category::Context, 140.0, 70.0));
        root.children.push(node("b", Category::Feature, 140.0, 140.0));
        root.is_last = false;
        root
    }

    #[test]
    fn figure_layers_header_over_body() {
        let styles = StyleTable::default();
        let n = node("Label", Category::Context, 10.0, 20.0);
        let mut backend = RecordingBackend::new();
        Figure::new(&n, &styles).unwrap().draw(&mut backend);

        let style = styles.get(Category::Context).unwrap();
        let commands = backend.commands();
        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                rect: Rect::new(10.0, 20.0, 110.0, 70.0),
                color: style.primary
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::FillRect {
                rect: Rect::new(10.0, 20.0, 110.0, 40.0),
                color: style.secondary
            }
        );
        assert!(matches!(
            &commands[2],
            DrawCommand::FillText { origin, style, .. }
                if *origin == Point::new(14.0, 30.0) && style.size == TITLE_FONT_SIZE
        ));
        assert!(matches!(
            &commands[3],
            DrawCommand::FillText { text, origin, style }
                if text == "Label"
                    && *origin == Point::new(60.0, 55.0)
                    && style.align == TextAlign::Center
        ));
        assert_eq!(commands.len(), 4);
    }

    #[test]
    fn children_paint_before_parent() {
        let styles = StyleTable::default();
        let mut backend = RecordingBackend::new();
        TreePainter::new(&styles).paint(&tree(), &mut backend).unwrap();
        let labels: Vec<_> = backend
            .texts()
            .filter(|t| !t.contains(' '))
            .collect();
        assert_eq!(labels, ["a", "b", "root"]);
        let polylines = backend
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polyline { .. }))
            .count();
        assert_eq!(polylines, 3);
    }

    #[test]
    fn collapsed_children_are_skipped_with_their_edges() {
        let styles = StyleTable::default();
        let mut root = tree();
        root.collapse_children();
        let mut backend = RecordingBackend::new();
        TreePainter::new(&styles).paint(&root, &mut backend).unwrap();
        let texts: Vec<_> = backend.texts().collect();
        assert_eq!(texts, ["R O O T", COLLAPSED_GLYPH, "root"]);
        assert!(
            !backend
                .commands()
                .iter()
                .any(|c| matches!(c, DrawCommand::Polyline { .. }))
        );
    }

    #[test]
    fn missing_style_stops_painting() {
        let mut styles = StyleTable::empty();
        styles.register(Category::Root, FigureStyle::new("R", Color::BLACK, Color::WHITE));
        let mut backend = RecordingBackend::new();
        let err = TreePainter::new(&styles).paint(&tree(), &mut backend).unwrap_err();
        assert_eq!(err, RenderError::UnregisteredCategory(Category::Context));
    }
}
