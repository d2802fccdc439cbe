// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyline connectors between figures.

use carpinus_layout::{Point, TreeNode};
use smallvec::SmallVec;

use super::{DrawingBackend, EndMarker, Stroke};
use crate::RenderError;

/// An open polyline with an optional marker at its last point.
///
/// Tree edges have two points, so the points live inline.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    points: SmallVec<[Point; 4]>,
    stroke: Stroke,
    end: Option<EndMarker>,
}

impl Connector {
    /// Start a connector at `start` with the default stroke and no marker.
    #[must_use]
    pub fn new(start: Point) -> Self {
        let mut points = SmallVec::new();
        points.push(start);
        Self {
            points,
            stroke: Stroke::default(),
            end: None,
        }
    }

    /// Append a point.
    #[must_use]
    pub fn line_to(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    /// Set the stroke.
    #[must_use]
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Cap the last point with `marker`.
    #[must_use]
    pub fn with_end_marker(mut self, marker: EndMarker) -> Self {
        self.end = Some(marker);
        self
    }

    /// The connector's points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The last point, where the marker goes.
    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Stroke the connector.
    pub fn draw(&self, backend: &mut impl DrawingBackend) -> Result<(), RenderError> {
        if self.points.len() < 2 {
            return Err(RenderError::DegenerateConnector {
                points: self.points.len(),
            });
        }
        backend.polyline(&self.points, self.stroke, self.end);
        Ok(())
    }
}

/// Connectors from `node` to each of its children.
///
/// Each child gets a horizontal branch from its left-middle point back to the
/// parent's center line, capped with a marker. The last child also gets the trunk
/// running down from the parent's bottom edge to that branch.
pub fn edges(node: &TreeNode, stroke: Stroke, marker: EndMarker) -> Vec<Connector> {
    let bounds = node.bounds();
    let trunk_x = bounds.center().x;
    let last = node.children.len().saturating_sub(1);
    let mut connectors = Vec::with_capacity(node.children.len() + 1);
    for (index, child) in node.children.iter().enumerate() {
        let child_mid = child.bounds().center().y;
        connectors.push(
            Connector::new(Point::new(child.position.x, child_mid))
                .line_to(Point::new(trunk_x, child_mid))
                .with_stroke(stroke)
                .with_end_marker(marker),
        );
        if index == last {
            connectors.push(
                Connector::new(Point::new(trunk_x, bounds.y1))
                    .line_to(Point::new(trunk_x, child_mid))
                    .with_stroke(stroke),
            );
        }
    }
    connectors
}

#[cfg(test)]
mod tests {
    use carpinus_layout::{Category, Size};

    use super::*;
    use crate::render::{DrawCommand, RecordingBackend};

    #[test]
    fn single_point_is_degenerate() {
        let mut backend = RecordingBackend::new();
        let err = Connector::new(Point::ORIGIN).draw(&mut backend).unwrap_err();
        assert_eq!(err, RenderError::DegenerateConnector { points: 1 });
        assert!(backend.commands().is_empty());
    }

    #[test]
    fn draws_polyline_with_marker() {
        let mut backend = RecordingBackend::new();
        Connector::new(Point::ORIGIN)
            .line_to(Point::new(10.0, 0.0))
            .line_to(Point::new(10.0, 10.0))
            .with_end_marker(EndMarker::default())
            .draw(&mut backend)
            .unwrap();
        assert_eq!(
            backend.commands(),
            [DrawCommand::Polyline {
                points: vec![Point::ORIGIN, Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
                stroke: Stroke::default(),
                end: Some(EndMarker::default()),
            }]
        );
    }

    #[test]
    fn edges_branch_to_each_child_and_trunk_to_last() {
        let mut parent = TreeNode::new("p", Category::Root);
        parent.size = Size::new(100.0, 50.0);
        for (i, y) in [70.0, 140.0].into_iter().enumerate() {
            let mut child = TreeNode::new(format!("c{i}"), Category::Feature);
            child.position = Point::new(140.0, y);
            child.size = Size::new(100.0, 50.0);
            parent.children.push(child);
        }

        let edges = edges(&parent, Stroke::default(), EndMarker::default());
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].points(), [Point::new(140.0, 95.0), Point::new(50.0, 95.0)]);
        assert_eq!(edges[1].points(), [Point::new(140.0, 165.0), Point::new(50.0, 165.0)]);
        assert_eq!(edges[2].points(), [Point::new(50.0, 50.0), Point::new(50.0, 165.0)]);
        assert_eq!(edges[2].last_point(), Some(Point::new(50.0, 165.0)));
    }

    #[test]
    fn leaf_has_no_edges() {
        let leaf = TreeNode::new("leaf", Category::Feature);
        assert!(edges(&leaf, Stroke::default(), EndMarker::default()).is_empty());
    }
}
