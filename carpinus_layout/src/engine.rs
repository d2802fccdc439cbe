// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine: measure pass, then a pre-order position pass.

use core::fmt;

use kurbo::{Point, Size};
use tracing::debug;

use crate::{LayoutConfig, LayoutError, SourceNode, TextMeasurer, TreeNode, WidthPolicy};

/// Result of a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// The positioned tree.
    pub root: TreeNode,
    /// Bounding size of every node the pass placed, measured from the scene origin.
    pub measure: Size,
}

/// Lays out trees with a fixed configuration and label measurer.
pub struct LayoutEngine<M> {
    config: LayoutConfig,
    measurer: M,
}

impl<M> fmt::Debug for LayoutEngine<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<M: TextMeasurer> LayoutEngine<M> {
    /// Create an engine after validating `config`.
    pub fn new(config: LayoutConfig, measurer: M) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config, measurer })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The engine's label measurer.
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Lay out `source` from scratch.
    ///
    /// Every node is measured, then placed in pre-order: a child's `x` starts one gap
    /// after its parent's right edge, and each node takes the next row.
    pub fn create(&self, source: &SourceNode) -> Layout {
        let mut root = self.measure_node(source);
        let mut pass = Pass::new(&self.config);
        pass.place(&mut root, 0.0);
        debug!(
            nodes = root.node_count(),
            rows = pass.row,
            width = pass.extent.width,
            height = pass.extent.height,
            "created layout"
        );
        Layout {
            root,
            measure: pass.extent,
        }
    }

    /// Re-pack rows of an existing tree after collapse flags changed.
    ///
    /// Only visible nodes are visited and only their `y` changes. Hidden subtrees keep
    /// their stale positions so they can be re-expanded later.
    pub fn rebuild(&self, mut root: TreeNode) -> Layout {
        let mut pass = Pass::new(&self.config);
        root.for_each_visible_mut(&mut |node| pass.repack(node));
        debug!(
            rows = pass.row,
            width = pass.extent.width,
            height = pass.extent.height,
            "rebuilt layout"
        );
        Layout {
            root,
            measure: pass.extent,
        }
    }

    fn label_width(&self, label: &str) -> f64 {
        let measured = self.measurer.block_width(label);
        let measured = if measured.is_finite() && measured > 0.0 {
            measured
        } else {
            0.0
        };
        measured.max(self.config.min_node_width)
    }

    fn measure_node(&self, source: &SourceNode) -> TreeNode {
        let mut children: Vec<TreeNode> = source
            .children
            .iter()
            .map(|child| self.measure_node(child))
            .collect();
        if self.config.width_policy == WidthPolicy::UniformSiblings {
            let widest = children
                .iter()
                .map(|c| c.size.width)
                .fold(0.0_f64, f64::max);
            for child in &mut children {
                child.size.width = widest;
            }
        }
        TreeNode {
            label: source.label.clone(),
            category: source.category,
            position: Point::ORIGIN,
            size: Size::new(self.label_width(&source.label), self.config.node_height),
            is_last: children.is_empty(),
            children,
            is_collapsed: false,
            is_children_collapsed: false,
        }
    }
}

/// State of a single position pass.
struct Pass<'a> {
    config: &'a LayoutConfig,
    row: usize,
    extent: Size,
}

impl<'a> Pass<'a> {
    fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            row: 0,
            extent: Size::ZERO,
        }
    }

    fn next_row_y(&mut self) -> f64 {
        let y = self.config.row_pitch() * self.row as f64;
        self.row += 1;
        y
    }

    fn include(&mut self, node: &TreeNode) {
        let r = node.bounds();
        self.extent.width = self.extent.width.max(r.x1);
        self.extent.height = self.extent.height.max(r.y1);
    }

    fn place(&mut self, node: &mut TreeNode, x: f64) {
        node.position = Point::new(x, self.next_row_y());
        self.include(node);
        let child_x = x + node.size.width + self.config.gap.x;
        for child in &mut node.children {
            self.place(child, child_x);
        }
    }

    fn repack(&mut self, node: &mut TreeNode) {
        node.position.y = self.next_row_y();
        self.include(node);
    }
}
