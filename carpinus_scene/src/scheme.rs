// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The laid-out tree currently on display.

use std::collections::VecDeque;

use carpinus_layout::{Layout, Point, Size, TreeNode};
use tracing::debug;

/// Holds the current tree, its measure, and a revision counter.
///
/// `Scheme` never notifies anyone itself; [`State`](crate::State) publishes its
/// changes.
#[derive(Clone, Debug, Default)]
pub struct Scheme {
    root: Option<TreeNode>,
    measure: Size,
    revision: u64,
}

impl Scheme {
    /// An empty scheme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tree and its measure. Returns the new revision.
    pub fn set_state(&mut self, root: TreeNode, measure: Size) -> u64 {
        self.root = Some(root);
        self.measure = measure;
        self.revision += 1;
        debug!(
            revision = self.revision,
            width = measure.width,
            height = measure.height,
            "scheme replaced"
        );
        self.revision
    }

    /// Replace the tree and measure from a [`Layout`]. Returns the new revision.
    pub fn set_layout(&mut self, layout: Layout) -> u64 {
        self.set_state(layout.root, layout.measure)
    }

    /// Drop the tree and reset the measure. Returns the new revision.
    pub fn clear(&mut self) -> u64 {
        self.root = None;
        self.measure = Size::ZERO;
        self.revision += 1;
        self.revision
    }

    /// Move the tree out, leaving the scheme empty until the next
    /// [`set_state`](Self::set_state).
    pub fn take_root(&mut self) -> Option<TreeNode> {
        self.root.take()
    }

    /// The current tree, if any.
    #[must_use]
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_ref()
    }

    /// Bounding size of the laid-out tree.
    #[must_use]
    pub const fn measure(&self) -> Size {
        self.measure
    }

    /// Counter bumped on every replacement.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// The first visible node, in breadth-first order, whose box contains `point`.
    ///
    /// `point` is in scene coordinates. Children never overlap their parent, so the
    /// first match is the only match among visible nodes. Hidden nodes keep the boxes
    /// they had before their ancestor collapsed, and a rebuild can move a visible node
    /// onto one of them; hidden nodes are skipped so the visible one is found.
    #[must_use]
    pub fn node_at(&self, point: Point) -> Option<&TreeNode> {
        self.root
            .as_ref()?
            .breadth_first()
            .find(|node| !node.is_collapsed && node.contains(point))
    }

    fn node_at_mut(&mut self, point: Point) -> Option<&mut TreeNode> {
        let mut queue = VecDeque::from([self.root.as_mut()?]);
        while let Some(node) = queue.pop_front() {
            if !node.is_collapsed && node.contains(point) {
                return Some(node);
            }
            queue.extend(node.children.iter_mut());
        }
        None
    }

    /// Toggle the children of the visible node under `point`.
    ///
    /// Returns `true` if a node was toggled, in which case the tree needs a rebuild.
    /// Positions are left untouched.
    pub fn find_node_by_mouse_coordinates(&mut self, point: Point) -> bool {
        let Some(node) = self.node_at_mut(point) else {
            return false;
        };
        node.collapse_children();
        debug!(
            label = node.label.as_str(),
            collapsed = node.is_children_collapsed,
            "toggled children"
        );
        true
    }
}
