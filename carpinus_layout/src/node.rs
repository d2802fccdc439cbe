// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned tree nodes and their traversals.

use std::collections::VecDeque;

use kurbo::{Point, Rect, Size};

use crate::Category;

/// How a node presents itself with respect to its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeView {
    /// Children (if any) are shown.
    Usual,
    /// The node has children and they are hidden.
    Collapsed,
}

/// A laid-out node.
///
/// Positions are in un-scaled scene coordinates. A parent owns its children, so a
/// `TreeNode` is always a strict tree with a single root.
///
/// The two collapse flags are independent:
/// - `is_children_collapsed` hides this node's descendants while the node stays visible.
/// - `is_collapsed` hides the node itself. It is set on descendants of a node whose
///   children were collapsed.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    /// Label shown in the node's body.
    pub label: String,
    /// Kind of node.
    pub category: Category,
    /// Top-left corner in scene coordinates.
    pub position: Point,
    /// Box size in scene units.
    pub size: Size,
    /// Ordered children.
    pub children: Vec<Self>,
    /// The node itself is hidden.
    pub is_collapsed: bool,
    /// The node's descendants are hidden.
    pub is_children_collapsed: bool,
    /// The node was a leaf when it was laid out.
    pub is_last: bool,
}

impl TreeNode {
    /// Create an unplaced, childless, expanded node.
    pub fn new(label: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            category,
            position: Point::ORIGIN,
            size: Size::ZERO,
            children: Vec::new(),
            is_collapsed: false,
            is_children_collapsed: false,
            is_last: true,
        }
    }

    /// The node's box in scene coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Whether `point` lies inside the node's box. Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        let r = self.bounds();
        point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
    }

    /// Whether the node has any children, hidden or not.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Toggle whether this node's descendants are hidden.
    ///
    /// Every descendant receives [`collapse`](Self::collapse) with the new flag, so
    /// expanding a node also expands any subtrees collapsed beneath it.
    pub fn collapse_children(&mut self) {
        self.is_children_collapsed = !self.is_children_collapsed;
        let flag = self.is_children_collapsed;
        for child in &mut self.children {
            child.collapse_subtree(flag);
        }
    }

    /// Set both collapse flags of this node to `flag`.
    pub fn collapse(&mut self, flag: bool) {
        self.is_collapsed = flag;
        self.is_children_collapsed = flag;
    }

    fn collapse_subtree(&mut self, flag: bool) {
        self.collapse(flag);
        for child in &mut self.children {
            child.collapse_subtree(flag);
        }
    }

    /// Presentation state for the collapse glyph.
    pub fn view(&self) -> NodeView {
        if self.is_children_collapsed && self.has_children() {
            NodeView::Collapsed
        } else {
            NodeView::Usual
        }
    }

    /// Every node of the subtree in breadth-first order, hidden nodes included.
    pub fn breadth_first(&self) -> BreadthFirst<'_> {
        BreadthFirst {
            queue: VecDeque::from([self]),
        }
    }

    /// Visible nodes in pre-order.
    ///
    /// Nodes with `is_collapsed` are skipped with their subtree. A node whose
    /// children are collapsed is yielded but its subtree is not.
    pub fn visible(&self) -> Visible<'_> {
        Visible {
            stack: if self.is_collapsed { vec![] } else { vec![self] },
        }
    }

    /// Call `f` on every visible node, in the order of [`visible`](Self::visible).
    ///
    /// Flags are read before `f` runs on a node's children, so `f` must not toggle
    /// collapse state.
    pub fn for_each_visible_mut(&mut self, f: &mut impl FnMut(&mut Self)) {
        if self.is_collapsed {
            return;
        }
        f(self);
        if self.is_children_collapsed {
            return;
        }
        for child in &mut self.children {
            child.for_each_visible_mut(f);
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

/// Breadth-first iterator returned by [`TreeNode::breadth_first`].
#[derive(Clone, Debug)]
pub struct BreadthFirst<'a> {
    queue: VecDeque<&'a TreeNode>,
}

impl<'a> Iterator for BreadthFirst<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children.iter());
        Some(node)
    }
}

/// Pre-order iterator over visible nodes returned by [`TreeNode::visible`].
#[derive(Clone, Debug)]
pub struct Visible<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Visible<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if !node.is_children_collapsed {
            self.stack
                .extend(node.children.iter().rev().filter(|c| !c.is_collapsed));
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        // root
        // ├── a
        // │   └── a1
        // └── b
        let mut a = TreeNode::new("a", Category::Context);
        a.children.push(TreeNode::new("a1", Category::Feature));
        a.is_last = false;
        let mut root = TreeNode::new("root", Category::Root);
        root.children.push(a);
        root.children.push(TreeNode::new("b", Category::Context));
        root.is_last = false;
        root
    }

    fn labels<'a>(it: impl Iterator<Item = &'a TreeNode>) -> Vec<&'a str> {
        it.map(|n| n.label.as_str()).collect()
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let mut n = TreeNode::new("n", Category::Feature);
        n.position = Point::new(10.0, 20.0);
        n.size = Size::new(100.0, 50.0);
        assert!(n.contains(Point::new(10.0, 20.0)));
        assert!(n.contains(Point::new(110.0, 70.0)));
        assert!(!n.contains(Point::new(110.1, 70.0)));
        assert!(!n.contains(Point::new(9.9, 30.0)));
    }

    #[test]
    fn traversal_orders() {
        let root = sample();
        assert_eq!(labels(root.breadth_first()), ["root", "a", "b", "a1"]);
        assert_eq!(labels(root.visible()), ["root", "a", "a1", "b"]);
        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn collapse_children_hides_descendants() {
        let mut root = sample();
        root.children[0].collapse_children();
        let a = &root.children[0];
        assert!(a.is_children_collapsed);
        assert!(!a.is_collapsed);
        assert!(a.children[0].is_collapsed);
        assert!(a.children[0].is_children_collapsed);
        assert_eq!(a.view(), NodeView::Collapsed);
        assert_eq!(labels(root.visible()), ["root", "a", "b"]);

        let mut visited = Vec::new();
        root.for_each_visible_mut(&mut |n| visited.push(n.label.clone()));
        assert_eq!(visited, ["root", "a", "b"]);
        // Hidden nodes still take part in breadth-first traversal.
        assert_eq!(root.breadth_first().count(), 4);
    }

    #[test]
    fn collapse_children_twice_restores_flags() {
        let mut root = sample();
        let before = root.clone();
        root.collapse_children();
        assert_eq!(labels(root.visible()), ["root"]);
        root.collapse_children();
        assert_eq!(root, before);
    }

    #[test]
    fn leaves_never_show_collapsed_view() {
        let mut leaf = TreeNode::new("leaf", Category::Feature);
        leaf.collapse_children();
        assert!(leaf.is_children_collapsed);
        assert_eq!(leaf.view(), NodeView::Usual);
    }
}
