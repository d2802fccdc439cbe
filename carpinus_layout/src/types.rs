// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input types: node categories and the raw source hierarchy.

use core::fmt;
use core::str::FromStr;

use crate::LayoutError;

/// The closed set of node kinds a diagram can contain.
///
/// Styling and painting dispatch on this value; there is no open registry of kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// The single top-level node.
    Root,
    /// A top-level grouping below the root.
    Context,
    /// A nested grouping inside a context.
    Subcontext,
    /// A leaf-level feature.
    Feature,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 4] = [Self::Root, Self::Context, Self::Subcontext, Self::Feature];

    /// Lowercase name, as used in source data.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Context => "context",
            Self::Subcontext => "subcontext",
            Self::Feature => "feature",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LayoutError::UnknownCategory(s.to_owned()))
    }
}

/// One node of the raw input hierarchy.
///
/// Children are owned, so a `SourceNode` value is always a strict tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct SourceNode {
    /// Label shown in the node's body.
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    pub label: String,
    /// Kind of node.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub category: Category,
    /// Ordered children.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Self>,
}

impl SourceNode {
    /// Create a childless node.
    pub fn new(label: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            category,
            children: Vec::new(),
        }
    }

    /// Append a child and return `self`.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children and return `self`.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Context".parse::<Category>(), Ok(Category::Context));
        assert_eq!("SUBCONTEXT".parse::<Category>(), Ok(Category::Subcontext));
        assert_eq!(
            "widget".parse::<Category>(),
            Err(LayoutError::UnknownCategory("widget".into()))
        );
    }

    #[test]
    fn builder_counts_nodes() {
        let tree = SourceNode::new("root", Category::Root)
            .with_child(
                SourceNode::new("a", Category::Context)
                    .with_child(SourceNode::new("a1", Category::Feature)),
            )
            .with_children([SourceNode::new("b", Category::Context)]);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.children[0].children[0].label, "a1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_name_and_type_keys() {
        let json = r#"{
            "name": "Conway",
            "type": "root",
            "children": [
                { "name": "General", "type": "context", "children": [] },
                { "name": "Captcha", "type": "feature" }
            ]
        }"#;
        let tree: SourceNode = serde_json::from_str(json).unwrap();
        assert_eq!(tree.category, Category::Root);
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[1].category, Category::Feature);
        assert!(tree.children[1].children.is_empty());
    }
}
