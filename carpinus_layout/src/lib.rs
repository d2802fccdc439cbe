// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carpinus Layout: turns a labelled source tree into positioned, sized boxes.
//!
//! The layout is deliberately simple and fast. It is meant for hierarchies such as
//! error-context trees, feature maps, or module outlines, where every node is a
//! fixed-height box holding a single label.
//!
//! - Horizontally, a child sits one gap to the right of its parent's box.
//! - Vertically, every visited node takes the next row of a single counter that runs
//!   across the whole tree in pre-order. Rows are therefore shared by nothing: siblings
//!   of differing depth interleave, which packs the diagram densely instead of aligning
//!   nodes on a level grid.
//!
//! ## API overview
//!
//! - [`SourceNode`]: the raw input hierarchy (label, [`Category`], children).
//! - [`TextMeasurer`]: reports how wide a label's box has to be.
//!   [`MonospaceMeasurer`] is a ready-made implementation.
//! - [`LayoutConfig`]: gaps, minimum width, fixed node height, and [`WidthPolicy`].
//! - [`LayoutEngine`]: [`LayoutEngine::create`] runs a full layout and
//!   [`LayoutEngine::rebuild`] re-packs rows after collapse flags change.
//! - [`TreeNode`]: the positioned node, owning its children, with the two independent
//!   collapse flags used for hiding subtrees.
//!
//! ## Example
//!
//! ```rust
//! use carpinus_layout::{Category, LayoutConfig, LayoutEngine, MonospaceMeasurer, SourceNode};
//!
//! let source = SourceNode::new("Conway", Category::Root)
//!     .with_child(
//!         SourceNode::new("Acquisition", Category::Context)
//!             .with_child(SourceNode::new("CaptchaError", Category::Feature)),
//!     )
//!     .with_child(SourceNode::new("General", Category::Context));
//!
//! let engine = LayoutEngine::new(LayoutConfig::default(), MonospaceMeasurer::default()).unwrap();
//! let layout = engine.create(&source);
//!
//! assert_eq!(layout.root.position.x, 0.0);
//! assert_eq!(layout.root.node_count(), 4);
//! assert!(layout.measure.width > 0.0 && layout.measure.height > 0.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: deserialize [`SourceNode`] and [`Category`] from the
//!   `{ "name": ..., "type": ..., "children": [...] }` JSON shape.

mod config;
mod engine;
mod error;
mod measure;
mod node;
mod types;

pub use config::{LayoutConfig, WidthPolicy};
pub use engine::{Layout, LayoutEngine};
pub use error::LayoutError;
pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use node::{BreadthFirst, NodeView, TreeNode, Visible};
pub use types::{Category, SourceNode};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};
