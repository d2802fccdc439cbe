// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout spacing and sizing.

use kurbo::Vec2;

use crate::LayoutError;

/// How node widths relate between siblings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Every node is exactly as wide as its own label needs.
    #[default]
    PerNode,
    /// Siblings share the width of the widest sibling, giving ragged trees a
    /// column-aligned right edge per parent.
    UniformSiblings,
}

/// Geometry parameters for [`LayoutEngine`](crate::LayoutEngine).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal gap between a parent and its children (`x`) and vertical gap
    /// between consecutive rows (`y`).
    pub gap: Vec2,
    /// Lower bound for every node's width.
    pub min_node_width: f64,
    /// Height shared by all nodes.
    pub node_height: f64,
    /// Sibling width policy.
    pub width_policy: WidthPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: Vec2::new(40.0, 20.0),
            min_node_width: 100.0,
            node_height: 50.0,
            width_policy: WidthPolicy::PerNode,
        }
    }
}

impl LayoutConfig {
    /// Check that every field is in range.
    ///
    /// Gaps and the minimum width must be finite and non-negative; the node height
    /// must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let non_negative = [
            ("gap.x", self.gap.x),
            ("gap.y", self.gap.y),
            ("min_node_width", self.min_node_width),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig { field, value });
            }
        }
        if !self.node_height.is_finite() || self.node_height <= 0.0 {
            return Err(LayoutError::InvalidConfig {
                field: "node_height",
                value: self.node_height,
            });
        }
        Ok(())
    }

    /// Vertical distance between the tops of consecutive rows.
    pub fn row_pitch(&self) -> f64 {
        self.node_height + self.gap.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.row_pitch(), 70.0);
    }

    #[test]
    fn rejects_out_of_range_fields() {
        let config = LayoutConfig {
            gap: Vec2::new(-1.0, 20.0),
            ..LayoutConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(LayoutError::InvalidConfig {
                field: "gap.x",
                value: -1.0
            })
        );

        let config = LayoutConfig {
            node_height: 0.0,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfig {
                field: "node_height",
                ..
            })
        ));

        let config = LayoutConfig {
            min_node_width: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
