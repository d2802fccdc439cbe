// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout errors.

use thiserror::Error;

/// Errors raised while configuring a layout or reading its input.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// A [`LayoutConfig`](crate::LayoutConfig) field is outside its valid range.
    #[error("invalid layout config: `{field}` = {value}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A category name did not match any [`Category`](crate::Category).
    #[error("unknown node category: {0:?}")]
    UnknownCategory(String),
}
