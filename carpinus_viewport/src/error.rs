// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport errors.

use thiserror::Error;

/// Errors raised by [`Viewport`](crate::Viewport) mutators and configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ViewportError {
    /// The requested scale is zero, negative, or not finite.
    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f64),
    /// A [`ViewportConfig`](crate::ViewportConfig) field is outside its valid range.
    #[error("invalid viewport config: `{field}` = {value}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
