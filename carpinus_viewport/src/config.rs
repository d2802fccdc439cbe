// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport tunables.

use crate::ViewportError;

/// Tunables for a [`Viewport`](crate::Viewport).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Relative scale change per zoom step; `0.05` means 5% per wheel notch.
    pub zoom_factor: f64,
    /// Scale the viewport starts at and returns to on reset.
    pub initial_scale: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_factor: 0.05,
            initial_scale: 1.0,
        }
    }
}

impl ViewportConfig {
    /// Check that `zoom_factor` lies in `(0, 1)` and `initial_scale` is finite and positive.
    pub fn validate(&self) -> Result<(), ViewportError> {
        let z = self.zoom_factor;
        if !(z > 0.0 && z < 1.0) {
            return Err(ViewportError::InvalidConfig {
                field: "zoom_factor",
                value: z,
            });
        }
        let s = self.initial_scale;
        if !s.is_finite() || s <= 0.0 {
            return Err(ViewportError::InvalidConfig {
                field: "initial_scale",
                value: s,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_ranges() {
        assert!(ViewportConfig::default().validate().is_ok());
        for zoom_factor in [0.0, 1.0, -0.1, f64::NAN] {
            let config = ViewportConfig {
                zoom_factor,
                ..ViewportConfig::default()
            };
            assert!(config.validate().is_err(), "zoom_factor {zoom_factor}");
        }
        let config = ViewportConfig {
            initial_scale: f64::INFINITY,
            ..ViewportConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ViewportError::InvalidConfig {
                field: "initial_scale",
                value: f64::INFINITY
            })
        );
    }
}
