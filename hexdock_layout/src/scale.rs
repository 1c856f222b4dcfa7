// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance-based scale falloff.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Linear falloff from full size at the viewport center to a floor at the
/// corners.
///
/// `scale = max(1 - (distance / max_distance) * falloff, min_scale)`, never
/// above `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleCurve {
    /// How much scale is lost between the center and `max_distance`.
    pub falloff: f64,
    /// Lower bound on the returned scale. Icons never disappear entirely.
    pub min_scale: f64,
}

impl Default for ScaleCurve {
    fn default() -> Self {
        Self {
            falloff: 0.7,
            min_scale: 0.3,
        }
    }
}

impl ScaleCurve {
    /// Scale for a cell `distance` pixels away from the center, where
    /// `max_distance` is the center-to-corner distance of the viewport.
    ///
    /// A zero distance always yields `1.0`. A non-positive `max_distance`
    /// puts every off-center cell at the floor.
    #[must_use]
    pub fn scale_at(&self, distance: f64, max_distance: f64) -> f64 {
        if distance <= 0.0 {
            return 1.0;
        }
        if max_distance.is_nan() || max_distance <= 0.0 {
            return self.min_scale.min(1.0);
        }
        let raw = 1.0 - (distance / max_distance) * self.falloff;
        raw.max(self.min_scale).min(1.0)
    }

    /// Scale for a signed screen offset `(dx, dy)` from the viewport center.
    #[must_use]
    pub fn scale_for_offset(&self, dx: f64, dy: f64, max_distance: f64) -> f64 {
        self.scale_at((dx * dx + dy * dy).sqrt(), max_distance)
    }
}
