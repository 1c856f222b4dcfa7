// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::dimensions::{LayoutConfig, Orientation};

/// Sizing constants that differ between portrait and landscape viewports.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationProfile {
    /// Icon diameter at the reference width, before any width scaling.
    pub base_icon_size: f64,
    /// Smallest icon diameter ever produced for this orientation.
    pub min_icon_size: f64,
    /// Extra rows/columns added to the visible count on each axis.
    pub visible_buffer: usize,
    /// Factor applied to the visible counts to size the full plane.
    pub grid_multiplier: f64,
}

impl OrientationProfile {
    /// Landscape defaults: large icons with a generous off-screen plane.
    pub const LANDSCAPE: Self = Self {
        base_icon_size: 360.0,
        min_icon_size: 180.0,
        visible_buffer: 3,
        grid_multiplier: 3.0,
    };

    /// Portrait defaults: bigger relative icons so they stay touch friendly
    /// on narrow screens, with a denser buffer.
    pub const PORTRAIT: Self = Self {
        base_icon_size: 240.0,
        min_icon_size: 200.0,
        visible_buffer: 2,
        grid_multiplier: 2.5,
    };
}

/// Tunable inputs to [`LayoutSettings::compute`].
///
/// The [`Default`] impl carries the values used by the kiosk directory:
///
/// | Setting | Default |
/// |---|---|
/// | `reference_width` | 1200 |
/// | landscape base / min icon | 360 / 180 |
/// | portrait base / min icon | 240 / 200 |
/// | `portrait_width_reference` | 400 |
/// | `portrait_max_width_scale` | 1.5 |
/// | `margin_ratio` | 0.08 |
/// | landscape / portrait buffer | 3 / 2 |
/// | landscape / portrait multiplier | 3.0 / 2.5 |
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSettings {
    /// Viewport width at which an icon is drawn at its base size.
    pub reference_width: f64,
    /// Width that maps to a portrait width scale of `1.0`.
    pub portrait_width_reference: f64,
    /// Ceiling on the portrait width scale.
    pub portrait_max_width_scale: f64,
    /// Spacing between icons as a fraction of the icon diameter.
    pub margin_ratio: f64,
    /// Constants used when the viewport is wider than (or as wide as) it is tall.
    pub landscape: OrientationProfile,
    /// Constants used when the viewport is taller than it is wide.
    pub portrait: OrientationProfile,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            reference_width: 1200.0,
            portrait_width_reference: 400.0,
            portrait_max_width_scale: 1.5,
            margin_ratio: 0.08,
            landscape: OrientationProfile::LANDSCAPE,
            portrait: OrientationProfile::PORTRAIT,
        }
    }
}

impl LayoutSettings {
    /// Returns the profile for the given orientation.
    #[must_use]
    pub fn profile(&self, orientation: Orientation) -> &OrientationProfile {
        match orientation {
            Orientation::Landscape => &self.landscape,
            Orientation::Portrait => &self.portrait,
        }
    }

    /// Computes the layout for a viewport of the given size.
    ///
    /// This is a pure function of `self` and `viewport`. See
    /// [`LayoutConfig::compute`] for details.
    #[must_use]
    pub fn compute(&self, viewport: Size) -> LayoutConfig {
        LayoutConfig::compute(viewport, self)
    }
}
