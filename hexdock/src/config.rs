// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hexdock_grid::GridPacking;
use hexdock_layout::{LayoutSettings, ScaleCurve};
use hexdock_plane::{BorderMode, GestureSettings};

/// Everything a [`Dock`](crate::Dock) needs besides the viewport and items.
///
/// The defaults describe the company browser: packed rows, a flush plane
/// edge, a 10 px drag threshold with a 100 ms release debounce.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DockConfig {
    /// Icon sizing and grid extents.
    pub layout: LayoutSettings,
    /// Fisheye falloff.
    pub scale_curve: ScaleCurve,
    /// Row spacing of the honeycomb.
    pub packing: GridPacking,
    /// Plane edge handling.
    pub border_mode: BorderMode,
    /// Drag/tap classification.
    pub gesture: GestureSettings,
}

impl DockConfig {
    /// Contentless background variant: plain row pitch, plane shifted by one
    /// cell.
    #[must_use]
    pub fn decorative() -> Self {
        Self {
            packing: GridPacking::Plain,
            border_mode: BorderMode::MinimizeBorder,
            ..Self::default()
        }
    }
}
