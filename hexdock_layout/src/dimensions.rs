// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size, Vec2};

use crate::scale::ScaleCurve;
use crate::settings::LayoutSettings;

/// Viewport orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Width is at least the height.
    #[default]
    Landscape,
    /// Height is strictly greater than width.
    Portrait,
}

impl Orientation {
    /// Classifies a viewport: portrait iff `height > width`.
    #[must_use]
    pub fn of(size: Size) -> Self {
        if size.height > size.width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// Diameter and spacing of one icon.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IconMetrics {
    /// Icon diameter in pixels, always positive.
    pub size: f64,
    /// Gap added to the diameter to form the cell pitch.
    pub margin: f64,
}

/// Row/column counts and cell pitch of the full draggable plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMetrics {
    /// Total rows in the plane.
    pub rows: usize,
    /// Total columns in the plane.
    pub cols: usize,
    /// Rows needed to cover the viewport, including the buffer.
    pub visible_rows: usize,
    /// Columns needed to cover the viewport, including the buffer.
    pub visible_cols: usize,
    /// Horizontal cell pitch (`icon.size + icon.margin`).
    pub cell_width: f64,
    /// Vertical cell pitch (`icon.size + icon.margin`).
    pub cell_height: f64,
    /// `rows * cols`.
    pub total_cells: usize,
}

impl GridMetrics {
    /// Pixel size of the full plane (`cols * cell_width` by `rows * cell_height`).
    #[must_use]
    pub fn plane_size(&self) -> Size {
        Size::new(
            self.cols as f64 * self.cell_width,
            self.rows as f64 * self.cell_height,
        )
    }

    /// Cell pitch as a size.
    #[must_use]
    pub fn cell_size(&self) -> Size {
        Size::new(self.cell_width, self.cell_height)
    }
}

/// A responsive layout derived from one viewport size.
///
/// Recompute it with [`LayoutConfig::compute`] (or [`LayoutSettings::compute`])
/// whenever the viewport changes; it is never patched in place.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Viewport size the layout was computed for.
    pub device: Size,
    /// Orientation of `device`.
    pub orientation: Orientation,
    /// Icon diameter and spacing.
    pub icon: IconMetrics,
    /// Plane dimensions.
    pub grid: GridMetrics,
    /// Scale falloff used by [`LayoutConfig::cell_scale`].
    pub scale_curve: ScaleCurve,
}

impl LayoutConfig {
    /// Computes a layout for `viewport`.
    ///
    /// - Orientation is portrait iff `height > width`.
    /// - Portrait base sizes grow with width, capped by
    ///   [`LayoutSettings::portrait_max_width_scale`].
    /// - `icon.size = max(base * width / reference_width, min)`.
    /// - Visible counts are `ceil(extent / pitch) + buffer`; the plane is the
    ///   visible count times the multiplier, rounded up and never smaller than
    ///   the visible count.
    ///
    /// Non-positive or non-finite viewport extents are treated as one pixel so
    /// the result always has a positive icon size and a non-empty grid.
    #[must_use]
    pub fn compute(viewport: Size, settings: &LayoutSettings) -> Self {
        let device = Size::new(sanitize_extent(viewport.width), sanitize_extent(viewport.height));
        let orientation = Orientation::of(device);
        let profile = settings.profile(orientation);

        let mut base_icon_size = profile.base_icon_size;
        if orientation == Orientation::Portrait {
            let width_scale = (device.width / settings.portrait_width_reference)
                .min(settings.portrait_max_width_scale);
            base_icon_size *= width_scale;
        }

        let scaled = base_icon_size * (device.width / settings.reference_width);
        let mut size = scaled.max(profile.min_icon_size);
        if !(size.is_finite() && size > 0.0) {
            size = 1.0;
        }
        let margin = (size * settings.margin_ratio).max(0.0);
        let cell = size + margin;

        let visible_cols = ceil_count(device.width / cell) + profile.visible_buffer;
        let visible_rows = ceil_count(device.height / cell) + profile.visible_buffer;
        let multiplier = profile.grid_multiplier.max(1.0);
        let cols = ceil_count(visible_cols as f64 * multiplier)
            .max(visible_cols)
            .max(1);
        let rows = ceil_count(visible_rows as f64 * multiplier)
            .max(visible_rows)
            .max(1);

        Self {
            device,
            orientation,
            icon: IconMetrics { size, margin },
            grid: GridMetrics {
                rows,
                cols,
                visible_rows,
                visible_cols,
                cell_width: cell,
                cell_height: cell,
                total_cells: rows * cols,
            },
            scale_curve: ScaleCurve::default(),
        }
    }

    /// Returns this layout with a different scale falloff.
    #[must_use]
    pub fn with_scale_curve(mut self, curve: ScaleCurve) -> Self {
        self.scale_curve = curve;
        self
    }

    /// Center of the viewport in device coordinates.
    #[must_use]
    pub fn device_center(&self) -> Point {
        Point::new(self.device.width / 2.0, self.device.height / 2.0)
    }

    /// Distance from the viewport center to one of its corners.
    #[must_use]
    pub fn max_distance(&self) -> f64 {
        let half = self.device_center();
        (half.x * half.x + half.y * half.y).sqrt()
    }

    /// Display scale of a cell anchored at `anchor` (plane coordinates) when
    /// the plane is translated by `plane_offset`.
    ///
    /// The cell's screen position is `anchor + plane_offset`; its scale falls
    /// off linearly with the distance from the viewport center, relative to
    /// [`LayoutConfig::max_distance`], and is floored by the curve's minimum.
    #[must_use]
    pub fn cell_scale(&self, anchor: Point, plane_offset: Vec2) -> f64 {
        let center = self.device_center();
        let dx = anchor.x + plane_offset.x - center.x;
        let dy = anchor.y + plane_offset.y - center.y;
        self.scale_curve
            .scale_at((dx * dx + dy * dy).sqrt(), self.max_distance())
    }
}

fn sanitize_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent >= 1.0 {
        extent
    } else {
        1.0
    }
}

fn ceil_count(value: f64) -> usize {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Counts are small positive integers after `ceil`"
    )]
    {
        value.ceil() as usize
    }
}
