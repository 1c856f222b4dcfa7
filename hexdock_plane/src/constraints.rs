// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

use crate::modes::BorderMode;

/// Bounding box for the plane offset.
///
/// `left <= x <= right` and `top <= y <= bottom` always hold for the offset
/// produced by [`DragConstraints::clamp`]. Bounds are normalized on
/// construction so that `left <= right` and `top <= bottom` even when the
/// plane is smaller than the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragConstraints {
    /// Smallest allowed horizontal offset.
    pub left: f64,
    /// Largest allowed horizontal offset.
    pub right: f64,
    /// Smallest allowed vertical offset.
    pub top: f64,
    /// Largest allowed vertical offset.
    pub bottom: f64,
}

impl DragConstraints {
    /// Constraints that pin the offset to the origin.
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    /// Creates constraints from raw bounds, swapping any inverted pair.
    #[must_use]
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        let (left, right) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        let (top, bottom) = if top <= bottom {
            (top, bottom)
        } else {
            (bottom, top)
        };
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Constraints for a plane of `plane` pixels over a `device` viewport.
    ///
    /// - [`BorderMode::Flush`]: `left = -(plane.w - device.w)`, `right = 0`,
    ///   and likewise vertically.
    /// - [`BorderMode::MinimizeBorder`]: one extra `cell` of travel on every
    ///   side.
    #[must_use]
    pub fn for_plane(plane: Size, device: Size, cell: Size, mode: BorderMode) -> Self {
        let slack = match mode {
            BorderMode::Flush => Size::ZERO,
            BorderMode::MinimizeBorder => cell,
        };
        Self::new(
            -(plane.width - device.width + slack.width),
            slack.width,
            -(plane.height - device.height + slack.height),
            slack.height,
        )
    }

    /// Clamps `offset` into the box.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(offset.x, self.left, self.right),
            clamp_axis(offset.y, self.top, self.bottom),
        )
    }

    /// Returns `true` if `offset` lies inside the box (edges included).
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        (self.left..=self.right).contains(&offset.x) && (self.top..=self.bottom).contains(&offset.y)
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::DragConstraints;
    use crate::BorderMode;

    #[test]
    fn flush_stops_at_plane_edges() {
        let c = DragConstraints::for_plane(
            Size::new(1000.0, 800.0),
            Size::new(400.0, 300.0),
            Size::new(50.0, 50.0),
            BorderMode::Flush,
        );
        assert_eq!(c, DragConstraints::new(-600.0, 0.0, -500.0, 0.0));
    }

    #[test]
    fn minimize_border_adds_a_cell_each_side() {
        let c = DragConstraints::for_plane(
            Size::new(1000.0, 800.0),
            Size::new(400.0, 300.0),
            Size::new(50.0, 40.0),
            BorderMode::MinimizeBorder,
        );
        assert_eq!(c.left, -650.0);
        assert_eq!(c.right, 50.0);
        assert_eq!(c.top, -540.0);
        assert_eq!(c.bottom, 40.0);
    }

    #[test]
    fn small_plane_normalizes_bounds() {
        let c = DragConstraints::for_plane(
            Size::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Size::new(10.0, 10.0),
            BorderMode::Flush,
        );
        assert!(c.left <= c.right);
        assert!(c.top <= c.bottom);
        assert_eq!((c.left, c.right), (0.0, 300.0));
    }

    #[test]
    fn clamp_pulls_offset_inside() {
        let c = DragConstraints::new(-100.0, 0.0, -50.0, 0.0);
        assert_eq!(c.clamp(Vec2::new(20.0, -80.0)), Vec2::new(0.0, -50.0));
        assert_eq!(c.clamp(Vec2::new(-30.0, -10.0)), Vec2::new(-30.0, -10.0));
        assert!(c.contains(c.clamp(Vec2::new(f64::NAN, 1e9))));
    }
}
