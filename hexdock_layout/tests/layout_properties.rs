// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for layout computation and scale falloff.

use hexdock_layout::{LayoutSettings, ScaleCurve};
use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;

proptest! {
    #[test]
    fn layout_is_deterministic(w in 1.0f64..4_000.0, h in 1.0f64..4_000.0) {
        let settings = LayoutSettings::default();
        let a = settings.compute(Size::new(w, h));
        let b = settings.compute(Size::new(w, h));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn plane_covers_visible_region(w in -100.0f64..5_000.0, h in -100.0f64..5_000.0) {
        let layout = LayoutSettings::default().compute(Size::new(w, h));
        prop_assert!(layout.icon.size > 0.0);
        prop_assert!(layout.icon.margin >= 0.0);
        prop_assert!(layout.grid.rows >= layout.grid.visible_rows);
        prop_assert!(layout.grid.cols >= layout.grid.visible_cols);
        prop_assert!(layout.grid.rows >= 1 && layout.grid.cols >= 1);
        prop_assert_eq!(layout.grid.total_cells, layout.grid.rows * layout.grid.cols);
        prop_assert_eq!(layout.grid.cell_width, layout.icon.size + layout.icon.margin);
    }

    #[test]
    fn icon_never_below_orientation_minimum(w in 1.0f64..4_000.0, h in 1.0f64..4_000.0) {
        let settings = LayoutSettings::default();
        let layout = settings.compute(Size::new(w, h));
        let min = settings.profile(layout.orientation).min_icon_size;
        prop_assert!(layout.icon.size >= min);
    }

    #[test]
    fn scale_stays_in_bounds(dx in -10_000.0f64..10_000.0, dy in -10_000.0f64..10_000.0) {
        let curve = ScaleCurve::default();
        let s = curve.scale_for_offset(dx, dy, 721.11);
        prop_assert!((0.3..=1.0).contains(&s));
    }

    #[test]
    fn scale_is_non_increasing_in_distance(a in 0.0f64..2_000.0, b in 0.0f64..2_000.0) {
        let curve = ScaleCurve::default();
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(curve.scale_at(near, 500.0) >= curve.scale_at(far, 500.0));
    }

    #[test]
    fn cell_scale_depends_only_on_screen_position(
        ax in -2_000.0f64..2_000.0,
        ay in -2_000.0f64..2_000.0,
        px in -2_000.0f64..2_000.0,
        py in -2_000.0f64..2_000.0,
    ) {
        let layout = LayoutSettings::default().compute(Size::new(1200.0, 800.0));
        let moved = layout.cell_scale(Point::new(ax, ay), Vec2::new(px, py));
        let direct = layout.cell_scale(Point::new(ax + px, ay + py), Vec2::ZERO);
        prop_assert!((moved - direct).abs() < 1e-9);
    }
}
