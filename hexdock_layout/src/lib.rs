// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexdock Layout: responsive sizing and distance-based scaling for a draggable
//! honeycomb of icons.
//!
//! This crate is the pure-math half of a "watch face" style browser: a large
//! plane of round icons that the user drags around, with icons shrinking as
//! they move away from the middle of the screen. It provides:
//! - [`LayoutSettings`]: the tunable constants (icon sizes per orientation,
//!   spacing, off-screen buffers) with defaults suited to kiosk displays.
//! - [`LayoutConfig`]: the layout computed from a viewport size, covering the
//!   icon diameter, the cell pitch and how many rows and columns to generate.
//! - [`ScaleCurve`]: the falloff that maps an icon's on-screen distance from
//!   the viewport center to a display scale.
//!
//! It does **not** own any cells, input handling or rendering. Callers are
//! expected to:
//! - Recompute a [`LayoutConfig`] whenever the host viewport is resized.
//! - Expand the grid counts into cells (see `hexdock_grid`).
//! - Feed the live pan offset into [`LayoutConfig::cell_scale`] on every frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use hexdock_layout::LayoutSettings;
//!
//! let settings = LayoutSettings::default();
//! let layout = settings.compute(Size::new(1200.0, 800.0));
//!
//! assert_eq!(layout.icon.size, 360.0);
//! assert_eq!(layout.grid.cols, 21);
//! assert_eq!(layout.grid.rows, 18);
//!
//! // An icon anchored so that it lands on the viewport center is full size.
//! let anchor = Point::new(600.0, 400.0);
//! let scale = layout.cell_scale(anchor, Vec2::ZERO);
//! assert_eq!(scale, 1.0);
//! ```
//!
//! All lengths are in device pixels. This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod dimensions;
mod scale;
mod settings;

pub use dimensions::{GridMetrics, IconMetrics, LayoutConfig, Orientation};
pub use scale::ScaleCurve;
pub use settings::{LayoutSettings, OrientationProfile};
