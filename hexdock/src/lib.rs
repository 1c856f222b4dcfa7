// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexdock: a headless, draggable honeycomb dock.
//!
//! A dock is a plane of circular icons laid out on a staggered grid larger
//! than the screen. The user drags the plane around; icons shrink with their
//! distance from the screen center. This crate ties together:
//! - [`hexdock_layout`]: icon and grid sizing per viewport, and the fisheye
//!   scale curve.
//! - [`hexdock_grid`]: honeycomb anchors and cyclic content binding.
//! - [`hexdock_plane`]: clamped panning and drag/tap classification.
//!
//! [`Dock`] owns one of each and hands the host a list of [`DockCell`]s to
//! draw. It does not render, animate or fetch data.
//!
//! ## Minimal example
//!
//! ```rust
//! use hexdock::{Dock, DockConfig};
//! use kurbo::{Point, Size};
//!
//! let mut dock = Dock::new(Size::new(1200.0, 800.0), DockConfig::default());
//! dock.set_content(["alpha", "beta", "gamma"]);
//! assert_eq!(dock.cell_count(), 18 * 21);
//!
//! // The cell under the screen center is drawn at full size.
//! let largest = dock.cells().map(|c| c.scale).fold(0.0, f64::max);
//! assert!(largest > 0.999);
//!
//! // A drag past the threshold suppresses the click that follows it.
//! dock.on_drag_start(Point::new(600.0, 400.0));
//! dock.on_drag_move(Point::new(540.0, 400.0));
//! dock.on_drag_end(1_000);
//! assert!(dock.tap(0, 1_010).is_none());
//! assert!(dock.tap(0, 1_200).is_some());
//! ```
//!
//! ## Frame loop
//!
//! - On resize call [`Dock::resize`]; the plane is re-centered.
//! - Forward pointer down/move/up to `on_drag_*`, with release timestamps in
//!   milliseconds.
//! - Each frame, iterate [`Dock::cells`] (or [`Dock::visible_cells`]) and
//!   draw each item at `position` scaled by `scale`.
//! - On click, resolve the cell and call [`Dock::tap`].
//!
//! Layout recomputation is logged at `debug` level through `tracing`.

mod config;
mod dock;
mod item;

pub use config::DockConfig;
pub use dock::{Dock, DockCell, DockDebugInfo};
pub use item::DockItem;

pub use hexdock_grid::GridPacking;
pub use hexdock_layout::{LayoutConfig, LayoutSettings, ScaleCurve};
pub use hexdock_plane::{BorderMode, GestureSettings};
