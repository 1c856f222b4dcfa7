// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexdock Plane: pan state for a draggable grid plane.
//!
//! This crate provides a small, headless model of a plane that the user drags
//! around behind a fixed viewport. It focuses on:
//! - The plane offset (the translation applied to the whole grid).
//! - Drag constraints that keep the plane covering the viewport.
//! - Telling a drag from a tap, including the short window after release in
//!   which a synthetic click must not count as a tap.
//!
//! It does **not** own cells, timers or an event loop. Callers are expected to:
//! - Recompute a [`hexdock_layout::LayoutConfig`] on resize and pass it to
//!   [`PlaneController::initialize`].
//! - Forward pointer down/move/up (or touch) samples, with millisecond
//!   timestamps for release, to the `on_drag_*` methods.
//! - Read [`PlaneController::offset`] once per frame to position and scale
//!   cells.
//!
//! ## Minimal example
//!
//! ```rust
//! use hexdock_layout::LayoutSettings;
//! use hexdock_plane::PlaneController;
//! use kurbo::{Point, Size};
//!
//! let layout = LayoutSettings::default().compute(Size::new(1200.0, 800.0));
//! let mut plane = PlaneController::default();
//! plane.initialize(&layout);
//! assert!(plane.constraints().contains(plane.offset()));
//!
//! plane.on_drag_start(Point::new(600.0, 400.0));
//! plane.on_drag_move(Point::new(500.0, 380.0));
//! plane.on_drag_end(16);
//!
//! // The click delivered right after the release is not a tap.
//! assert!(!plane.is_tap(20));
//! ```
//!
//! ## Design notes
//!
//! - Time is supplied by the caller as milliseconds on any monotonic clock.
//! - The offset only ever changes through the controller, and is clamped on
//!   every write.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod constraints;
pub mod gesture;
mod modes;
mod plane;

pub use constraints::DragConstraints;
pub use gesture::GestureState;
pub use modes::{BorderMode, GestureSettings};
pub use plane::{PlaneController, PlaneDebugInfo};
