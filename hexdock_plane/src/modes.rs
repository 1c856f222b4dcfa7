// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the plane is centered and how far it may be dragged past its edges.
///
/// This enum is consulted by [`crate::PlaneController::initialize`] and
/// [`crate::DragConstraints::for_plane`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderMode {
    /// Center the plane over the viewport and stop dragging exactly at its
    /// edges, so no background is ever revealed.
    #[default]
    Flush,
    /// Shift the initial position by one cell toward the bottom-right and
    /// allow one extra cell of travel past each edge.
    ///
    /// Combined with the staggered rows this hides the ragged half-cell
    /// border of the honeycomb at the start position.
    MinimizeBorder,
}

/// Thresholds used to tell a drag from a tap.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureSettings {
    /// Movement beyond this many pixels from the press point, on either axis,
    /// turns the gesture into a drag.
    pub drag_threshold: f64,
    /// How long after release a drag still suppresses taps, in milliseconds.
    ///
    /// Hosts usually deliver a click right after the pointer is released; the
    /// debounce keeps that click from being read as a tap on whatever cell
    /// ended up under the pointer.
    pub release_debounce_ms: u64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            drag_threshold: 10.0,
            release_debounce_ms: 100,
        }
    }
}
