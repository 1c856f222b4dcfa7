// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state helper: track a press-move-release sequence and decide whether
//! it was a drag or a tap.
//!
//! ## Usage
//!
//! 1) Call [`GestureState::start`] when the pointer goes down.
//! 2) On each move event, call [`GestureState::update`] to get the movement
//!    delta since the last update. Once the pointer has strayed more than the
//!    drag threshold from the press point on either axis, the gesture is a drag
//!    for the rest of its life.
//! 3) Call [`GestureState::end`] with the release timestamp.
//! 4) Gate tap actions on [`GestureState::is_tap`]: a drag keeps suppressing
//!    taps for a short debounce after release.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use hexdock_plane::GestureState;
//!
//! let mut gesture = GestureState::default();
//!
//! gesture.start(Point::new(10.0, 20.0));
//! gesture.update(Point::new(40.0, 20.0));
//! assert!(gesture.is_dragging(0));
//!
//! // Released at t = 1000 ms; the click that follows is not a tap.
//! gesture.end(1000);
//! assert!(!gesture.is_tap(1050));
//! assert!(gesture.is_tap(1100));
//! ```

use kurbo::{Point, Vec2};

use crate::modes::GestureSettings;

/// Tracks one pointer gesture for drag/tap classification.
#[derive(Debug, Clone, Default, Copy)]
pub struct GestureState {
    /// Position where the pointer went down.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the gesture.
    pub last_pos: Option<Point>,
    /// Whether the pointer has moved past the threshold since the press.
    pub exceeded_threshold: bool,
    /// Release timestamp in milliseconds, once the pointer is up.
    pub released_at: Option<u64>,
    /// Thresholds in effect.
    pub settings: GestureSettings,
}

impl GestureState {
    /// Creates an idle gesture tracker with custom thresholds.
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Start tracking a new gesture from the given position.
    ///
    /// Any previous gesture, including one still inside its release debounce,
    /// is forgotten.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.exceeded_threshold = false;
        self.released_at = None;
    }

    /// Record a move, returning the delta since the last update.
    ///
    /// Returns `None` when no gesture is in progress.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        if self.released_at.is_some() {
            return None;
        }
        let from_start = pos - start;
        let threshold = self.settings.drag_threshold;
        if from_start.x.abs() > threshold || from_start.y.abs() > threshold {
            self.exceeded_threshold = true;
        }
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Offset from the press point to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Mark the gesture as released at `now_ms`.
    ///
    /// Calling this without an active gesture is a no-op.
    pub fn end(&mut self, now_ms: u64) {
        if self.start_pos.is_some() && self.released_at.is_none() {
            self.released_at = Some(now_ms);
        }
    }

    /// Returns `true` while the pointer is down.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_pos.is_some() && self.released_at.is_none()
    }

    /// Returns `true` if the current (or just released) gesture counts as a
    /// drag at `now_ms`.
    ///
    /// A drag stays a drag while the pointer is down and for
    /// [`GestureSettings::release_debounce_ms`] after release.
    #[must_use]
    pub fn is_dragging(&self, now_ms: u64) -> bool {
        if !self.exceeded_threshold {
            return false;
        }
        match self.released_at {
            None => self.start_pos.is_some(),
            Some(released) => {
                now_ms < released.saturating_add(self.settings.release_debounce_ms)
            }
        }
    }

    /// Returns `true` if a tap at `now_ms` should be honored.
    #[must_use]
    pub fn is_tap(&self, now_ms: u64) -> bool {
        !self.is_dragging(now_ms)
    }

    /// Drop all gesture state once the debounce has elapsed.
    pub fn settle(&mut self, now_ms: u64) {
        if self.released_at.is_some() && !self.is_dragging(now_ms) {
            self.reset();
        }
    }

    /// Forget the gesture immediately.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings);
    }
}
