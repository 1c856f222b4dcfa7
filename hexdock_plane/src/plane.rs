// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hexdock_layout::LayoutConfig;
use kurbo::{Point, Size, Vec2};

use crate::constraints::DragConstraints;
use crate::gesture::GestureState;
use crate::modes::{BorderMode, GestureSettings};

/// Owner of the pan offset of a draggable plane.
///
/// `PlaneController` tracks the translation applied to the whole grid plane
/// and keeps it inside [`DragConstraints`] derived from the plane and
/// viewport sizes. It also classifies pointer gestures so callers can tell a
/// drag from a tap. It can be used to:
/// - Center the plane over the viewport on mount and after every resize.
/// - Follow a pointer drag, clamping on every move.
/// - Gate "open this cell" actions on [`PlaneController::is_tap`].
#[derive(Clone, Debug)]
pub struct PlaneController {
    offset: Vec2,
    constraints: DragConstraints,
    border_mode: BorderMode,
    device: Size,
    plane: Size,
    cell: Size,
    gesture: GestureState,
    drag_origin: Vec2,
}

impl Default for PlaneController {
    fn default() -> Self {
        Self::new(BorderMode::default(), GestureSettings::default())
    }
}

impl PlaneController {
    /// Creates a controller with a zero offset and zero constraints.
    ///
    /// Call [`PlaneController::initialize`] before use.
    #[must_use]
    pub fn new(border_mode: BorderMode, gesture: GestureSettings) -> Self {
        Self {
            offset: Vec2::ZERO,
            constraints: DragConstraints::ZERO,
            border_mode,
            device: Size::ZERO,
            plane: Size::ZERO,
            cell: Size::ZERO,
            gesture: GestureState::new(gesture),
            drag_origin: Vec2::ZERO,
        }
    }

    /// Re-centers the plane and recomputes the constraints for `layout`.
    ///
    /// - Offset: `-(plane - device) / 2` on each axis, plus one cell under
    ///   [`BorderMode::MinimizeBorder`].
    /// - Constraints: see [`DragConstraints::for_plane`].
    ///
    /// Must be called again whenever the layout changes.
    pub fn initialize(&mut self, layout: &LayoutConfig) {
        self.device = layout.device;
        self.plane = layout.grid.plane_size();
        self.cell = layout.grid.cell_size();
        self.constraints =
            DragConstraints::for_plane(self.plane, self.device, self.cell, self.border_mode);

        let mut centered = Vec2::new(
            -(self.plane.width - self.device.width) / 2.0,
            -(self.plane.height - self.device.height) / 2.0,
        );
        if self.border_mode == BorderMode::MinimizeBorder {
            centered += self.cell.to_vec2();
        }
        self.offset = self.constraints.clamp(centered);
        self.drag_origin = self.offset;
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the current drag constraints.
    #[must_use]
    pub fn constraints(&self) -> DragConstraints {
        self.constraints
    }

    /// Returns the border mode.
    #[must_use]
    pub fn border_mode(&self) -> BorderMode {
        self.border_mode
    }

    /// Sets the border mode. Takes effect on the next
    /// [`PlaneController::initialize`].
    pub fn set_border_mode(&mut self, mode: BorderMode) {
        self.border_mode = mode;
    }

    /// Returns the gesture tracker.
    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Sets the offset directly, clamped into the constraints.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = self.constraints.clamp(offset);
    }

    /// Pans by a delta in device space, clamped into the constraints.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.set_offset(self.offset + delta);
    }

    /// Pointer went down at `point`.
    pub fn on_drag_start(&mut self, point: Point) {
        self.gesture.start(point);
        self.drag_origin = self.offset;
    }

    /// Pointer moved to `point`.
    ///
    /// The plane follows the pointer rigidly from where it was when the
    /// gesture started, clamped into the constraints. Returns the new offset,
    /// or `None` if no gesture is in progress.
    pub fn on_drag_move(&mut self, point: Point) -> Option<Vec2> {
        self.gesture.update(point)?;
        let travel = self.gesture.total_offset(point)?;
        self.offset = self.constraints.clamp(self.drag_origin + travel);
        Some(self.offset)
    }

    /// Pointer was released (or the gesture was interrupted) at `now_ms`.
    ///
    /// The offset keeps its last clamped value.
    pub fn on_drag_end(&mut self, now_ms: u64) {
        self.gesture.end(now_ms);
    }

    /// Returns `true` while the gesture counts as a drag at `now_ms`.
    #[must_use]
    pub fn is_dragging(&self, now_ms: u64) -> bool {
        self.gesture.is_dragging(now_ms)
    }

    /// Returns `true` if a tap at `now_ms` should be acted on.
    #[must_use]
    pub fn is_tap(&self, now_ms: u64) -> bool {
        self.gesture.is_tap(now_ms)
    }

    /// Clears a released gesture once its debounce has elapsed.
    pub fn settle(&mut self, now_ms: u64) {
        self.gesture.settle(now_ms);
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PlaneDebugInfo {
        PlaneDebugInfo {
            offset: self.offset,
            constraints: self.constraints,
            border_mode: self.border_mode,
            device: self.device,
            plane: self.plane,
            cell: self.cell,
            gesture_active: self.gesture.is_active(),
            past_threshold: self.gesture.exceeded_threshold,
        }
    }
}

/// Debug snapshot of a [`PlaneController`] state.
#[derive(Clone, Copy, Debug)]
pub struct PlaneDebugInfo {
    /// Current pan offset.
    pub offset: Vec2,
    /// Current drag constraints.
    pub constraints: DragConstraints,
    /// Border mode in effect.
    pub border_mode: BorderMode,
    /// Viewport size from the last layout.
    pub device: Size,
    /// Plane size from the last layout.
    pub plane: Size,
    /// Cell pitch from the last layout.
    pub cell: Size,
    /// Whether the pointer is currently down.
    pub gesture_active: bool,
    /// Whether the current gesture has moved past the drag threshold.
    pub past_threshold: bool,
}
