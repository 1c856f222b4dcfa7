// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hexdock_grid::{GridBuilder, GridCell};
use hexdock_layout::LayoutConfig;
use hexdock_plane::{PlaneController, PlaneDebugInfo};
use kurbo::{Point, Rect, Size, Vec2};

use crate::config::DockConfig;
use crate::item::DockItem;

/// A cell ready to draw for the current frame.
///
/// `position` is where the cell's anchor lands on screen after panning;
/// draw the item there, scaled by `scale` about its own center.
#[derive(Debug)]
pub struct DockCell<'a, T> {
    /// Stable id: `"{row}-{col}"`, plus `"-{key}"` when bound to an item.
    pub id: &'a str,
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
    /// Plane-space anchor.
    pub anchor: Point,
    /// Screen-space anchor, `anchor + offset`.
    pub position: Point,
    /// Fisheye scale in `[min_scale, 1]`.
    pub scale: f64,
    /// Decorative hue in degrees, stable per id.
    pub hue: f64,
    /// Bound item, or `None` when the dock has no items.
    pub content: Option<&'a T>,
}

impl<T> Clone for DockCell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DockCell<'_, T> {}

/// Headless honeycomb dock.
///
/// Owns the layout for the current viewport, the cells bound to the current
/// items, and the pan state. Hosts forward resize and pointer events, then
/// read [`Dock::cells`] every frame; scales are computed on demand from the
/// live offset and never stored.
#[derive(Clone, Debug)]
pub struct Dock<T> {
    config: DockConfig,
    layout: LayoutConfig,
    grid: GridBuilder,
    plane: PlaneController,
    items: Vec<T>,
    cells: Vec<GridCell<usize>>,
    pending_viewport: Option<Size>,
}

impl<T: DockItem> Dock<T> {
    /// Creates an empty dock laid out for `viewport` and centered.
    #[must_use]
    pub fn new(viewport: Size, config: DockConfig) -> Self {
        let layout = config
            .layout
            .compute(viewport)
            .with_scale_curve(config.scale_curve);
        let mut dock = Self {
            config,
            layout,
            grid: GridBuilder::new(0, 0, Size::ZERO),
            plane: PlaneController::new(config.border_mode, config.gesture),
            items: Vec::new(),
            cells: Vec::new(),
            pending_viewport: None,
        };
        dock.apply_layout(layout);
        dock
    }

    /// Recomputes the layout for `viewport`, rebuilds the cells and
    /// re-centers the plane.
    pub fn initialize(&mut self, viewport: Size) {
        let layout = self.compute_layout(viewport);
        self.apply_layout(layout);
    }

    /// Handles a viewport change.
    ///
    /// Does nothing if the size is unchanged. While a drag is in progress the
    /// new size is held and applied when the drag ends.
    pub fn resize(&mut self, viewport: Size) {
        let layout = self.compute_layout(viewport);
        let dragging = self.plane.gesture().is_active();
        if layout.device == self.layout.device {
            if dragging {
                self.pending_viewport = None;
            }
            return;
        }
        if dragging {
            self.pending_viewport = Some(viewport);
            return;
        }
        self.apply_layout(layout);
    }

    /// Replaces the items and rebuilds every cell.
    ///
    /// Items repeat cyclically across the grid in row-major order.
    pub fn set_content(&mut self, items: impl IntoIterator<Item = T>) {
        self.items = items.into_iter().collect();
        self.rebuild_cells();
        tracing::debug!(items = self.items.len(), cells = self.cells.len(), "content bound");
    }

    /// Pointer was released at `now_ms`.
    ///
    /// Applies a resize that arrived during the drag.
    pub fn on_drag_end(&mut self, now_ms: u64) {
        self.plane.on_drag_end(now_ms);
        tracing::trace!(
            dragged = self.plane.is_dragging(now_ms),
            offset = ?self.plane.offset(),
            "pointer released"
        );
        if let Some(viewport) = self.pending_viewport {
            self.initialize(viewport);
        }
    }

    fn compute_layout(&self, viewport: Size) -> LayoutConfig {
        self.config
            .layout
            .compute(viewport)
            .with_scale_curve(self.config.scale_curve)
    }

    fn apply_layout(&mut self, layout: LayoutConfig) {
        self.pending_viewport = None;
        self.layout = layout;
        self.grid = GridBuilder::from_metrics(&layout.grid).with_packing(self.config.packing);
        self.plane.initialize(&self.layout);
        self.rebuild_cells();

        let grid = &self.layout.grid;
        let plane = grid.plane_size();
        tracing::debug!(
            width = self.layout.device.width,
            height = self.layout.device.height,
            orientation = ?self.layout.orientation,
            icon_size = self.layout.icon.size,
            rows = grid.rows,
            cols = grid.cols,
            total_cells = grid.total_cells,
            plane_width = plane.width,
            plane_height = plane.height,
            cell_size = grid.cell_width,
            "layout recomputed"
        );
    }

    fn rebuild_cells(&mut self) {
        let items = &self.items;
        self.cells = self
            .grid
            .build_indexed(items.len(), |i| items[i].dock_key());
    }
}

impl<T> Dock<T> {
    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &DockConfig {
        &self.config
    }

    /// Returns the layout for the current viewport.
    #[must_use]
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the pan controller.
    #[must_use]
    pub fn plane(&self) -> &PlaneController {
        &self.plane
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.plane.offset()
    }

    /// Returns the bound items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns `true` if no items are bound; the host should show its
    /// "no items" state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of cells; always `rows * cols` of the current layout.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells, row-major, positioned and scaled for the current offset.
    pub fn cells(&self) -> impl Iterator<Item = DockCell<'_, T>> + '_ {
        let offset = self.plane.offset();
        self.cells.iter().map(move |cell| self.render(cell, offset))
    }

    /// Cells whose pitch rectangle overlaps the viewport.
    pub fn visible_cells(&self) -> impl Iterator<Item = DockCell<'_, T>> + '_ {
        let view = Rect::from_origin_size(Point::ZERO, self.layout.device);
        let pitch = self.layout.grid.cell_size();
        self.cells().filter(move |cell| {
            let rect = Rect::from_origin_size(cell.position, pitch);
            rect.x0 < view.x1 && rect.x1 > view.x0 && rect.y0 < view.y1 && rect.y1 > view.y0
        })
    }

    fn render<'a>(&'a self, cell: &'a GridCell<usize>, offset: Vec2) -> DockCell<'a, T> {
        DockCell {
            id: &cell.id,
            row: cell.row,
            col: cell.col,
            anchor: cell.anchor,
            position: cell.anchor + offset,
            scale: self.layout.cell_scale(cell.anchor, offset),
            hue: cell.hue(),
            content: cell.content.map(|i| &self.items[i]),
        }
    }

    /// Pointer went down at `point`.
    pub fn on_drag_start(&mut self, point: Point) {
        self.plane.on_drag_start(point);
    }

    /// Pointer moved to `point`; returns the new offset while dragging.
    pub fn on_drag_move(&mut self, point: Point) -> Option<Vec2> {
        self.plane.on_drag_move(point)
    }

    /// Returns `true` if a tap at `now_ms` should be acted on.
    #[must_use]
    pub fn is_tap(&self, now_ms: u64) -> bool {
        self.plane.is_tap(now_ms)
    }

    /// Clears a released gesture once its debounce has elapsed.
    pub fn settle(&mut self, now_ms: u64) {
        self.plane.settle(now_ms);
    }

    /// Returns the item in cell `index` if a tap at `now_ms` is allowed.
    ///
    /// Returns `None` for the click that follows a drag, for out-of-range
    /// indices and for contentless cells.
    pub fn tap(&self, index: usize, now_ms: u64) -> Option<&T> {
        let allowed = self.plane.is_tap(now_ms);
        tracing::trace!(index, allowed, "tap");
        if !allowed {
            return None;
        }
        self.cells
            .get(index)?
            .content
            .map(|item| &self.items[item])
    }

    /// Snapshot of the dock state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DockDebugInfo {
        DockDebugInfo {
            layout: self.layout,
            plane: self.plane.debug_info(),
            cells: self.cells.len(),
            items: self.items.len(),
            pending_viewport: self.pending_viewport,
        }
    }
}

/// Debug snapshot of a [`Dock`].
#[derive(Clone, Copy, Debug)]
pub struct DockDebugInfo {
    /// Layout for the current viewport.
    pub layout: LayoutConfig,
    /// Pan state.
    pub plane: PlaneDebugInfo,
    /// Number of cells.
    pub cells: usize,
    /// Number of bound items.
    pub items: usize,
    /// Viewport waiting for the current drag to end.
    pub pending_viewport: Option<Size>,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use hexdock_layout::Orientation;
    use kurbo::{Point, Size, Vec2};

    use super::Dock;
    use crate::DockConfig;

    const LANDSCAPE: Size = Size::new(1200.0, 800.0);

    fn dock(items: &[&'static str]) -> Dock<&'static str> {
        let mut dock = Dock::new(LANDSCAPE, DockConfig::default());
        dock.set_content(items.iter().copied());
        dock
    }

    #[test]
    fn cells_cover_grid_with_unique_ids() {
        let dock = dock(&["a", "b", "c"]);
        let grid = dock.layout().grid;
        assert_eq!(dock.cell_count(), grid.rows * grid.cols);
        let ids: BTreeSet<&str> = dock.cells().map(|c| c.id).collect();
        assert_eq!(ids.len(), dock.cell_count());
    }

    #[test]
    fn content_repeats_in_row_major_order() {
        let items = ["a", "b", "c", "d", "e"];
        let dock = dock(&items);
        let cols = dock.layout().grid.cols;
        for cell in dock.cells() {
            let k = cell.row * cols + cell.col;
            assert_eq!(cell.content, Some(&items[k % items.len()]));
            assert!(cell.id.ends_with(items[k % items.len()]));
        }
    }

    #[test]
    fn empty_content_yields_positional_cells() {
        let dock = dock(&[]);
        assert!(dock.is_empty());
        assert!(dock.cells().all(|c| c.content.is_none()));
        let first = dock.cells().next().unwrap();
        assert_eq!(first.id, "0-0");
        assert_eq!(dock.tap(0, 0), None);
    }

    #[test]
    fn scales_stay_in_range() {
        let dock = dock(&["a"]);
        let floor = dock.config().scale_curve.min_scale;
        for cell in dock.cells() {
            assert!(cell.scale >= floor - 1e-12 && cell.scale <= 1.0);
        }
    }

    #[test]
    fn drag_moves_every_cell_rigidly() {
        let mut dock = dock(&["a", "b"]);
        let before: Vec<Point> = dock.cells().map(|c| c.position).collect();
        dock.on_drag_start(Point::new(600.0, 400.0));
        dock.on_drag_move(Point::new(650.0, 370.0));
        let after: Vec<Point> = dock.cells().map(|c| c.position).collect();
        for (b, a) in before.iter().zip(&after) {
            assert!((*a - *b - Vec2::new(50.0, -30.0)).hypot() < 1e-9);
        }
    }

    #[test]
    fn tap_without_movement_returns_item() {
        let mut dock = dock(&["a", "b"]);
        dock.on_drag_start(Point::new(100.0, 100.0));
        dock.on_drag_move(Point::new(104.0, 97.0));
        dock.on_drag_end(500);
        assert_eq!(dock.tap(1, 500), Some(&"b"));
        assert_eq!(dock.tap(dock.cell_count(), 500), None);
    }

    #[test]
    fn resize_during_drag_waits_for_release() {
        let mut dock = dock(&["a"]);
        dock.on_drag_start(Point::new(600.0, 400.0));
        dock.resize(Size::new(800.0, 1200.0));
        assert_eq!(dock.layout().orientation, Orientation::Landscape);
        assert!(dock.debug_info().pending_viewport.is_some());

        dock.on_drag_end(0);
        assert_eq!(dock.layout().orientation, Orientation::Portrait);
        assert_eq!(dock.layout().icon.size, 240.0);
        assert!(dock.debug_info().pending_viewport.is_none());
        assert!(dock.plane().constraints().contains(dock.offset()));
    }

    #[test]
    fn resize_to_same_size_keeps_offset() {
        let mut dock = dock(&["a"]);
        dock.on_drag_start(Point::new(600.0, 400.0));
        dock.on_drag_move(Point::new(500.0, 400.0));
        dock.on_drag_end(0);
        let panned = dock.offset();
        dock.resize(LANDSCAPE);
        assert_eq!(dock.offset(), panned);
    }

    #[test]
    fn same_size_resize_during_drag_keeps_pan() {
        let mut dock = dock(&["a"]);
        dock.on_drag_start(Point::new(600.0, 400.0));
        dock.on_drag_move(Point::new(400.0, 300.0));
        let panned = dock.offset();
        dock.resize(LANDSCAPE);
        assert!(dock.debug_info().pending_viewport.is_none());
        dock.on_drag_end(0);
        assert_eq!(dock.offset(), panned);
    }

    #[test]
    fn resize_back_during_drag_cancels_pending_layout() {
        let mut dock = dock(&["a"]);
        dock.on_drag_start(Point::new(600.0, 400.0));
        dock.on_drag_move(Point::new(400.0, 300.0));
        let panned = dock.offset();
        dock.resize(Size::new(800.0, 1200.0));
        dock.resize(LANDSCAPE);
        dock.on_drag_end(0);
        assert_eq!(dock.layout().orientation, Orientation::Landscape);
        assert_eq!(dock.offset(), panned);
    }

    #[test]
    fn degenerate_resize_is_idempotent() {
        let mut dock = Dock::<&str>::new(Size::ZERO, DockConfig::default());
        dock.set_content(["a"]);
        dock.on_drag_start(Point::new(0.0, 0.0));
        dock.on_drag_move(Point::new(-40.0, -40.0));
        dock.on_drag_end(0);
        let panned = dock.offset();
        dock.resize(Size::ZERO);
        dock.resize(Size::new(f64::NAN, 0.0));
        assert_eq!(dock.offset(), panned);
    }

    #[test]
    fn visible_cells_overlap_viewport() {
        let dock = dock(&["a"]);
        let pitch = dock.layout().grid.cell_size();
        let visible: Vec<_> = dock.visible_cells().collect();
        assert!(!visible.is_empty());
        assert!(visible.len() < dock.cell_count());
        for cell in visible {
            assert!(cell.position.x < LANDSCAPE.width && cell.position.x + pitch.width > 0.0);
            assert!(cell.position.y < LANDSCAPE.height && cell.position.y + pitch.height > 0.0);
        }
    }
}
