// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::vec::Vec;
use core::fmt::Display;

use hexdock_layout::GridMetrics;
use kurbo::{Point, Size};

use crate::cell::GridCell;

/// Vertical packing of staggered rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridPacking {
    /// Rows are a full cell apart: `y = row * cell_height`.
    Plain,
    /// Rows overlap like a honeycomb: `y = row * cell_height * 0.75`.
    #[default]
    Packed,
}

impl GridPacking {
    /// Fraction of the cell height between consecutive rows.
    #[must_use]
    pub fn row_pitch_factor(self) -> f64 {
        match self {
            Self::Plain => 1.0,
            Self::Packed => 0.75,
        }
    }
}

/// Generates row-major cells with honeycomb anchors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridBuilder {
    rows: usize,
    cols: usize,
    cell_size: Size,
    packing: GridPacking,
}

impl GridBuilder {
    /// Creates a builder for a `rows` x `cols` plane with the given cell pitch.
    #[must_use]
    pub fn new(rows: usize, cols: usize, cell_size: Size) -> Self {
        Self {
            rows,
            cols,
            cell_size,
            packing: GridPacking::default(),
        }
    }

    /// Creates a builder sized from computed layout metrics.
    #[must_use]
    pub fn from_metrics(metrics: &GridMetrics) -> Self {
        Self::new(metrics.rows, metrics.cols, metrics.cell_size())
    }

    /// Sets the row packing.
    #[must_use]
    pub fn with_packing(mut self, packing: GridPacking) -> Self {
        self.packing = packing;
        self
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row packing in use.
    #[must_use]
    pub fn packing(&self) -> GridPacking {
        self.packing
    }

    /// Total number of cells (`rows * cols`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Plane-space anchor of the cell at `(row, col)`.
    #[must_use]
    pub fn anchor(&self, row: usize, col: usize) -> Point {
        let Size { width, height } = self.cell_size;
        let stagger = if row % 2 == 1 { width / 2.0 } else { 0.0 };
        Point::new(
            col as f64 * width + stagger,
            row as f64 * height * self.packing.row_pitch_factor(),
        )
    }

    /// Index into a content sequence of length `len` for the cell at
    /// `(row, col)`, or `None` when `len == 0`.
    #[must_use]
    pub fn content_index(&self, row: usize, col: usize, len: usize) -> Option<usize> {
        (len > 0).then(|| (row * self.cols + col) % len)
    }

    /// Builds positional cells with no content. Ids are `"{row}-{col}"`.
    #[must_use]
    pub fn build(&self) -> Vec<GridCell<()>> {
        let mut cells = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                cells.push(GridCell {
                    row,
                    col,
                    id: format!("{row}-{col}"),
                    anchor: self.anchor(row, col),
                    content: None,
                });
            }
        }
        cells
    }

    /// Builds cells bound to `items`, repeating them cyclically.
    ///
    /// Ids are `"{row}-{col}-{key}"` where `key` is produced by `key(item)`.
    /// With an empty `items` slice every cell is positional (no content and
    /// an id of `"{row}-{col}"`); callers decide how to present that state.
    #[must_use]
    pub fn build_with<'a, T, K, F>(&self, items: &'a [T], key: F) -> Vec<GridCell<&'a T>>
    where
        K: Display,
        F: Fn(&'a T) -> K,
    {
        self.build_indexed(items.len(), |i| key(&items[i]))
            .into_iter()
            .map(|cell| GridCell {
                row: cell.row,
                col: cell.col,
                id: cell.id,
                anchor: cell.anchor,
                content: cell.content.map(|i| &items[i]),
            })
            .collect()
    }

    /// Builds cells bound to a content sequence of length `len`, storing the
    /// index of each cell's item.
    ///
    /// `key(i)` names item `i` in the cell id. Use this when the items live
    /// elsewhere and may be replaced without rebuilding the geometry.
    #[must_use]
    pub fn build_indexed<K, F>(&self, len: usize, key: F) -> Vec<GridCell<usize>>
    where
        K: Display,
        F: Fn(usize) -> K,
    {
        let mut cells = Vec::with_capacity(self.len());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let content = self.content_index(row, col, len);
                let id = match content {
                    Some(i) => format!("{row}-{col}-{}", key(i)),
                    None => format!("{row}-{col}"),
                };
                cells.push(GridCell {
                    row,
                    col,
                    id,
                    anchor: self.anchor(row, col),
                    content,
                });
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{GridBuilder, GridPacking};

    fn builder(packing: GridPacking) -> GridBuilder {
        GridBuilder::new(3, 4, Size::new(100.0, 80.0)).with_packing(packing)
    }

    #[test]
    fn odd_rows_are_staggered_by_half_a_cell() {
        let b = builder(GridPacking::Plain);
        assert_eq!(b.anchor(0, 0), Point::new(0.0, 0.0));
        assert_eq!(b.anchor(0, 2), Point::new(200.0, 0.0));
        assert_eq!(b.anchor(1, 0), Point::new(50.0, 80.0));
        assert_eq!(b.anchor(2, 1), Point::new(100.0, 160.0));
    }

    #[test]
    fn packed_rows_compress_vertically() {
        let b = builder(GridPacking::Packed);
        assert_eq!(b.anchor(1, 0), Point::new(50.0, 60.0));
        assert_eq!(b.anchor(2, 3), Point::new(300.0, 120.0));
    }

    #[test]
    fn default_packing_is_packed() {
        let b = GridBuilder::new(1, 1, Size::new(10.0, 10.0));
        assert_eq!(b.packing(), GridPacking::Packed);
    }

    #[test]
    fn content_index_wraps() {
        let b = builder(GridPacking::Plain);
        assert_eq!(b.content_index(0, 0, 5), Some(0));
        assert_eq!(b.content_index(1, 1, 5), Some(0));
        assert_eq!(b.content_index(2, 3, 5), Some(1));
        assert_eq!(b.content_index(2, 3, 0), None);
    }

    #[test]
    fn positional_ids_are_row_col() {
        let cells = builder(GridPacking::Plain).build();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0].id, "0-0");
        assert_eq!(cells[5].id, "1-1");
        assert!(cells.iter().all(|c| c.content.is_none()));
    }

    #[test]
    fn empty_content_yields_positional_cells() {
        let items: [u32; 0] = [];
        let cells = builder(GridPacking::Plain).build_with(&items, |i| *i);
        assert_eq!(cells.len(), 12);
        assert!(cells.iter().all(|c| c.content.is_none()));
        assert_eq!(cells[7].id, "1-3");
    }

    #[test]
    fn indexed_cells_store_content_positions() {
        let keys = ["x", "y", "z"];
        let cells = builder(GridPacking::Packed).build_indexed(keys.len(), |i| keys[i]);
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0].content, Some(0));
        assert_eq!(cells[4].content, Some(1));
        assert_eq!(cells[4].id, "1-0-y");
        assert_eq!(cells[11].content, Some(2));
        assert_eq!(cells[5].anchor, Point::new(150.0, 60.0));
    }

    #[test]
    fn zero_sized_grid_is_empty() {
        let b = GridBuilder::new(0, 5, Size::new(10.0, 10.0));
        assert!(b.is_empty());
        assert!(b.build().is_empty());
    }
}
