// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Point;

/// One position on the plane, optionally carrying a content payload.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell<C> {
    /// Row index, `0..rows`.
    pub row: usize,
    /// Column index, `0..cols`.
    pub col: usize,
    /// Stable key for the cell, unique within one build.
    pub id: String,
    /// Fixed plane-space position of the cell's top-left corner.
    pub anchor: Point,
    /// Bound content, if any.
    pub content: Option<C>,
}

impl<C> GridCell<C> {
    /// Row-major position of the cell in a grid with `cols` columns.
    #[must_use]
    pub fn ordinal(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Decorative hue in degrees, `[0, 360)`, derived from the cell id.
    ///
    /// The same id always maps to the same hue, so repainting or rebuilding
    /// the grid does not shuffle colors.
    #[must_use]
    pub fn hue(&self) -> f64 {
        // FNV-1a
        let mut hash: u32 = 0x811c_9dc5;
        for byte in self.id.bytes() {
            hash ^= u32::from(byte);
            hash = hash.wrapping_mul(0x0100_0193);
        }
        f64::from(hash % 360)
    }
}
