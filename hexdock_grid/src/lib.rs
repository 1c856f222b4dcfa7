// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexdock Grid: expand row/column counts into a staggered honeycomb of cells.
//!
//! [`GridBuilder`] turns the `rows`/`cols`/pitch of a
//! [`hexdock_layout::GridMetrics`] into a flat, row-major list of
//! [`GridCell`]s. Each cell gets a fixed anchor on the plane:
//!
//! - `x = col * cell_width + (row % 2) * cell_width / 2` (odd rows shift right
//!   by half a cell);
//! - `y = row * cell_height * k`, where `k` is `1.0` for
//!   [`GridPacking::Plain`] and `0.75` for [`GridPacking::Packed`].
//!
//! Anchors are computed once, when cells are built. Per-frame work (scaling
//! against the live pan offset) happens elsewhere.
//!
//! Cells can be purely positional ([`GridBuilder::build`]) or bound to a
//! content sequence ([`GridBuilder::build_with`]). When there are fewer items
//! than cells, content repeats cyclically: cell `k` in row-major order gets
//! item `k % len`.
//!
//! ## Minimal example
//!
//! ```rust
//! use hexdock_grid::{GridBuilder, GridPacking};
//! use kurbo::Size;
//!
//! let builder = GridBuilder::new(2, 2, Size::new(100.0, 100.0)).with_packing(GridPacking::Plain);
//! let names = ["a", "b", "c"];
//! let cells = builder.build_with(&names, |name| *name);
//!
//! let bound: Vec<&str> = cells.iter().map(|c| *c.content.unwrap()).collect();
//! assert_eq!(bound, ["a", "b", "c", "a"]);
//! assert_eq!(cells[3].id, "1-1-a");
//! assert_eq!(cells[3].anchor.x, 150.0);
//! ```
//!
//! Rebuild the whole list whenever the layout or the content changes; cells
//! are never patched individually. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
mod cell;

pub use builder::{GridBuilder, GridPacking};
pub use cell::GridCell;
