// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Content that can be placed in a dock cell.
pub trait DockItem {
    /// Stable key, appended to the ids of cells showing this item.
    fn dock_key(&self) -> &str;
}

impl DockItem for String {
    fn dock_key(&self) -> &str {
        self
    }
}

impl DockItem for &str {
    fn dock_key(&self) -> &str {
        self
    }
}

#[cfg(feature = "directory")]
impl DockItem for hexdock_directory::Company {
    fn dock_key(&self) -> &str {
        &self.id
    }
}
