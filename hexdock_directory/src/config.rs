// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunables for importing and caching directory data.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectoryConfig {
    /// Cache key under which the merged company list is stored.
    pub cache_key: String,
    /// Age after which a cached list is discarded, in milliseconds.
    pub cache_expiry_ms: u64,
    /// Maximum number of companies taken from a CSV import.
    pub csv_limit: usize,
    /// Maximum number of industries kept per company.
    pub max_industries: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            cache_key: "allCompanies".to_owned(),
            cache_expiry_ms: 60 * 60 * 1000,
            csv_limit: 62,
            max_industries: 3,
        }
    }
}
