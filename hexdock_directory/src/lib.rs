// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexdock Directory: the company data shown in the dock.
//!
//! The layout crates only ever see an ordered slice of items. This crate
//! produces that slice for the company directory kiosk:
//! - [`Company`] records, with stable slug ids ([`slugify`]).
//! - Import from the bundled CSV sheet ([`parse_csv`]).
//! - Filtering by industry, campus and tag ([`CompanyFilter`]).
//! - An expiring JSON [`Cache`] over a pluggable [`KeyValueStore`].
//! - A cache-first [`DirectoryLoader`] that walks prioritized
//!   [`CompanySource`]s and falls back to an empty list.
//! - Presentation helpers: [`placeholder_glyph`], [`is_valid_logo_url`] and
//!   [`industry_color`].
//!
//! ## Minimal example
//!
//! ```rust
//! use hexdock_directory::{CsvSource, DirectoryConfig, DirectoryLoader, LoadOrigin, MemoryStore};
//!
//! let sheet = "Company Name,Industry\nAcme Robotics,Robotics\nBlue Wave,Energy\n";
//! let config = DirectoryConfig::default();
//! let mut loader = DirectoryLoader::new(MemoryStore::new(), config.clone())
//!     .with_source(CsvSource::new(sheet, config));
//!
//! let first = loader.load(0);
//! assert_eq!(first.origin, LoadOrigin::Source("csv".into()));
//! assert_eq!(first.companies[0].id, "acme-robotics");
//!
//! // Within the expiry window the list comes back from the cache.
//! assert_eq!(loader.load(1_000).origin, LoadOrigin::Cache);
//! ```
//!
//! Time is passed in as milliseconds, so callers choose the clock.
//!
//! Failures are logged with `tracing` and never abort a load; see
//! [`DirectoryLoader::load`].

mod cache;
mod company;
mod config;
mod error;
mod filter;
mod glyph;
mod import;
mod loader;

pub use cache::{Cache, CacheEntry, KeyValueStore, MemoryStore};
pub use company::{Company, slugify};
pub use config::DirectoryConfig;
pub use error::{DirectoryError, Result};
pub use filter::{CompanyFilter, all_industries, available_tags, industry_color};
pub use glyph::{is_valid_logo_url, placeholder_glyph};
pub use import::{parse_csv, split_record};
pub use loader::{
    CompanySource, CsvSource, DirectoryLoader, FnSource, LoadOrigin, Loaded, OverrideSnapshot,
    OverrideSource,
};
