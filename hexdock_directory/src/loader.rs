// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cache-first company loading over an ordered list of sources.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::cache::{Cache, KeyValueStore};
use crate::company::Company;
use crate::config::DirectoryConfig;
use crate::error::Result;
use crate::import::parse_csv;

/// Something that can produce the full company list.
///
/// Fetching is synchronous; hosts that talk to a remote database resolve the
/// request themselves and hand the result over through an implementation of
/// this trait.
pub trait CompanySource {
    /// Short name used in logs and [`LoadOrigin::Source`].
    fn name(&self) -> &str;

    /// Returns `false` to skip this source without calling [`fetch`].
    ///
    /// A remote database that is not configured, or an override slot that
    /// was never written, reports itself unavailable.
    ///
    /// [`fetch`]: CompanySource::fetch
    fn is_available(&self) -> bool {
        true
    }

    /// Produces the companies, in display order.
    ///
    /// # Errors
    ///
    /// Any failure; the loader logs it and moves on to the next source.
    fn fetch(&mut self) -> Result<Vec<Company>>;
}

/// The bundled CSV sheet.
#[derive(Clone, Debug)]
pub struct CsvSource {
    content: String,
    config: DirectoryConfig,
}

impl CsvSource {
    /// Wraps the sheet text, parsed with `config` on each fetch.
    pub fn new(content: impl Into<String>, config: DirectoryConfig) -> Self {
        Self {
            content: content.into(),
            config,
        }
    }
}

impl CompanySource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn fetch(&mut self) -> Result<Vec<Company>> {
        parse_csv(&self.content, &self.config)
    }
}

/// Admin-edited company list saved locally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideSnapshot {
    /// Full company list as last saved.
    pub companies: Vec<Company>,
    /// Save time in milliseconds.
    pub timestamp: u64,
    /// Monotonic version written alongside the list.
    pub version: u64,
}

impl OverrideSnapshot {
    /// Reads a snapshot from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Json`](crate::DirectoryError::Json) if the
    /// text is not a snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Propagates serialization failures.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Source backed by an optional [`OverrideSnapshot`].
#[derive(Clone, Debug, Default)]
pub struct OverrideSource {
    snapshot: Option<OverrideSnapshot>,
}

impl OverrideSource {
    /// Creates a source serving `snapshot`, or unavailable if `None`.
    #[must_use]
    pub fn new(snapshot: Option<OverrideSnapshot>) -> Self {
        Self { snapshot }
    }

    /// Replaces the served snapshot.
    pub fn set_snapshot(&mut self, snapshot: Option<OverrideSnapshot>) {
        self.snapshot = snapshot;
    }
}

impl CompanySource for OverrideSource {
    fn name(&self) -> &str {
        "admin-overrides"
    }

    fn is_available(&self) -> bool {
        self.snapshot.is_some()
    }

    fn fetch(&mut self) -> Result<Vec<Company>> {
        Ok(self
            .snapshot
            .as_ref()
            .map(|s| s.companies.clone())
            .unwrap_or_default())
    }
}

/// Source wrapping a closure, for remote fetchers owned by the host.
pub struct FnSource<F> {
    name: String,
    fetch: F,
}

impl<F> FnSource<F>
where
    F: FnMut() -> Result<Vec<Company>>,
{
    /// Creates a source named `name` that calls `fetch`.
    pub fn new(name: impl Into<String>, fetch: F) -> Self {
        Self {
            name: name.into(),
            fetch,
        }
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<F> CompanySource for FnSource<F>
where
    F: FnMut() -> Result<Vec<Company>>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&mut self) -> Result<Vec<Company>> {
        (self.fetch)()
    }
}

/// Where a [`Loaded`] list came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOrigin {
    /// A fresh cache entry.
    Cache,
    /// The named source.
    Source(String),
    /// Nothing produced any companies.
    Empty,
}

/// Result of [`DirectoryLoader::load`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loaded {
    /// Companies in display order; empty when `origin` is [`LoadOrigin::Empty`].
    pub companies: Vec<Company>,
    /// Where they came from.
    pub origin: LoadOrigin,
}

/// Cache-first loader.
///
/// [`load`](Self::load) returns a fresh non-empty cache entry if one exists.
/// Otherwise sources are tried in the order they were added; the first to
/// return a non-empty list wins and is written to the cache. Source errors
/// are logged and skipped. If every source fails or is empty the result is
/// an empty list.
///
/// The loader also keeps a revision counter. Admin edits call
/// [`invalidate`](Self::invalidate), which drops the cached list and bumps
/// the revision; hosts watching [`revision`](Self::revision) reload when it
/// changes.
pub struct DirectoryLoader<S> {
    cache: Cache<S>,
    sources: Vec<Box<dyn CompanySource>>,
    config: DirectoryConfig,
    revision: u64,
}

impl<S: KeyValueStore> DirectoryLoader<S> {
    /// Creates a loader with no sources, caching into `store`.
    pub fn new(store: S, config: DirectoryConfig) -> Self {
        Self {
            cache: Cache::new(store, config.cache_expiry_ms),
            sources: Vec::new(),
            config,
            revision: 0,
        }
    }

    /// Appends `source` at the lowest priority.
    #[must_use]
    pub fn with_source(mut self, source: impl CompanySource + 'static) -> Self {
        self.push_source(source);
        self
    }

    /// Appends `source` at the lowest priority.
    pub fn push_source(&mut self, source: impl CompanySource + 'static) {
        self.sources.push(Box::new(source));
    }

    /// Names of the configured sources, highest priority first.
    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.name())
    }

    /// Active configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Cache in front of the sources.
    pub fn cache(&self) -> &Cache<S> {
        &self.cache
    }

    /// Current data revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Marks the directory data as changed.
    ///
    /// Removes the cached list so the next [`load`](Self::load) goes back to
    /// the sources, and increments the revision.
    pub fn invalidate(&mut self) {
        self.cache.remove(&self.config.cache_key);
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(revision = self.revision, "directory invalidated");
    }

    /// Loads the company list at time `now_ms`.
    pub fn load(&mut self, now_ms: u64) -> Loaded {
        let key = self.config.cache_key.as_str();
        if let Some(cached) = self.cache.get::<Vec<Company>>(key, now_ms) {
            if !cached.is_empty() {
                tracing::info!(count = cached.len(), "loaded companies from cache");
                return Loaded {
                    companies: cached,
                    origin: LoadOrigin::Cache,
                };
            }
        }

        for source in &mut self.sources {
            let name = source.name().to_owned();
            if !source.is_available() {
                tracing::debug!(source = %name, "source unavailable, skipping");
                continue;
            }
            match source.fetch() {
                Ok(companies) if !companies.is_empty() => {
                    if let Err(err) = self.cache.put(key, &companies, now_ms) {
                        tracing::warn!(error = %err, "failed to cache companies");
                    }
                    tracing::info!(source = %name, count = companies.len(), "loaded companies");
                    return Loaded {
                        companies,
                        origin: LoadOrigin::Source(name),
                    };
                }
                Ok(_) => tracing::debug!(source = %name, "source returned no companies"),
                Err(err) => tracing::warn!(source = %name, error = %err, "source failed"),
            }
        }

        tracing::warn!("no source produced any companies");
        Loaded {
            companies: Vec::new(),
            origin: LoadOrigin::Empty,
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for DirectoryLoader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryLoader")
            .field("cache", &self.cache)
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("config", &self.config)
            .field("revision", &self.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{CompanySource, CsvSource, OverrideSnapshot, OverrideSource};
    use crate::{Company, DirectoryConfig};

    #[test]
    fn csv_source_parses_on_fetch() {
        let mut source = CsvSource::new(
            "Company Name,Website\nAcme,https://acme.io\n",
            DirectoryConfig::default(),
        );
        assert!(source.is_available());
        let companies = source.fetch().unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].id, "acme");
    }

    #[test]
    fn override_source_is_unavailable_without_snapshot() {
        let mut source = OverrideSource::default();
        assert!(!source.is_available());
        assert!(source.fetch().unwrap().is_empty());

        source.set_snapshot(Some(OverrideSnapshot {
            companies: vec![Company::named("Edited")],
            timestamp: 5,
            version: 5,
        }));
        assert!(source.is_available());
        assert_eq!(source.fetch().unwrap()[0].name, "Edited");
    }

    #[test]
    fn snapshot_json_uses_camel_case_companies() {
        let snapshot = OverrideSnapshot::from_json(
            r#"{"companies":[{"name":"A","detroitStory":"s"}],"timestamp":1,"version":2}"#,
        )
        .unwrap();
        assert_eq!(snapshot.companies[0].detroit_story, "s");
        assert_eq!(snapshot.version, 2);
        let back = OverrideSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(back, snapshot);
    }
}
