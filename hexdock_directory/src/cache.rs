// Copyright 2025 the Hexdock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestamped JSON cache over a string key-value store.
//!
//! Entries are stored as `{"payload": ..., "timestamp": <ms>}`. Reads that
//! find an expired entry remove it; reads that find an entry which does not
//! decode are logged and treated as a miss.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Minimal string store backing a [`Cache`].
///
/// Hosts adapt their persistent storage (browser storage, a file, a
/// database table) to this trait. [`MemoryStore`] is provided for tests and
/// ephemeral sessions.
pub trait KeyValueStore {
    /// Returns the value under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> Result<()>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Stored shape of a cache entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Cached value.
    pub payload: T,
    /// Write time in milliseconds.
    pub timestamp: u64,
}

/// Expiring cache of JSON payloads.
#[derive(Clone, Debug)]
pub struct Cache<S> {
    store: S,
    expiry_ms: u64,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wraps `store`; entries older than `expiry_ms` are discarded on read.
    pub fn new(store: S, expiry_ms: u64) -> Self {
        Self { store, expiry_ms }
    }

    /// Expiry window in milliseconds.
    pub fn expiry_ms(&self) -> u64 {
        self.expiry_ms
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Underlying store, mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Writes `payload` under `key`, stamped with `now_ms`.
    ///
    /// # Errors
    ///
    /// Fails if the payload cannot be serialized or the store rejects the
    /// write.
    pub fn put<T: Serialize>(&mut self, key: &str, payload: &T, now_ms: u64) -> Result<()> {
        let entry = CacheEntry {
            payload,
            timestamp: now_ms,
        };
        let json = serde_json::to_string(&entry)?;
        self.store.set(key, json)
    }

    /// Reads the payload under `key` if present and fresh at `now_ms`.
    ///
    /// An entry is stale once strictly more than the expiry window has
    /// passed since it was written; stale entries are removed. Storage and
    /// decoding failures are logged and reported as a miss.
    pub fn get<T: DeserializeOwned>(&mut self, key: &str, now_ms: u64) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key, error = %err, "cache read failed");
                return None;
            }
        };
        let entry: CacheEntry<T> = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding malformed cache entry");
                return None;
            }
        };
        let age = now_ms.saturating_sub(entry.timestamp);
        if age > self.expiry_ms {
            tracing::debug!(key, age_ms = age, "cache entry expired");
            self.remove(key);
            return None;
        }
        Some(entry.payload)
    }

    /// Drops the entry under `key`, logging storage failures.
    pub fn remove(&mut self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            tracing::warn!(key, error = %err, "cache remove failed");
        }
    }
}
