//! Fetch-or-compute cache storage
//!
//! [`CacheStorage`] is the single-direction companion of
//! [`BoxingCache`](super::BoxingCache): key → lazily computed value. The
//! fetch closure runs at most once per key while the entry is absent, even
//! under contention, because it runs while the key's shard is locked.

use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, trace};

use super::config::CacheConfig;
use super::stats::{CacheStats, MetricsCollector};

/// Thread-safe memoization table with optional storage of absent results
///
/// Stored entries are `Option<V>`: `None` entries only exist when
/// [`CacheConfig::store_none_values`] is enabled.
///
/// The fetch closure must not call back into the same storage; a key that
/// hashes to the locked shard would deadlock.
///
/// # Example
/// ```
/// use boxcache_common::cache::{CacheConfig, CacheStorage};
///
/// let storage: CacheStorage<String, usize> =
///     CacheStorage::with_config(CacheConfig::storing_none_values());
///
/// let len = storage.get_from_cache_or_fetch("abc".to_string(), || Some(3));
/// assert_eq!(len, Some(3));
///
/// // The absent result is remembered, so the second closure never runs.
/// assert_eq!(storage.get_from_cache_or_fetch("missing".to_string(), || None), None);
/// assert_eq!(storage.get_from_cache_or_fetch("missing".to_string(), || Some(1)), None);
/// ```
pub struct CacheStorage<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    entries: Arc<DashMap<K, Option<V>>>,
    config: CacheConfig,
    metrics: MetricsCollector,
}

impl<K, V> CacheStorage<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty storage with default configuration
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create an empty storage with the given configuration
    pub fn with_config(config: CacheConfig) -> Self {
        Self { entries: Arc::new(DashMap::new()), config, metrics: MetricsCollector::new() }
    }

    /// Return the cached entry for `key`, or run `fetch` and cache its result
    ///
    /// A `None` result is cached only when `store_none_values` is enabled;
    /// otherwise the next call for `key` fetches again.
    pub fn get_from_cache_or_fetch<F>(&self, key: K, fetch: F) -> Option<V>
    where
        F: FnOnce() -> Option<V>,
    {
        match self.try_get_from_cache_or_fetch(key, || Ok::<_, Infallible>(fetch())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`get_from_cache_or_fetch`](Self::get_from_cache_or_fetch)
    ///
    /// # Errors
    /// Returns the error produced by `fetch`. Errors are never cached.
    pub fn try_get_from_cache_or_fetch<F, E>(&self, key: K, fetch: F) -> Result<Option<V>, E>
    where
        F: FnOnce() -> Result<Option<V>, E>,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                trace!(stored_none = entry.get().is_none(), "storage hit");
                self.record_hit();
                Ok(entry.get().clone())
            }
            Entry::Vacant(entry) => {
                self.record_miss();
                let value = fetch()?;

                if value.is_some() || self.config.store_none_values {
                    entry.insert(value.clone());
                    self.record_insert();
                    debug!(stored_none = value.is_none(), "stored fetched value");
                } else {
                    trace!("fetch returned none, not stored");
                }

                Ok(value)
            }
        }
    }

    /// Get a stored entry without fetching
    ///
    /// The outer `Option` says whether the key is present, the inner one is
    /// the stored value.
    pub fn get(&self, key: &K) -> Option<Option<V>> {
        let found = self.entries.get(key).map(|entry| entry.value().clone());
        if found.is_some() {
            self.record_hit();
        } else {
            self.record_miss();
        }
        found
    }

    /// Check whether `key` has a stored entry
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a stored entry, returning it if present
    pub fn remove(&self, key: &K) -> Option<Option<V>> {
        self.entries.remove(key).map(|(_, value)| value)
    }

    /// Clear all entries from the storage
    pub fn clear(&self) {
        self.entries.clear();

        if self.config.track_metrics {
            self.metrics.reset();
        }
    }

    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.len(), None)
    }

    fn record_hit(&self) {
        if self.config.track_metrics {
            self.metrics.record_hit();
        }
    }

    fn record_miss(&self) {
        if self.config.track_metrics {
            self.metrics.record_miss();
        }
    }

    fn record_insert(&self) {
        if self.config.track_metrics {
            self.metrics.record_insert();
        }
    }
}

impl<K, V> Default for CacheStorage<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for CacheStorage<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            config: self.config,
            metrics: self.metrics.clone(),
        }
    }
}

impl<K, V> fmt::Debug for CacheStorage<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStorage")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}
