//! Bidirectional identity cache
//!
//! [`BoxingCache`] maps each distinct value to one canonical [`Handle`] and
//! maps handles back to their values. Entries are created lazily and live as
//! long as the cache; there is no removal.
//!
//! # Locking
//!
//! The forward (value → handle) and reverse (handle → value) tables each sit
//! behind their own mutex. Every check-then-insert on a table happens under a
//! single acquisition of that table's lock. `get_handle` never holds both
//! locks at once; `get_value` takes the forward lock while holding the
//! reverse lock only on a miss. That is the only nesting, so the lock order
//! has no cycle.
//!
//! Value `Clone`, `Eq` and `Hash` run inside the critical sections and must
//! not call back into the same cache.

use std::any::type_name;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use super::config::CacheConfig;
use super::error::{CacheError, CacheResult};
use super::handle::{AnyHandle, Handle};
use super::stats::{CacheStats, MetricsCollector};

/// Thread-safe value ↔ canonical handle cache
///
/// # Type Parameters
/// - `T`: Value type (must be `Eq + Hash + Clone`)
///
/// # Example
/// ```
/// use boxcache_common::cache::{BoxingCache, Handle};
///
/// let cache: BoxingCache<i32> = BoxingCache::new();
///
/// let h1 = cache.get_handle(7);
/// let h2 = cache.get_handle(7);
/// assert!(Handle::ptr_eq(&h1, &h2));
/// assert_eq!(cache.get_value(&h1), 7);
/// ```
pub struct BoxingCache<T>
where
    T: Eq + Hash + Clone,
{
    forward: Arc<Mutex<HashMap<T, Handle<T>>>>,
    reverse: Arc<Mutex<HashMap<Handle<T>, T>>>,
    config: CacheConfig,
    metrics: MetricsCollector,
}

impl<T> BoxingCache<T>
where
    T: Eq + Hash + Clone,
{
    /// Create an empty cache with default configuration
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create an empty cache with the given configuration
    ///
    /// `store_none_values` has no meaning here and is ignored.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            forward: Arc::new(Mutex::new(HashMap::new())),
            reverse: Arc::new(Mutex::new(HashMap::new())),
            config,
            metrics: MetricsCollector::new(),
        }
    }

    /// Get the canonical handle for `value`, allocating it on first request
    ///
    /// Every call with an equal value returns a handle identity-equal to the
    /// first one produced, from any thread.
    pub fn get_handle(&self, value: T) -> Handle<T> {
        let mut forward = self.forward.lock();
        let (handle, created) = match forward.entry(value) {
            Entry::Occupied(entry) => (entry.get().clone(), None),
            Entry::Vacant(entry) => {
                let value = entry.key().clone();
                let handle = entry.insert(Handle::new(value.clone())).clone();
                (handle, Some(value))
            }
        };
        drop(forward);

        let Some(value) = created else {
            trace!(handle = %handle.id(), "forward hit");
            self.record_hit();
            return handle;
        };

        // A concurrent `get_value` on the fresh handle may have registered it.
        self.reverse.lock().entry(handle.clone()).or_insert(value);

        debug!(value_type = type_name::<T>(), handle = %handle.id(), "allocated canonical handle");
        self.record_miss();
        self.record_insert();
        handle
    }

    /// Get the value a handle stands for
    ///
    /// A handle this cache has never seen is registered on the spot: its
    /// contents are decoded, it becomes the canonical handle for that value
    /// unless one already exists, and it is added to the reverse table.
    pub fn get_value(&self, handle: &Handle<T>) -> T {
        let mut reverse = self.reverse.lock();
        let cached = reverse.get(handle).cloned();
        if let Some(value) = cached {
            drop(reverse);
            trace!(handle = %handle.id(), "reverse hit");
            self.record_hit();
            return value;
        }

        let value = (**handle).clone();
        let canonical_gap = {
            let mut forward = self.forward.lock();
            match forward.entry(value.clone()) {
                // `get_handle` allocated this handle and has not reached the
                // reverse table yet.
                Entry::Occupied(entry) if Handle::ptr_eq(entry.get(), handle) => true,
                Entry::Occupied(entry) => {
                    debug!(
                        value_type = type_name::<T>(),
                        handle = %handle.id(),
                        canonical = %entry.get().id(),
                        "registered alias of existing canonical handle"
                    );
                    false
                }
                Entry::Vacant(entry) => {
                    entry.insert(handle.clone());
                    debug!(
                        value_type = type_name::<T>(),
                        handle = %handle.id(),
                        "adopted foreign handle as canonical"
                    );
                    false
                }
            }
        };
        reverse.insert(handle.clone(), value.clone());
        drop(reverse);

        if canonical_gap {
            trace!(handle = %handle.id(), "filled reverse entry of canonical handle");
            self.record_hit();
        } else {
            self.record_miss();
            self.record_insert();
        }
        value
    }

    /// Number of entries in the value → handle table
    pub fn forward_len(&self) -> usize {
        self.forward.lock().len()
    }

    /// Number of entries in the handle → value table
    pub fn reverse_len(&self) -> usize {
        self.reverse.lock().len()
    }

    /// Check if the cache holds no entries
    ///
    /// Each table is locked separately, so this is not an atomic snapshot of
    /// both tables under concurrent inserts.
    pub fn is_empty(&self) -> bool {
        self.forward_len() == 0 && self.reverse_len() == 0
    }

    /// Get cache statistics
    ///
    /// Table sizes are read one lock at a time and may straddle a concurrent
    /// insert.
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.forward_len(), Some(self.reverse_len()))
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

impl<T> BoxingCache<T>
where
    T: Eq + Hash + Clone + Send + Sync + 'static,
{
    /// Get the value behind a type-erased handle
    ///
    /// # Errors
    /// Returns [`CacheError::TypeMismatch`] when `handle` does not wrap a `T`.
    /// The cache is left untouched in that case.
    ///
    /// # Example
    /// ```
    /// use boxcache_common::cache::{AnyHandle, BoxingCache};
    ///
    /// let cache: BoxingCache<bool> = BoxingCache::new();
    /// let erased: AnyHandle = cache.get_handle(true).into_any();
    /// assert!(cache.get_value_any(&erased).unwrap());
    ///
    /// let wrong: AnyHandle = std::sync::Arc::new(1_u8);
    /// assert!(cache.get_value_any(&wrong).is_err());
    /// ```
    pub fn get_value_any(&self, handle: &AnyHandle) -> CacheResult<T> {
        let Some(typed) = Handle::<T>::from_any(handle) else {
            warn!(expected = type_name::<T>(), "handle does not wrap the cached value type");
            return Err(CacheError::type_mismatch::<T>());
        };
        Ok(self.get_value(&typed))
    }
}

impl<T> Default for BoxingCache<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for BoxingCache<T>
where
    T: Eq + Hash + Clone,
{
    /// Clones share the same tables and counters.
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            reverse: Arc::clone(&self.reverse),
            config: self.config,
            metrics: self.metrics.clone(),
        }
    }
}

impl<T> fmt::Debug for BoxingCache<T>
where
    T: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxingCache")
            .field("value_type", &type_name::<T>())
            .field("forward_len", &self.forward_len())
            .field("reverse_len", &self.reverse_len())
            .field("config", &self.config)
            .finish()
    }
}
