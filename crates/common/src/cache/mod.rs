//! Identity and memoization caches
//!
//! This module provides two unbounded, thread-safe caches that live as long
//! as their owner:
//!
//! - [`BoxingCache`]: maps each distinct value to one canonical shared
//!   [`Handle`] and back, so equal values share an allocation and can be
//!   compared by identity.
//! - [`CacheStorage`]: key → lazily computed value, with optional storage of
//!   absent results.
//!
//! Neither cache evicts or expires entries.
//!
//! # Examples
//!
//! ## Canonical handles
//! ```
//! use boxcache_common::cache::{BoxingCache, Handle};
//!
//! let cache: BoxingCache<u64> = BoxingCache::new();
//!
//! let a = cache.get_handle(42);
//! let b = cache.get_handle(42);
//! assert!(Handle::ptr_eq(&a, &b));
//! assert_eq!(cache.get_value(&b), 42);
//! ```
//!
//! ## Fetch or compute
//! ```
//! use boxcache_common::cache::CacheStorage;
//!
//! let storage: CacheStorage<String, usize> = CacheStorage::new();
//! let value = storage.get_from_cache_or_fetch("key".to_string(), || {
//!     // Expensive computation only runs if the key is absent
//!     Some(expensive_computation())
//! });
//! assert_eq!(value, Some(42));
//! # fn expensive_computation() -> usize { 42 }
//! ```
//!
//! # Thread Safety
//!
//! Both caches are `Send + Sync` for `Send + Sync` contents, and clones share
//! the underlying tables:
//!
//! ```
//! use std::thread;
//!
//! use boxcache_common::cache::{BoxingCache, Handle};
//!
//! let cache: BoxingCache<i32> = BoxingCache::new();
//!
//! let workers: Vec<_> = (0..8)
//!     .map(|_| {
//!         let cache = cache.clone();
//!         thread::spawn(move || cache.get_handle(42))
//!     })
//!     .collect();
//!
//! let handles: Vec<_> = workers.into_iter().map(|w| w.join().unwrap()).collect();
//! assert!(handles.windows(2).all(|pair| Handle::ptr_eq(&pair[0], &pair[1])));
//! ```

mod boxing;
mod config;
mod error;
mod handle;
mod stats;
mod storage;

// Re-export public API
pub use boxing::BoxingCache;
pub use config::{CacheConfig, CacheConfigBuilder};
pub use error::{CacheError, CacheResult};
pub use handle::{AnyHandle, Handle, HandleId};
pub use stats::CacheStats;
pub use storage::CacheStorage;
