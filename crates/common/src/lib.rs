//! Value interning and memoization caches.
//!
//! # Safety and Quality
//!
//! This crate forbids unsafe code. Handle identity is derived from `Arc`
//! allocation addresses, never from raw pointer dereferences.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: error classification
//! - `observability`: `tracing` instrumentation
//! - `runtime`: the thread-safe caches (enabled by default)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod cache;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use cache::{
    AnyHandle, BoxingCache, CacheConfig, CacheError, CacheResult, CacheStats, CacheStorage, Handle,
    HandleId,
};
#[cfg(feature = "foundation")]
pub use error::{ErrorClassification, ErrorSeverity};
