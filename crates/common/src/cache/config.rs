//! Cache configuration types and builder patterns
//!
//! Both cache flavors are unbounded, so configuration only covers metrics
//! collection and whether absent fetch results are remembered.

/// Configuration for cache behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheConfig {
    /// Whether to collect hit/miss/insert counters
    pub track_metrics: bool,

    /// Whether a fetch that produced `None` is stored and served on later
    /// lookups. Only consulted by [`CacheStorage`](super::CacheStorage).
    pub store_none_values: bool,
}

impl CacheConfig {
    /// Create a new configuration builder
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }

    /// Quick preset with metrics tracking enabled
    ///
    /// # Example
    /// ```
    /// use boxcache_common::cache::CacheConfig;
    ///
    /// let config = CacheConfig::tracked();
    /// assert!(config.track_metrics);
    /// ```
    pub fn tracked() -> Self {
        Self { track_metrics: true, store_none_values: false }
    }

    /// Quick preset that remembers `None` fetch results
    ///
    /// # Example
    /// ```
    /// use boxcache_common::cache::CacheConfig;
    ///
    /// let config = CacheConfig::storing_none_values();
    /// assert!(config.store_none_values);
    /// ```
    pub fn storing_none_values() -> Self {
        Self { track_metrics: false, store_none_values: true }
    }
}

/// Builder for CacheConfig with fluent API
#[derive(Debug, Default)]
pub struct CacheConfigBuilder {
    config: CacheConfig,
}

impl CacheConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable metrics tracking
    pub fn track_metrics(mut self, enabled: bool) -> Self {
        self.config.track_metrics = enabled;
        self
    }

    /// Enable or disable storing `None` fetch results
    pub fn store_none_values(mut self, enabled: bool) -> Self {
        self.config.store_none_values = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CacheConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache::config.
    use super::*;

    /// Validates `CacheConfig::default` behavior for the cache config default
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `!config.track_metrics` evaluates to true.
    /// - Ensures `!config.store_none_values` evaluates to true.
    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert!(!config.track_metrics);
        assert!(!config.store_none_values);
    }

    /// Validates the presets for the cache config preset scenario.
    ///
    /// Assertions:
    /// - Confirms `CacheConfig::tracked()` only enables metrics.
    /// - Confirms `CacheConfig::storing_none_values()` only enables none
    ///   storage.
    #[test]
    fn test_cache_config_presets() {
        let tracked = CacheConfig::tracked();
        assert!(tracked.track_metrics);
        assert!(!tracked.store_none_values);

        let storing = CacheConfig::storing_none_values();
        assert!(!storing.track_metrics);
        assert!(storing.store_none_values);
    }

    /// Validates `CacheConfig::builder` behavior for the cache config builder
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `config.track_metrics` evaluates to true.
    /// - Ensures `config.store_none_values` evaluates to true.
    #[test]
    fn test_cache_config_builder() {
        let config = CacheConfig::builder().track_metrics(true).store_none_values(true).build();

        assert!(config.track_metrics);
        assert!(config.store_none_values);
    }

    /// Validates `CacheConfigBuilder::new` behavior for the cache config
    /// builder partial scenario.
    ///
    /// Assertions:
    /// - Confirms a builder with one setting matches the default elsewhere.
    #[test]
    fn test_cache_config_builder_partial() {
        let config = CacheConfigBuilder::new().track_metrics(true).build();

        assert_eq!(config, CacheConfig { track_metrics: true, ..CacheConfig::default() });
    }
}
