//! Configuration Module
//!
//! Loads settings for the in-memory backend from environment variables.

use std::env;
use std::time::Duration;

/// In-memory backend configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Expiration applied to writes that carry none, None = never expire
    pub default_ttl: Option<Duration>,
    /// Interval between background sweeps of expired entries
    pub cleanup_interval: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds, 0 disables it (default: 0)
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let default_ttl_secs: u64 = env::var("CACHE_DEFAULT_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let cleanup_interval_secs: u64 = env::var("CACHE_CLEANUP_INTERVAL")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(1);

        Self {
            default_ttl: (default_ttl_secs > 0).then(|| Duration::from_secs(default_ttl_secs)),
            cleanup_interval: Duration::from_secs(cleanup_interval_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: None,
            cleanup_interval: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl, None);
        assert_eq!(config.cleanup_interval, Duration::from_secs(1));
    }

    // Both env cases live in one test so they cannot race each other.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_CLEANUP_INTERVAL");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("CACHE_DEFAULT_TTL", "30");
        env::set_var("CACHE_CLEANUP_INTERVAL", "5");
        let config = Config::from_env();
        assert_eq!(config.default_ttl, Some(Duration::from_secs(30)));
        assert_eq!(config.cleanup_interval, Duration::from_secs(5));

        env::set_var("CACHE_DEFAULT_TTL", "not-a-number");
        env::set_var("CACHE_CLEANUP_INTERVAL", "0");
        assert_eq!(Config::from_env(), Config::default());

        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_CLEANUP_INTERVAL");
    }
}
