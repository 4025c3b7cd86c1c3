//! Configuration Module
//!
//! Per-instance cache settings plus the process-level profile set, loaded
//! from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

// == Cache Settings ==
/// Settings for a single cache instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSettings {
    /// Maximum number of entries the instance can hold
    pub max_entries: usize,
    /// TTL applied to entries stored without an explicit one
    pub default_ttl: Duration,
}

impl CacheSettings {
    /// Creates settings with the given capacity and default TTL.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            max_entries,
            default_ttl,
        }
    }

    /// Rejects settings no real instance should run with.
    ///
    /// `max_entries` must be at least 1. A zero TTL stays valid; it yields
    /// entries that are stale on their first read.
    pub fn validate(&self) -> Result<()> {
        if self.max_entries == 0 {
            return Err(CacheError::InvalidConfig(
                "max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// == Config ==
/// Cache profiles for every standard data domain.
///
/// Each domain gets its own capacity/TTL pair; instances built from these
/// profiles are fully independent.
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile for the users instance
    pub users: CacheSettings,
    /// Profile for the positions instance
    pub positions: CacheSettings,
    /// Profile for the metadata instance
    pub metadata: CacheSettings,
    /// Profile for the stats instance
    pub stats: CacheSettings,
}

impl Config {
    /// Creates a Config by loading values from environment variables.
    ///
    /// Unset or unparsable variables fall back to the domain default.
    ///
    /// # Environment Variables
    /// - `USERS_CACHE_MAX_ENTRIES` / `USERS_CACHE_TTL_MS` (default: 500 / 30 min)
    /// - `POSITIONS_CACHE_MAX_ENTRIES` / `POSITIONS_CACHE_TTL_MS` (default: 300 / 15 min)
    /// - `METADATA_CACHE_MAX_ENTRIES` / `METADATA_CACHE_TTL_MS` (default: 100 / 60 min)
    /// - `STATS_CACHE_MAX_ENTRIES` / `STATS_CACHE_TTL_MS` (default: 50 / 5 min)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            users: settings_from_env("USERS", defaults.users),
            positions: settings_from_env("POSITIONS", defaults.positions),
            metadata: settings_from_env("METADATA", defaults.metadata),
            stats: settings_from_env("STATS", defaults.stats),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users: CacheSettings::new(500, Duration::from_secs(30 * 60)),
            positions: CacheSettings::new(300, Duration::from_secs(15 * 60)),
            metadata: CacheSettings::new(100, Duration::from_secs(60 * 60)),
            stats: CacheSettings::new(50, Duration::from_secs(5 * 60)),
        }
    }
}

/// Reads one domain's settings from `<PREFIX>_CACHE_MAX_ENTRIES` and
/// `<PREFIX>_CACHE_TTL_MS`.
fn settings_from_env(prefix: &str, defaults: CacheSettings) -> CacheSettings {
    let max_entries = env::var(format!("{prefix}_CACHE_MAX_ENTRIES"))
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(defaults.max_entries);
    let default_ttl = env::var(format!("{prefix}_CACHE_TTL_MS"))
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(defaults.default_ttl);

    CacheSettings::new(max_entries, default_ttl)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles() {
        let config = Config::default();
        assert_eq!(config.users.max_entries, 500);
        assert_eq!(config.users.default_ttl, Duration::from_secs(1800));
        assert_eq!(config.positions.max_entries, 300);
        assert_eq!(config.positions.default_ttl, Duration::from_secs(900));
        assert_eq!(config.metadata.max_entries, 100);
        assert_eq!(config.metadata.default_ttl, Duration::from_secs(3600));
        assert_eq!(config.stats.max_entries, 50);
        assert_eq!(config.stats.default_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_validate_accepts_positive_capacity() {
        let settings = CacheSettings::new(1, Duration::from_secs(60));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let settings = CacheSettings::new(0, Duration::from_secs(60));
        let err = settings.validate().unwrap_err();
        assert_eq!(
            err,
            CacheError::InvalidConfig("max_entries must be at least 1".to_string())
        );
    }

    #[test]
    fn test_validate_accepts_zero_ttl() {
        let settings = CacheSettings::new(10, Duration::ZERO);
        assert!(settings.validate().is_ok());
    }

    // Each env test touches its own domain so parallel runs do not clash.

    #[test]
    fn test_from_env_overrides() {
        env::set_var("USERS_CACHE_MAX_ENTRIES", "42");
        env::set_var("USERS_CACHE_TTL_MS", "1000");

        let config = Config::from_env();
        assert_eq!(config.users.max_entries, 42);
        assert_eq!(config.users.default_ttl, Duration::from_millis(1000));

        env::remove_var("USERS_CACHE_MAX_ENTRIES");
        env::remove_var("USERS_CACHE_TTL_MS");
    }

    #[test]
    fn test_from_env_unparsable_falls_back() {
        env::set_var("STATS_CACHE_MAX_ENTRIES", "lots");

        let config = Config::from_env();
        assert_eq!(config.stats.max_entries, 50);

        env::remove_var("STATS_CACHE_MAX_ENTRIES");
    }

    #[test]
    fn test_from_env_missing_uses_defaults() {
        env::remove_var("METADATA_CACHE_MAX_ENTRIES");
        env::remove_var("METADATA_CACHE_TTL_MS");

        let config = Config::from_env();
        assert_eq!(config.metadata, Config::default().metadata);
    }
}
