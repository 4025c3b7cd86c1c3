//! Cache Registry Module
//!
//! Named, independently configured cache instances. A composition root
//! builds the registry once and hands instances to services explicitly;
//! nothing here is ambient or global.

use std::collections::HashMap;

use serde_json::Value;
use tracing::info;

use crate::cache::{Cache, CacheStats};
use crate::config::{CacheSettings, Config};
use crate::error::{CacheError, Result};

// == Domain Names ==
/// Name of the users instance.
pub const USERS_CACHE: &str = "users";
/// Name of the positions instance.
pub const POSITIONS_CACHE: &str = "positions";
/// Name of the metadata instance.
pub const METADATA_CACHE: &str = "metadata";
/// Name of the stats instance.
pub const STATS_CACHE: &str = "stats";

// == Cache Registry ==
/// Owns one cache instance per registered name.
///
/// Instances store [`serde_json::Value`] so one registry serves every data
/// domain without knowing payload shapes. Each instance has its own
/// capacity, TTL, counters, and lock; operations on one can never observe
/// another's state.
#[derive(Debug, Default)]
pub struct CacheRegistry {
    instances: HashMap<String, Cache<Value>>,
}

impl CacheRegistry {
    // == Constructor ==
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Builds the standard per-domain instances from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::new();
        registry.register(USERS_CACHE, config.users.clone())?;
        registry.register(POSITIONS_CACHE, config.positions.clone())?;
        registry.register(METADATA_CACHE, config.metadata.clone())?;
        registry.register(STATS_CACHE, config.stats.clone())?;
        Ok(registry)
    }

    // == Registration ==
    /// Creates a new instance under `name` and returns a handle to it.
    ///
    /// Fails on a duplicate name or on settings that do not validate; the
    /// registry is left unchanged in either case.
    pub fn register(&mut self, name: &str, settings: CacheSettings) -> Result<Cache<Value>> {
        settings.validate()?;
        if self.instances.contains_key(name) {
            return Err(CacheError::DuplicateInstance(name.to_string()));
        }

        let cache = Cache::new(settings.max_entries, settings.default_ttl);
        self.instances.insert(name.to_string(), cache.clone());
        info!(
            name,
            max_entries = settings.max_entries,
            default_ttl = ?settings.default_ttl,
            "registered cache instance"
        );
        Ok(cache)
    }

    // == Lookup ==
    /// Returns a handle to the named instance, if registered.
    pub fn get(&self, name: &str) -> Option<Cache<Value>> {
        self.instances.get(name).cloned()
    }

    /// Names of all registered instances, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.instances.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the registry holds no instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    // == Stats ==
    /// Snapshots every instance, keyed by name.
    ///
    /// Each snapshot sweeps that instance's stale entries first, as
    /// [`Cache::stats`] always does.
    pub async fn stats(&self) -> HashMap<String, CacheStats> {
        let mut all = HashMap::with_capacity(self.instances.len());
        for (name, cache) in &self.instances {
            all.insert(name.clone(), cache.stats().await);
        }
        all
    }
}
