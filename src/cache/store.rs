//! Cache Store Module
//!
//! The engine core: HashMap storage combined with LRU recency tracking and
//! lazy TTL expiration. Single-threaded; concurrency lives in the handle layer.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheMetrics, CacheStats, LruTracker};

// == Cache Store ==
/// Bounded key-value store with LRU eviction and per-entry TTL.
///
/// Expiration is access-driven: stale entries are removed when read, or in
/// bulk right before a [`stats`](CacheStore::stats) snapshot. Until one of
/// those points fires, a stale entry keeps its slot and counts toward
/// capacity.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Running hit/miss/eviction/expiration counters
    metrics: CacheMetrics,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL applied to entries stored without an explicit one
    default_ttl: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new store with the given capacity and default TTL.
    ///
    /// Any configuration is accepted here, including `max_entries == 0`
    /// (under which every `set` evicts the previous survivor). Fail-fast
    /// validation of real configurations belongs to the registry layer.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the store can hold
    /// * `default_ttl` - TTL for entries stored without an explicit one
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            metrics: CacheMetrics::new(),
            max_entries,
            default_ttl,
        }
    }

    // == Get ==
    /// Retrieves a clone of the value for `key`, refreshing its recency.
    ///
    /// A stale entry is removed here and reported as a miss; the removal is
    /// counted as an expiration, not an eviction.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let entry = match self.entries.get(key) {
            Some(entry) => entry,
            None => {
                self.metrics.record_miss();
                return None;
            }
        };

        if entry.is_expired() {
            self.entries.remove(key);
            self.lru.remove(key);
            self.metrics.record_expiration();
            self.metrics.record_miss();
            trace!(key, "removed expired entry on read");
            return None;
        }

        let value = entry.value.clone();
        self.lru.touch(key);
        self.metrics.record_hit();
        Some(value)
    }

    // == Set ==
    /// Stores `value` under `key` with the given TTL (default when `None`).
    ///
    /// An existing entry under the same key is discarded first, so an
    /// overwrite resets value, expiry, and recency in one step. At capacity
    /// exactly one entry is evicted before the insert, the least recently
    /// used; capacity is never exceeded mid-operation.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL (uses the store default if `None`)
    pub fn set(&mut self, key: String, value: V, ttl: Option<Duration>) {
        if self.entries.remove(&key).is_some() {
            self.lru.remove(&key);
        }

        if self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.lru.evict_oldest() {
                self.entries.remove(&evicted);
                self.metrics.record_eviction();
                debug!(key = %evicted, "evicted least recently used entry");
            }
        }

        let ttl = ttl.unwrap_or(self.default_ttl);
        self.entries.insert(key.clone(), CacheEntry::new(value, ttl));
        self.lru.touch(&key);
    }

    // == Delete ==
    /// Removes `key` unconditionally, stale or live.
    ///
    /// Returns whether the key was present.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.lru.remove(key);
        }
        removed
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        if dropped > 0 {
            debug!(dropped, "cleared all entries");
        }
    }

    /// Removes every entry whose key starts with `prefix`, stale or live.
    ///
    /// Returns the number of entries removed.
    pub fn clear_by_prefix(&mut self, prefix: &str) -> usize {
        let matching: Vec<String> = self
            .entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect();

        for key in &matching {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        if !matching.is_empty() {
            debug!(prefix, removed = matching.len(), "cleared entries by prefix");
        }
        matching.len()
    }

    // == Stats ==
    /// Sweeps every stale entry, then snapshots size, capacity, utilization,
    /// and counters.
    ///
    /// The sweep is the only bulk expiry point; `size` in the snapshot never
    /// includes stale entries.
    pub fn stats(&mut self) -> CacheStats {
        let swept = self.sweep_expired();
        if swept > 0 {
            debug!(swept, "removed expired entries before stats snapshot");
        }
        CacheStats::new(self.entries.len(), self.max_entries, &self.metrics)
    }

    /// Removes every stale entry, returning how many were dropped.
    fn sweep_expired(&mut self) -> usize {
        let stale: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &stale {
            self.entries.remove(key);
            self.lru.remove(key);
            self.metrics.record_expiration();
        }

        stale.len()
    }

    // == Size ==
    /// Number of entries currently held, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
