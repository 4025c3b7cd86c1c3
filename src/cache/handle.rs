//! Cache Handle Module
//!
//! Shared async access to a single store, plus the memoizing `wrap`
//! combinator that backs the read-through call sites.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};

// == Cache Handle ==
/// Cloneable async handle to one cache instance.
///
/// Clones share the same underlying store; distinct instances share nothing,
/// locks included. Operations that change structure take the write lock, and
/// that includes [`get`](Cache::get) because a read moves the entry to the
/// most recently used position.
#[derive(Debug, Clone)]
pub struct Cache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
}

impl<V: Clone> Cache<V> {
    // == Constructor ==
    /// Creates an independent instance with the given capacity and default
    /// TTL.
    pub fn new(max_entries: usize, default_ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(max_entries, default_ttl))),
        }
    }

    // == Core Operations ==
    /// Retrieves a clone of the live value for `key`, refreshing its
    /// recency. Stale entries are removed here and reported as absent.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.write().await.get(key)
    }

    /// Stores `value` under `key`, evicting the least recently used entry
    /// first when at capacity. `None` falls back to the instance default
    /// TTL.
    pub async fn set(&self, key: String, value: V, ttl: Option<Duration>) {
        self.store.write().await.set(key, value, ttl);
    }

    /// Removes `key` regardless of staleness; returns whether it was
    /// present.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    /// Removes every entry.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Removes every entry whose key starts with `prefix`; returns how many
    /// were removed.
    pub async fn clear_by_prefix(&self, prefix: &str) -> usize {
        self.store.write().await.clear_by_prefix(prefix)
    }

    /// Sweeps stale entries, then snapshots size, capacity, utilization,
    /// and counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.write().await.stats()
    }

    /// Number of entries currently held, stale ones included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether the instance holds no entries at all.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Wrap ==
    /// Memoizes `producer` under `key`.
    ///
    /// A live cached value is returned as-is and the producer never runs.
    /// On a miss the producer runs with no lock held, its value is stored
    /// under `key` with `ttl`, and returned.
    ///
    /// Concurrent callers missing on the same key each run their own
    /// producer; every result is written and the last write wins. Callers
    /// that need one producer run per key must coordinate upstream.
    ///
    /// A producer error is passed through unchanged and nothing is written.
    pub async fn wrap<F, Fut, E>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        producer: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get(key).await {
            return Ok(hit);
        }

        let value = producer().await?;
        self.set(key.to_string(), value.clone(), ttl).await;
        Ok(value)
    }
}
