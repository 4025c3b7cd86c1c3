//! Cache Statistics Module
//!
//! Running counters recorded by the store, and the post-sweep snapshot
//! handed out to callers.

use serde::Serialize;

// == Cache Metrics ==
/// Running counters for one cache instance.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    /// Successful retrievals of a live entry
    pub hits: u64,
    /// Lookups that found nothing usable (unknown key or stale entry)
    pub misses: u64,
    /// Entries displaced by the capacity policy
    pub evictions: u64,
    /// Stale entries removed lazily, on read or during a sweep
    pub expirations: u64,
}

impl CacheMetrics {
    // == Constructor ==
    /// Creates a metrics record with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// hits / (hits + misses), or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Recording ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }
}

// == Cache Stats ==
/// Point-in-time view of one instance, taken after a full stale-entry sweep.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Entry count once stale entries were swept out
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// `size / max_size` as a percentage string with two decimals,
    /// e.g. `"22.50%"`
    pub utilization_rate: String,
    /// Successful retrievals of a live entry
    pub hits: u64,
    /// Lookups that found nothing usable
    pub misses: u64,
    /// Entries displaced by the capacity policy
    pub evictions: u64,
    /// Stale entries removed lazily
    pub expirations: u64,
    /// hits / (hits + misses) at snapshot time
    pub hit_rate: f64,
}

impl CacheStats {
    /// Builds a snapshot from the post-sweep size and the running counters.
    pub fn new(size: usize, max_size: usize, metrics: &CacheMetrics) -> Self {
        // A zero-capacity store reports 0.00% instead of a division artifact.
        let utilization_rate = if max_size == 0 {
            "0.00%".to_string()
        } else {
            format!("{:.2}%", (size as f64 / max_size as f64) * 100.0)
        };

        Self {
            size,
            max_size,
            utilization_rate,
            hits: metrics.hits,
            misses: metrics.misses,
            evictions: metrics.evictions,
            expirations: metrics.expirations,
            hit_rate: metrics.hit_rate(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_start_at_zero() {
        let metrics = CacheMetrics::new();
        assert_eq!(metrics.hits, 0);
        assert_eq!(metrics.misses, 0);
        assert_eq!(metrics.evictions, 0);
        assert_eq!(metrics.expirations, 0);
        assert_eq!(metrics.hit_rate(), 0.0);
    }

    #[test]
    fn test_metrics_recording() {
        let mut metrics = CacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_eviction();
        metrics.record_expiration();

        assert_eq!(metrics.hits, 2);
        assert_eq!(metrics.misses, 1);
        assert_eq!(metrics.evictions, 1);
        assert_eq!(metrics.expirations, 1);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut metrics = CacheMetrics::new();
        metrics.record_hit();
        metrics.record_miss();
        assert_eq!(metrics.hit_rate(), 0.5);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let mut metrics = CacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        assert_eq!(metrics.hit_rate(), 1.0);
    }

    #[test]
    fn test_utilization_rate_formatting() {
        let stats = CacheStats::new(9, 40, &CacheMetrics::new());
        assert_eq!(stats.utilization_rate, "22.50%");
    }

    #[test]
    fn test_utilization_rate_empty_store() {
        let stats = CacheStats::new(0, 100, &CacheMetrics::new());
        assert_eq!(stats.utilization_rate, "0.00%");
    }

    #[test]
    fn test_utilization_rate_full_store() {
        let stats = CacheStats::new(100, 100, &CacheMetrics::new());
        assert_eq!(stats.utilization_rate, "100.00%");
    }

    #[test]
    fn test_utilization_rate_zero_capacity() {
        let stats = CacheStats::new(0, 0, &CacheMetrics::new());
        assert_eq!(stats.utilization_rate, "0.00%");
    }

    #[test]
    fn test_snapshot_carries_counters() {
        let mut metrics = CacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();

        let stats = CacheStats::new(2, 10, &metrics);
        assert_eq!(stats.size, 2);
        assert_eq!(stats.max_size, 10);
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate, 0.75);
    }

    #[test]
    fn test_snapshot_serializes() {
        let stats = CacheStats::new(1, 4, &CacheMetrics::new());
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"utilization_rate\":\"25.00%\""));
        assert!(json.contains("\"size\":1"));
    }
}
