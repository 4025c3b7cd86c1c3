//! Cache Entry Module
//!
//! Defines the unit of storage: a value paired with its absolute expiry.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single stored value and the instant it goes stale.
///
/// Expiry is absolute (Unix milliseconds), computed once when the entry is
/// written. Every entry expires; a zero TTL yields an entry that is stale
/// from the moment it is created, which is the defined meaning of a
/// non-positive TTL rather than an error.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        Self {
            value,
            expires_at: now_millis().saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has gone stale.
    ///
    /// Boundary condition: the entry counts as expired from the exact instant
    /// the current time reaches `expires_at`, so once the TTL has fully
    /// elapsed the entry is already stale.
    pub fn is_expired(&self) -> bool {
        now_millis() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns the current Unix timestamp in milliseconds.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}
