//! Cache Module
//!
//! In-memory caching with lazy TTL expiration and LRU eviction. The store
//! is the synchronous core; the handle layers shared async access and the
//! memoizing `wrap` on top of it.

mod entry;
mod handle;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use lru::LruTracker;
pub use stats::{CacheMetrics, CacheStats};
pub use store::CacheStore;
