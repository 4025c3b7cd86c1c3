//! Memocache - A bounded in-process cache engine
//!
//! TTL expiration, strict LRU eviction, and async memoization for the data
//! domains of a backend that would otherwise hit its database on every read.
//! No persistence, no network surface, no background tasks: expiry is lazy
//! and happens on access or right before a stats snapshot.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use memocache::{cache_key, Cache};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let users: Cache<String> = Cache::new(100, Duration::from_secs(1800));
//!
//! let key = cache_key!("user", "id", 42);
//! let value = users
//!     .wrap(&key, None, || async { anyhow::Ok("alice".to_string()) })
//!     .await?;
//!
//! assert_eq!(value, "alice");
//! assert_eq!(users.get(&key).await, Some("alice".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod key;
pub mod registry;

pub use cache::{Cache, CacheStats, CacheStore};
pub use config::{CacheSettings, Config};
pub use error::{CacheError, Result};
pub use key::generate_key;
pub use registry::CacheRegistry;
