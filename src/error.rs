//! Error types for the cache engine
//!
//! Provides unified error handling using thiserror.
//!
//! Ordinary cache outcomes (miss, staleness, capacity eviction) are return
//! values, not errors, so this enum covers only the configuration and
//! registry surface. A failing `wrap` producer is surfaced to the caller
//! as-is and never converted into a [`CacheError`].

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache construction and registry management.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Instance settings rejected before construction
    #[error("invalid cache configuration: {0}")]
    InvalidConfig(String),

    /// The registry already holds an instance under this name
    #[error("cache instance already registered: {0}")]
    DuplicateInstance(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache engine.
pub type Result<T> = std::result::Result<T, CacheError>;
