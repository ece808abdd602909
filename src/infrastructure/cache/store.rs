//! Cache store trait and error types.

use async_trait::async_trait;
use std::time::Duration;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key-value cache with optional per-entry TTL.
///
/// Implementations must be thread-safe. Backend failures surface as errors;
/// on the request path they are treated as server errors, not as misses. The
/// cache is never the source of truth.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - process-local, lazy expiry
/// - [`crate::infrastructure::cache::RedisCache`] - shared, native expiry
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Retrieves a value by key.
    ///
    /// Returns `Ok(None)` on miss or when the entry's TTL has elapsed.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value under a key.
    ///
    /// With a TTL, the key reads as absent once the TTL elapses; without one,
    /// the entry lives until deleted.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> CacheResult<()>;

    /// Removes a key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Checks whether the cache backend is reachable.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
