//! Read-through caching layer for redirect lookups.
//!
//! Provides a [`CacheStore`] trait with two interchangeable backends:
//! - [`MemoryCache`] - process-local map with lazy TTL expiry
//! - [`RedisCache`] - shared Redis-backed cache with native expiry
//!
//! The cache is strictly an optimization: callers must produce identical
//! results with the cache disabled, empty, or populated. Visit counters are
//! never cached.

mod memory_cache;
mod redis_cache;
mod store;

pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;
pub use store::{CacheError, CacheResult, CacheStore};

/// Builds a deterministic cache key from a namespace, an operation name, and
/// the ordered arguments of the cached call.
///
/// Two calls with identical arguments always produce the same key, so there
/// is exactly one key scheme across backends: `namespace:operation:arg:…`.
pub fn key(namespace: &str, operation: &str, args: &[&str]) -> String {
    let mut key = format!("{}:{}", namespace, operation);
    for arg in args {
        key.push(':');
        key.push_str(arg);
    }
    key
}
