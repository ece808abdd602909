//! Redis-backed cache implementation.

use super::store::{CacheError, CacheResult, CacheStore};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

/// Shared Redis cache for multi-process deployments.
///
/// Uses a `ConnectionManager` for connection reuse and automatic reconnects.
/// Values are stored as plain strings; TTL expiry is handled natively by
/// Redis. Operation failures surface as [`CacheError`] so the caller can fall
/// back to the database.
pub struct RedisCache {
    client: ConnectionManager,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis cache");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis cache");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.client.clone();

        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| CacheError::Operation(format!("Redis GET failed for {}: {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache HIT: {}", key),
            None => debug!("Cache MISS: {}", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> CacheResult<()> {
        let mut conn = self.client.clone();

        match ttl {
            Some(ttl) => conn
                .set_ex::<_, _, ()>(key, value, ttl.as_secs())
                .await
                .map_err(|e| {
                    CacheError::Operation(format!("Redis SETEX failed for {}: {}", key, e))
                })?,
            None => conn.set::<_, _, ()>(key, value).await.map_err(|e| {
                CacheError::Operation(format!("Redis SET failed for {}: {}", key, e))
            })?,
        }

        debug!("Cache SET: {}", key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.client.clone();

        conn.del::<_, ()>(key)
            .await
            .map_err(|e| CacheError::Operation(format!("Redis DEL failed for {}: {}", key, e)))?;

        debug!("Cache DEL: {}", key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
