//! Redis-backed queue implementation using a list.

use super::visit_queue::{QueueError, QueueResult, VisitQueue};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// Shared Redis queue for multi-process deployments.
///
/// Payloads are appended with `RPUSH` and drained with `LPOP <key> <count>`,
/// a single atomic read-and-remove — concurrent consumers never receive the
/// same item, so multiple worker processes can share one queue.
pub struct RedisQueue {
    client: ConnectionManager,
    queue_key: String,
}

impl RedisQueue {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// `queue_key` names the Redis list holding the events.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Connection`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, queue_key: &str) -> QueueResult<Self> {
        info!("Connecting to Redis queue '{}'", queue_key);

        let client = Client::open(redis_url).map_err(|e| {
            QueueError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| QueueError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| QueueError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis queue '{}'", queue_key);

        Ok(Self {
            client: manager,
            queue_key: queue_key.to_string(),
        })
    }
}

/// Classifies a Redis failure so the worker can pick the right backoff.
fn map_redis_error(context: &str, e: redis::RedisError) -> QueueError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout() {
        QueueError::Connection(format!("{}: {}", context, e))
    } else {
        QueueError::Operation(format!("{}: {}", context, e))
    }
}

#[async_trait]
impl VisitQueue for RedisQueue {
    async fn publish(&self, payload: String) -> QueueResult<()> {
        let mut conn = self.client.clone();

        conn.rpush::<_, _, ()>(&self.queue_key, payload)
            .await
            .map_err(|e| map_redis_error("Redis RPUSH failed", e))?;

        Ok(())
    }

    async fn get_batch(&self, max: usize) -> QueueResult<Vec<String>> {
        let Some(count) = NonZeroUsize::new(max) else {
            return Ok(Vec::new());
        };

        let mut conn = self.client.clone();

        let items: Option<Vec<String>> = conn
            .lpop(&self.queue_key, Some(count))
            .await
            .map_err(|e| map_redis_error("Redis LPOP failed", e))?;
        let items = items.unwrap_or_default();

        if !items.is_empty() {
            debug!("Drained {} payloads from '{}'", items.len(), self.queue_key);
        }

        Ok(items)
    }

    async fn close(&self) -> QueueResult<()> {
        // ConnectionManager closes its connections on drop.
        Ok(())
    }
}
