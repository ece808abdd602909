//! Visit queue trait and error types.

use async_trait::async_trait;

/// Errors that can occur during queue operations.
///
/// The distinction matters to the visit worker: `Connection` errors trigger a
/// longer reconnect backoff, anything else the default short backoff.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Queue connection error: {0}")]
    Connection(String),
    #[error("Queue operation error: {0}")]
    Operation(String),
}

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// FIFO queue of opaque visit-event payloads.
///
/// Payloads are serialized [`crate::domain::visit_event::VisitEvent`] JSON;
/// the queue itself never inspects them. Delivery is at-least-once: a batch
/// handed to a consumer is removed from the queue, and a consumer crash after
/// retrieval loses that batch (accepted for visit accounting).
///
/// # Implementations
///
/// - [`crate::infrastructure::queue::MemoryQueue`] - single-consumer, in-process
/// - [`crate::infrastructure::queue::RedisQueue`] - shared, multi-consumer safe
#[async_trait]
pub trait VisitQueue: Send + Sync {
    /// Appends a payload to the queue.
    async fn publish(&self, payload: String) -> QueueResult<()>;

    /// Removes and returns up to `max` payloads, oldest first.
    ///
    /// Never blocks waiting for more items: returns whatever is immediately
    /// available, possibly an empty batch. The read-and-remove must be atomic
    /// with respect to other consumers — no two consumers may receive the
    /// same payload.
    async fn get_batch(&self, max: usize) -> QueueResult<Vec<String>>;

    /// Releases backend resources. Publishing after close is undefined.
    async fn close(&self) -> QueueResult<()>;
}
