//! Process-local FIFO queue backed by an in-memory deque.

use super::visit_queue::{QueueResult, VisitQueue};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// In-memory queue for single-process deployments.
///
/// Items are lost on process restart; visit-count loss is tolerated by
/// design. Supports a single consumer — the mutex serializes access, but two
/// worker instances would split batches unpredictably. The mutex is never
/// held across an await point.
#[derive(Default)]
pub struct MemoryQueue {
    items: Mutex<VecDeque<String>>,
}

impl MemoryQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of queued payloads.
    pub fn len(&self) -> usize {
        self.items.lock().expect("queue mutex poisoned").len()
    }

    /// Returns true if no payloads are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl VisitQueue for MemoryQueue {
    async fn publish(&self, payload: String) -> QueueResult<()> {
        self.items
            .lock()
            .expect("queue mutex poisoned")
            .push_back(payload);
        Ok(())
    }

    async fn get_batch(&self, max: usize) -> QueueResult<Vec<String>> {
        let mut items = self.items.lock().expect("queue mutex poisoned");
        let count = max.min(items.len());
        Ok(items.drain(..count).collect())
    }

    async fn close(&self) -> QueueResult<()> {
        Ok(())
    }
}
