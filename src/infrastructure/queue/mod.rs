//! Visit event queue decoupling the redirect path from persistence.
//!
//! Provides a [`VisitQueue`] trait with two interchangeable backends:
//! - [`MemoryQueue`] - process-local FIFO; contents are lost on restart
//! - [`RedisQueue`] - shared Redis list; safe for multiple consumers
//!
//! Publishing is fire-and-forget from the redirect path's perspective; the
//! visit worker drains the queue in batches.

mod memory_queue;
mod redis_queue;
mod visit_queue;

pub use memory_queue::MemoryQueue;
pub use redis_queue::RedisQueue;
pub use visit_queue::{QueueError, QueueResult, VisitQueue};
