//! Background worker folding queued visit events into durable state.
//!
//! The worker is the single consumer of the visit queue: it drains events in
//! batches, appends one visit row per event, and applies per-code counter
//! increments atomically per batch. It runs for the lifetime of the process
//! and never terminates on a processing error.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use tracing::{debug, error, info, warn};

use crate::domain::entities::NewVisit;
use crate::domain::repositories::VisitRepository;
use crate::domain::visit_event::VisitEvent;
use crate::error::AppError;
use crate::infrastructure::queue::{QueueError, VisitQueue};

/// Errors surfaced by a single aggregation cycle.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error(transparent)]
    Store(#[from] AppError),
}

/// Drains the visit queue and commits aggregated batches.
///
/// # Failure Semantics
///
/// - Malformed payloads are logged and dropped; they never abort a batch.
/// - A queue connection failure backs off `reconnect_backoff` before retrying.
/// - Any other error (including a failed batch commit) backs off
///   `poll_interval`; the uncommitted batch's events are lost for the
///   in-memory queue variant, which the at-least-once design tolerates.
pub struct VisitWorker {
    queue: Arc<dyn VisitQueue>,
    visit_repository: Arc<dyn VisitRepository>,
    batch_size: usize,
    poll_interval: Duration,
    reconnect_backoff: Duration,
}

impl VisitWorker {
    /// Creates a worker over a queue and a visit repository.
    pub fn new(
        queue: Arc<dyn VisitQueue>,
        visit_repository: Arc<dyn VisitRepository>,
        batch_size: usize,
        poll_interval: Duration,
        reconnect_backoff: Duration,
    ) -> Self {
        Self {
            queue,
            visit_repository,
            batch_size,
            poll_interval,
            reconnect_backoff,
        }
    }

    /// Runs the aggregation loop until the process shuts down.
    pub async fn run(&self) {
        info!("Visit worker started (batch size: {})", self.batch_size);

        loop {
            match self.tick().await {
                Ok(0) => {
                    debug!("Visit queue is empty, sleeping");
                    tokio::time::sleep(self.poll_interval).await;
                }
                Ok(drained) => {
                    debug!("Processed a batch of {} payloads", drained);
                }
                Err(WorkerError::Queue(QueueError::Connection(e))) => {
                    error!("Visit queue connection error: {}. Retrying...", e);
                    tokio::time::sleep(self.reconnect_backoff).await;
                }
                Err(e) => {
                    error!("Visit aggregation failed: {}", e);
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }

    /// Performs one aggregation cycle and returns the number of payloads
    /// drained from the queue.
    ///
    /// `Ok(0)` means the queue was empty. Public so tests can drain
    /// deterministically instead of polling the loop.
    pub async fn tick(&self) -> Result<usize, WorkerError> {
        let raw_payloads = self.queue.get_batch(self.batch_size).await?;
        if raw_payloads.is_empty() {
            return Ok(0);
        }

        let drained = raw_payloads.len();
        let mut events = Vec::with_capacity(drained);

        for payload in raw_payloads {
            match serde_json::from_str::<VisitEvent>(&payload) {
                Ok(event) => events.push(event),
                Err(e) => {
                    warn!("Skipping malformed visit payload: {} ({})", payload, e);
                    counter!("visits_dropped_total").increment(1);
                }
            }
        }

        if !events.is_empty() {
            self.commit_batch(events).await?;
        }

        Ok(drained)
    }

    /// Persists one batch: a visit row per event plus the per-code counter
    /// deltas, in a single transaction.
    async fn commit_batch(&self, events: Vec<VisitEvent>) -> Result<(), WorkerError> {
        let mut increments: HashMap<String, i64> = HashMap::new();
        for event in &events {
            *increments.entry(event.short_code.clone()).or_insert(0) += 1;
        }

        let visits: Vec<NewVisit> = events
            .into_iter()
            .map(|event| NewVisit {
                short_code: event.short_code,
                visitor_ip: event.ip_address,
            })
            .collect();

        let recorded = self
            .visit_repository
            .record_batch(visits, increments)
            .await?;

        counter!("visits_processed_total").increment(recorded);
        Ok(())
    }
}
