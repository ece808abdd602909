//! Repository trait for batched visit persistence.

use std::collections::HashMap;

use crate::domain::entities::NewVisit;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the visit worker's commit step.
///
/// A batch is committed in a single transaction: one visit row per event plus
/// one bulk counter update. Either everything in the batch becomes visible or
/// nothing does — partial application after a mid-batch failure cannot occur.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Persists a batch of visits and folds per-code increments into the URL
    /// records' counters, atomically.
    ///
    /// `increments` maps short code → number of events for that code in this
    /// batch. The counter update is expressed as a single delta-based UPDATE
    /// (never read-modify-write), so concurrent batches cannot lose counts.
    /// Codes absent from the store are skipped silently: they contribute no
    /// visit row and no increment, and do not disturb other codes.
    ///
    /// Returns the number of visit rows written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the transaction fails; no partial
    /// effects remain in that case.
    async fn record_batch(
        &self,
        visits: Vec<NewVisit>,
        increments: HashMap<String, i64>,
    ) -> Result<u64, AppError>;
}
