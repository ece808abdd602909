//! Handler for visit statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the visit count for a short code.
///
/// # Endpoint
///
/// `GET /stats/{short_code}`
///
/// The count is read from the store, bypassing the cache — it reflects all
/// batches the visit worker has committed. Events still queued or in-flight
/// are not yet included (documented consistency window).
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let visits = state.visits_service.get_url_stats(&short_code).await?;

    Ok(Json(StatsResponse { visits }))
}
