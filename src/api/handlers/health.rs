//! Handler for the health endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports service and backend health.
///
/// # Endpoint
///
/// `GET /health`
///
/// Pings the database and the cache backend. Both are part of the request
/// path, so the overall status is `ok` only when both are reachable.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await
        .is_ok();

    let cache_ok = state.cache.health_check().await;

    Json(HealthResponse {
        status: if database_ok && cache_ok {
            "ok"
        } else {
            "unavailable"
        },
        database: if database_ok { "ok" } else { "unavailable" },
        cache: if cache_ok { "ok" } else { "unavailable" },
    })
}
