//! Router composition.

use axum::{
    Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;

/// Builds the application router.
///
/// # Endpoints
///
/// - `POST /shorten`              - Create a short URL
/// - `GET  /health`               - Service and backend health
/// - `GET  /stats/{short_code}`   - Visit count for a short code
/// - `GET  /{short_code}`         - 307 redirect to the original URL
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/stats/{short_code}", get(stats_handler))
        .route("/{short_code}", get(redirect_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
