//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{ShortenService, VisitsService};
use crate::infrastructure::cache::CacheStore;

/// Shared state for all request handlers.
///
/// Cheap to clone: every field is an `Arc`. The pool and cache handles are
/// kept alongside the services for the health endpoint.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub visits_service: Arc<VisitsService>,
    pub db: Arc<PgPool>,
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(
        shorten_service: Arc<ShortenService>,
        visits_service: Arc<VisitsService>,
        db: Arc<PgPool>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            shorten_service,
            visits_service,
            db,
            cache,
        }
    }
}
