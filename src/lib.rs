//! # Kurt
//!
//! A URL shortening service with asynchronous visit accounting.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//!
//! - **`api`** - HTTP surface: request/response DTOs and Axum handlers
//! - **`application`** - Services orchestrating shortening, redirects, and stats
//! - **`domain`** - Entities, repository traits, visit events, and the
//!   background visit worker
//! - **`infrastructure`** - PostgreSQL repositories, cache backends, and
//!   visit-event queue backends
//!
//! ## Request Flow
//!
//! ```text
//! POST /shorten ─▶ ShortenService ─▶ UrlRepository ─▶ PostgreSQL
//!
//! GET /{code} ─▶ VisitsService ─▶ cache ─▶ store (on miss)
//!                      │
//!                      └─▶ VisitQueue ─▶ VisitWorker ─▶ visits + counters
//! ```
//!
//! Redirects never wait on visit accounting: events are published to the
//! queue from a detached task and folded into the store by the worker in
//! batches.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types, re-exported for convenience.
pub mod prelude {
    pub use crate::application::services::{ShortenService, VisitsService};
    pub use crate::config::Config;
    pub use crate::domain::entities::{NewShortUrl, NewVisit, ShortUrl, Visit};
    pub use crate::domain::repositories::{UrlRepository, VisitRepository};
    pub use crate::domain::visit_event::VisitEvent;
    pub use crate::domain::visit_worker::VisitWorker;
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::CacheStore;
    pub use crate::infrastructure::queue::VisitQueue;
    pub use crate::state::AppState;
}
