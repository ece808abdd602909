//! Business logic services.
//!
//! - [`ShortenService`] - short URL creation
//! - [`VisitsService`] - redirect lookups, visit publication, and stats

pub mod shorten_service;
pub mod visits_service;

pub use shorten_service::ShortenService;
pub use visits_service::VisitsService;
