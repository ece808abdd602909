//! DTOs for the health endpoint.

use serde::Serialize;

/// Health report for the service and its backends.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub cache: &'static str,
}
