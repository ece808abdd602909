//! DTOs for the stats endpoint.

use serde::Serialize;

/// Visit count for a short code, current as of the last committed
/// aggregation batch.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub visits: i64,
}
