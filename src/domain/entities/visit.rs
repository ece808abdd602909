//! Visit entity representing one recorded access to a short URL.

use chrono::{DateTime, Utc};

/// A persisted visit record.
///
/// Append-only: visits are written in batches by the visit worker and never
/// updated or deleted. `visited_at` is assigned at persistence time, not at
/// the original request time.
#[derive(Debug, Clone)]
pub struct Visit {
    pub id: i64,
    pub url_id: i64,
    pub visitor_ip: Option<String>,
    pub visited_at: DateTime<Utc>,
}

/// Input data for appending a visit record.
///
/// Carries the short code rather than a url id: the owning record is resolved
/// at persistence time, and visits referencing codes no longer in the store
/// are silently skipped.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub short_code: String,
    pub visitor_ip: Option<String>,
}
