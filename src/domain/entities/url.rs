//! URL record entity mapping a short code to its original URL.

use chrono::{DateTime, Utc};

/// A stored URL record.
///
/// `short_code` is `None` only for the brief window between the initial insert
/// and the id-derived code assignment (the code is a function of the
/// store-assigned id and cannot be computed before insertion). Records
/// returned from the service layer always carry a code.
///
/// `visit_count` is mutated exclusively by the visit worker's bulk increment;
/// request handlers only ever read it.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_code: Option<String>,
    pub visit_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: Option<String>,
        visit_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            visit_count,
            created_at,
        }
    }

    /// Returns the short code, or an empty string if none is assigned yet.
    pub fn code(&self) -> &str {
        self.short_code.as_deref().unwrap_or_default()
    }
}

/// Input data for creating a new URL record.
///
/// `short_code` is set for custom codes and left `None` for the two-phase
/// insert-then-derive flow.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_code: Option<String>,
}
