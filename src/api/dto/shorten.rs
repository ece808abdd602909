//! DTOs for the shorten endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Path segments claimed by fixed routes; a short link under one of these
/// would be shadowed by the route and never resolve.
const RESERVED_CODES: &[&str] = &["health", "shorten", "stats"];

fn validate_not_reserved(code: &str) -> Result<(), ValidationError> {
    if RESERVED_CODES.contains(&code) {
        return Err(ValidationError::new("reserved_code"));
    }
    Ok(())
}

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional caller-supplied short code (validated for length, charset,
    /// and collision with fixed routes).
    #[validate(length(min = 1, max = 50))]
    #[validate(regex(path = "*CUSTOM_CODE_REGEX"))]
    #[validate(custom(function = validate_not_reserved))]
    pub custom_code: Option<String>,
}

/// Response for a created (or deduplicated) short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub original_url: String,
}
