//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/long/path", "custom_code": "promo" }
/// ```
///
/// `custom_code` is optional. Shortening the same URL twice without a custom
/// code returns the same short code both times.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the custom code is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let url = state
        .shorten_service
        .create_short_url(payload.url, payload.custom_code)
        .await?;

    Ok(Json(ShortenResponse {
        short_code: url.code().to_string(),
        original_url: url.original_url,
    }))
}
