//! Short URL creation service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::base62;

/// Service for creating shortened URLs.
///
/// Handles custom-code conflicts, idempotent de-duplication by original URL,
/// and derivation of the short code from the store-assigned id.
pub struct ShortenService {
    url_repository: Arc<dyn UrlRepository>,
}

impl ShortenService {
    /// Creates a new shorten service.
    pub fn new(url_repository: Arc<dyn UrlRepository>) -> Self {
        Self { url_repository }
    }

    /// Creates a short URL, or returns the existing record for a URL that was
    /// already shortened without a custom code.
    ///
    /// # Code Assignment
    ///
    /// - With `custom_code`: the record is inserted with that code directly.
    /// - Without: the record is inserted first to obtain its id, then updated
    ///   with `base62::encode(id)`. The code cannot be computed before the
    ///   insert because the store assigns the id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `custom_code` is already assigned to
    /// any record (a racing insert is caught by the unique index and mapped
    /// to the same error). Returns [`AppError::Internal`] on database errors.
    pub async fn create_short_url(
        &self,
        original_url: String,
        custom_code: Option<String>,
    ) -> Result<ShortUrl, AppError> {
        if let Some(custom) = custom_code {
            if self.url_repository.find_by_code(&custom).await?.is_some() {
                return Err(AppError::conflict(
                    "Short code already exists",
                    json!({ "code": custom }),
                ));
            }

            return self
                .url_repository
                .create(NewShortUrl {
                    original_url,
                    short_code: Some(custom),
                })
                .await;
        }

        if let Some(existing) = self
            .url_repository
            .find_by_original_url(&original_url)
            .await?
        {
            return Ok(existing);
        }

        let created = self
            .url_repository
            .create(NewShortUrl {
                original_url,
                short_code: None,
            })
            .await?;

        let code = base62::encode(created.id as u64);
        self.url_repository.set_short_code(created.id, &code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;

    fn stored_url(id: i64, code: &str, url: &str) -> ShortUrl {
        ShortUrl::new(id, url.to_string(), Some(code.to_string()), 0, Utc::now())
    }

    #[tokio::test]
    async fn test_create_derives_code_from_assigned_id() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_original_url()
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_create()
            .withf(|new_url| new_url.short_code.is_none())
            .times(1)
            .returning(|new_url| {
                Ok(ShortUrl::new(125, new_url.original_url, None, 0, Utc::now()))
            });

        // 125 = 2 * 62 + 1
        repo.expect_set_short_code()
            .withf(|id, code| *id == 125 && code == "21")
            .times(1)
            .returning(|id, code| Ok(stored_url(id, code, "https://example.com")));

        let service = ShortenService::new(Arc::new(repo));

        let url = service
            .create_short_url("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(url.code(), "21");
    }

    #[tokio::test]
    async fn test_create_is_idempotent_by_original_url() {
        let mut repo = MockUrlRepository::new();

        let existing = stored_url(5, "existing", "https://example.com/a");
        repo.expect_find_by_original_url()
            .withf(|url| url == "https://example.com/a")
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repo.expect_create().times(0);

        let service = ShortenService::new(Arc::new(repo));

        let url = service
            .create_short_url("https://example.com/a".to_string(), None)
            .await
            .unwrap();

        assert_eq!(url.id, 5);
        assert_eq!(url.code(), "existing");
    }

    #[tokio::test]
    async fn test_create_with_custom_code() {
        let mut repo = MockUrlRepository::new();

        repo.expect_find_by_code()
            .withf(|code| code == "promo")
            .times(1)
            .returning(|_| Ok(None));

        repo.expect_create()
            .withf(|new_url| new_url.short_code.as_deref() == Some("promo"))
            .times(1)
            .returning(|_| Ok(stored_url(10, "promo", "https://example.com")));

        // Custom codes skip the dedup-by-URL path entirely.
        repo.expect_find_by_original_url().times(0);
        repo.expect_set_short_code().times(0);

        let service = ShortenService::new(Arc::new(repo));

        let url = service
            .create_short_url(
                "https://example.com".to_string(),
                Some("promo".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(url.code(), "promo");
    }

    #[tokio::test]
    async fn test_create_custom_code_conflict_creates_nothing() {
        let mut repo = MockUrlRepository::new();

        let taken = stored_url(5, "promo", "https://other.com");
        repo.expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(taken.clone())));

        repo.expect_create().times(0);

        let service = ShortenService::new(Arc::new(repo));

        let err = service
            .create_short_url(
                "https://example.com".to_string(),
                Some("promo".to_string()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }
}
