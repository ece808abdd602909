//! Repository trait for URL record data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stored URL records.
///
/// `short_code` uniqueness is enforced here (unique index); the service layer
/// pre-checks for friendlier conflict errors, but a racing insert still maps
/// to [`AppError::Conflict`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new URL record and returns it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_code` is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by its original URL.
    ///
    /// Used for idempotent de-duplication on shorten requests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<ShortUrl>, AppError>;

    /// Assigns the derived short code to an existing record.
    ///
    /// Second half of the two-phase write: the code is a function of the
    /// store-assigned id and can only be computed after the initial insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has the given id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_short_code(&self, id: i64, short_code: &str) -> Result<ShortUrl, AppError>;
}
