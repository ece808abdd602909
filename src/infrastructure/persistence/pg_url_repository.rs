//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL record storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query!(
            r#"
            INSERT INTO urls (original_url, short_code)
            VALUES ($1, $2)
            RETURNING id, original_url, short_code, visit_count, created_at
            "#,
            new_url.original_url,
            new_url.short_code.as_deref(),
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(ShortUrl::new(
            row.id,
            row.original_url,
            row.short_code,
            row.visit_count,
            row.created_at,
        ))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query!(
            r#"
            SELECT id, original_url, short_code, visit_count, created_at
            FROM urls
            WHERE short_code = $1
            "#,
            short_code
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| {
            ShortUrl::new(
                r.id,
                r.original_url,
                r.short_code,
                r.visit_count,
                r.created_at,
            )
        }))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        // Oldest record wins so repeated shortens stay idempotent.
        let row = sqlx::query!(
            r#"
            SELECT id, original_url, short_code, visit_count, created_at
            FROM urls
            WHERE original_url = $1 AND short_code IS NOT NULL
            ORDER BY id
            LIMIT 1
            "#,
            original_url
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| {
            ShortUrl::new(
                r.id,
                r.original_url,
                r.short_code,
                r.visit_count,
                r.created_at,
            )
        }))
    }

    async fn set_short_code(&self, id: i64, short_code: &str) -> Result<ShortUrl, AppError> {
        let row = sqlx::query!(
            r#"
            UPDATE urls
            SET short_code = $2
            WHERE id = $1
            RETURNING id, original_url, short_code, visit_count, created_at
            "#,
            id,
            short_code
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        let row = row.ok_or_else(|| {
            AppError::not_found("URL record not found", json!({ "id": id }))
        })?;

        Ok(ShortUrl::new(
            row.id,
            row.original_url,
            row.short_code,
            row.visit_count,
            row.created_at,
        ))
    }
}
