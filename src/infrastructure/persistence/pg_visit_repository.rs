//! PostgreSQL implementation of batched visit persistence.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::NewVisit;
use crate::domain::repositories::VisitRepository;
use crate::error::AppError;

/// PostgreSQL repository for the visit worker's commit step.
///
/// Visit rows and counter increments for one batch are applied inside a
/// single transaction, so a mid-batch failure leaves no partial effects.
pub struct PgVisitRepository {
    pool: Arc<PgPool>,
}

impl PgVisitRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VisitRepository for PgVisitRepository {
    async fn record_batch(
        &self,
        visits: Vec<NewVisit>,
        increments: HashMap<String, i64>,
    ) -> Result<u64, AppError> {
        if visits.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0u64;

        // INSERT..SELECT resolves the owning record by code; events for codes
        // no longer in the store insert nothing and are silently dropped.
        for visit in &visits {
            let result = sqlx::query!(
                r#"
                INSERT INTO visits (url_id, visitor_ip)
                SELECT id, $2::varchar FROM urls WHERE short_code = $1
                "#,
                visit.short_code,
                visit.visitor_ip.as_deref(),
            )
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        // Single delta-based UPDATE for the whole batch: concurrent batches
        // cannot lose increments, unknown codes simply match no row.
        let mut codes = Vec::with_capacity(increments.len());
        let mut deltas = Vec::with_capacity(increments.len());
        for (code, delta) in increments {
            codes.push(code);
            deltas.push(delta);
        }

        sqlx::query!(
            r#"
            UPDATE urls
            SET visit_count = urls.visit_count + batch.delta
            FROM (SELECT unnest($1::text[]) AS code, unnest($2::bigint[]) AS delta) AS batch
            WHERE urls.short_code = batch.code
            "#,
            &codes,
            &deltas,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(inserted)
    }
}
