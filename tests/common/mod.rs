#![allow(dead_code)]

use kurt::application::services::{ShortenService, VisitsService};
use kurt::infrastructure::cache::MemoryCache;
use kurt::infrastructure::persistence::PgUrlRepository;
use kurt::infrastructure::queue::MemoryQueue;
use kurt::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub async fn create_test_url(pool: &PgPool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar!(
        "INSERT INTO urls (original_url, short_code) VALUES ($1, $2) RETURNING id",
        url,
        code
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn get_visit_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar!("SELECT visit_count FROM urls WHERE short_code = $1", code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_visit_rows(pool: &PgPool, url_id: i64) -> i64 {
    sqlx::query_scalar!(
        r#"SELECT COUNT(*) AS "count!" FROM visits WHERE url_id = $1"#,
        url_id
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> (AppState, Arc<MemoryQueue>, Arc<MemoryCache>) {
    let pool = Arc::new(pool);
    let queue = Arc::new(MemoryQueue::new());
    let cache = Arc::new(MemoryCache::new());

    let url_repo = Arc::new(PgUrlRepository::new(pool.clone()));

    let shorten_service = Arc::new(ShortenService::new(url_repo.clone()));
    let visits_service = Arc::new(VisitsService::new(
        url_repo,
        queue.clone(),
        cache.clone(),
        Duration::from_secs(60),
    ));

    let state = AppState::new(shorten_service, visits_service, pool, cache.clone());

    (state, queue, cache)
}

/// Lets fire-and-forget tasks (cache population, event publish) finish.
pub async fn settle_detached_tasks() {
    tokio::time::sleep(Duration::from_millis(20)).await;
}
