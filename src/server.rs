//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, backend selection, worker spawning, and the
//! Axum server lifecycle.

use crate::application::services::{ShortenService, VisitsService};
use crate::config::{Backend, Config};
use crate::domain::visit_worker::VisitWorker;
use crate::infrastructure::cache::{CacheStore, MemoryCache, RedisCache};
use crate::infrastructure::persistence::{PgUrlRepository, PgVisitRepository};
use crate::infrastructure::queue::{MemoryQueue, RedisQueue, VisitQueue};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Cache backend (in-memory or Redis, per configuration)
/// - Visit event queue backend (in-memory or Redis, per configuration)
/// - Background visit worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database or Redis connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let cache: Arc<dyn CacheStore> = match config.cache_backend {
        Backend::InMemory => {
            tracing::info!("Cache backend: in-memory");
            Arc::new(MemoryCache::new())
        }
        Backend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis cache backend")?;
            tracing::info!("Cache backend: redis");
            Arc::new(RedisCache::connect(redis_url).await?)
        }
    };

    let queue: Arc<dyn VisitQueue> = match config.queue_backend {
        Backend::InMemory => {
            tracing::info!("Queue backend: in-memory");
            Arc::new(MemoryQueue::new())
        }
        Backend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis queue backend")?;
            tracing::info!("Queue backend: redis");
            Arc::new(RedisQueue::connect(redis_url, &config.queue_name).await?)
        }
    };

    let pool = Arc::new(pool);
    let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));
    let visit_repository = Arc::new(PgVisitRepository::new(pool.clone()));

    let worker = VisitWorker::new(
        queue.clone(),
        visit_repository,
        config.visit_batch_size,
        Duration::from_secs(config.worker_poll_interval_secs),
        Duration::from_secs(config.worker_reconnect_backoff_secs),
    );
    tokio::spawn(async move { worker.run().await });
    tracing::info!("Visit worker started");

    let shorten_service = Arc::new(ShortenService::new(url_repository.clone()));
    let visits_service = Arc::new(VisitsService::new(
        url_repository,
        queue.clone(),
        cache.clone(),
        Duration::from_secs(config.cache_ttl_seconds),
    ));

    let state = AppState::new(shorten_service, visits_service, pool, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Shutting down");
    if let Err(e) = queue.close().await {
        tracing::warn!("Failed to close visit queue: {}", e);
    }

    Ok(())
}

/// Resolves on SIGINT or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
