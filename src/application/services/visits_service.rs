//! Redirect lookup, visit publication, and stats service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::UrlRepository;
use crate::domain::visit_event::VisitEvent;
use crate::error::AppError;
use crate::infrastructure::cache::{self, CacheStore};
use crate::infrastructure::queue::VisitQueue;

/// Cache key namespace for redirect lookups.
const CACHE_NAMESPACE: &str = "url";

/// Service for the redirect read path and visit statistics.
///
/// The redirect lookup is cache-first with the store as the source of truth;
/// visit events are published to the queue as detached tasks so the redirect
/// response never waits on queue I/O.
pub struct VisitsService {
    url_repository: Arc<dyn UrlRepository>,
    queue: Arc<dyn VisitQueue>,
    cache: Arc<dyn CacheStore>,
    cache_ttl: Duration,
}

impl VisitsService {
    /// Creates a new visits service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        queue: Arc<dyn VisitQueue>,
        cache: Arc<dyn CacheStore>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            url_repository,
            queue,
            cache,
            cache_ttl,
        }
    }

    /// Resolves a short code to its original URL and records the visit.
    ///
    /// # Request Flow
    ///
    /// 1. Check cache for the original URL
    /// 2. On miss, query the store (404 if absent) and populate the cache
    ///    asynchronously
    /// 3. Publish a visit event as a detached task
    /// 4. Return the URL
    ///
    /// The publish is fire-and-forget: its failure is logged, never surfaced,
    /// and the caller does not wait for it. A failure of the detached cache
    /// population is likewise only logged — the response is already on its
    /// way at that point.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short code is unknown.
    /// Returns [`AppError::Internal`] on store errors, and on cache backend
    /// errors: the configured cache is part of the request path, so its
    /// unavailability surfaces to the client rather than silently shifting
    /// the full read load onto the store.
    pub async fn get_original_url(
        &self,
        short_code: &str,
        ip_address: Option<String>,
        user_agent: Option<&str>,
    ) -> Result<String, AppError> {
        let cache_key = cache::key(CACHE_NAMESPACE, "get_original_url", &[short_code]);

        let original_url = match self.cache.get(&cache_key).await? {
            Some(cached_url) => {
                debug!("Cache HIT for {}", cache_key);
                cached_url
            }
            None => {
                debug!("Cache MISS for {}", cache_key);
                let url = self.get_url_or_not_found(short_code).await?;

                // Populate the cache without delaying the redirect.
                let cache = self.cache.clone();
                let ttl = self.cache_ttl;
                let original_url = url.original_url.clone();
                tokio::spawn(async move {
                    if let Err(e) = cache.set(&cache_key, &original_url, Some(ttl)).await {
                        error!("Failed to cache URL: {}", e);
                    }
                });

                url.original_url
            }
        };

        self.publish_visit(short_code, ip_address, user_agent);

        Ok(original_url)
    }

    /// Returns the persisted visit count for a short code.
    ///
    /// Always reads from the store: the count must reflect the last committed
    /// aggregation batch, and counters are never cached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short code is unknown.
    pub async fn get_url_stats(&self, short_code: &str) -> Result<i64, AppError> {
        let url = self.get_url_or_not_found(short_code).await?;
        Ok(url.visit_count)
    }

    async fn get_url_or_not_found(&self, short_code: &str) -> Result<ShortUrl, AppError> {
        self.url_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short code not found", json!({ "code": short_code }))
            })
    }

    /// Publishes a visit event on a detached task.
    ///
    /// The redirect response does not wait for the publish to finish, and a
    /// publish failure must not fail the redirect.
    fn publish_visit(&self, short_code: &str, ip_address: Option<String>, user_agent: Option<&str>) {
        let event = VisitEvent::new(short_code.to_string(), ip_address, user_agent);

        let payload = match serde_json::to_string(&event) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize visit event: {}", e);
                return;
            }
        };

        let queue = self.queue.clone();
        tokio::spawn(async move {
            if let Err(e) = queue.publish(payload).await {
                warn!("Failed to publish visit event: {}", e);
            }
        });
    }
}
