mod common;

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use kurt::domain::visit_event::VisitEvent;
use kurt::domain::visit_worker::VisitWorker;
use kurt::infrastructure::persistence::PgVisitRepository;
use kurt::infrastructure::queue::{MemoryQueue, VisitQueue};

fn worker(queue: Arc<MemoryQueue>, pool: PgPool, batch_size: usize) -> VisitWorker {
    VisitWorker::new(
        queue,
        Arc::new(PgVisitRepository::new(Arc::new(pool))),
        batch_size,
        Duration::from_millis(10),
        Duration::from_millis(50),
    )
}

async fn publish_event(queue: &MemoryQueue, code: &str, ip: &str) {
    let payload = serde_json::to_string(&VisitEvent::new(
        code.to_string(),
        Some(ip.to_string()),
        None,
    ))
    .unwrap();
    queue.publish(payload).await.unwrap();
}

#[sqlx::test]
async fn test_queued_events_fold_into_counter(pool: PgPool) {
    let id = common::create_test_url(&pool, "abc", "https://example.com").await;

    let queue = Arc::new(MemoryQueue::new());
    for i in 0..5 {
        publish_event(&queue, "abc", &format!("10.0.0.{}", i)).await;
    }

    let worker = worker(queue.clone(), pool.clone(), 100);

    assert_eq!(worker.tick().await.unwrap(), 5);
    assert!(queue.is_empty());

    assert_eq!(common::get_visit_count(&pool, "abc").await, 5);
    assert_eq!(common::count_visit_rows(&pool, id).await, 5);
}

#[sqlx::test]
async fn test_single_visit_increments_zero_to_one(pool: PgPool) {
    common::create_test_url(&pool, "first", "https://example.com").await;
    assert_eq!(common::get_visit_count(&pool, "first").await, 0);

    let queue = Arc::new(MemoryQueue::new());
    publish_event(&queue, "first", "127.0.0.1").await;

    let worker = worker(queue, pool.clone(), 100);
    worker.tick().await.unwrap();

    assert_eq!(common::get_visit_count(&pool, "first").await, 1);
}

#[sqlx::test]
async fn test_batches_accumulate(pool: PgPool) {
    common::create_test_url(&pool, "abc", "https://example.com").await;

    let queue = Arc::new(MemoryQueue::new());
    let worker = worker(queue.clone(), pool.clone(), 2);

    for i in 0..5 {
        publish_event(&queue, "abc", &format!("10.0.0.{}", i)).await;
    }

    // Batch-size ticks: 2 + 2 + 1.
    assert_eq!(worker.tick().await.unwrap(), 2);
    assert_eq!(common::get_visit_count(&pool, "abc").await, 2);

    assert_eq!(worker.tick().await.unwrap(), 2);
    assert_eq!(worker.tick().await.unwrap(), 1);
    assert_eq!(worker.tick().await.unwrap(), 0);

    assert_eq!(common::get_visit_count(&pool, "abc").await, 5);
}

#[sqlx::test]
async fn test_unknown_code_event_does_not_poison_batch(pool: PgPool) {
    let id = common::create_test_url(&pool, "real", "https://example.com").await;

    let queue = Arc::new(MemoryQueue::new());
    publish_event(&queue, "real", "1.1.1.1").await;
    publish_event(&queue, "deleted-code", "2.2.2.2").await;
    publish_event(&queue, "real", "3.3.3.3").await;

    let worker = worker(queue, pool.clone(), 100);

    assert_eq!(worker.tick().await.unwrap(), 3);

    assert_eq!(common::get_visit_count(&pool, "real").await, 2);
    assert_eq!(common::count_visit_rows(&pool, id).await, 2);
}

#[sqlx::test]
async fn test_malformed_payload_does_not_poison_batch(pool: PgPool) {
    common::create_test_url(&pool, "ok", "https://example.com").await;

    let queue = Arc::new(MemoryQueue::new());
    publish_event(&queue, "ok", "1.1.1.1").await;
    queue.publish("{broken".to_string()).await.unwrap();

    let worker = worker(queue.clone(), pool.clone(), 100);

    assert_eq!(worker.tick().await.unwrap(), 2);
    assert!(queue.is_empty());
    assert_eq!(common::get_visit_count(&pool, "ok").await, 1);
}
