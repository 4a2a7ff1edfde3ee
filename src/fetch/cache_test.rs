use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::models::{Task, TaskStatus};

use super::*;

fn list(status: &str, titles: &[&str]) -> TaskList {
    TaskList {
        status: status.to_string(),
        tasks: titles
            .iter()
            .map(|t| Task::new(*t, TaskStatus::Running))
            .collect(),
    }
}

/// Test double serving canned responses per path. Responses for the gated
/// path are held back until `release` is called.
struct GatedFetcher {
    calls: AtomicUsize,
    gate: Notify,
    gated_path: Option<String>,
    responses: HashMap<String, Result<TaskList, FetchError>>,
}

impl GatedFetcher {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
            gated_path: None,
            responses: HashMap::new(),
        }
    }

    fn with_response(mut self, path: &str, response: Result<TaskList, FetchError>) -> Self {
        self.responses.insert(path.to_string(), response);
        self
    }

    fn with_gate(mut self, path: &str) -> Self {
        self.gated_path = Some(path.to_string());
        self
    }

    fn release(&self) {
        self.gate.notify_one();
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for GatedFetcher {
    async fn fetch(&self, path: &str) -> Result<TaskList, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.gated_path.as_deref() == Some(path) {
            self.gate.notified().await;
        }
        self.responses
            .get(path)
            .cloned()
            .unwrap_or(Ok(TaskList::default()))
    }
}

#[tokio::test]
async fn test_concurrent_requests_share_one_fetch() {
    let fetcher = Arc::new(
        GatedFetcher::new()
            .with_response("/t", Ok(list("running", &["a"])))
            .with_gate("/t"),
    );
    let cache = Arc::new(TaskCache::new(fetcher.clone()));

    let first = tokio::spawn({
        let cache = Arc::clone(&cache);
        async move { cache.refresh("/t").await }
    });
    let second = tokio::spawn({
        let cache = Arc::clone(&cache);
        async move { cache.refresh("/t").await }
    });

    // Let both callers join the in-flight request before releasing it.
    tokio::time::sleep(Duration::from_millis(50)).await;
    fetcher.release();

    let first = first.await.unwrap().expect("first refresh");
    let second = second.await.unwrap().expect("second refresh");

    assert_eq!(fetcher.calls(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.status, "running");
}

#[tokio::test]
async fn test_get_serves_cached_value_without_refetch() {
    let fetcher = Arc::new(GatedFetcher::new().with_response("/t", Ok(list("done", &["a", "b"]))));
    let cache = TaskCache::new(fetcher.clone());

    assert!(cache.peek("/t").await.is_none());
    assert!(cache.last_fetched("/t").await.is_none());

    cache.refresh("/t").await.expect("initial refresh");
    assert!(cache.last_fetched("/t").await.is_some());

    // Remount: served from cache, no second network call.
    let cached = cache.get("/t").await.expect("cached get");
    assert_eq!(cached.tasks.len(), 2);
    assert_eq!(fetcher.calls(), 1);
    assert!(cache.peek("/t").await.is_some());
}

#[tokio::test]
async fn test_errors_are_not_cached() {
    let fetcher =
        Arc::new(GatedFetcher::new().with_response("/t", Err(FetchError::Status(503))));
    let cache = TaskCache::new(fetcher.clone());

    let err = cache.refresh("/t").await.expect_err("expected fetch error");
    assert_eq!(err, FetchError::Status(503));
    assert!(cache.peek("/t").await.is_none());
    assert!(cache.last_fetched("/t").await.is_none());

    // A later get goes back to the network instead of replaying the error.
    let _ = cache.get("/t").await;
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn test_pending_fetch_for_old_key_cannot_touch_new_key() {
    let fetcher = Arc::new(
        GatedFetcher::new()
            .with_response("/old", Ok(list("running", &["stale"])))
            .with_response("/new", Ok(list("done", &["fresh"])))
            .with_gate("/old"),
    );
    let cache = Arc::new(TaskCache::new(fetcher.clone()));

    // The old key's fetch is still pending when the new key loads.
    let old = tokio::spawn({
        let cache = Arc::clone(&cache);
        async move { cache.refresh("/old").await }
    });
    tokio::time::sleep(Duration::from_millis(20)).await;

    cache.refresh("/new").await.expect("new key refresh");
    let before = cache.peek("/new").await.expect("new key cached");

    fetcher.release();
    old.await.unwrap().expect("old key refresh");

    // The late response settled its own entry and left the new key alone.
    let after = cache.peek("/new").await.expect("new key still cached");
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(cache.peek("/old").await.unwrap().tasks[0].title, "stale");
}
