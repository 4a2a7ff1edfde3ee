#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::Mutex;

use crate::models::TaskList;

use super::{FetchError, Fetcher};

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<TaskList>, FetchError>>>;

#[derive(Default)]
struct Entry {
    data: Option<Arc<TaskList>>,
    fetched_at: Option<DateTime<Utc>>,
    inflight: Option<SharedFetch>,
}

/// Stale-while-revalidate cache keyed by relative task list path.
///
/// Concurrent requests for one key share a single in-flight fetch, a
/// previously seen key keeps serving its cached value while revalidating,
/// and a request that was superseded on its key never writes its result
/// back. Entries never expire within a run; revalidation happens on key
/// change and remount only.
pub struct TaskCache {
    fetcher: Arc<dyn Fetcher>,
    entries: Mutex<HashMap<String, Entry>>,
}

impl TaskCache {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached value for a key, without touching the network.
    pub async fn peek(&self, path: &str) -> Option<Arc<TaskList>> {
        self.entries
            .lock()
            .await
            .get(path)
            .and_then(|entry| entry.data.clone())
    }

    /// When the last successful fetch for a key settled, if any.
    pub async fn last_fetched(&self, path: &str) -> Option<DateTime<Utc>> {
        self.entries
            .lock()
            .await
            .get(path)
            .and_then(|entry| entry.fetched_at)
    }

    /// Cached value if present, otherwise a deduplicated network fetch.
    pub async fn get(&self, path: &str) -> Result<Arc<TaskList>, FetchError> {
        if let Some(data) = self.peek(path).await {
            return Ok(data);
        }
        self.refresh(path).await
    }

    /// Revalidate a key. Joins the existing in-flight request when there is
    /// one instead of stacking a second fetch.
    pub async fn refresh(&self, path: &str) -> Result<Arc<TaskList>, FetchError> {
        let fut = {
            let mut entries = self.entries.lock().await;
            let entry = entries.entry(path.to_string()).or_default();
            match &entry.inflight {
                Some(inflight) => inflight.clone(),
                None => {
                    let fetcher = Arc::clone(&self.fetcher);
                    let key = path.to_string();
                    let fut = async move { fetcher.fetch(&key).await.map(Arc::new) }
                        .boxed()
                        .shared();
                    entry.inflight = Some(fut.clone());
                    fut
                }
            }
        };

        let result = fut.clone().await;

        let mut entries = self.entries.lock().await;
        if let Some(entry) = entries.get_mut(path) {
            // Only the request this entry is still waiting on may settle it;
            // a superseded request's result is discarded.
            if entry.inflight.as_ref().is_some_and(|f| f.ptr_eq(&fut)) {
                entry.inflight = None;
                if let Ok(data) = &result {
                    entry.data = Some(Arc::clone(data));
                    entry.fetched_at = Some(Utc::now());
                }
            }
        }

        result
    }
}
