#[cfg(test)]
#[path = "tasks_test.rs"]
mod tests;

use std::sync::Arc;

use crate::fetch::TaskCache;
use crate::models::{ArcEventTx, Event};

/// Runs task list fetches off the UI loop and reports progress through the
/// event channel. The cache deduplicates whatever lands here concurrently.
pub struct TaskService {
    cache: Arc<TaskCache>,
    event_tx: ArcEventTx,
}

impl TaskService {
    pub fn new(cache: Arc<TaskCache>, event_tx: ArcEventTx) -> Self {
        Self { cache, event_tx }
    }

    pub fn cache(&self) -> Arc<TaskCache> {
        Arc::clone(&self.cache)
    }

    /// Revalidate a path in the background. Completion lands on the event
    /// channel; whether the result is still relevant is decided there by
    /// path, not here.
    pub fn spawn_fetch(&self, path: String) {
        let cache = Arc::clone(&self.cache);
        let event_tx = Arc::clone(&self.event_tx);
        tokio::spawn(async move {
            let _ = event_tx.send(Event::TaskFetchStarted(path.clone())).await;
            log::debug!("fetching task list at {}", path);

            let result = cache.refresh(&path).await;
            if let Err(err) = &result {
                log::warn!("task list fetch failed for {}: {}", path, err);
            }

            let _ = event_tx.send(Event::TaskFetchFinished { path, result }).await;
        });
    }
}
