use std::time::Duration;

use tokio::sync::mpsc;

use crate::fetch::client::MockFetcher;
use crate::models::{TaskList, TaskStatus};

use super::*;

async fn next_event(rx: &mut mpsc::UnboundedReceiver<Event>) -> Event {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

#[tokio::test]
async fn test_spawn_fetch_reports_started_and_finished() {
    let mut fetcher = MockFetcher::new();
    fetcher.expect_fetch().times(1).returning(|_| {
        Box::pin(async {
            Ok(TaskList {
                status: "running".to_string(),
                tasks: vec![crate::models::Task::new("a", TaskStatus::Running)],
            })
        })
    });

    let cache = Arc::new(TaskCache::new(Arc::new(fetcher)));
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let service = TaskService::new(cache, Arc::new(tx));

    service.spawn_fetch("/t".to_string());

    match next_event(&mut rx).await {
        Event::TaskFetchStarted(path) => assert_eq!(path, "/t"),
        other => panic!("expected TaskFetchStarted, got {:?}", other),
    }

    match next_event(&mut rx).await {
        Event::TaskFetchFinished { path, result } => {
            assert_eq!(path, "/t");
            let list = result.expect("fetch result");
            assert_eq!(list.status, "running");
        }
        other => panic!("expected TaskFetchFinished, got {:?}", other),
    }
}

#[tokio::test]
async fn test_spawn_fetch_reports_errors() {
    let mut fetcher = MockFetcher::new();
    fetcher
        .expect_fetch()
        .times(1)
        .returning(|_| Box::pin(async { Err(crate::fetch::FetchError::Status(502)) }));

    let cache = Arc::new(TaskCache::new(Arc::new(fetcher)));
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let service = TaskService::new(cache, Arc::new(tx));

    service.spawn_fetch("/t".to_string());

    let _ = next_event(&mut rx).await;
    match next_event(&mut rx).await {
        Event::TaskFetchFinished { result, .. } => {
            assert_eq!(result.expect_err("expected error"), crate::fetch::FetchError::Status(502));
        }
        other => panic!("expected TaskFetchFinished, got {:?}", other),
    }
}
