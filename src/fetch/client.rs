#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::user_agent;
use crate::models::TaskList;

#[cfg(test)]
use mockall::automock;

/// Fetch failures are carried through the cache and the event channel, so
/// the variants stay clonable and message-based.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("sending request: {0}")]
    Request(String),

    #[error("unexpected status code {0}")]
    Status(u16),

    #[error("decoding task list: {0}")]
    Decode(String),
}

#[async_trait]
#[cfg_attr(test, automock)]
pub trait Fetcher: Send + Sync {
    /// Fetch the task list at a relative path (path plus query string)
    /// below the configured base URL.
    async fn fetch(&self, path: &str) -> Result<TaskList, FetchError>;
}

pub struct HttpFetcher {
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<TaskList, FetchError> {
        let mut req = reqwest::Client::new()
            .get(format!("{}{}", self.base_url, path))
            .header("User-Agent", user_agent());

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let res = req
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !res.status().is_success() {
            return Err(FetchError::Status(res.status().as_u16()));
        }

        res.json::<TaskList>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// task_path reduces an absolute task list URL to its path plus query
/// string. The fetch layer already targets the right origin, so only the
/// relative part is requested. Non-absolute input yields None.
pub fn task_path(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    let mut path = parsed.path().to_string();
    if let Some(query) = parsed.query() {
        path.push('?');
        path.push_str(query);
    }
    Some(path)
}
