pub mod cache;
pub mod client;

pub use cache::TaskCache;
pub use client::{FetchError, Fetcher, HttpFetcher, task_path};
