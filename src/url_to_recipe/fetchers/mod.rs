use async_trait::async_trait;

use crate::error::FetchError;

mod request;

pub use request::{RequestFetcher, FETCH_TIMEOUT};

/// Retrieves the raw HTML of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
