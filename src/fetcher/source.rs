use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::fetcher::errors::FetchError;

/// Supplies the raw bytes of a page.
///
/// Implementations own transport concerns such as timeouts, retries and
/// caching; the parser calls `fetch` exactly once per product.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        (**self).fetch(url).await
    }
}
