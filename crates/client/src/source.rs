//! The provider seam used by the comic service.

use async_trait::async_trait;
use reqwest::Url;

use crate::fetch::{ComicFetcher, FetchConfig, FetchError, canonicalize_base, comic_url, latest_url};
use crate::transform::RawComic;

/// Source of raw comic payloads.
///
/// This allows the service to be driven by something other than the live
/// provider without changing its caching logic.
#[async_trait]
pub trait ComicSource: Send + Sync {
    /// Fetch the most recently published comic.
    async fn latest(&self) -> Result<RawComic, FetchError>;

    /// Fetch a comic by identifier.
    async fn by_id(&self, id: u32) -> Result<RawComic, FetchError>;
}

/// Client for an xkcd-style JSON API (`/info.0.json`, `/<id>/info.0.json`).
#[derive(Debug, Clone)]
pub struct XkcdClient {
    fetcher: ComicFetcher,
    base_url: Url,
}

impl XkcdClient {
    /// Create a client for the provider rooted at `base_url`.
    pub fn new(base_url: &str, config: FetchConfig) -> Result<Self, FetchError> {
        let base_url = canonicalize_base(base_url)?;
        let fetcher = ComicFetcher::new(config)?;
        Ok(Self { fetcher, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl ComicSource for XkcdClient {
    async fn latest(&self) -> Result<RawComic, FetchError> {
        let url = latest_url(&self.base_url)?;
        self.fetcher.fetch(&url).await
    }

    async fn by_id(&self, id: u32) -> Result<RawComic, FetchError> {
        let url = comic_url(&self.base_url, id)?;
        self.fetcher.fetch(&url).await
    }
}
