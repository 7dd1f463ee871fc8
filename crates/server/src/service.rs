//! Comic service: read-through caching over the provider.
//!
//! ### Cache Policy
//! - `latest` is served from cache while younger than the configured TTL.
//! - `comic-<id>` entries never expire; published comics do not change.
//! - A freshly fetched latest comic is also stored under its `comic-<id>` key.
//!
//! ### Request Coalescing
//! - A miss takes the key's in-flight lock before fetching. Concurrent callers
//!   for the same key wait on it, re-check the cache, and reuse the stored value.
//!
//! ### Search
//! - Scans only what is already cached: the most recently inserted entries, up
//!   to `search_pool_size`, newest first, de-duplicated by comic id.
//! - Case-sensitive substring match on title or transcript.
//! - `results` holds the requested page; `total` counts every match in the pool.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Duration;
use rand::Rng;
use serde::Serialize;

use comicache_client::{ComicSource, FetchError, normalize};
use comicache_core::cache::keys;
use comicache_core::{AppConfig, CacheStore, Clock, Comic, Error, InFlight};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 50;
pub const MAX_QUERY_CHARS: usize = 100;

/// Cache and search policy knobs.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub latest_ttl: Duration,
    pub search_pool_size: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { latest_ttl: Duration::minutes(5), search_pool_size: 100 }
    }
}

impl From<&AppConfig> for ServiceConfig {
    fn from(config: &AppConfig) -> Self {
        Self { latest_ttl: config.latest_ttl(), search_pool_size: config.search_pool_size }
    }
}

/// Search response; computed per request and never cached.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub query: String,
    pub results: Vec<Arc<Comic>>,
    pub total: usize,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_pages: usize,
}

/// Orchestrates the cache and the provider.
///
/// Constructed once at startup and shared with the router.
pub struct ComicService {
    source: Arc<dyn ComicSource>,
    cache: CacheStore,
    inflight: InFlight,
    config: ServiceConfig,
}

impl ComicService {
    pub fn new(source: Arc<dyn ComicSource>, clock: Arc<dyn Clock>, config: ServiceConfig) -> Self {
        Self { source, cache: CacheStore::new(clock), inflight: InFlight::new(), config }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// The most recently published comic.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` for any provider failure, including a 404.
    pub async fn get_latest(&self) -> Result<Arc<Comic>, Error> {
        if let Some(comic) = self.fresh_latest() {
            tracing::debug!(id = comic.id, "cache hit for latest");
            return Ok(comic);
        }

        let _claim = self.inflight.acquire(keys::LATEST).await;
        if let Some(comic) = self.fresh_latest() {
            return Ok(comic);
        }

        tracing::debug!("cache miss for latest, fetching");
        let raw = self.source.latest().await.map_err(transport_error)?;
        let comic = Arc::new(normalize(raw));

        self.cache.set(keys::LATEST, comic.clone());
        let id_key = keys::comic(comic.id);
        if self.cache.get(&id_key).is_none() {
            self.cache.set(&id_key, comic.clone());
        }

        Ok(comic)
    }

    /// A comic by identifier; cached forever once fetched.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidComicId` if `id` is not a positive 32-bit integer (no I/O is done)
    /// - `Error::ComicNotFound` if the provider answers 404
    /// - `Error::Transport` for any other provider failure
    pub async fn get_by_id(&self, id: i64) -> Result<Arc<Comic>, Error> {
        let id = match u32::try_from(id) {
            Ok(id) if id >= 1 => id,
            _ => return Err(Error::InvalidComicId(id.to_string())),
        };
        let key = keys::comic(id);

        if let Some(entry) = self.cache.get(&key) {
            tracing::debug!(id, "cache hit");
            return Ok(entry.data);
        }

        let _claim = self.inflight.acquire(&key).await;
        if let Some(entry) = self.cache.get(&key) {
            return Ok(entry.data);
        }

        tracing::debug!(id, "cache miss, fetching");
        let raw = self.source.by_id(id).await.map_err(|e| match e {
            FetchError::NotFound(_) => Error::ComicNotFound(id),
            other => transport_error(other),
        })?;
        let comic = Arc::new(normalize(raw));
        self.cache.set(&key, comic.clone());

        Ok(comic)
    }

    /// A uniformly chosen comic in `[1, latest.id]`.
    ///
    /// # Errors
    ///
    /// Any failure from the latest or by-id path, wrapped in `Error::Random`.
    pub async fn get_random(&self) -> Result<Arc<Comic>, Error> {
        let latest = self.get_latest().await.map_err(|e| Error::Random(Box::new(e)))?;
        if latest.id == 0 {
            return Err(Error::Random(Box::new(Error::Internal("provider reported no comics".into()))));
        }

        let id = rand::rng().random_range(1..=latest.id);
        tracing::debug!(id, latest = latest.id, "picked random comic");

        self.get_by_id(i64::from(id)).await.map_err(|e| Error::Random(Box::new(e)))
    }

    /// Search recently cached comics.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the query is not 1 to 100 characters, if
    /// `page` is 0, or if `limit` is outside 1 to 50. Validation happens before
    /// the cache is read.
    pub fn search(&self, query: &str, page: Option<u32>, limit: Option<u32>) -> Result<SearchResult, Error> {
        let chars = query.chars().count();
        if chars == 0 || chars > MAX_QUERY_CHARS {
            return Err(Error::validation(
                "q",
                format!("Search query must be between 1 and {MAX_QUERY_CHARS} characters"),
            ));
        }

        let page = page.unwrap_or(DEFAULT_PAGE);
        if page == 0 {
            return Err(Error::validation("page", "Page must be a positive integer"));
        }
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 || limit > MAX_LIMIT {
            return Err(Error::validation("limit", format!("Limit must be between 1 and {MAX_LIMIT}")));
        }

        let matches: Vec<Arc<Comic>> = self
            .recent_comics()
            .into_iter()
            .filter(|comic| comic.matches(query))
            .collect();
        let total = matches.len();

        let skip = (page as usize - 1).saturating_mul(limit as usize);
        let results = matches.into_iter().skip(skip).take(limit as usize).collect();

        tracing::debug!(query, total, page, limit, "search completed");

        Ok(SearchResult {
            query: query.to_string(),
            results,
            total,
            pagination: Pagination { page, limit, total_pages: total_pages(total, limit) },
        })
    }

    fn fresh_latest(&self) -> Option<Arc<Comic>> {
        self.cache
            .get(keys::LATEST)
            .filter(|entry| self.cache.is_fresh(entry, self.config.latest_ttl))
            .map(|entry| entry.data)
    }

    /// Newest-first window over the cache, one entry per comic id.
    fn recent_comics(&self) -> Vec<Arc<Comic>> {
        let mut seen = HashSet::new();
        self.cache
            .entries()
            .into_iter()
            .rev()
            .take(self.config.search_pool_size)
            .filter_map(|(_, entry)| seen.insert(entry.data.id).then_some(entry.data))
            .collect()
    }
}

pub fn total_pages(total: usize, limit: u32) -> usize {
    total.div_ceil(limit as usize)
}

fn transport_error(err: FetchError) -> Error {
    Error::Transport { status: err.status(), reason: err.to_string() }
}
