//! HTTP fetch pipeline against the comic provider.
//!
//! ### Status Classification
//! - `404` becomes [`FetchError::NotFound`]
//! - Any other non-success status becomes [`FetchError::HttpError`]
//! - Network failures and timeouts become [`FetchError::Network`] / [`FetchError::Timeout`]
//!
//! ### Retries
//! - Transient failures (network, timeout, 429, 5xx) are retried up to `max_retries` times.
//! - Backoff is `base * 2^attempt` plus up to `base` of random jitter.

pub mod error;
pub mod url;

pub use error::FetchError;
pub use self::url::{canonicalize_base, comic_url, latest_url};

use rand::Rng;
use reqwest::{Client, StatusCode, Url, header};
use std::time::{Duration, Instant};

use crate::transform::RawComic;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "comicache/0.1")
    pub user_agent: String,

    /// Request timeout (default: 10s)
    pub timeout: Duration,

    /// Retries for transient failures (default: 2)
    pub max_retries: u32,

    /// Base backoff between retries (default: 200ms)
    pub retry_base_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "comicache/0.1".to_string(),
            timeout: Duration::from_millis(10_000),
            max_retries: 2,
            retry_base_delay: Duration::from_millis(200),
        }
    }
}

impl From<&comicache_core::AppConfig> for FetchConfig {
    fn from(config: &comicache_core::AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay(),
        }
    }
}

/// HTTP client that fetches and decodes provider payloads.
#[derive(Debug, Clone)]
pub struct ComicFetcher {
    http: Client,
    config: FetchConfig,
}

impl ComicFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch `url` and decode the body as a raw comic payload.
    ///
    /// Transient failures are retried with jittered exponential backoff.
    pub async fn fetch(&self, url: &Url) -> Result<RawComic, FetchError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    let delay = backoff(self.config.retry_base_delay, attempt);
                    tracing::warn!(%url, attempt = attempt + 1, error = %e, ?delay, "transient fetch failure, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn fetch_once(&self, url: &Url) -> Result<RawComic, FetchError> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        classify(response.status(), url)?;

        let bytes = response.bytes().await?;
        let raw: RawComic = serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(e.to_string()))?;

        tracing::debug!("fetched {} in {}ms ({} bytes)", url, start.elapsed().as_millis(), bytes.len());

        Ok(raw)
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

/// Map an HTTP status onto the fetch outcome classes.
pub fn classify(status: StatusCode, url: &Url) -> Result<(), FetchError> {
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        return Err(FetchError::HttpError { status: status.as_u16() });
    }
    Ok(())
}

fn backoff(base: Duration, attempt: u32) -> Duration {
    let exponential = base.saturating_mul(1u32 << attempt.min(16));
    let base_ms = base.as_millis() as u64;
    let jitter = if base_ms == 0 { 0 } else { rand::rng().random_range(0..=base_ms) };
    exponential + Duration::from_millis(jitter)
}
