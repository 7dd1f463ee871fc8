//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (COMICACHE_*)
//! 2. TOML config file (if COMICACHE_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (COMICACHE_*)
/// 2. TOML config file (if COMICACHE_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to.
    ///
    /// Set via COMICACHE_BIND_ADDR environment variable.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Base URL of the comic provider.
    ///
    /// Set via COMICACHE_PROVIDER_BASE_URL environment variable.
    #[serde(default = "default_provider_base_url")]
    pub provider_base_url: String,

    /// User-Agent string for provider requests.
    ///
    /// Set via COMICACHE_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Provider request timeout in milliseconds.
    ///
    /// Set via COMICACHE_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// How long the cached latest comic is served before refetching.
    ///
    /// Set via COMICACHE_LATEST_TTL_SECS environment variable.
    #[serde(default = "default_latest_ttl_secs")]
    pub latest_ttl_secs: u64,

    /// Maximum number of recently cached entries scanned by search.
    ///
    /// Set via COMICACHE_SEARCH_POOL_SIZE environment variable.
    #[serde(default = "default_search_pool_size")]
    pub search_pool_size: usize,

    /// Retries for transient provider failures.
    ///
    /// Set via COMICACHE_MAX_RETRIES environment variable.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base backoff between retries in milliseconds.
    ///
    /// Set via COMICACHE_RETRY_BASE_MS environment variable.
    #[serde(default = "default_retry_base_ms")]
    pub retry_base_ms: u64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".into()
}

fn default_provider_base_url() -> String {
    "https://xkcd.com/".into()
}

fn default_user_agent() -> String {
    "comicache/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_latest_ttl_secs() -> u64 {
    300 // 5 minutes
}

fn default_search_pool_size() -> usize {
    100
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_base_ms() -> u64 {
    200
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            provider_base_url: default_provider_base_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            latest_ttl_secs: default_latest_ttl_secs(),
            search_pool_size: default_search_pool_size(),
            max_retries: default_max_retries(),
            retry_base_ms: default_retry_base_ms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// TTL of the latest-comic slot.
    pub fn latest_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.latest_ttl_secs as i64)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `COMICACHE_`
    /// 2. TOML file from `COMICACHE_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("COMICACHE_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("COMICACHE_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
