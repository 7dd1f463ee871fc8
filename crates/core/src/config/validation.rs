//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `provider_base_url` is not an absolute http(s) URL
    /// - `user_agent` is empty
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `latest_ttl_secs` is 0 or exceeds one day
    /// - `search_pool_size` is 0 or exceeds 1000
    /// - `max_retries` exceeds 5
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.provider_base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                return Err(ConfigError::Invalid {
                    field: "provider_base_url".into(),
                    reason: format!("unsupported scheme: {}", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Invalid { field: "provider_base_url".into(), reason: e.to_string() });
            }
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.latest_ttl_secs == 0 {
            return Err(ConfigError::Invalid { field: "latest_ttl_secs".into(), reason: "must be greater than 0".into() });
        }
        if self.latest_ttl_secs > 86_400 {
            return Err(ConfigError::Invalid {
                field: "latest_ttl_secs".into(),
                reason: "must not exceed one day (86400s)".into(),
            });
        }

        if self.search_pool_size == 0 || self.search_pool_size > 1000 {
            return Err(ConfigError::Invalid {
                field: "search_pool_size".into(),
                reason: "must be between 1 and 1000".into(),
            });
        }

        if self.max_retries > 5 {
            return Err(ConfigError::Invalid { field: "max_retries".into(), reason: "must not exceed 5".into() });
        }

        if self.max_retries > 0 && self.retry_base_ms == 0 {
            tracing::warn!(max_retries = self.max_retries, "retry_base_ms is 0; retries will not back off");
        }

        Ok(())
    }
}
