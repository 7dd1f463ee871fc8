//! Fetch error types.

use std::sync::Arc;

/// Errors from fetching a provider payload.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Provider answered 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body was not a valid payload.
    #[error("parse error: {0}")]
    Parse(String),

    /// Endpoint URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Timeout | FetchError::Network(_) => true,
            FetchError::HttpError { status } => *status == 429 || (500..600).contains(status),
            FetchError::NotFound(_) | FetchError::Parse(_) | FetchError::InvalidUrl(_) => false,
        }
    }

    /// HTTP status behind the failure, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::NotFound(_) => Some(404),
            FetchError::HttpError { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { FetchError::Timeout } else { FetchError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::HttpError { status: 503 };
        assert!(err.to_string().contains("503"));

        let err = FetchError::NotFound("https://xkcd.com/404/info.0.json".into());
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_transient_classification() {
        assert!(FetchError::Timeout.is_transient());
        assert!(FetchError::HttpError { status: 502 }.is_transient());
        assert!(FetchError::HttpError { status: 429 }.is_transient());
        assert!(!FetchError::HttpError { status: 403 }.is_transient());
        assert!(!FetchError::NotFound("x".into()).is_transient());
        assert!(!FetchError::Parse("eof".into()).is_transient());
    }

    #[test]
    fn test_status() {
        assert_eq!(FetchError::NotFound("x".into()).status(), Some(404));
        assert_eq!(FetchError::HttpError { status: 500 }.status(), Some(500));
        assert_eq!(FetchError::Timeout.status(), None);
    }
}
