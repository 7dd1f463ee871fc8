//! Central HTTP error formatting.
//!
//! Every handler failure ends up here. Classified failures get their own
//! status and body; anything unclassified is masked behind a generic 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use comicache_core::Error;
use serde_json::json;

/// Error returned by route handlers.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            Error::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation Error", "message": message, "details": details }),
            ),
            Error::ComicNotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Comic not found", "message": "The requested comic does not exist" }),
            ),
            Error::InvalidComicId(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid comic ID", "message": "Comic ID must be a positive integer" }),
            ),
            Error::Operational { status, message, timestamp } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                json!({ "error": message, "timestamp": timestamp }),
            ),
            Error::Transport { status, reason } => {
                tracing::warn!(?status, %reason, "provider request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to fetch comic from provider", "timestamp": Utc::now() }),
                )
            }
            err @ (Error::Random(_) | Error::Internal(_)) => {
                tracing::error!(error = %err, "unhandled failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error", "message": "Something went wrong on our end" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comicache_core::ValidationDetail;

    async fn render(err: Error) -> (StatusCode, serde_json::Value) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error() {
        let (status, body) = render(Error::Validation {
            message: "bad query".into(),
            details: vec![ValidationDetail::new("q", "bad query")],
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation Error");
        assert_eq!(body["message"], "bad query");
        assert_eq!(body["details"][0]["field"], "q");
    }

    #[tokio::test]
    async fn test_comic_not_found() {
        let (status, body) = render(Error::ComicNotFound(404)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "error": "Comic not found", "message": "The requested comic does not exist" })
        );
    }

    #[tokio::test]
    async fn test_invalid_comic_id() {
        let (status, body) = render(Error::InvalidComicId("abc".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Invalid comic ID", "message": "Comic ID must be a positive integer" })
        );
    }

    #[tokio::test]
    async fn test_operational_uses_explicit_status() {
        let (status, body) = render(Error::operational(418, "Teapot")).await;
        assert_eq!(status, StatusCode::IM_A_TEAPOT);
        assert_eq!(body["error"], "Teapot");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_transport_hides_reason() {
        let (status, body) =
            render(Error::Transport { status: Some(503), reason: "upstream.internal:8443 refused".into() }).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("upstream.internal"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_unclassified_is_masked() {
        let (status, body) = render(Error::Random(Box::new(Error::Internal("secret detail".into())))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Internal Server Error", "message": "Something went wrong on our end" })
        );
    }
}
