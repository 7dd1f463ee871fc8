//! HTTP route handlers.
//!
//! Handlers only check the syntactic shape of their parameters and forward
//! everything else to [`ComicService`](crate::service::ComicService).

pub mod by_id;
pub mod health;
pub mod latest;
pub mod random;
pub mod search;

use comicache_core::Error;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    Error::operational(404, "Route not found").into()
}
