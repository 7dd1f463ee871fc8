//! HTTP router.
//!
//! This module binds URLs to the route handlers and shares one
//! `ComicService` with all of them through axum state.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::service::ComicService;

/// Build the application router around a shared service.
pub fn router(service: Arc<ComicService>) -> Router {
    Router::new()
        .route("/latest", get(routes::latest::latest))
        .route("/random", get(routes::random::random))
        .route("/search", get(routes::search::search))
        .route("/health", get(routes::health::health))
        .route("/:id", get(routes::by_id::by_id))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
