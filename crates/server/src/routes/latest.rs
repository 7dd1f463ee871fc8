//! GET /latest

use std::sync::Arc;

use axum::{Json, extract::State};
use comicache_core::Comic;

use crate::error::ApiError;
use crate::service::ComicService;

pub async fn latest(State(service): State<Arc<ComicService>>) -> Result<Json<Arc<Comic>>, ApiError> {
    Ok(Json(service.get_latest().await?))
}
