//! GET /:id

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use comicache_core::{Comic, Error};

use crate::error::ApiError;
use crate::service::ComicService;

pub async fn by_id(
    State(service): State<Arc<ComicService>>, Path(raw): Path<String>,
) -> Result<Json<Arc<Comic>>, ApiError> {
    let id = parse_id(&raw)?;
    Ok(Json(service.get_by_id(id).await?))
}

/// Parse a path segment as an integer id; range checks are the service's.
fn parse_id(raw: &str) -> Result<i64, Error> {
    raw.parse::<i64>().map_err(|_| Error::InvalidComicId(raw.to_string()))
}
