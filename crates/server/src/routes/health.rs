//! GET /health

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::service::ComicService;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub cached_entries: usize,
}

pub async fn health(State(service): State<Arc<ComicService>>) -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok", version: env!("CARGO_PKG_VERSION"), cached_entries: service.cache().len() })
}
