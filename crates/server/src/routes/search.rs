//! GET /search?q=&page=&limit=

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use comicache_core::Error;
use serde::Deserialize;

use crate::error::ApiError;
use crate::service::{ComicService, SearchResult};

/// Raw query parameters; numbers are parsed here so bad input maps to a
/// validation error instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

pub async fn search(
    State(service): State<Arc<ComicService>>, params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResult>, ApiError> {
    let Query(params) = params.map_err(|e| Error::validation("query", e.body_text()))?;

    let page = parse_positive("page", params.page.as_deref())?;
    let limit = parse_positive("limit", params.limit.as_deref())?;
    let query = params.q.unwrap_or_default();

    Ok(Json(service.search(&query, page, limit)?))
}

fn parse_positive(field: &str, raw: Option<&str>) -> Result<Option<u32>, Error> {
    raw.map(|value| {
        value
            .parse::<u32>()
            .map_err(|_| Error::validation(field, format!("{field} must be a positive integer")))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("page", None).unwrap(), None);
        assert_eq!(parse_positive("page", Some("3")).unwrap(), Some(3));
        assert!(matches!(parse_positive("limit", Some("ten")), Err(Error::Validation { .. })));
        assert!(matches!(parse_positive("limit", Some("-1")), Err(Error::Validation { .. })));
        assert!(matches!(parse_positive("page", Some("")), Err(Error::Validation { .. })));
    }
}
