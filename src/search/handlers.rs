use crate::error::{ApiError, FilmError};
use crate::server::AppState;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

pub const MISSING_QUERY: &str = "Query parameter is missing";
pub const INVALID_PAGE: &str = "Invalid page parameter";
pub const UPSTREAM_FAILURE: &str = "Something went wrong while fetching movie data";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<String>,
}

/// `GET /api/searchMovies?query=<text>&page=<n>`
///
/// Forwards to the catalog search and passes its JSON through unchanged.
pub async fn handle_search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let query = match params.query.as_deref() {
        Some(query) if !query.is_empty() => query,
        _ => return Err(ApiError::bad_request(MISSING_QUERY)),
    };

    let page = parse_page(params.page.as_deref()).map_err(|e| {
        tracing::debug!("Rejecting search request: {}", e);
        ApiError::bad_request(INVALID_PAGE)
    })?;

    match state.catalog.search_movies(query, page).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            tracing::error!("Catalog search for {:?} page {} failed: {}", query, page, e);
            Err(ApiError::internal(UPSTREAM_FAILURE))
        }
    }
}

/// Absent or empty means page 1; anything else must be a positive integer.
pub fn parse_page(raw: Option<&str>) -> Result<u32, FilmError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(1),
        Some(raw) => raw,
    };

    match raw.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(FilmError::InvalidPage(raw.to_string())),
    }
}
