use crate::error::{ApiError, FilmError};
use crate::search::handlers::UPSTREAM_FAILURE;
use crate::server::AppState;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub const MOVIE_NOT_FOUND: &str = "Movie not found";

pub async fn handle_movie_details(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .catalog
        .movie_details(&movie_id)
        .await
        .map(Json)
        .map_err(|e| catalog_error(&movie_id, e))
}

pub async fn handle_movie_credits(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .catalog
        .movie_credits(&movie_id)
        .await
        .map(Json)
        .map_err(|e| catalog_error(&movie_id, e))
}

fn catalog_error(movie_id: &str, error: FilmError) -> ApiError {
    match error {
        FilmError::NotFound => ApiError::not_found(MOVIE_NOT_FOUND),
        other => {
            tracing::error!("Catalog lookup for movie {} failed: {}", movie_id, other);
            ApiError::internal(UPSTREAM_FAILURE)
        }
    }
}
