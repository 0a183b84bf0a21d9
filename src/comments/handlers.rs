use super::store::CommentStore;
use super::types::{Comment, PostCommentRequest, ANONYMOUS};
use crate::error::ApiError;
use crate::server::AppState;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

pub const EMPTY_COMMENT: &str = "Comment is empty";
pub const MISSING_USER: &str = "User id is missing";
pub const STORE_FAILURE: &str = "Something went wrong while accessing comments";

pub async fn handle_list_comments(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    match state.comments.query(&movie_id).await {
        Ok(comments) => Ok(Json(comments)),
        Err(e) => {
            tracing::error!("Failed to query comments for {}: {}", movie_id, e);
            Err(ApiError::internal(STORE_FAILURE))
        }
    }
}

pub async fn handle_post_comment(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
    Json(req): Json<PostCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    if req.comment.trim().is_empty() {
        return Err(ApiError::bad_request(EMPTY_COMMENT));
    }
    if req.user_id.trim().is_empty() {
        return Err(ApiError::bad_request(MISSING_USER));
    }

    let user_name = req
        .user_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| ANONYMOUS.to_string());

    let comment = Comment {
        movie_id,
        user_id: req.user_id,
        user_name,
        comment: req.comment,
        timestamp: Utc::now(),
    };

    if let Err(e) = state.comments.append(comment.clone()).await {
        tracing::error!("Failed to store comment on {}: {}", comment.movie_id, e);
        return Err(ApiError::internal(STORE_FAILURE));
    }

    tracing::debug!("Stored comment on {} by {}", comment.movie_id, comment.user_id);
    Ok((StatusCode::CREATED, Json(comment)))
}
