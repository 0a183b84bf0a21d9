//! Error Types
//!
//! `FilmError` covers every failure the library can report. HTTP handlers
//! translate it into an `ApiError`, which renders the `{ "error": ... }`
//! JSON body the API contract promises.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilmError {
    #[error("comment text is empty")]
    EmptyComment,

    #[error("invalid page parameter: {0}")]
    InvalidPage(String),

    #[error("you must be logged in to post a comment")]
    AuthRequired,

    #[error("user is not linked to identity provider {0}")]
    ProviderNotLinked(String),

    #[error("resource not found")]
    NotFound,

    #[error("upstream responded with status {status}")]
    UpstreamStatus { status: u16 },

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// JSON body of every non-success API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
