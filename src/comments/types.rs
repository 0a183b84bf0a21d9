use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub movie_id: String,
    pub user_id: String,
    pub user_name: String,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/movies/:id/comments`. The server stamps the time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentRequest {
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub comment: String,
}
