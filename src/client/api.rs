use crate::comments::store::CommentStore;
use crate::comments::types::{Comment, PostCommentRequest};
use crate::error::FilmError;
use crate::movies::types::{Credits, MovieDetails};
use crate::search::aggregator::SearchSource;
use crate::search::types::ResultPage;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` may omit the scheme; `http://` is assumed.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn search_movies(&self, query: &str, page: u32) -> Result<ResultPage, FilmError> {
        let url = format!(
            "{}/api/searchMovies?query={}&page={}",
            self.base_url,
            urlencoding::encode(query),
            page
        );
        self.get_json(&url).await
    }

    pub async fn movie_details(&self, movie_id: &str) -> Result<MovieDetails, FilmError> {
        let url = format!(
            "{}/api/movies/{}",
            self.base_url,
            urlencoding::encode(movie_id)
        );
        self.get_json(&url).await
    }

    pub async fn movie_credits(&self, movie_id: &str) -> Result<Credits, FilmError> {
        let url = format!(
            "{}/api/movies/{}/credits",
            self.base_url,
            urlencoding::encode(movie_id)
        );
        self.get_json(&url).await
    }

    pub async fn comments(&self, movie_id: &str) -> Result<Vec<Comment>, FilmError> {
        self.get_json(&self.comments_url(movie_id)).await
    }

    /// Returns the comment as stored, with the server's timestamp.
    pub async fn post_comment(&self, comment: &Comment) -> Result<Comment, FilmError> {
        let request = PostCommentRequest {
            user_id: comment.user_id.clone(),
            user_name: Some(comment.user_name.clone()),
            comment: comment.comment.clone(),
        };

        let response = self
            .http
            .post(self.comments_url(&comment.movie_id))
            .json(&request)
            .send()
            .await?;

        read_json(response).await
    }

    fn comments_url(&self, movie_id: &str) -> String {
        format!(
            "{}/api/movies/{}/comments",
            self.base_url,
            urlencoding::encode(movie_id)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FilmError> {
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FilmError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(FilmError::NotFound);
    }
    if !status.is_success() {
        return Err(FilmError::UpstreamStatus {
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim();

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}

impl SearchSource for ApiClient {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<ResultPage, FilmError> {
        self.search_movies(query, page).await
    }
}

impl CommentStore for ApiClient {
    async fn query(&self, movie_id: &str) -> Result<Vec<Comment>, FilmError> {
        self.comments(movie_id).await
    }

    async fn append(&self, comment: Comment) -> Result<(), FilmError> {
        self.post_comment(&comment).await.map(|_| ())
    }
}
