use crate::error::FilmError;

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Client for the external movie catalog.
///
/// Every call is a single GET; failures are reported to the caller and never retried.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, FilmError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One page of ranked search results, as returned by the catalog.
    pub async fn search_movies(&self, query: &str, page: u32) -> Result<Value, FilmError> {
        let path = format!(
            "/search/movie?query={}&page={}",
            urlencoding::encode(query),
            page
        );
        self.get_json(&path).await
    }

    pub async fn movie_details(&self, movie_id: &str) -> Result<Value, FilmError> {
        let path = format!("/movie/{}", urlencoding::encode(movie_id));
        self.get_json(&path).await
    }

    pub async fn movie_credits(&self, movie_id: &str) -> Result<Value, FilmError> {
        let path = format!("/movie/{}/credits", urlencoding::encode(movie_id));
        self.get_json(&path).await
    }

    async fn get_json(&self, path: &str) -> Result<Value, FilmError> {
        let separator = if path.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}{}api_key={}",
            self.base_url,
            path,
            separator,
            urlencoding::encode(&self.api_key)
        );

        // The key is part of the URL, so only the path is logged.
        tracing::debug!("Catalog request: GET {}", path);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(FilmError::NotFound);
        }
        if !status.is_success() {
            tracing::warn!("Catalog responded {} for {}", status, path);
            return Err(FilmError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
