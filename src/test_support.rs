//! Shared test fixtures: a fake movie catalog served on an ephemeral port.

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::client::CatalogClient;
use crate::comments::store::MemoryCommentStore;
use crate::server::AppState;

pub const TEST_API_KEY: &str = "test-key";
pub const FAKE_TOTAL_PAGES: u32 = 3;
pub const FAKE_PAGE_SIZE: u64 = 20;
pub const INCEPTION_ID: &str = "27205";

#[derive(Deserialize)]
struct FakeSearchParams {
    api_key: Option<String>,
    query: Option<String>,
    page: Option<u32>,
}

#[derive(Deserialize)]
struct FakeKeyParams {
    api_key: Option<String>,
}

pub fn fake_item(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "poster_path": format!("/poster{}.jpg", id),
        "overview": "",
        "vote_average": 7.0,
    })
}

async fn fake_search(
    Query(params): Query<FakeSearchParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if params.api_key.as_deref() != Some(TEST_API_KEY) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"status_message": "Invalid API key"})),
        ));
    }

    let query = params.query.unwrap_or_default();
    if query == "explode" {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status_message": "boom"})),
        ));
    }

    if query == "garbled" {
        return Ok(Json(json!({"page": 1, "results": "x"})));
    }

    let page = params.page.unwrap_or(1);
    let first = (page as u64 - 1) * FAKE_PAGE_SIZE + 1;
    let results: Vec<Value> = (first..first + FAKE_PAGE_SIZE)
        .map(|id| fake_item(id, &format!("{} {}", query, id)))
        .collect();

    Ok(Json(json!({
        "page": page,
        "results": results,
        "total_pages": FAKE_TOTAL_PAGES,
        "total_results": FAKE_TOTAL_PAGES as u64 * FAKE_PAGE_SIZE,
    })))
}

async fn fake_movie(
    Path(movie_id): Path<String>,
    Query(params): Query<FakeKeyParams>,
) -> Result<Json<Value>, StatusCode> {
    if params.api_key.as_deref() != Some(TEST_API_KEY) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if movie_id != INCEPTION_ID {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(json!({
        "id": 27205,
        "title": "Inception",
        "overview": "A thief who steals corporate secrets through dream-sharing.",
        "poster_path": "/inception.jpg",
        "release_date": "2010-07-15",
        "vote_average": 8.4,
        "runtime": 148,
        "tagline": "Your mind is the scene of the crime.",
    })))
}

async fn fake_credits(
    Path(movie_id): Path<String>,
    Query(params): Query<FakeKeyParams>,
) -> Result<Json<Value>, StatusCode> {
    if params.api_key.as_deref() != Some(TEST_API_KEY) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if movie_id != INCEPTION_ID {
        return Err(StatusCode::NOT_FOUND);
    }

    let cast: Vec<Value> = [
        "Leonardo DiCaprio",
        "Joseph Gordon-Levitt",
        "Ken Watanabe",
        "Tom Hardy",
        "Elliot Page",
        "Dileep Rao",
        "Cillian Murphy",
    ]
    .iter()
    .map(|name| json!({"name": name, "character": "Someone"}))
    .collect();

    Ok(Json(json!({"id": 27205, "cast": cast})))
}

pub fn fake_catalog_router() -> Router {
    Router::new()
        .route("/search/movie", get(fake_search))
        .route("/movie/:id", get(fake_movie))
        .route("/movie/:id/credits", get(fake_credits))
}

/// Serves `router` on `127.0.0.1:0` and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

pub async fn spawn_fake_catalog() -> String {
    spawn(fake_catalog_router()).await
}

pub fn catalog_client(base_url: &str) -> CatalogClient {
    CatalogClient::new(base_url, TEST_API_KEY, Duration::from_secs(5)).unwrap()
}

pub async fn test_state() -> AppState {
    let base_url = spawn_fake_catalog().await;

    AppState {
        catalog: catalog_client(&base_url),
        comments: Arc::new(MemoryCommentStore::new()),
    }
}
