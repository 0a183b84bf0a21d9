//! Catalog Client Tests
//!
//! Runs `CatalogClient` against the fake catalog from `test_support`.
//!
//! ## Test Scopes
//! - **Search**: query, page and API key reach the upstream; JSON comes back untouched.
//! - **Details/Credits**: pass-through and 404 mapping.
//! - **Failures**: non-success statuses and unreachable hosts.

#[cfg(test)]
mod tests {
    use crate::catalog::client::CatalogClient;
    use crate::error::FilmError;
    use crate::test_support::{
        catalog_client, spawn_fake_catalog, FAKE_PAGE_SIZE, FAKE_TOTAL_PAGES, INCEPTION_ID,
    };
    use std::time::Duration;

    #[tokio::test]
    async fn test_search_forwards_query_and_page() {
        let base_url = spawn_fake_catalog().await;
        let client = catalog_client(&base_url);

        let body = client.search_movies("Inception", 2).await.unwrap();

        assert_eq!(body["page"], 2);
        assert_eq!(body["total_pages"], FAKE_TOTAL_PAGES);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len() as u64, FAKE_PAGE_SIZE);
        assert_eq!(results[0]["id"], 21);
        assert_eq!(results[0]["title"], "Inception 21");
    }

    #[tokio::test]
    async fn test_search_encodes_query_text() {
        let base_url = spawn_fake_catalog().await;
        let client = catalog_client(&base_url);

        let body = client.search_movies("Fast & Furious", 1).await.unwrap();

        assert_eq!(body["results"][0]["title"], "Fast & Furious 1");
    }

    #[tokio::test]
    async fn test_search_keeps_unknown_fields() {
        let base_url = spawn_fake_catalog().await;
        let client = catalog_client(&base_url);

        let body = client.search_movies("Alien", 1).await.unwrap();

        // total_results is not modelled anywhere but must survive the proxy.
        assert!(body.get("total_results").is_some());
    }

    #[tokio::test]
    async fn test_upstream_error_status_is_reported() {
        let base_url = spawn_fake_catalog().await;
        let client = catalog_client(&base_url);

        let result = client.search_movies("explode", 1).await;

        assert!(matches!(
            result,
            Err(FilmError::UpstreamStatus { status: 500 })
        ));
    }

    #[tokio::test]
    async fn test_wrong_api_key_is_upstream_failure() {
        let base_url = spawn_fake_catalog().await;
        let client = CatalogClient::new(&base_url, "wrong", Duration::from_secs(5)).unwrap();

        let result = client.search_movies("Alien", 1).await;

        assert!(matches!(
            result,
            Err(FilmError::UpstreamStatus { status: 401 })
        ));
    }

    #[tokio::test]
    async fn test_movie_details_and_credits() {
        let base_url = spawn_fake_catalog().await;
        let client = catalog_client(&base_url);

        let details = client.movie_details(INCEPTION_ID).await.unwrap();
        let credits = client.movie_credits(INCEPTION_ID).await.unwrap();

        assert_eq!(details["title"], "Inception");
        assert_eq!(details["runtime"], 148);
        assert_eq!(credits["cast"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_unknown_movie_is_not_found() {
        let base_url = spawn_fake_catalog().await;
        let client = catalog_client(&base_url);

        let result = client.movie_details("1").await;

        assert!(matches!(result, Err(FilmError::NotFound)));
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_transport_failure() {
        // Nothing listens on port 9 (discard) in the test environment.
        let client =
            CatalogClient::new("http://127.0.0.1:9", "k", Duration::from_secs(2)).unwrap();

        let result = client.search_movies("Alien", 1).await;

        assert!(matches!(result, Err(FilmError::Transport(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client =
            CatalogClient::new("https://example.org/3/", "k", Duration::from_secs(1)).unwrap();

        assert_eq!(client.base_url(), "https://example.org/3");
    }
}
