//! HTTP Server
//!
//! Router construction and the serve loop. Handlers live next to the domain
//! they serve; this module only wires them together.

use crate::catalog::client::CatalogClient;
use crate::comments::handlers::{handle_list_comments, handle_post_comment};
use crate::comments::store::MemoryCommentStore;
use crate::config::ServerConfig;
use crate::movies::handlers::{handle_movie_credits, handle_movie_details};
use crate::search::handlers::handle_search_movies;

use axum::http::{header::CONTENT_TYPE, Method};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub comments: Arc<MemoryCommentStore>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let catalog = CatalogClient::new(
            &config.tmdb_base_url,
            &config.tmdb_api_key,
            config.request_timeout(),
        )?;

        Ok(Self {
            catalog,
            comments: Arc::new(MemoryCommentStore::new()),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/searchMovies", get(handle_search_movies))
        .route("/api/movies/:id", get(handle_movie_details))
        .route("/api/movies/:id/credits", get(handle_movie_credits))
        .route(
            "/api/movies/:id/comments",
            get(handle_list_comments).post(handle_post_comment),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    tracing::info!("Catalog endpoint: {}", state.catalog.base_url());

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
