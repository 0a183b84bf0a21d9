//! Server Configuration
//!
//! Command line flags with environment fallbacks, so the server can be
//! configured either way in a container.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::catalog::client::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Movie search and discussion API server")]
pub struct ServerConfig {
    /// Address the HTTP API listens on.
    #[arg(long, env = "FILM_FINDER_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// API key for the movie catalog.
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub tmdb_api_key: String,

    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub tmdb_base_url: String,

    /// Upper bound for a single catalog request, in seconds.
    #[arg(long, env = "FILM_FINDER_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Installs the global fmt subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).init();
}
