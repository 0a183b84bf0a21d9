use clap::Parser;
use film_finder::config::{init_tracing, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::parse();
    tracing::info!("Starting film finder on {}", config.bind);

    film_finder::server::serve(config).await
}
