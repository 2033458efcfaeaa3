use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use news_server::{article::ArticleStore, config::ServerConfig, http::HttpServer};

#[derive(Parser)]
#[command(name = "news-server")]
#[command(about = "In-memory news article service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Overrides NEWS_PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Overrides NEWS_HOST
    #[arg(long)]
    host: Option<String>,

    #[arg(long, default_value = "false")]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("news_server={filter_level},tower_http=info").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config.with_overrides(args.host, args.port),
        Err(e) => {
            error!("Failed to load configuration from environment: {e}");
            std::process::exit(1);
        }
    };

    let store = Arc::new(ArticleStore::new());
    info!("Starting news server on {}", config.bind_addr());

    if let Err(e) = HttpServer::new(config, store).run().await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
