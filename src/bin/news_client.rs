use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use news_server::{client::NewsClient, http::validation::CreateArticleRequest};

#[derive(Parser)]
#[command(name = "news-client")]
#[command(about = "Exercise a running news server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:50051")]
    server: String,

    /// Number of extra articles created concurrently after the first one
    #[arg(long, default_value = "5")]
    count: usize,
}

fn article(index: Option<usize>) -> CreateArticleRequest {
    let suffix = index.map(|i| format!(" {i}")).unwrap_or_default();

    CreateArticleRequest {
        id: Some(uuid::Uuid::new_v4().to_string()),
        author: format!("John Doe{suffix}"),
        title: format!("New Article{suffix}"),
        summary: format!("This is a summary of the new article{suffix}."),
        content: "This is the content of the new article.".to_string(),
        tags: vec!["tag1".to_string(), "tag2".to_string()],
        source: "https://example.org/news".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "news_client=info,news_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let client = NewsClient::new(&args.server)?;

    let health = client.health().await.context("server is not reachable")?;
    info!("Server {} is {}", health.version, health.status);

    info!("Creating a new article...");
    let created = client
        .create(&article(None))
        .await
        .context("failed to create article")?;
    info!("Article created: {:?}", created);

    info!("Getting the created article...");
    let fetched = client
        .get(created.id)
        .await
        .context("failed to get article")?;
    info!("Article fetched: {:?}", fetched);

    info!("Creating {} articles...", args.count);
    let ids: Vec<_> = stream::iter(0..args.count)
        .map(|i| {
            let client = client.clone();
            async move { client.create(&article(Some(i))).await.map(|a| a.id) }
        })
        .buffer_unordered(args.count.max(1))
        .try_collect::<Vec<_>>()
        .await
        .context("failed to create article")?;
    for id in &ids {
        info!("Article created with ID: {}", id);
    }

    info!("Getting all articles...");
    for article in client.list().await.context("failed to list articles")? {
        info!("Article fetched: {}, summary: {}", article.id, article.summary);
    }

    info!("Client finished successfully!");
    Ok(())
}
