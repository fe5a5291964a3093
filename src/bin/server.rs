//! Standalone API server (without Dioxus frontend)
//! Use this for API-only testing or to feed another frontend.
//!
//! Run with: cargo run --bin server --features server -- --port 3003

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use axum::{routing::get, Router};
use clap::Parser;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use learning_hub::config::{AppConfig, DEFAULT_PORT};
use learning_hub::handlers::{get_topic_handler, list_topics_handler, search_topics_handler};
use learning_hub::infrastructure::init_catalog;

#[derive(Debug, Parser)]
#[command(name = "server", about = "Learning Hub topics API")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Catalog JSON file (defaults to the embedded catalog)
    #[arg(long, env = "TUTORIALS_CATALOG")]
    catalog: Option<PathBuf>,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            port: args.port,
            catalog_path: args.catalog,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Learning Hub API Server (standalone)...");

    if let Err(e) = run(Args::parse().into()).await {
        tracing::error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    // Fail fast on a broken catalog file; handlers share this instance
    let topics = init_catalog(&config).context("failed to load tutorial catalog")?;
    tracing::info!("Catalog ready with {} topics", topics.len());

    // NOTE: Axum 0.8 uses {param} syntax instead of :param
    let app = Router::new()
        .route("/api/topics", get(list_topics_handler))
        .route("/api/topics/search", get(search_topics_handler))
        .route("/api/topics/{slug}", get(get_topic_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        );

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
