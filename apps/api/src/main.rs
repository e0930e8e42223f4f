mod candidates;
mod config;
mod errors;
mod extraction;
mod models;
mod oracle;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::oracle::AnthropicOracle;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SelectAI API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the text-understanding oracle with a per-request timeout so
    // a stalled call degrades that one submission instead of the service.
    let oracle = AnthropicOracle::new(
        config.anthropic_api_key.clone(),
        Duration::from_secs(config.oracle_timeout_secs),
    );
    info!("Oracle client initialized (model: {})", oracle::MODEL);

    // Initialize the candidate list store
    let store = CandidateStore::new(&config.candidates_file);
    info!("Candidate store at {}", config.candidates_file);

    // Build app state
    let state = AppState {
        oracle: Arc::new(oracle),
        store,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
