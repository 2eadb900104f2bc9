mod config;
mod errors;
mod ingest;
mod matching;
mod models;
mod nlp;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::ingest::PdfTextExtractor;
use crate::nlp::HeuristicPipeline;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    let store = ResumeStore::open(&config.data_dir).await?;

    info!(
        "Match policy: suitable at >= {}%, up to {} ranked phrases",
        config.suitability_threshold, config.max_ranked_phrases
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        store: Arc::new(store),
        extractor: Arc::new(PdfTextExtractor),
        pipeline: Arc::new(HeuristicPipeline),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
