mod analysis;
mod config;
mod db;
mod errors;
mod intake;
mod jobs;
mod llm_client;
mod models;
mod routes;
mod scoring;
mod screening;
mod session;
mod state;
mod store;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::GeminiGateway;
use crate::config::Config;
use crate::db::connect_record_store;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::RecordFacade;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ETI API v{}", env!("CARGO_PKG_VERSION"));

    // Record store: Postgres when configured, demo data otherwise
    let store = connect_record_store(config.database_url.as_deref()).await;
    let records = Arc::new(RecordFacade::new(store));
    records.attach().await;
    if records.candidates().await.is_demo() {
        warn!("No live candidates yet; serving the demo dataset");
    }

    let mut llm = LlmClient::new(config.gemini_api_key.clone());
    if let Some(base) = &config.gemini_api_base {
        llm = llm.with_base_url(base.clone());
    }
    if !llm.is_configured() {
        warn!("GEMINI_API_KEY not set; analysis endpoints will return 503");
    }
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        records,
        gateway: Arc::new(GeminiGateway::new(llm)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
