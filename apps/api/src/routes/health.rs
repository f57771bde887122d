use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Service version plus which backends are live.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let candidates = state.records.candidates().await;
    let jobs = state.records.jobs().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "eti-api",
        "recordsReady": state.records.is_ready(),
        "candidateSource": candidates.source,
        "jobSource": jobs.source,
        "aiConfigured": state.config.gemini_api_key.is_some(),
    }))
}
