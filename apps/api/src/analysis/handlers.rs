use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{ChatTurn, SourcingResult};
use crate::routes::extract::{ActiveRole, Management};
use crate::state::AppState;

/// POST /api/v1/jobs/:id/sourcing
pub async fn handle_sourcing(
    State(state): State<AppState>,
    _role: Management,
    Path(id): Path<String>,
) -> Result<Json<SourcingResult>, AppError> {
    let job = state
        .records
        .job(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    let result = state.gateway.generate_sourcing_strategies(&job).await?;
    Ok(Json(result))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/assistant/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    _role: ActiveRole,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("Message cannot be empty".to_string()));
    }
    let reply = state.gateway.chat(&req.message, &req.history).await?;
    Ok(Json(ChatResponse { reply }))
}
