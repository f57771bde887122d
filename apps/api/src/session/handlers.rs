use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::session::{reduce, resolve_screen, Action, Screen, SessionState};

#[derive(Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub state: SessionState,
    pub action: Action,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub state: SessionState,
    pub screen: Screen,
}

/// POST /api/v1/session
/// Applies one action to the client-held session state.
pub async fn handle_session(
    Json(req): Json<SessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let state = reduce(&req.state, req.action)?;
    let screen = resolve_screen(&state);
    Ok(Json(SessionResponse { state, screen }))
}
