use axum::{extract::State, Json};
use serde::Serialize;

use crate::routes::extract::Management;
use crate::scoring::DashboardStats;
use crate::state::AppState;
use crate::store::DataSource;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub source: DataSource,
    #[serde(flatten)]
    pub stats: DashboardStats,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    _role: Management,
) -> Json<DashboardResponse> {
    let view = state.records.candidates().await;
    Json(DashboardResponse {
        source: view.source,
        stats: DashboardStats::compute(&view.records),
    })
}
