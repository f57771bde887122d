use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::{JobFacets, JobQuery, NewJob};
use crate::models::Job;
use crate::routes::extract::{ActiveRole, HrManager};
use crate::state::AppState;
use crate::store::DataSource;

#[derive(Serialize)]
pub struct JobListResponse {
    pub source: DataSource,
    pub jobs: Vec<Job>,
    pub facets: JobFacets,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    _role: ActiveRole,
    Query(query): Query<JobQuery>,
) -> Json<JobListResponse> {
    let view = state.records.jobs().await;
    Json(JobListResponse {
        source: view.source,
        facets: JobFacets::collect(&view.records),
        jobs: query.apply(&view.records),
    })
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    _role: HrManager,
    Json(req): Json<NewJob>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let job = state.records.create_job(req.into_job()?).await;
    Ok((StatusCode::CREATED, Json(job)))
}
