use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::intake::{read_upload_form, UploadSlot};
use crate::models::{Candidate, CandidateStatus, OsintReport, SourcedProfile};
use crate::routes::extract::{ActiveRole, Management};
use crate::scoring::{CandidateSummary, RiskTone};
use crate::screening::portal::{BrandCheckRequest, PortalAnalysis};
use crate::screening::{enroll, import, portal, profile};
use crate::state::AppState;
use crate::store::DataSource;

#[derive(Serialize)]
pub struct CandidateListResponse {
    pub source: DataSource,
    pub candidates: Vec<CandidateSummary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDetail {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub risk_tone: Option<RiskTone>,
}

impl From<Candidate> for CandidateDetail {
    fn from(candidate: Candidate) -> Self {
        let risk_tone = candidate
            .report
            .as_ref()
            .map(|r| r.risk_assessment.level.tone());
        Self {
            candidate,
            risk_tone,
        }
    }
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    _role: Management,
) -> Json<CandidateListResponse> {
    let view = state.records.candidates().await;
    Json(CandidateListResponse {
        source: view.source,
        candidates: view.records.iter().map(CandidateSummary::from).collect(),
    })
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    _role: Management,
    Path(id): Path<String>,
) -> Result<Json<CandidateDetail>, AppError> {
    let candidate = profile::load_candidate(&state.records, &id).await?;
    Ok(Json(candidate.into()))
}

/// POST /api/v1/scanner/enroll
/// Multipart: `documents` (any number), `identity`, `selfie`, `email`.
pub async fn handle_enroll(
    State(state): State<AppState>,
    _role: Management,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CandidateDetail>), AppError> {
    let form = read_upload_form(multipart, UploadSlot::Unsorted).await?;
    let email = form.field("email").map(str::to_string);
    let candidate =
        enroll::enroll_candidate(state.gateway.as_ref(), &state.records, form.documents, email)
            .await?;
    Ok((StatusCode::CREATED, Json(candidate.into())))
}

#[derive(Deserialize)]
pub struct StatusChange {
    pub status: CandidateStatus,
}

/// PATCH /api/v1/candidates/:id/status
pub async fn handle_set_status(
    State(state): State<AppState>,
    Management(role): Management,
    Path(id): Path<String>,
    Json(req): Json<StatusChange>,
) -> Result<Json<CandidateDetail>, AppError> {
    info!("{role:?} set candidate {id} to {:?}", req.status);
    let candidate = profile::set_status(&state.records, &id, req.status).await?;
    Ok(Json(candidate.into()))
}

/// POST /api/v1/candidates/:id/osint
pub async fn handle_run_osint(
    State(state): State<AppState>,
    _role: Management,
    Path(id): Path<String>,
) -> Result<Json<CandidateDetail>, AppError> {
    let candidate = profile::run_osint(state.gateway.as_ref(), &state.records, &id).await?;
    Ok(Json(candidate.into()))
}

/// POST /api/v1/candidates/:id/documents
pub async fn handle_add_documents(
    State(state): State<AppState>,
    _role: Management,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<CandidateDetail>, AppError> {
    let form = read_upload_form(multipart, UploadSlot::HrUpload).await?;
    let candidate = profile::add_documents(&state.records, &id, form.documents).await?;
    Ok(Json(candidate.into()))
}

/// DELETE /api/v1/candidates/:id/documents/:index
pub async fn handle_remove_document(
    State(state): State<AppState>,
    _role: Management,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<CandidateDetail>, AppError> {
    let candidate = profile::remove_document(&state.records, &id, index).await?;
    Ok(Json(candidate.into()))
}

/// GET /api/v1/candidates/:id/documents/:index
pub async fn handle_download_document(
    State(state): State<AppState>,
    _role: Management,
    Path((id, index)): Path<(String, usize)>,
) -> Result<impl IntoResponse, AppError> {
    let (document, bytes) = profile::document_download(&state.records, &id, index).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        document.name.replace(['"', '\r', '\n'], "")
    );
    Ok((
        [
            (header::CONTENT_TYPE, document.mime_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// POST /api/v1/candidates/import/sourced
pub async fn handle_import_sourced(
    State(state): State<AppState>,
    _role: Management,
    Json(profile): Json<SourcedProfile>,
) -> (StatusCode, Json<CandidateDetail>) {
    let candidate = import::import_sourced(&state.records, profile).await;
    (StatusCode::CREATED, Json(candidate.into()))
}

#[derive(Deserialize)]
pub struct ProfileImportRequest {
    pub text: String,
    pub role: Option<String>,
}

/// POST /api/v1/candidates/import/profile
pub async fn handle_import_profile(
    State(state): State<AppState>,
    _role: Management,
    Json(req): Json<ProfileImportRequest>,
) -> Result<(StatusCode, Json<CandidateDetail>), AppError> {
    let candidate =
        import::import_profile_text(state.gateway.as_ref(), &state.records, &req.text, req.role)
            .await?;
    Ok((StatusCode::CREATED, Json(candidate.into())))
}

/// POST /api/v1/candidates/import/profile-file
/// Multipart: one PDF CV plus an optional `role` field.
pub async fn handle_import_profile_file(
    State(state): State<AppState>,
    _role: Management,
    multipart: Multipart,
) -> Result<(StatusCode, Json<CandidateDetail>), AppError> {
    let mut form = read_upload_form(multipart, UploadSlot::Inferred).await?;
    let role = form.field("role").map(str::to_string);
    if form.documents.is_empty() {
        return Err(AppError::Validation("Upload a PDF CV to import".to_string()));
    }
    let document = form.documents.remove(0);
    let candidate =
        import::import_profile_document(state.gateway.as_ref(), &state.records, document, role)
            .await?;
    Ok((StatusCode::CREATED, Json(candidate.into())))
}

/// POST /api/v1/portal/analyze
/// Multipart: `documents` plus an optional `candidateId` to update.
pub async fn handle_portal_analyze(
    State(state): State<AppState>,
    ActiveRole(role): ActiveRole,
    multipart: Multipart,
) -> Result<Json<PortalAnalysis>, AppError> {
    let form = read_upload_form(multipart, UploadSlot::Inferred).await?;
    let candidate_id = form.field("candidateId").map(str::to_string);
    debug!(
        "Portal analysis by {role:?}: {} document(s), candidate {:?}",
        form.documents.len(),
        candidate_id
    );
    let analysis = portal::analyze_portal(
        state.gateway.as_ref(),
        &state.records,
        form.documents,
        candidate_id.as_deref(),
    )
    .await?;
    Ok(Json(analysis))
}

/// POST /api/v1/portal/brand-check
pub async fn handle_brand_check(
    State(state): State<AppState>,
    _role: ActiveRole,
    Json(req): Json<BrandCheckRequest>,
) -> Result<Json<OsintReport>, AppError> {
    Ok(Json(portal::brand_check(state.gateway.as_ref(), &req).await?))
}
