pub mod extract;
pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::jobs::handlers as jobs;
use crate::scoring::handlers as scoring;
use crate::screening::handlers as screening;
use crate::session::handlers as session;
use crate::state::AppState;

/// Scans carry several photos and PDFs per request.
const UPLOAD_LIMIT_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/health", get(health::health_handler))
        .route("/api/v1/session", post(session::handle_session))
        .route("/api/v1/dashboard", get(scoring::handle_dashboard))
        // Candidates
        .route("/api/v1/candidates", get(screening::handle_list_candidates))
        .route("/api/v1/candidates/:id", get(screening::handle_get_candidate))
        .route(
            "/api/v1/candidates/:id/status",
            patch(screening::handle_set_status),
        )
        .route(
            "/api/v1/candidates/:id/osint",
            post(screening::handle_run_osint),
        )
        .route(
            "/api/v1/candidates/:id/documents",
            post(screening::handle_add_documents),
        )
        .route(
            "/api/v1/candidates/:id/documents/:index",
            get(screening::handle_download_document).delete(screening::handle_remove_document),
        )
        .route(
            "/api/v1/candidates/import/sourced",
            post(screening::handle_import_sourced),
        )
        .route(
            "/api/v1/candidates/import/profile",
            post(screening::handle_import_profile),
        )
        .route(
            "/api/v1/candidates/import/profile-file",
            post(screening::handle_import_profile_file),
        )
        .route("/api/v1/scanner/enroll", post(screening::handle_enroll))
        // Jobs
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/:id/sourcing", post(analysis::handle_sourcing))
        // Candidate portal
        .route(
            "/api/v1/portal/analyze",
            post(screening::handle_portal_analyze),
        )
        .route(
            "/api/v1/portal/brand-check",
            post(screening::handle_brand_check),
        )
        .route("/api/v1/assistant/chat", post(analysis::handle_chat))
        .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES))
        .with_state(state)
}
