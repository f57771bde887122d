use std::sync::Arc;

use crate::analysis::AnalysisGateway;
use crate::config::Config;
use crate::store::RecordFacade;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Candidate and job records. Never fails; falls back to demo data.
    pub records: Arc<RecordFacade>,
    /// Pluggable analysis backend. Default: GeminiGateway.
    pub gateway: Arc<dyn AnalysisGateway>,
    pub config: Config,
}
