use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::AnalysisGateway;
use crate::errors::AppError;
use crate::models::{Candidate, CandidateSource, Document, DocumentKind};
use crate::scoring::status_for_risk;
use crate::store::RecordFacade;

/// Role recorded for a candidate until HR assigns one.
pub const PENDING_ROLE: &str = "Pending Assessment";
pub const UNKNOWN_NAME: &str = "Unknown Candidate";

pub(crate) fn display_name(extracted: &str) -> String {
    let name = extracted.trim();
    if name.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Scanner flow: audit the documents, decide the status from the risk level
/// and save the new candidate with every document, selfie included.
pub async fn enroll_candidate(
    gateway: &dyn AnalysisGateway,
    records: &RecordFacade,
    documents: Vec<Document>,
    email: Option<String>,
) -> Result<Candidate, AppError> {
    if !documents.iter().any(|d| d.kind.may_bear_identity()) {
        return Err(AppError::Validation(
            "Please upload candidate documents (ID, CV).".to_string(),
        ));
    }
    if !documents.iter().any(|d| d.kind == DocumentKind::Selfie) {
        return Err(AppError::Validation(
            "Verification required: please take a photo holding the ID card.".to_string(),
        ));
    }

    let report = gateway.analyze_documents(&documents).await?;
    let status = status_for_risk(report.risk_assessment.level);

    let candidate = Candidate {
        id: Uuid::new_v4().to_string(),
        name: display_name(&report.candidate_name),
        role: PENDING_ROLE.to_string(),
        status,
        timestamp: Utc::now(),
        source: CandidateSource::Upload,
        report: Some(report),
        osint: None,
        documents: Some(documents),
        basic_score: None,
        email_verified: Some(false),
        email,
    };

    let saved = records.create_candidate(candidate).await;
    info!("Enrolled candidate {} as {:?}", saved.id, saved.status);
    Ok(saved)
}
