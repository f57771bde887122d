use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::AnalysisGateway;
use crate::errors::AppError;
use crate::intake::extract_pdf_text;
use crate::models::{
    Candidate, CandidateSource, CandidateStatus, ComplianceReport, Document, SourcedProfile,
};
use crate::screening::enroll::{display_name, PENDING_ROLE};
use crate::store::RecordFacade;

/// Imported candidates always start pending and are marked as sourced.
fn imported(name: String, role: String) -> Candidate {
    Candidate {
        id: Uuid::new_v4().to_string(),
        name,
        role,
        status: CandidateStatus::Pending,
        timestamp: Utc::now(),
        source: CandidateSource::Linkedin,
        report: None,
        osint: None,
        documents: None,
        basic_score: None,
        email: None,
        email_verified: None,
    }
}

/// Saves a lead from a sourcing run.
pub async fn import_sourced(records: &RecordFacade, profile: SourcedProfile) -> Candidate {
    let role = if profile.current_role.trim().is_empty() {
        profile.headline
    } else {
        profile.current_role
    };
    let saved = records
        .create_candidate(imported(display_name(&profile.name), role))
        .await;
    info!("Imported sourced candidate {}", saved.id);
    saved
}

async fn save_parsed(
    records: &RecordFacade,
    report: ComplianceReport,
    role: Option<String>,
    documents: Option<Vec<Document>>,
) -> Candidate {
    let role = role
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| PENDING_ROLE.to_string());
    let mut candidate = imported(display_name(&report.candidate_name), role);
    candidate.report = Some(report);
    candidate.documents = documents;

    let saved = records.create_candidate(candidate).await;
    info!("Imported parsed profile as candidate {}", saved.id);
    saved
}

/// Manual-parse import from pasted profile text.
pub async fn import_profile_text(
    gateway: &dyn AnalysisGateway,
    records: &RecordFacade,
    text: &str,
    role: Option<String>,
) -> Result<Candidate, AppError> {
    let report = gateway.parse_profile_text(text).await?;
    Ok(save_parsed(records, report, role, None).await)
}

/// Manual-parse import from an uploaded PDF CV; the CV is kept on the record.
pub async fn import_profile_document(
    gateway: &dyn AnalysisGateway,
    records: &RecordFacade,
    document: Document,
    role: Option<String>,
) -> Result<Candidate, AppError> {
    let text = extract_pdf_text(&document).await?;
    let report = gateway.parse_profile_text(&text).await?;
    Ok(save_parsed(records, report, role, Some(vec![document])).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::DocumentKind;
    use crate::store::memory::MemoryRecordStore;
    use crate::testing::{doc, StubGateway};

    async fn records() -> RecordFacade {
        let records = RecordFacade::new(Arc::new(MemoryRecordStore::new()));
        records.attach().await;
        records
    }

    #[tokio::test]
    async fn test_sourced_import_is_pending_linkedin() {
        let records = records().await;
        let profile = StubGateway::default().sourcing.unwrap().simulated_matches[0].clone();

        let saved = import_sourced(&records, profile).await;

        assert_eq!(saved.status, CandidateStatus::Pending);
        assert_eq!(saved.source, CandidateSource::Linkedin);
        assert_eq!(saved.role, "HSE Officer at McDermott");
        assert_eq!(records.candidates().await.records[0].id, saved.id);
    }

    #[tokio::test]
    async fn test_profile_text_import_carries_report() {
        let records = records().await;
        let gateway = StubGateway::default();

        let saved = import_profile_text(
            &gateway,
            &records,
            "Grace Atim, HSE officer, Hoima, NEBOSH IGC",
            Some("QHSE Supervisor".into()),
        )
        .await
        .unwrap();

        assert_eq!(saved.name, "Grace Atim");
        assert_eq!(saved.role, "QHSE Supervisor");
        assert_eq!(saved.status, CandidateStatus::Pending);
        assert!(saved.report.is_some());
    }

    #[tokio::test]
    async fn test_empty_profile_text_rejected() {
        let records = records().await;
        let err = import_profile_text(&StubGateway::default(), &records, "   ", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(records.candidates().await.is_demo());
    }

    #[tokio::test]
    async fn test_profile_file_must_be_pdf() {
        let records = records().await;
        let gateway = StubGateway::default();
        let err = import_profile_document(
            &gateway,
            &records,
            doc("cv.jpg", DocumentKind::Cv),
            None,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(gateway.calls().is_empty());
    }
}
