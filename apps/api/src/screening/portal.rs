use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::AnalysisGateway;
use crate::errors::AppError;
use crate::models::{Candidate, ComplianceReport, Document, Job, JobMatchResult, OsintReport};
use crate::scoring::{average_match_score, MATCH_SAMPLE};
use crate::screening::profile::load_candidate;
use crate::store::RecordFacade;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalAnalysis {
    pub report: ComplianceReport,
    /// Best match first.
    pub recommendations: Vec<JobMatchResult>,
    pub basic_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Candidate>,
}

/// Matches against the first `MATCH_SAMPLE` jobs one at a time. A failed
/// match is logged and skipped.
pub async fn match_jobs(
    gateway: &dyn AnalysisGateway,
    documents: &[Document],
    jobs: &[Job],
) -> Vec<JobMatchResult> {
    let mut results = Vec::new();
    for job in jobs.iter().take(MATCH_SAMPLE) {
        match gateway.match_candidate_to_job(documents, job).await {
            Ok(result) => results.push(result),
            Err(e) => warn!("Skipping match against job {}: {e}", job.id),
        }
    }
    results.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
    results
}

/// Candidate self-service analysis. When `candidate_id` names a record, it
/// is updated with the new report, documents and basic score; the reported
/// score is the one the record ends up holding.
pub async fn analyze_portal(
    gateway: &dyn AnalysisGateway,
    records: &RecordFacade,
    documents: Vec<Document>,
    candidate_id: Option<&str>,
) -> Result<PortalAnalysis, AppError> {
    if documents.is_empty() {
        return Err(AppError::Validation(
            "Upload your CV and certificates first".to_string(),
        ));
    }
    let existing = match candidate_id {
        Some(id) => Some(load_candidate(records, id).await?),
        None => None,
    };

    let report = gateway.analyze_documents(&documents).await?;
    let jobs = records.jobs().await.records;
    let recommendations = match_jobs(gateway, &documents, &jobs).await;
    let mut basic_score = average_match_score(&recommendations);
    info!(
        "Portal analysis: {} recommendation(s), basic score {:?}",
        recommendations.len(),
        basic_score
    );

    let candidate = match existing {
        Some(mut candidate) => {
            candidate.report = Some(report.clone());
            candidate.documents = Some(documents);
            // No successful match keeps the previous score.
            match basic_score {
                Some(score) => candidate.basic_score = Some(score),
                None => basic_score = candidate.basic_score,
            }
            records.update_candidate(candidate.clone()).await;
            Some(candidate)
        }
        None => None,
    };

    Ok(PortalAnalysis {
        report,
        recommendations,
        basic_score,
        candidate,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandCheckRequest {
    pub candidate_name: String,
    pub district_of_origin: Option<String>,
    pub integrity_score: Option<u32>,
}

pub fn brand_check_context(req: &BrandCheckRequest) -> String {
    let district = req.district_of_origin.as_deref().unwrap_or("Unknown");
    let integrity = req
        .integrity_score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    format!("Candidate Self-Check Request. District: {district}. Integrity: {integrity}")
}

/// A candidate's own digital-footprint check. Nothing is persisted.
pub async fn brand_check(
    gateway: &dyn AnalysisGateway,
    req: &BrandCheckRequest,
) -> Result<OsintReport, AppError> {
    gateway
        .generate_osint_report(&req.candidate_name, &brand_check_context(req))
        .await
}
