//! Input preconditions and response-shape checks for the analysis gateway.
//!
//! Serde enforces field presence and enum values; these checks cover the
//! rules a JSON schema cannot express (score ranges, cross-field invariants).

use crate::errors::AppError;
use crate::models::{
    ComplianceReport, Document, DocumentKind, JobMatchResult, OsintReport, SourcingResult,
};

/// Blocks document analysis that could never produce a report.
pub fn require_identity_evidence(documents: &[Document]) -> Result<(), AppError> {
    if documents.is_empty() {
        return Err(AppError::Validation(
            "Please upload candidate documents (ID, CV).".to_string(),
        ));
    }
    if !documents.iter().any(|d| d.kind.may_bear_identity()) {
        return Err(AppError::Validation(
            "At least one identity document is required; a selfie alone cannot be audited."
                .to_string(),
        ));
    }
    Ok(())
}

/// True when the batch carries both a selfie and something it can be compared against.
pub fn wants_face_match(documents: &[Document]) -> bool {
    let has_selfie = documents.iter().any(|d| d.kind == DocumentKind::Selfie);
    has_selfie && documents.iter().any(|d| d.kind.may_bear_identity())
}

fn check_percentage(field: &str, value: u32) -> Result<(), String> {
    if value > 100 {
        return Err(format!("{field} must be within 0-100, got {value}"));
    }
    Ok(())
}

pub fn check_compliance_report(
    report: &ComplianceReport,
    expect_identity: bool,
) -> Result<(), String> {
    check_percentage("integrityScore", report.integrity_score)?;
    match &report.identity_verification {
        Some(identity) => check_percentage("identityVerification.confidence", identity.confidence)?,
        None if expect_identity => {
            return Err("identityVerification is missing although a selfie was supplied".to_string())
        }
        None => {}
    }
    Ok(())
}

pub fn check_osint_report(report: &OsintReport) -> Result<(), String> {
    check_percentage("digitalFootprintScore", report.digital_footprint_score)?;
    if !report.criminal_record_match && !report.criminal_records.is_empty() {
        return Err(format!(
            "criminalRecords lists {} case(s) but criminalRecordMatch is false",
            report.criminal_records.len()
        ));
    }
    Ok(())
}

pub fn check_job_match(result: &JobMatchResult) -> Result<(), String> {
    check_percentage("overallScore", result.overall_score)?;
    check_percentage("skillsMatchScore", result.skills_match_score)
}

pub fn check_sourcing(result: &SourcingResult) -> Result<(), String> {
    if result.search_string.trim().is_empty() {
        return Err("searchString is empty".to_string());
    }
    Ok(())
}
