use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub reason: String,
}

/// Face-match judgment between an identity document and a selfie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityVerification {
    pub is_match: bool,
    pub confidence: u32, // 0 – 100
    pub reason: String,
}

/// Sector the documents were audited against, with whatever regulator-specific
/// findings the model reported (NOGTR registration, ERB number, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorCompliance {
    pub sector: String,
    #[serde(default)]
    pub details: Value,
}

/// Output of one document-analysis run.
///
/// `risk_assessment.level` is the only input to accept/reject decisions;
/// `integrity_score` is shown to reviewers and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub candidate_name: String,
    pub district_of_origin: String,
    pub is_host_community: bool,
    pub certifications_valid: bool,
    pub integrity_score: u32, // 0 – 100
    pub risk_assessment: RiskAssessment,
    pub audit_notes: String,
    #[serde(default)]
    pub missing_documents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_verification: Option<IdentityVerification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_compliance: Option<SectorCompliance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Convicted,
    Acquitted,
    Pending,
    Wanted,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriminalRecord {
    pub case_id: String,
    pub offense: String,
    pub date: String,
    pub court: String,
    pub status: CaseStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Background-check output, attached to a candidate after an explicit scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsintReport {
    pub criminal_record_match: bool,
    pub criminal_details: String,
    #[serde(default)]
    pub criminal_records: Vec<CriminalRecord>,
    pub digital_footprint_score: u32, // 0 – 100
    pub lifestyle_analysis: String,
    pub family_background: String,
    pub social_media_sentiment: Sentiment,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub improvement_tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}
