use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::document::Document;
use crate::models::report::{ComplianceReport, OsintReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CandidateStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CandidateSource {
    #[default]
    Upload,
    Linkedin,
}

/// A vetted (or to-be-vetted) person. Owned by the record store; handlers only
/// ever hold copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: CandidateStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub source: CandidateSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ComplianceReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osint: Option<OsintReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Document>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
}

impl Candidate {
    pub fn documents(&self) -> &[Document] {
        self.documents.as_deref().unwrap_or_default()
    }
}
