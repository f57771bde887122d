use serde::{Deserialize, Serialize};

/// Fit of one candidate against one job. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResult {
    #[serde(default)]
    pub job_id: String,
    pub overall_score: u32,
    pub skills_match_score: u32,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_years_experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_years_experience: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcedProfile {
    pub name: String,
    pub headline: String,
    pub current_role: String,
    pub match_explanation: String,
    pub profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcingResult {
    pub search_string: String,
    pub explanation: String,
    #[serde(default)]
    pub simulated_matches: Vec<SourcedProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}
