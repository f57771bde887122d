//! Fixtures and a scripted analysis gateway shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use crate::analysis::validation::require_identity_evidence;
use crate::analysis::AnalysisGateway;
use crate::errors::AppError;
use crate::models::{
    Candidate, CandidateSource, CandidateStatus, ChatTurn, ComplianceReport, Document,
    DocumentKind, EmploymentType, Job, JobMatchResult, OsintReport, RiskAssessment, RiskLevel,
    SourcedProfile, SourcingResult,
};
use crate::models::report::Sentiment;

pub fn doc(name: &str, kind: DocumentKind) -> Document {
    Document::from_bytes(name, kind, "image/jpeg", name.as_bytes())
}

pub fn compliance_report(level: RiskLevel) -> ComplianceReport {
    ComplianceReport {
        candidate_name: "Grace Atim".into(),
        district_of_origin: "Hoima".into(),
        is_host_community: true,
        certifications_valid: true,
        integrity_score: 87,
        risk_assessment: RiskAssessment {
            level,
            reason: "Documents are consistent".into(),
        },
        audit_notes: "NEBOSH IGC verified against issuing body format.".into(),
        missing_documents: vec![],
        identity_verification: None,
        sector_compliance: None,
    }
}

pub fn osint_report(criminal_match: bool) -> OsintReport {
    OsintReport {
        criminal_record_match: criminal_match,
        criminal_details: "No negative matches found in global or local criminal databases."
            .into(),
        criminal_records: vec![],
        digital_footprint_score: 40,
        lifestyle_analysis: "Consistent with reported role.".into(),
        family_background: "No political exposure found.".into(),
        social_media_sentiment: Sentiment::Neutral,
        red_flags: vec![],
        improvement_tips: vec!["Add certifications to LinkedIn.".into()],
        sources: None,
    }
}

/// Job whose id is derived from the title, posted at a fixed instant.
pub fn job(title: &str, description: &str) -> Job {
    Job {
        id: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        company: "TotalEnergies EP".into(),
        location: "Hoima".into(),
        employment_type: EmploymentType::FullTime,
        description: description.to_string(),
        required_skills: vec![],
        posted_date: Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap(),
    }
}

/// Candidate timestamped `age_minutes` before a fixed instant.
pub fn candidate(name: &str, status: CandidateStatus, age_minutes: i64) -> Candidate {
    Candidate {
        id: String::new(),
        name: name.to_string(),
        role: "Pending Assessment".into(),
        status,
        timestamp: Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap()
            - Duration::minutes(age_minutes),
        source: CandidateSource::Upload,
        report: None,
        osint: None,
        documents: None,
        basic_score: None,
        email: None,
        email_verified: None,
    }
}

pub fn with_risk(mut c: Candidate, level: RiskLevel) -> Candidate {
    c.report = Some(compliance_report(level));
    c
}

/// Gateway with canned answers. A `None` answer fails the call with an
/// analysis error; job matches are keyed by job id.
pub struct StubGateway {
    pub compliance: Option<ComplianceReport>,
    pub osint: Option<OsintReport>,
    pub match_scores: HashMap<String, u32>,
    pub sourcing: Option<SourcingResult>,
    pub chat_reply: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            compliance: Some(compliance_report(RiskLevel::Low)),
            osint: Some(osint_report(false)),
            match_scores: HashMap::new(),
            sourcing: Some(SourcingResult {
                search_string: r#"site:linkedin.com/in "QHSE" AND "NEBOSH" AND Uganda"#.into(),
                explanation: "Targets certified safety leads in-country.".into(),
                simulated_matches: vec![SourcedProfile {
                    name: "Brian Tumusiime".into(),
                    headline: "HSE Officer | NEBOSH IGC".into(),
                    current_role: "HSE Officer at McDermott".into(),
                    match_explanation: "Five years on Tilenga EPC sites.".into(),
                    profile_url: "https://www.linkedin.com/in/brian-tumusiime".into(),
                }],
            }),
            chat_reply: Some("Happy to help.".into()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl StubGateway {
    pub fn with_risk(level: RiskLevel) -> Self {
        Self {
            compliance: Some(compliance_report(level)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            compliance: None,
            osint: None,
            sourcing: None,
            chat_reply: None,
            ..Self::default()
        }
    }

    pub fn with_match(mut self, job_id: &str, score: u32) -> Self {
        self.match_scores.insert(job_id.to_string(), score);
        self
    }

    /// Operation names in call order, with the argument that matters for each.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn answer<T: Clone>(operation: &str, value: &Option<T>) -> Result<T, AppError> {
        value
            .clone()
            .ok_or_else(|| AppError::Analysis(format!("{operation} failed: stubbed failure")))
    }
}

#[async_trait]
impl AnalysisGateway for StubGateway {
    async fn analyze_documents(
        &self,
        documents: &[Document],
    ) -> Result<ComplianceReport, AppError> {
        require_identity_evidence(documents)?;
        self.record(format!("analyze:{}", documents.len()));
        Self::answer("Document analysis", &self.compliance)
    }

    async fn generate_osint_report(
        &self,
        candidate_name: &str,
        context: &str,
    ) -> Result<OsintReport, AppError> {
        self.record(format!("osint:{candidate_name}|{context}"));
        Self::answer("OSINT scan", &self.osint)
    }

    async fn match_candidate_to_job(
        &self,
        _documents: &[Document],
        job: &Job,
    ) -> Result<JobMatchResult, AppError> {
        self.record(format!("match:{}", job.id));
        let score = *self
            .match_scores
            .get(&job.id)
            .ok_or_else(|| AppError::Analysis("Job match failed: stubbed failure".into()))?;
        Ok(JobMatchResult {
            job_id: job.id.clone(),
            overall_score: score,
            skills_match_score: score,
            matched_skills: vec![],
            missing_skills: vec![],
            reason: format!("Scored {score}"),
            experience_analysis: None,
            location_analysis: None,
            candidate_years_experience: None,
            required_years_experience: None,
        })
    }

    async fn generate_sourcing_strategies(&self, job: &Job) -> Result<SourcingResult, AppError> {
        self.record(format!("sourcing:{}", job.id));
        Self::answer("Sourcing strategy", &self.sourcing)
    }

    async fn parse_profile_text(&self, text: &str) -> Result<ComplianceReport, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Profile text cannot be empty".into()));
        }
        self.record("parse_profile".to_string());
        Self::answer("Profile parse", &self.compliance)
    }

    async fn chat(&self, message: &str, history: &[ChatTurn]) -> Result<String, AppError> {
        self.record(format!("chat:{}:{message}", history.len()));
        Self::answer("Assistant chat", &self.chat_reply)
    }
}
