//! AI analysis gateway: the six document, profile and chat operations the rest of
//! the service needs from the language model.
//!
//! `AppState` holds an `Arc<dyn AnalysisGateway>`; `GeminiGateway` is the live
//! backend. Every response is validated against its record shape on receipt,
//! so callers only ever see well-formed reports or an `AppError`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{
    ChatTurn, ComplianceReport, Document, Job, JobMatchResult, OsintReport, SourcingResult,
};

pub mod experience;
pub mod gemini;
pub mod handlers;
pub mod prompts;
pub mod schemas;
pub mod validation;

pub use gemini::GeminiGateway;

#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Audits identity/CV/certificate files. Needs at least one non-selfie
    /// document; a selfie alongside it adds a face-match judgment.
    async fn analyze_documents(&self, documents: &[Document])
        -> Result<ComplianceReport, AppError>;

    /// Background check from a short context summary, never raw documents.
    async fn generate_osint_report(
        &self,
        candidate_name: &str,
        context: &str,
    ) -> Result<OsintReport, AppError>;

    async fn match_candidate_to_job(
        &self,
        documents: &[Document],
        job: &Job,
    ) -> Result<JobMatchResult, AppError>;

    async fn generate_sourcing_strategies(&self, job: &Job) -> Result<SourcingResult, AppError>;

    /// Builds a report from pasted or extracted profile text.
    async fn parse_profile_text(&self, text: &str) -> Result<ComplianceReport, AppError>;

    /// Stateless per call: the caller supplies all prior turns.
    async fn chat(&self, message: &str, history: &[ChatTurn]) -> Result<String, AppError>;
}
