use async_trait::async_trait;
use tracing::{debug, info};

use crate::analysis::experience::apply_experience_guard;
use crate::analysis::prompts::{
    ASSISTANT_ACK, ASSISTANT_FALLBACK_REPLY, ASSISTANT_PREAMBLE, COMPLIANCE_PROMPT,
    IDENTITY_CHECK_SECTION, JOB_MATCH_PROMPT, OSINT_PROMPT, PROFILE_PARSE_PROMPT,
    SOURCING_PROMPT,
};
use crate::analysis::schemas::{compliance_schema, job_match_schema, sourcing_schema};
use crate::analysis::validation::{
    check_compliance_report, check_job_match, check_osint_report, check_sourcing,
    require_identity_evidence, wants_face_match,
};
use crate::analysis::AnalysisGateway;
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, ORGANISATION_PREAMBLE};
use crate::llm_client::{CallOptions, Content, LlmClient, Part};
use crate::models::{
    ChatRole, ChatTurn, ComplianceReport, Document, Job, JobMatchResult, OsintReport,
    SourcingResult,
};

/// Live gateway backed by Gemini through [`LlmClient`].
pub struct GeminiGateway {
    llm: LlmClient,
}

impl GeminiGateway {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

fn document_parts(documents: &[Document]) -> Vec<Part> {
    documents
        .iter()
        .map(|d| Part::inline(&d.mime_type, &d.content))
        .collect()
}

fn fill_job_template(template: &str, job: &Job) -> String {
    template
        .replace("{title}", &job.title)
        .replace("{company}", &job.company)
        .replace("{location}", &job.location)
        .replace("{description}", &job.description)
        .replace("{skills}", &job.required_skills.join(", "))
}

fn invalid(operation: &str, detail: String) -> AppError {
    AppError::Analysis(format!("{operation} returned an invalid response: {detail}"))
}

#[async_trait]
impl AnalysisGateway for GeminiGateway {
    async fn analyze_documents(
        &self,
        documents: &[Document],
    ) -> Result<ComplianceReport, AppError> {
        require_identity_evidence(documents)?;
        let face_match = wants_face_match(documents);

        let prompt = COMPLIANCE_PROMPT.replace(
            "{identity_check}",
            if face_match { IDENTITY_CHECK_SECTION } else { "" },
        );
        let mut parts = document_parts(documents);
        parts.push(Part::text(format!("{ORGANISATION_PREAMBLE}\n\n{prompt}")));

        let options = CallOptions {
            temperature: Some(0.2),
            response_schema: Some(compliance_schema(face_match)),
            web_search: false,
        };
        let report: ComplianceReport = self
            .llm
            .call_json(&[Content::user(parts)], &options)
            .await
            .map_err(|e| AppError::from_llm("Document analysis", e))?;
        check_compliance_report(&report, face_match)
            .map_err(|m| invalid("Document analysis", m))?;

        info!(
            "Analyzed {} document(s): risk={:?} face_match={}",
            documents.len(),
            report.risk_assessment.level,
            face_match
        );
        Ok(report)
    }

    async fn generate_osint_report(
        &self,
        candidate_name: &str,
        context: &str,
    ) -> Result<OsintReport, AppError> {
        if candidate_name.trim().is_empty() {
            return Err(AppError::Validation(
                "A candidate name is required for an OSINT scan".to_string(),
            ));
        }

        let prompt = OSINT_PROMPT
            .replace("{name}", candidate_name)
            .replace("{context}", context);
        let contents = [Content::user(vec![Part::text(format!(
            "{ORGANISATION_PREAMBLE}\n\n{prompt}\n\n{JSON_ONLY_INSTRUCTION}"
        ))])];

        // Search grounding cannot be combined with a response schema; the shape
        // is requested in the prompt and checked below instead.
        let options = CallOptions {
            temperature: Some(0.4),
            response_schema: None,
            web_search: true,
        };
        let (mut report, grounding): (OsintReport, Vec<String>) = self
            .llm
            .call_json_grounded(&contents, &options)
            .await
            .map_err(|e| AppError::from_llm("OSINT scan", e))?;
        check_osint_report(&report).map_err(|m| invalid("OSINT scan", m))?;

        if !grounding.is_empty() {
            let sources = report.sources.get_or_insert_with(Vec::new);
            for uri in grounding {
                if !sources.contains(&uri) {
                    sources.push(uri);
                }
            }
        }

        info!(
            "OSINT scan complete: match={} sources={}",
            report.criminal_record_match,
            report.sources.as_ref().map(Vec::len).unwrap_or(0)
        );
        Ok(report)
    }

    async fn match_candidate_to_job(
        &self,
        documents: &[Document],
        job: &Job,
    ) -> Result<JobMatchResult, AppError> {
        if documents.is_empty() {
            return Err(AppError::Validation(
                "Upload a CV before matching against jobs".to_string(),
            ));
        }

        let mut parts = document_parts(documents);
        parts.push(Part::text(fill_job_template(JOB_MATCH_PROMPT, job)));

        let options = CallOptions {
            temperature: None,
            response_schema: Some(job_match_schema()),
            web_search: false,
        };
        let mut result: JobMatchResult = self
            .llm
            .call_json(&[Content::user(parts)], &options)
            .await
            .map_err(|e| AppError::from_llm("Job match", e))?;
        check_job_match(&result).map_err(|m| invalid("Job match", m))?;
        result.job_id = job.id.clone();

        let result = apply_experience_guard(result, job);
        debug!("Matched against job {}: {}", job.id, result.overall_score);
        Ok(result)
    }

    async fn generate_sourcing_strategies(&self, job: &Job) -> Result<SourcingResult, AppError> {
        let contents = [Content::user(vec![Part::text(fill_job_template(
            SOURCING_PROMPT,
            job,
        ))])];
        let options = CallOptions {
            temperature: Some(0.7),
            response_schema: Some(sourcing_schema()),
            web_search: false,
        };
        let result: SourcingResult = self
            .llm
            .call_json(&contents, &options)
            .await
            .map_err(|e| AppError::from_llm("Sourcing strategy", e))?;
        check_sourcing(&result).map_err(|m| invalid("Sourcing strategy", m))?;
        Ok(result)
    }

    async fn parse_profile_text(&self, text: &str) -> Result<ComplianceReport, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Profile text cannot be empty".to_string()));
        }

        let prompt = PROFILE_PARSE_PROMPT.replace("{text}", text);
        let contents = [Content::user(vec![Part::text(format!(
            "{ORGANISATION_PREAMBLE}\n\n{prompt}"
        ))])];
        let options = CallOptions {
            temperature: Some(0.2),
            response_schema: Some(compliance_schema(false)),
            web_search: false,
        };
        let report: ComplianceReport = self
            .llm
            .call_json(&contents, &options)
            .await
            .map_err(|e| AppError::from_llm("Profile parse", e))?;
        check_compliance_report(&report, false).map_err(|m| invalid("Profile parse", m))?;
        Ok(report)
    }

    async fn chat(&self, message: &str, history: &[ChatTurn]) -> Result<String, AppError> {
        let mut contents = Vec::with_capacity(history.len() + 3);
        contents.push(Content::user(vec![Part::text(ASSISTANT_PREAMBLE)]));
        contents.push(Content::model(vec![Part::text(ASSISTANT_ACK)]));
        for turn in history {
            let parts = vec![Part::text(turn.text.clone())];
            contents.push(match turn.role {
                ChatRole::User => Content::user(parts),
                ChatRole::Model => Content::model(parts),
            });
        }
        contents.push(Content::user(vec![Part::text(message)]));

        let reply = self
            .llm
            .call_text(&contents, &CallOptions::default())
            .await
            .map_err(|e| AppError::from_llm("Assistant chat", e))?;
        Ok(reply.unwrap_or_else(|| ASSISTANT_FALLBACK_REPLY.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{doc, job};
    use crate::models::DocumentKind;

    fn unconfigured() -> GeminiGateway {
        GeminiGateway::new(LlmClient::new(None).with_base_url("http://127.0.0.1:9"))
    }

    #[test]
    fn test_job_template_filled() {
        let mut role = job("Rig Welder", "Certified welder, 4 years offshore.");
        role.required_skills = vec!["Welding".into(), "NDT".into()];
        let prompt = fill_job_template(JOB_MATCH_PROMPT, &role);
        assert!(prompt.contains("Title: Rig Welder"));
        assert!(prompt.contains("Required Skills: Welding, NDT"));
        assert!(!prompt.contains("{title}"));
    }

    #[tokio::test]
    async fn test_every_operation_fails_fast_without_key() {
        let gateway = unconfigured();
        let docs = vec![doc("id.jpg", DocumentKind::Identity)];
        let role = job("QHSE Supervisor", "5 years");

        assert!(matches!(
            gateway.analyze_documents(&docs).await,
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            gateway.generate_osint_report("Jane Doe", "Role: QHSE").await,
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            gateway.match_candidate_to_job(&docs, &role).await,
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            gateway.generate_sourcing_strategies(&role).await,
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            gateway.parse_profile_text("Jane Doe, welder").await,
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            gateway.chat("hello", &[]).await,
            Err(AppError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_validation_precedes_configuration() {
        let gateway = unconfigured();
        assert!(matches!(
            gateway.analyze_documents(&[]).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            gateway.parse_profile_text("   ").await,
            Err(AppError::Validation(_))
        ));
    }
}
