use tracing::info;

use crate::analysis::AnalysisGateway;
use crate::errors::AppError;
use crate::models::document::decode_data_url;
use crate::models::{Candidate, CandidateStatus, Document};
use crate::store::RecordFacade;

pub(crate) async fn load_candidate(records: &RecordFacade, id: &str) -> Result<Candidate, AppError> {
    records
        .candidate(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

pub async fn set_status(
    records: &RecordFacade,
    id: &str,
    status: CandidateStatus,
) -> Result<Candidate, AppError> {
    let mut candidate = load_candidate(records, id).await?;
    candidate.status = status;
    records.update_candidate(candidate.clone()).await;
    info!("Candidate {id} status set to {status:?}");
    Ok(candidate)
}

/// Summary handed to the OSINT scan in place of the documents themselves.
pub fn osint_context(candidate: &Candidate) -> String {
    let district = candidate
        .report
        .as_ref()
        .map(|r| r.district_of_origin.as_str())
        .unwrap_or("Unknown");
    let integrity = candidate
        .report
        .as_ref()
        .map(|r| r.integrity_score.to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    format!(
        "Role: {}. District: {district}. Integrity Score: {integrity}.",
        candidate.role
    )
}

pub async fn run_osint(
    gateway: &dyn AnalysisGateway,
    records: &RecordFacade,
    id: &str,
) -> Result<Candidate, AppError> {
    let mut candidate = load_candidate(records, id).await?;
    let report = gateway
        .generate_osint_report(&candidate.name, &osint_context(&candidate))
        .await?;

    candidate.osint = Some(report);
    records.update_candidate(candidate.clone()).await;
    Ok(candidate)
}

pub async fn add_documents(
    records: &RecordFacade,
    id: &str,
    documents: Vec<Document>,
) -> Result<Candidate, AppError> {
    if documents.is_empty() {
        return Err(AppError::Validation("No readable files were uploaded".to_string()));
    }
    let mut candidate = load_candidate(records, id).await?;
    let added = documents.len();
    candidate
        .documents
        .get_or_insert_with(Vec::new)
        .extend(documents);

    records.update_candidate(candidate.clone()).await;
    info!("Added {added} document(s) to candidate {id}");
    Ok(candidate)
}

fn document_index_error(id: &str, index: usize) -> AppError {
    AppError::NotFound(format!("Candidate {id} has no document {index}"))
}

pub async fn remove_document(
    records: &RecordFacade,
    id: &str,
    index: usize,
) -> Result<Candidate, AppError> {
    let mut candidate = load_candidate(records, id).await?;
    let documents = candidate.documents.get_or_insert_with(Vec::new);
    if index >= documents.len() {
        return Err(document_index_error(id, index));
    }
    let removed = documents.remove(index);

    records.update_candidate(candidate.clone()).await;
    info!("Removed document {} from candidate {id}", removed.name);
    Ok(candidate)
}

/// The stored document with its decoded bytes.
pub async fn document_download(
    records: &RecordFacade,
    id: &str,
    index: usize,
) -> Result<(Document, Vec<u8>), AppError> {
    let candidate = load_candidate(records, id).await?;
    let document = candidate
        .documents()
        .get(index)
        .cloned()
        .ok_or_else(|| document_index_error(id, index))?;
    let bytes = decode_data_url(&document.data_url()).map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "Stored document {} is not valid base64: {e}",
            document.name
        ))
    })?;
    Ok((document, bytes))
}
