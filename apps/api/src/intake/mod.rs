//! Document intake: turns uploaded files into [`Document`]s.
//!
//! The upload slot a file arrived through decides its kind; only files from
//! the generic slot have their kind guessed from the filename. Empty or
//! unreadable files are dropped without retry.

use tracing::debug;

use crate::errors::AppError;
use crate::models::{Document, DocumentKind};

pub mod multipart;

pub use multipart::read_upload_form;

/// Name given to a selfie the client uploaded without a filename.
pub const SELFIE_FILENAME: &str = "Selfie-with-ID.jpg";
pub const DEFAULT_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSlot {
    /// Kind guessed from the filename (candidate portal).
    Inferred,
    /// Kind left to the analysis model (scanner batch).
    Unsorted,
    Identity,
    Selfie,
    HrUpload,
}

impl UploadSlot {
    fn kind_for(self, filename: &str) -> DocumentKind {
        match self {
            UploadSlot::Inferred => infer_kind(filename),
            UploadSlot::Unsorted => DocumentKind::Unknown,
            UploadSlot::Identity => DocumentKind::Identity,
            UploadSlot::Selfie => DocumentKind::Selfie,
            UploadSlot::HrUpload => DocumentKind::HrUpload,
        }
    }
}

/// CVs are recognised by name alone.
pub fn infer_kind(filename: &str) -> DocumentKind {
    if filename.to_lowercase().contains("cv") {
        DocumentKind::Cv
    } else {
        DocumentKind::Support
    }
}

/// Builds a document from raw upload bytes. `None` when there is nothing to keep.
pub fn document_from_upload(
    filename: Option<&str>,
    mime_type: Option<&str>,
    bytes: &[u8],
    slot: UploadSlot,
) -> Option<Document> {
    let filename = filename.map(str::trim).filter(|n| !n.is_empty());
    if bytes.is_empty() {
        debug!("Dropping empty upload {:?}", filename);
        return None;
    }

    let name = match (filename, slot) {
        (Some(name), _) => name.to_string(),
        (None, UploadSlot::Selfie) => SELFIE_FILENAME.to_string(),
        (None, _) => "document".to_string(),
    };
    let mime_type = mime_type
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_MIME);

    Some(Document::from_bytes(
        name.clone(),
        slot.kind_for(&name),
        mime_type,
        bytes,
    ))
}

/// Plain text of a PDF document, for the profile-parse import.
pub async fn extract_pdf_text(document: &Document) -> Result<String, AppError> {
    if !document.is_pdf() {
        return Err(AppError::Validation(format!(
            "{} is not a PDF ({})",
            document.name, document.mime_type
        )));
    }
    let bytes = document
        .decode_bytes()
        .map_err(|e| AppError::Validation(format!("{} is not valid base64: {e}", document.name)))?;

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::Validation(format!("Could not read PDF: {e}")))?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Validation(
            "The PDF contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}
