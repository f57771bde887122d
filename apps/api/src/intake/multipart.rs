use std::collections::HashMap;

use axum::extract::Multipart;
use tracing::debug;

use super::{document_from_upload, UploadSlot};
use crate::errors::AppError;
use crate::models::Document;

/// Files and plain text fields of one multipart request.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub documents: Vec<Document>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Trimmed text field, `None` when absent or blank.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

fn slot_for_field(name: &str, file_slot: UploadSlot) -> UploadSlot {
    match name {
        "identity" => UploadSlot::Identity,
        "selfie" => UploadSlot::Selfie,
        _ => file_slot,
    }
}

/// Reads every field. `identity` and `selfie` fields are typed by name;
/// other file fields use `file_slot`; fields without a filename are text.
pub async fn read_upload_form(
    mut multipart: Multipart,
    file_slot: UploadSlot,
) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        let slot = slot_for_field(&name, file_slot);
        let is_file = field.file_name().is_some() || slot != file_slot;

        if !is_file {
            match field.text().await {
                Ok(text) => {
                    form.fields.insert(name, text);
                }
                Err(e) => debug!("Dropping unreadable field {name}: {e}"),
            }
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let mime_type = field.content_type().map(str::to_string);
        match field.bytes().await {
            Ok(bytes) => {
                if let Some(doc) =
                    document_from_upload(filename.as_deref(), mime_type.as_deref(), &bytes, slot)
                {
                    form.documents.push(doc);
                }
            }
            Err(e) => debug!("Dropping unreadable upload {:?}: {e}", filename),
        }
    }

    debug!(
        "Upload form: {} document(s), {} field(s)",
        form.documents.len(),
        form.fields.len()
    );
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_fields_override_slot() {
        assert_eq!(slot_for_field("selfie", UploadSlot::Unsorted), UploadSlot::Selfie);
        assert_eq!(slot_for_field("identity", UploadSlot::Inferred), UploadSlot::Identity);
        assert_eq!(slot_for_field("documents", UploadSlot::Inferred), UploadSlot::Inferred);
    }

    #[test]
    fn test_blank_field_is_absent() {
        let mut form = UploadForm::default();
        form.fields.insert("email".into(), "  ".into());
        form.fields.insert("candidateId".into(), " abc ".into());
        assert_eq!(form.field("email"), None);
        assert_eq!(form.field("candidateId"), Some("abc"));
    }
}
