use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

/// What a stored file is evidence of. Inferred from the upload path or filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Identity,
    Cv,
    Support,
    HrUpload,
    Selfie,
    Unknown,
}

impl DocumentKind {
    /// Kinds are inferred from filenames, so anything except a selfie may be
    /// the identity document.
    pub fn may_bear_identity(self) -> bool {
        !matches!(self, DocumentKind::Selfie)
    }
}

/// A candidate file with its bytes held as base64. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub kind: DocumentKind,
    pub content: String,
    pub mime_type: String,
}

impl Document {
    pub fn from_bytes(
        name: impl Into<String>,
        kind: DocumentKind,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            content: STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// `data:{mime};base64,{content}`, for offering the file as a browser download.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.content)
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.content)
    }

    pub fn is_pdf(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case("application/pdf")
    }
}

/// Decodes a base64 data URL to raw bytes.
///
/// Accepts both `data:image/jpeg;base64,...` and a bare base64 payload.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let payload = match data_url.find(',') {
        Some(idx) => &data_url[idx + 1..],
        None => data_url,
    };
    STANDARD.decode(payload)
}
