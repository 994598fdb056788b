//! Document decoding: turns an uploaded PDF or Word file into one text blob.
//!
//! Decoding is pluggable: `AppState` holds an `Arc<dyn DocumentDecoder>`,
//! `StandardDecoder` by default. Decoders are synchronous and CPU-bound.

pub mod docx;
pub mod pdf;

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const LEGACY_WORD_MIME: &str = "application/msword";

/// Uploaded document formats the service recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    /// Binary `.doc`. Recognised so it can be rejected with a useful message.
    LegacyWord,
}

impl DocumentKind {
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            LEGACY_WORD_MIME => Some(Self::LegacyWord),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::LegacyWord),
            _ => None,
        }
    }

    /// Picks the kind from the declared content type, falling back to the file
    /// name extension when the type is missing or generic.
    pub fn resolve(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        match content_type.map(str::trim) {
            Some(ct) if !ct.is_empty() && !is_generic_mime(ct) => Self::from_mime(ct),
            _ => file_name.and_then(Self::from_file_name),
        }
    }
}

fn is_generic_mime(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .starts_with("application/octet-stream")
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unsupported document type: {0}")]
    Unsupported(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

/// Turns document bytes into plain text. Implement this to swap decoding
/// backends without touching the handlers.
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, DecodeError>;
}

/// `pdf-extract` for PDF, `docx-rs` for DOCX.
pub struct StandardDecoder;

impl DocumentDecoder for StandardDecoder {
    fn decode(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, DecodeError> {
        match kind {
            DocumentKind::Pdf => pdf::extract_text(bytes),
            DocumentKind::Docx => docx::extract_text(bytes),
            DocumentKind::LegacyWord => Err(DecodeError::Unsupported(
                "legacy .doc files cannot be read; save the document as .docx or PDF".to_string(),
            )),
        }
    }
}
