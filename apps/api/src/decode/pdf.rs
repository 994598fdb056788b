use crate::decode::DecodeError;

/// Extracts the text layer of a PDF held in memory. Pages come back joined,
/// separated by form feeds, which the normalizer turns into line breaks.
pub fn extract_text(bytes: &[u8]) -> Result<String, DecodeError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| DecodeError::Pdf(e.to_string()))
}
