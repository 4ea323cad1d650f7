use crate::resume::ResumeError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts raw text from an in-memory PDF.
///
/// CPU-bound and may take a while on large documents; call it from
/// `spawn_blocking`.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ResumeError> {
    if bytes.is_empty() {
        return Err(ResumeError::Empty);
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ResumeError::NotPdf);
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ResumeError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ResumeError::NoText);
    }
    Ok(text)
}
