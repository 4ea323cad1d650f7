//! Axum route handlers for résumé ingestion.

use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::cleaner::clean_text;
use crate::resume::parser::{parse_resume, ParsedResume};
use crate::resume::pdf::extract_pdf_text;
use crate::resume::ResumeError;

/// Multipart field carrying the uploaded PDF.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub file_name: String,
    #[serde(flatten)]
    pub parsed: ParsedResume,
    /// Résumés do not state interests; the client asks the user for them.
    pub interests: Vec<String>,
}

/// POST /api/v1/resume/upload
///
/// Extracts text from an uploaded PDF and returns the skills and sections
/// found in it, ready to prefill a recommendation request.
pub async fn handle_resume_upload(
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let data = field.bytes().await?;

        let raw_text = tokio::task::spawn_blocking(move || extract_pdf_text(&data))
            .await
            .map_err(|e| ResumeError::Extraction(format!("PDF parser aborted: {e}")))??;

        let parsed = parse_resume(&clean_text(&raw_text));
        info!(
            file_name = %file_name,
            skills = parsed.skills.len(),
            "Resume parsed"
        );

        return Ok(Json(ResumeUploadResponse {
            file_name,
            parsed,
            interests: Vec::new(),
        }));
    }

    Err(AppError::Validation(format!(
        "No resume provided in multipart field '{FILE_FIELD}'"
    )))
}
