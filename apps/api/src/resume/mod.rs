// Resume Ingestion
// Implements: PDF text extraction, text cleanup, field extraction (skills, contact, sections).
// Produces the skills half of a profile; interests are left for the user to fill in.

pub mod cleaner;
pub mod handlers;
pub mod parser;
pub mod pdf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("Uploaded file is not a PDF")]
    NotPdf,

    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("PDF contains no extractable text")]
    NoText,
}
