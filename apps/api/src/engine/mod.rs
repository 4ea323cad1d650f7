// Career Recommendation Engine
// Implements: catalog loading, match scoring, gap planning, roadmap synthesis, ranking.
// Pure and synchronous — no I/O beyond reading the catalog file at startup.

pub mod catalog;
pub mod gap_plan;
pub mod handlers;
pub mod profile;
pub mod recommend;
pub mod roadmap;
pub mod scoring;

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the engine. All of them are local preconditions:
/// configuration or input bugs, never transient, never retried.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid catalog entry '{career}': {reason}")]
    InvalidCatalogEntry { career: String, reason: String },

    #[error("Catalog is not valid JSON: {0}")]
    MalformedCatalog(#[from] serde_json::Error),

    #[error("Catalog file '{path}' could not be read: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("At least 2 careers are required to pick a primary and backup, found {found}")]
    InsufficientCatalog { found: usize },

    #[error("Missing or invalid field '{field}': {reason}")]
    MissingRequiredField { field: &'static str, reason: String },
}
