use thiserror::Error;

use crate::extraction::ExtractError;

/// Screening failures that reach the caller. Scoring itself never errors on
/// degenerate input; only missing preconditions and the extraction
/// collaborator surface here.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("job description text is empty")]
    EmptyJobDescription,

    #[error("no resume documents supplied")]
    NoDocuments,

    #[error(transparent)]
    Extraction(#[from] ExtractError),
}
