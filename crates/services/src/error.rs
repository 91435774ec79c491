//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::catalog::CatalogError;

/// Errors emitted by the quiz session and flow services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no condition selected")]
    NoConditionSelected,

    #[error("no active question to answer")]
    NoActiveQuestion,

    #[error("submission is only available from the summary screen")]
    NotOnSummary,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Errors emitted by the prediction client.
///
/// None of these end the session; the user stays on the summary screen and
/// may retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("prediction request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("prediction service returned no label")]
    MissingPrediction,
}
