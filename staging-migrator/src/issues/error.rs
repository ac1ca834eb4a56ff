//! Issue creation error types.

use thiserror::Error;

/// Errors that stop an issue operation before the tracker can judge it.
#[derive(Debug, Error)]
pub enum IssueError {
    /// The body file could not be written.
    #[error("Failed to write issue body file: {0}")]
    BodyFile(#[source] std::io::Error),

    /// The tracker CLI could not be run.
    #[error(transparent)]
    Invoke(#[from] crate::tracker::InvokeError),

    /// Listing existing issues failed.
    #[error("Failed to list existing issues: {message}")]
    ListFailed { message: String },
}
