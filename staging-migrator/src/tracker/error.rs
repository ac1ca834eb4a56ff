//! Tracker invocation error types.

use thiserror::Error;

/// Errors raised when the tracker CLI can't be run at all.
///
/// A CLI that runs and exits non-zero is not an error; see
/// [`CommandOutput`](super::CommandOutput).
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The program could not be spawned or waited on.
    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
