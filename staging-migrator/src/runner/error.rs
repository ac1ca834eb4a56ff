//! Runner error types.

/// Fatal errors that abort a run.
///
/// Per-item tracker failures are never errors; they are counted in the
/// run's summary.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// An input pack could not be loaded.
    #[error(transparent)]
    Pack(#[from] crate::packs::PackError),

    /// The cross-reference mapping or its labels could not be prepared.
    #[error(transparent)]
    CrossRef(#[from] crate::crossref::CrossRefError),

    /// Existing issues could not be listed for a safe rerun.
    #[error(transparent)]
    Issue(#[from] crate::issues::IssueError),
}
