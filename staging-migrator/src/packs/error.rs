//! Pack loading error types.

use thiserror::Error;

/// Errors that can occur while reading a pack export.
#[derive(Debug, Error)]
pub enum PackError {
    /// Failed to read the file.
    #[error("Failed to read pack file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not the JSON shape the pack uses.
    #[error("Failed to parse pack file '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
