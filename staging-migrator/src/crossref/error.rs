//! Cross-reference error types.

use thiserror::Error;

/// Errors that stop the cross-reference job before labels are applied.
#[derive(Debug, Error)]
pub enum CrossRefError {
    /// Failed to read the mapping file.
    #[error("Failed to read mapping file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The mapping is not a JSON object of arrays.
    #[error("Failed to parse mapping file '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A mapping key is not a meta-issue number.
    #[error("Mapping key '{key}' is not a meta-issue number")]
    InvalidKey { key: String },

    /// A label name or description could not be rendered.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),
}
