//! Build pack exports: the three record schemas and their loaders.

mod error;
mod record;

pub use error::PackError;
pub use record::{CompactRecord, KeyedRecord};

use record::KeyedPackFile;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;
use tracing::info;

/// One generation of build pack issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pack {
    V1,
    V2,
    /// Compact V2 export with pre-rendered bodies.
    V2M,
}

impl Pack {
    /// Packs in import order.
    pub const ALL: [Pack; 3] = [Pack::V1, Pack::V2, Pack::V2M];

    /// Tag used in titles, milestones and footers.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::V1 => "V1",
            Self::V2 => "V2",
            Self::V2M => "V2M",
        }
    }

    /// Provenance label, e.g. `source:v2m`.
    #[must_use]
    pub fn source_label(self) -> String {
        format!("source:{}", self.tag().to_lowercase())
    }

    /// Prefixes `text` with `[TAG] `.
    #[must_use]
    pub fn prefixed(self, text: &str) -> String {
        format!("[{}] {text}", self.tag())
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Loads a V1 or V2 export (`{"issues": [...]}`).
///
/// # Errors
///
/// Returns [`PackError`] if the file can't be read or isn't the expected shape.
pub fn load_keyed_pack(path: &Path) -> Result<Vec<KeyedRecord>, PackError> {
    let file: KeyedPackFile = read_json(path)?;
    info!(path = %path.display(), count = file.issues.len(), "Loaded pack");
    Ok(file.issues)
}

/// Loads a V2M export (a bare array).
///
/// # Errors
///
/// Returns [`PackError`] if the file can't be read or isn't the expected shape.
pub fn load_compact_pack(path: &Path) -> Result<Vec<CompactRecord>, PackError> {
    let records: Vec<CompactRecord> = read_json(path)?;
    info!(path = %path.display(), count = records.len(), "Loaded pack");
    Ok(records)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, PackError> {
    let content = std::fs::read_to_string(path).map_err(|e| PackError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| PackError::JsonError {
        path: path.display().to_string(),
        source: e,
    })
}
