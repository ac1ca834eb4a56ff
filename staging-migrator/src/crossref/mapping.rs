//! Meta-issue to dependent-issue mapping.

use super::CrossRefError;
use crate::types::Identifier;
use std::collections::BTreeMap;
use std::path::Path;

/// Dependents of one meta-issue, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    pub meta_id: u64,
    pub issues: Vec<Identifier>,
}

/// Mapping from meta-issue ids to the issues that get its label.
///
/// Entries are ordered by numeric meta-issue id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossRefMapping {
    entries: Vec<MetaEntry>,
}

impl CrossRefMapping {
    /// Builds a mapping from string-encoded integer keys.
    ///
    /// # Errors
    ///
    /// Returns [`CrossRefError::InvalidKey`] for a key that isn't an integer.
    pub fn from_raw(raw: BTreeMap<String, Vec<Identifier>>) -> Result<Self, CrossRefError> {
        let mut entries = raw
            .into_iter()
            .map(|(key, issues)| {
                let meta_id = key
                    .trim()
                    .parse()
                    .map_err(|_| CrossRefError::InvalidKey { key: key.clone() })?;
                Ok(MetaEntry { meta_id, issues })
            })
            .collect::<Result<Vec<_>, CrossRefError>>()?;
        entries.sort_by_key(|entry| entry.meta_id);
        Ok(Self { entries })
    }

    /// Parses a mapping from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CrossRefError`] if the JSON is malformed or a key isn't an integer.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, CrossRefError> {
        let raw = serde_json::from_str(json).map_err(|e| CrossRefError::JsonError {
            path: origin.to_string(),
            source: e,
        })?;
        Self::from_raw(raw)
    }

    /// Loads a mapping file.
    ///
    /// # Errors
    ///
    /// Returns [`CrossRefError`] if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CrossRefError> {
        let content = std::fs::read_to_string(path).map_err(|e| CrossRefError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content, &path.display().to_string())
    }

    /// Entries in meta-issue order.
    #[must_use]
    pub fn entries(&self) -> &[MetaEntry] {
        &self.entries
    }

    /// Number of label applications the mapping asks for.
    #[must_use]
    pub fn total_links(&self) -> usize {
        self.entries.iter().map(|entry| entry.issues.len()).sum()
    }
}
