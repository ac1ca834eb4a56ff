//! Issue records as exported by each pack.

use crate::types::{Identifier, TextOrList};
use serde::Deserialize;

/// A V1 or V2 issue. V1 exports never carry the alignment fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeyedRecord {
    /// Story key, e.g. `STORY-ORCH-001`.
    pub key: Option<String>,
    pub title: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub acceptance_criteria: Option<String>,
    pub test_plan: Option<String>,
    pub depends_on: Option<TextOrList>,
    pub notes: Option<String>,
    pub labels: Vec<String>,
    pub milestone: Option<String>,
    pub repo_alignment: Option<String>,
    pub repo_paths: Option<TextOrList>,
    pub spec_refs: Option<TextOrList>,
}

/// A V2M issue with a pre-rendered markdown body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompactRecord {
    pub id: Option<Identifier>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub blocked_by: Option<TextOrList>,
    pub blocks: Option<TextOrList>,
    pub labels: Vec<String>,
    pub milestone: Option<String>,
}

/// Top-level shape of V1 and V2 exports: `{"issues": [...]}`.
#[derive(Debug, Deserialize)]
pub(crate) struct KeyedPackFile {
    pub issues: Vec<KeyedRecord>,
}
