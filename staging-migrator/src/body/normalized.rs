//! Tracker-ready issue payload.

use crate::packs::Pack;

/// An issue record reduced to what the tracker needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedIssue {
    /// Pack the record came from.
    pub pack: Pack,

    /// Source key or id, `UNKNOWN` when the record has none.
    pub key: String,

    /// `[PACK] KEY TITLE`.
    pub title: String,

    /// Markdown body ending with the provenance footer.
    pub body: String,

    /// Record labels followed by the pack's source label, without duplicates.
    pub labels: Vec<String>,

    /// `[PACK] MILESTONE`, if the record names one.
    pub milestone: Option<String>,
}
