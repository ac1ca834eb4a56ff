//! Small value types shared across the importer and the cross-reference job.

use serde::Deserialize;
use std::fmt;

/// A field that pack exports write either as a single string or as a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    /// Free text, used verbatim.
    Text(String),
    /// A list of entries, joined with `", "` when rendered.
    List(Vec<String>),
}

impl TextOrList {
    /// Renders the value as a single line.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
        }
    }
}

/// Joins an optional [`TextOrList`], returning `None` when nothing would be rendered.
pub(crate) fn non_empty_joined(value: Option<&TextOrList>) -> Option<String> {
    value.map(TextOrList::joined).filter(|s| !s.is_empty())
}

/// Returns the string when it is present and non-empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// An identifier that may be encoded as a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Numeric identifier, e.g. a tracker issue number.
    Number(u64),
    /// Textual identifier, e.g. `STORY-ORCH-001`.
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
