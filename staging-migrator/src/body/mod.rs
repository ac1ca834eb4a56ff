//! Turns pack records into tracker issues.
//!
//! V1 and V2 bodies are assembled from optional sections in a fixed order:
//! Problem, Proposed solution, Acceptance criteria, Test plan, Metadata. A
//! section appears only when its source field is non-empty. V2M bodies are
//! already rendered and only gain a Dependencies section. Every body ends with
//! a provenance footer naming the pack and source key.

mod normalized;

pub use normalized::NormalizedIssue;

use crate::packs::{CompactRecord, KeyedRecord, Pack};
use crate::types::{non_empty, non_empty_joined};

const UNKNOWN_KEY: &str = "UNKNOWN";
const UNTITLED: &str = "No title";

/// Builds the body of a V1 record.
#[must_use]
pub fn build_body_v1(record: &KeyedRecord) -> String {
    build_sectioned_body(Pack::V1, record, false)
}

/// Builds the body of a V2 record, including its repository alignment metadata.
#[must_use]
pub fn build_body_v2(record: &KeyedRecord) -> String {
    build_sectioned_body(Pack::V2, record, true)
}

/// Builds the body of a V2M record.
///
/// Dependency lines are only added when the body doesn't already mention them.
#[must_use]
pub fn build_body_v2m(record: &CompactRecord) -> String {
    let mut body = record.body.clone().unwrap_or_default();

    let mut meta = Vec::new();
    if let Some(blocked) = non_empty_joined(record.blocked_by.as_ref()) {
        if !body.contains("Blocked By") {
            meta.push(format!("**Blocked By:** {blocked}"));
        }
    }
    if let Some(blocks) = non_empty_joined(record.blocks.as_ref()) {
        if !body.contains("Blocks:") {
            meta.push(format!("**Blocks:** {blocks}"));
        }
    }
    if !meta.is_empty() {
        body.push_str("\n\n## Dependencies\n\n");
        body.push_str(&meta.join("\n"));
    }

    let id = record
        .id
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    body.push_str("\n\n");
    body.push_str(&footer(Pack::V2M, &id));
    body
}

/// Normalizes a V1 or V2 record.
///
/// Only V1 bodies omit the repository alignment metadata.
#[must_use]
pub fn normalize_keyed(pack: Pack, record: &KeyedRecord) -> NormalizedIssue {
    let body = build_sectioned_body(pack, record, pack != Pack::V1);
    normalize(
        pack,
        record.key.as_deref(),
        record.title.as_deref(),
        body,
        &record.labels,
        record.milestone.as_deref(),
    )
}

/// Normalizes a V2M record.
#[must_use]
pub fn normalize_compact(record: &CompactRecord) -> NormalizedIssue {
    let id = record.id.as_ref().map(ToString::to_string);
    normalize(
        Pack::V2M,
        id.as_deref(),
        record.title.as_deref(),
        build_body_v2m(record),
        &record.labels,
        record.milestone.as_deref(),
    )
}

fn normalize(
    pack: Pack,
    key: Option<&str>,
    title: Option<&str>,
    body: String,
    record_labels: &[String],
    milestone: Option<&str>,
) -> NormalizedIssue {
    let key = non_empty(key).unwrap_or(UNKNOWN_KEY).to_string();
    let title = pack.prefixed(&format!("{key} {}", title.unwrap_or(UNTITLED)));

    let mut labels: Vec<String> = Vec::with_capacity(record_labels.len() + 1);
    for label in record_labels.iter().cloned().chain([pack.source_label()]) {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    NormalizedIssue {
        pack,
        key,
        title,
        body,
        labels,
        milestone: non_empty(milestone).map(|m| pack.prefixed(m)),
    }
}

fn build_sectioned_body(pack: Pack, record: &KeyedRecord, with_alignment: bool) -> String {
    let mut parts = Vec::new();

    let sections = [
        ("Problem", &record.problem),
        ("Proposed solution", &record.solution),
        ("Acceptance criteria", &record.acceptance_criteria),
        ("Test plan", &record.test_plan),
    ];
    for (heading, text) in sections {
        if let Some(text) = non_empty(text.as_deref()) {
            parts.push(format!("## {heading}\n\n{text}"));
        }
    }

    let mut meta = Vec::new();
    if let Some(deps) = non_empty_joined(record.depends_on.as_ref()) {
        meta.push(format!("**Depends on:** {deps}"));
    }
    if with_alignment {
        if let Some(alignment) = non_empty(record.repo_alignment.as_deref()) {
            meta.push(format!("**Repo alignment:** {alignment}"));
        }
        if let Some(paths) = non_empty_joined(record.repo_paths.as_ref()) {
            meta.push(format!("**Repo paths:** {paths}"));
        }
        if let Some(refs) = non_empty_joined(record.spec_refs.as_ref()) {
            meta.push(format!("**Spec refs:** {refs}"));
        }
    }
    if let Some(notes) = non_empty(record.notes.as_deref()) {
        meta.push(format!("**Notes:** {notes}"));
    }
    if !meta.is_empty() {
        parts.push(format!("## Metadata\n\n{}", meta.join("\n")));
    }

    // The footer part starts with its own newline, so it sits two blank lines down.
    parts.push(format!("\n{}", footer(pack, record.key.as_deref().unwrap_or_default())));
    parts.join("\n\n")
}

fn footer(pack: Pack, key: &str) -> String {
    format!("---\n*Source: {pack} `{key}`*")
}
