//! Cross-reference labels.
//!
//! Each meta-issue in the mapping gets a label, and every issue listed under
//! it gets that label added. Adding a label an issue already has is a no-op
//! for the tracker, so this job is safe to rerun.

mod error;
mod mapping;

pub use error::CrossRefError;
pub use mapping::{CrossRefMapping, MetaEntry};

use crate::config::LabelPalette;
use crate::provision::LabelSpec;
use crate::summary::MetaSummary;
use crate::templates::MetaLabelRenderer;
use crate::tracker::Tracker;
use tracing::{info, warn};

/// Result of adding one label to one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Failed {
        /// Error excerpt.
        error: String,
    },
}

/// Builds one label per meta-issue, in mapping order.
///
/// # Errors
///
/// Returns [`CrossRefError::Template`] if a name or description can't be rendered.
pub fn meta_label_specs(
    mapping: &CrossRefMapping,
    renderer: &MetaLabelRenderer,
    palette: &LabelPalette,
) -> Result<Vec<LabelSpec>, CrossRefError> {
    mapping
        .entries()
        .iter()
        .map(|entry| {
            Ok(LabelSpec {
                name: renderer.name(entry.meta_id)?,
                color: palette.color_for_meta(entry.meta_id).to_string(),
                description: Some(renderer.description(entry.meta_id)?),
            })
        })
        .collect()
}

/// Adds `label` to every issue under `entry`.
pub async fn apply_meta_label(
    tracker: &Tracker,
    entry: &MetaEntry,
    label: &str,
    excerpt_len: usize,
) -> MetaSummary {
    let mut summary = MetaSummary::new(entry.meta_id, label, entry.issues.len());

    for issue in &entry.issues {
        let outcome = match tracker.add_label(issue, label).await {
            Ok(output) if output.success() => ApplyOutcome::Applied,
            Ok(output) => ApplyOutcome::Failed {
                error: output.stderr_excerpt(excerpt_len),
            },
            Err(e) => ApplyOutcome::Failed {
                error: e.to_string(),
            },
        };

        if let ApplyOutcome::Failed { error } = &outcome {
            warn!(issue = %issue, label, "  FAIL: Staging #{issue} ← {label}: {error}");
        }
        summary.record(&outcome);
    }

    info!(
        failed = summary.failed,
        "  {label}: {} issues labeled",
        summary.applied
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrossRefLabels;
    use crate::rate_limit::{RateLimiter, RetryPolicy};
    use crate::test_support::RecordingCli;
    use crate::tracker::CommandOutput;
    use crate::types::Identifier;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn builds_colored_meta_labels() {
        let mapping = CrossRefMapping::from_json(r#"{"17": [1], "5": [2]}"#, "test").unwrap();
        let renderer = MetaLabelRenderer::new(&CrossRefLabels::default()).unwrap();

        let specs = meta_label_specs(&mapping, &renderer, &LabelPalette::default()).unwrap();

        assert_eq!(
            specs,
            vec![
                LabelSpec {
                    name: "v4:5".to_string(),
                    color: "D93F0B".to_string(),
                    description: Some("Affected by V4 meta-issue #5".to_string()),
                },
                LabelSpec {
                    name: "v4:17".to_string(),
                    color: "E4E669".to_string(),
                    description: Some("Affected by V4 meta-issue #17".to_string()),
                },
            ]
        );
    }

    #[tokio::test]
    async fn counts_applied_and_failed() {
        let cli = Arc::new(RecordingCli::new(|args| {
            if args[2] == "102" {
                CommandOutput {
                    code: Some(1),
                    stdout: String::new(),
                    stderr: "GraphQL: Could not resolve to an issue or pull request with the number of 102.".to_string(),
                }
            } else {
                CommandOutput::ok("https://github.com/acme/staging/issues/101\n")
            }
        }));
        let tracker = Tracker::new(
            cli.clone(),
            "acme/staging",
            RateLimiter::new(Duration::ZERO),
            RetryPolicy::no_retry(),
        );
        let entry = MetaEntry {
            meta_id: 5,
            issues: vec![
                Identifier::Number(101),
                Identifier::Number(102),
                Identifier::Number(103),
            ],
        };

        let summary = apply_meta_label(&tracker, &entry, "v4:5", 80).await;

        assert_eq!(summary.requested, 3);
        assert_eq!(summary.applied, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(cli.calls_to("issue", "edit").len(), 3);
    }
}
