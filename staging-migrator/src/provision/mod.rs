//! Label and milestone provisioning.
//!
//! Containers are created before anything references them. An item that
//! already exists is a tolerated outcome; any other failure is logged and
//! counted but never stops the run.

mod report;

pub use report::ProvisionReport;

use crate::tracker::{CallOutcome, CommandOutput, InvokeError, Tracker};
use std::collections::HashSet;
use tracing::{info, warn};

/// A label to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSpec {
    pub name: String,
    /// Six digit hex color, without `#`.
    pub color: String,
    pub description: Option<String>,
}

/// Result of creating one label or milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExists,
    Failed {
        /// Error excerpt.
        error: String,
    },
}

impl ProvisionOutcome {
    fn from_result(result: Result<CommandOutput, InvokeError>, excerpt_len: usize) -> Self {
        match result {
            Ok(output) => match output.outcome() {
                CallOutcome::Success => Self::Created,
                CallOutcome::AlreadyExists => Self::AlreadyExists,
                CallOutcome::RateLimited | CallOutcome::Failed => Self::Failed {
                    error: output.stderr_excerpt(excerpt_len),
                },
            },
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "OK",
            Self::AlreadyExists => "EXISTS",
            Self::Failed { .. } => "FAIL",
        }
    }
}

/// Creates labels and milestones through a [`Tracker`].
pub struct Provisioner<'a> {
    tracker: &'a Tracker,
    progress_every: usize,
    excerpt_len: usize,
}

impl<'a> Provisioner<'a> {
    /// Creates a provisioner logging a progress line every `progress_every` labels.
    #[must_use]
    pub fn new(tracker: &'a Tracker, progress_every: usize, excerpt_len: usize) -> Self {
        Self {
            tracker,
            progress_every: progress_every.max(1),
            excerpt_len,
        }
    }

    /// Creates each label once, in the given order. Repeated names are skipped.
    pub async fn ensure_labels(&self, labels: &[LabelSpec]) -> ProvisionReport {
        let mut seen = HashSet::new();
        let unique: Vec<&LabelSpec> = labels
            .iter()
            .filter(|label| seen.insert(label.name.as_str()))
            .collect();

        let mut report = ProvisionReport {
            requested: unique.len(),
            ..Default::default()
        };
        info!("=== Creating {} labels ===", unique.len());

        for (i, label) in unique.iter().enumerate() {
            let result = self
                .tracker
                .create_label(&label.name, &label.color, label.description.as_deref())
                .await;
            let outcome = ProvisionOutcome::from_result(result, self.excerpt_len);
            report.record(&outcome);

            if let ProvisionOutcome::Failed { error } = &outcome {
                warn!(label = %label.name, error = %error, "Label creation failed");
            }
            if (i + 1) % self.progress_every == 0 {
                info!(
                    "  [{}/{}] {}: {}",
                    i + 1,
                    unique.len(),
                    outcome.as_str(),
                    label.name
                );
            }
        }

        info!(
            created = report.created,
            existing = report.existing,
            failed = report.failed,
            available = report.available(),
            "  Done: {} labels processed",
            report.requested
        );
        report
    }

    /// Creates each milestone once, in the given order, logging every outcome.
    pub async fn ensure_milestones<'t>(
        &self,
        titles: impl IntoIterator<Item = &'t str>,
    ) -> ProvisionReport {
        let mut seen = HashSet::new();
        let unique: Vec<&str> = titles.into_iter().filter(|t| seen.insert(*t)).collect();

        let mut report = ProvisionReport {
            requested: unique.len(),
            ..Default::default()
        };
        info!("=== Creating {} milestones ===", unique.len());

        for title in unique {
            let result = self.tracker.create_milestone(title).await;
            let outcome = ProvisionOutcome::from_result(result, self.excerpt_len);
            report.record(&outcome);

            match &outcome {
                ProvisionOutcome::Failed { error } => {
                    warn!(milestone = %title, error = %error, "  FAIL: {title}");
                }
                _ => info!("  {}: {title}", outcome.as_str()),
            }
        }

        info!(
            available = report.available(),
            failed = report.failed,
            "  Done: {} milestones processed",
            report.requested
        );
        report
    }
}
