//! Cross-reference run summary.

use super::ProvisionReport;
use crate::crossref::ApplyOutcome;

/// Label applications for one meta-issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaSummary {
    pub meta_id: u64,
    pub label: String,
    /// Issues listed under the meta-issue.
    pub requested: usize,
    pub applied: usize,
    pub failed: usize,
}

impl MetaSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new(meta_id: u64, label: &str, requested: usize) -> Self {
        Self {
            meta_id,
            label: label.to_string(),
            requested,
            applied: 0,
            failed: 0,
        }
    }

    /// Counts one label application.
    pub fn record(&mut self, outcome: &ApplyOutcome) {
        match outcome {
            ApplyOutcome::Applied => self.applied += 1,
            ApplyOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Summary of a complete cross-reference run.
#[derive(Debug, Clone, Default)]
pub struct CrossRefSummary {
    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Label provisioning counts.
    pub labels: ProvisionReport,

    /// Per meta-issue counts, in meta-issue order.
    pub metas: Vec<MetaSummary>,
}

impl CrossRefSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Label applications that succeeded.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.metas.iter().map(|m| m.applied).sum()
    }

    /// Label applications that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.metas.iter().map(|m| m.failed).sum()
    }

    /// Label applications the mapping asked for.
    #[must_use]
    pub fn needed(&self) -> usize {
        self.metas.iter().map(|m| m.requested).sum()
    }

    /// Returns true if any label creation or application failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0 || self.labels.failed > 0
    }
}
