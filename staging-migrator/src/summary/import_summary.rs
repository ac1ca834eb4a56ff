//! Importer run summary.

use super::{PackSummary, ProvisionReport};

/// Summary of a complete import run.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Label provisioning counts.
    pub labels: ProvisionReport,

    /// Milestone provisioning counts.
    pub milestones: ProvisionReport,

    /// Issue counts, in import order.
    pub packs: Vec<PackSummary>,
}

impl ImportSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Records attempted across all packs.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.packs.iter().map(|p| p.attempted).sum()
    }

    /// Issues created across all packs.
    #[must_use]
    pub fn created(&self) -> usize {
        self.packs.iter().map(|p| p.created).sum()
    }

    /// Records skipped across all packs.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.packs.iter().map(|p| p.skipped).sum()
    }

    /// Records failed across all packs.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.packs.iter().map(|p| p.failed).sum()
    }

    /// Returns true if any issue, label or milestone failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0 || self.labels.failed > 0 || self.milestones.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueStatus;
    use crate::packs::Pack;

    #[test]
    fn totals_sum_over_packs() {
        let mut summary = ImportSummary::new(false);
        for (pack, failures) in [(Pack::V1, 1), (Pack::V2, 0)] {
            let mut pack_summary = PackSummary::new(pack);
            pack_summary.record(&IssueStatus::Created {
                url: "u".to_string(),
            });
            for _ in 0..failures {
                pack_summary.record(&IssueStatus::Failed {
                    error: "e".to_string(),
                });
            }
            summary.packs.push(pack_summary);
        }

        assert_eq!(summary.attempted(), 3);
        assert_eq!(summary.created(), 2);
        assert_eq!(summary.failed(), 1);
        assert!(summary.has_failures());
    }
}
