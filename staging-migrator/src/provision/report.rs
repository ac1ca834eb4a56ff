//! Provisioning tallies.

use super::ProvisionOutcome;

/// Counts for one provisioning phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    /// Distinct items requested.
    pub requested: usize,
    /// Items the tracker created (or updated in place).
    pub created: usize,
    /// Items that already existed.
    pub existing: usize,
    /// Items that genuinely failed.
    pub failed: usize,
}

impl ProvisionReport {
    /// Counts one outcome.
    pub fn record(&mut self, outcome: &ProvisionOutcome) {
        match outcome {
            ProvisionOutcome::Created => self.created += 1,
            ProvisionOutcome::AlreadyExists => self.existing += 1,
            ProvisionOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Items usable by the next phase.
    #[must_use]
    pub fn available(&self) -> usize {
        self.created + self.existing
    }
}
