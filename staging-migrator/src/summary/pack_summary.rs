//! Per-pack issue tallies.

use crate::issues::IssueStatus;
use crate::packs::Pack;

/// Issue creation counts for one pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    /// Pack these counts belong to.
    pub pack: Pack,

    /// Records attempted.
    pub attempted: usize,

    /// Issues created.
    pub created: usize,

    /// Records skipped because an issue with the same title exists.
    pub skipped: usize,

    /// Records whose issue could not be created.
    pub failed: usize,
}

impl PackSummary {
    /// Creates an empty summary for `pack`.
    #[must_use]
    pub fn new(pack: Pack) -> Self {
        Self {
            pack,
            attempted: 0,
            created: 0,
            skipped: 0,
            failed: 0,
        }
    }

    /// Counts one attempted record.
    pub fn record(&mut self, status: &IssueStatus) {
        self.attempted += 1;
        match status {
            IssueStatus::Created { .. } => self.created += 1,
            IssueStatus::Skipped { .. } => self.skipped += 1,
            IssueStatus::Failed { .. } => self.failed += 1,
        }
    }
}
