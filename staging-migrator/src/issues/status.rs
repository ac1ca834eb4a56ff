//! Issue status types.

/// Status of one issue creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueStatus {
    /// Issue created.
    Created {
        /// URL printed by the tracker.
        url: String,
    },

    /// Issue creation skipped.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },

    /// Issue creation failed.
    Failed {
        /// Error excerpt.
        error: String,
    },
}
