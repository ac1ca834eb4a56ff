//! Runner configuration.

use crate::config::MigratorConfig;

/// Configuration for running the migration jobs.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Shared job settings.
    migrator: MigratorConfig,
    /// Whether to preview tracker changes without making them.
    dry_run: bool,
    /// Whether the importer skips records whose title already exists.
    skip_existing: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(migrator: MigratorConfig, dry_run: bool) -> Self {
        Self {
            migrator,
            dry_run,
            skip_existing: false,
        }
    }

    /// Enables or disables skipping records that already have an issue.
    pub fn with_skip_existing(mut self, skip_existing: bool) -> Self {
        self.skip_existing = skip_existing;
        self
    }

    /// Returns the shared job settings.
    pub fn migrator(&self) -> &MigratorConfig {
        &self.migrator
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns whether existing issues are skipped.
    pub fn skip_existing(&self) -> bool {
        self.skip_existing
    }
}
