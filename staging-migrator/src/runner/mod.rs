//! Orchestrates the two migration jobs.
//!
//! Both jobs run strictly in phases: create the containers (labels,
//! milestones), then populate or link, then report. Inputs are loaded and
//! validated before the first tracker call.

mod config;
mod crossref;
mod error;
mod import;

pub use config::RunnerConfig;
pub use error::RunnerError;
pub use import::{collect_labels, collect_milestones, load_packs, ImportSources, PackIssues};

use crate::crossref::CrossRefMapping;
use crate::rate_limit::RateLimiter;
use crate::summary::{CrossRefSummary, ImportSummary};
use crate::tracker::{DryRunCli, GhCli, Tracker, TrackerCli};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Runs the importer and the cross-reference labeler against one repository.
pub struct Runner {
    config: RunnerConfig,
    cli: Arc<dyn TrackerCli>,
}

impl Runner {
    /// Builds a runner driving `cli`. In dry-run mode `cli` only sees read-only calls.
    pub fn new(config: RunnerConfig, cli: Arc<dyn TrackerCli>) -> Self {
        let cli: Arc<dyn TrackerCli> = if config.dry_run() {
            Arc::new(DryRunCli::new(cli))
        } else {
            cli
        };
        Self { config, cli }
    }

    /// Builds a runner driving the configured tracker program.
    pub fn with_gh(config: RunnerConfig) -> Self {
        let cli = Arc::new(GhCli::new(config.migrator().program.clone()));
        Self::new(config, cli)
    }

    /// Imports the three packs: labels, milestones, then issues for V1, V2 and V2M.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if a pack can't be loaded or, with skip-existing
    /// enabled, existing issues can't be listed. Per-issue failures are counted
    /// in the summary instead.
    pub async fn import(&self, sources: &ImportSources) -> Result<ImportSummary, RunnerError> {
        let packs = load_packs(sources)?;
        let tracker = self.tracker(self.config.migrator().import_delay);
        info!(repo = %tracker.repo(), dry_run = self.config.dry_run(), "Starting import");
        import::run_import(&self.config, &tracker, &packs).await
    }

    /// Creates one label per meta-issue in the mapping and applies it to the listed issues.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the mapping can't be loaded or a label can't
    /// be rendered. Per-issue failures are counted in the summary instead.
    pub async fn apply_crossrefs(
        &self,
        mapping_path: &Path,
    ) -> Result<CrossRefSummary, RunnerError> {
        let mapping = CrossRefMapping::load(mapping_path)?;
        info!(
            path = %mapping_path.display(),
            meta_issues = mapping.entries().len(),
            "Loaded cross-reference mapping"
        );
        let tracker = self.tracker(self.config.migrator().crossref_delay);
        crossref::run_crossrefs(&self.config, &tracker, &mapping).await
    }

    fn tracker(&self, delay: Duration) -> Tracker {
        let settings = self.config.migrator();
        Tracker::new(
            self.cli.clone(),
            settings.repo.clone(),
            RateLimiter::new(delay),
            settings.retry.clone(),
        )
    }
}
