//! Configuration loading.
//!
//! Every tunable of the migration jobs lives in [`MigratorConfig`]. Defaults
//! reproduce the values the jobs were first run with; an optional TOML file,
//! then environment variables, then CLI flags override them in that order.

mod error;
mod file;
mod palette;

pub use error::ConfigError;
pub use palette::LabelPalette;

use crate::rate_limit::RetryPolicy;
use file::ConfigFile;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable overriding [`MigratorConfig::repo`].
pub const REPO_ENV: &str = "MIGRATOR_REPO";

/// Environment variable overriding both job delays, in milliseconds.
pub const DELAY_ENV: &str = "MIGRATOR_DELAY_MS";

/// Naming formats for cross-reference labels (Handlebars, `{{id}}` is the meta-issue id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossRefLabels {
    /// Label name format.
    pub label_format: String,
    /// Label description format.
    pub description_format: String,
}

impl Default for CrossRefLabels {
    fn default() -> Self {
        Self {
            label_format: "v4:{{id}}".to_string(),
            description_format: "Affected by V4 meta-issue #{{id}}".to_string(),
        }
    }
}

/// Settings shared by the importer and the cross-reference labeler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratorConfig {
    /// Destination repository, `owner/name`.
    pub repo: String,

    /// Tracker CLI executable.
    pub program: String,

    /// Fixed pause after every call made by the importer.
    pub import_delay: Duration,

    /// Fixed pause after every call made by the cross-reference labeler.
    pub crossref_delay: Duration,

    /// Log a label provisioning line every N labels.
    pub label_progress_every: usize,

    /// Log an issue creation line every N successful issues.
    pub issue_progress_every: usize,

    /// Characters of stderr kept when an issue creation fails.
    pub issue_error_excerpt: usize,

    /// Characters of stderr kept when a label apply fails.
    pub label_error_excerpt: usize,

    /// Maximum issues listed when checking for existing titles.
    pub issue_list_limit: usize,

    /// Backoff for rate-limited calls.
    pub retry: RetryPolicy,

    /// Label colors.
    pub palette: LabelPalette,

    /// Cross-reference label naming.
    pub crossref: CrossRefLabels,
}

impl Default for MigratorConfig {
    fn default() -> Self {
        Self {
            repo: "t3rm1nu55/NYQST-BuildPack-Staging".to_string(),
            program: "gh".to_string(),
            import_delay: Duration::from_millis(500),
            crossref_delay: Duration::from_millis(300),
            label_progress_every: 20,
            issue_progress_every: 10,
            issue_error_excerpt: 100,
            label_error_excerpt: 80,
            issue_list_limit: 2000,
            retry: RetryPolicy::default(),
            palette: LabelPalette::default(),
            crossref: CrossRefLabels::default(),
        }
    }
}

impl MigratorConfig {
    /// Loads configuration from an optional TOML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read or parsed, or if the
    /// resulting configuration fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path {
            info!(path = %path.display(), "Loading config file");
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
                path: path.display().to_string(),
                source: e,
            })?;
            let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
                path: path.display().to_string(),
                source: e,
            })?;
            config.merge_file(file)?;
        }

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Applies [`REPO_ENV`] and [`DELAY_ENV`] when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the delay isn't an integer.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(repo) = std::env::var(REPO_ENV) {
            debug!(repo = %repo, "Repository overridden from environment");
            self.repo = repo;
        }

        if let Ok(raw) = std::env::var(DELAY_ENV) {
            let millis: u64 = raw.trim().parse().map_err(|_| ConfigError::ValidationError {
                field: DELAY_ENV.to_string(),
                message: format!("'{raw}' is not a number of milliseconds"),
            })?;
            debug!(millis, "Delays overridden from environment");
            self.set_delay(Duration::from_millis(millis));
        }

        Ok(())
    }

    /// Sets the same fixed delay for both jobs.
    pub fn set_delay(&mut self, delay: Duration) {
        self.import_delay = delay;
        self.crossref_delay = delay;
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut parts = self.repo.split('/');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
        );
        if !well_formed {
            return Err(ConfigError::ValidationError {
                field: "repo".to_string(),
                message: format!("'{}' is not in owner/name form", self.repo),
            });
        }

        if self.program.trim().is_empty() {
            return Err(invalid("program", "must not be empty"));
        }
        if self.label_progress_every == 0 {
            return Err(invalid("label-progress-every", "must be at least 1"));
        }
        if self.issue_progress_every == 0 {
            return Err(invalid("issue-progress-every", "must be at least 1"));
        }
        if self.issue_list_limit == 0 {
            return Err(invalid("issue-list-limit", "must be at least 1"));
        }
        if self.retry.max_attempts() == 0 {
            return Err(invalid("retry.max-attempts", "must be at least 1"));
        }

        self.palette.validate()
    }

    fn merge_file(&mut self, file: ConfigFile) -> Result<(), ConfigError> {
        if let Some(repo) = file.repo {
            self.repo = repo;
        }
        if let Some(program) = file.program {
            self.program = program;
        }
        if let Some(ms) = file.import_delay_ms {
            self.import_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = file.crossref_delay_ms {
            self.crossref_delay = Duration::from_millis(ms);
        }
        if let Some(every) = file.label_progress_every {
            self.label_progress_every = every;
        }
        if let Some(every) = file.issue_progress_every {
            self.issue_progress_every = every;
        }
        if let Some(len) = file.issue_error_excerpt {
            self.issue_error_excerpt = len;
        }
        if let Some(len) = file.label_error_excerpt {
            self.label_error_excerpt = len;
        }
        if let Some(limit) = file.issue_list_limit {
            self.issue_list_limit = limit;
        }

        self.retry = RetryPolicy::new(
            file.retry.max_attempts.unwrap_or(self.retry.max_attempts()),
            file.retry
                .base_delay_ms
                .map_or(self.retry.base_delay(), Duration::from_millis),
            file.retry
                .max_delay_ms
                .map_or(self.retry.max_delay(), Duration::from_millis),
        );

        let palette = file.palette;
        if let Some(color) = palette.default_color {
            self.palette.default_color = color;
        }
        if let Some(run) = palette.fallback_run {
            self.palette.fallback_run = run;
        }
        self.palette.source_colors.extend(palette.source_colors);
        self.palette.run_colors.extend(palette.run_colors);
        for (key, run) in palette.meta_runs {
            let id: u64 = key.parse().map_err(|_| ConfigError::ValidationError {
                field: format!("palette.meta-runs.{key}"),
                message: "meta-issue ids must be integers".to_string(),
            })?;
            self.palette.meta_runs.insert(id, run);
        }

        if let Some(format) = file.crossref.label_format {
            self.crossref.label_format = format;
        }
        if let Some(format) = file.crossref.description_format {
            self.crossref.description_format = format;
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message: message.to_string(),
    }
}
