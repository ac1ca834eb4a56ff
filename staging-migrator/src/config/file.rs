//! On-disk configuration format.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Parsed `migrator.toml`. Every key is optional and overrides a default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub repo: Option<String>,
    pub program: Option<String>,
    pub import_delay_ms: Option<u64>,
    pub crossref_delay_ms: Option<u64>,
    pub label_progress_every: Option<usize>,
    pub issue_progress_every: Option<usize>,
    pub issue_error_excerpt: Option<usize>,
    pub label_error_excerpt: Option<usize>,
    pub issue_list_limit: Option<usize>,
    #[serde(default)]
    pub retry: RetryFile,
    #[serde(default)]
    pub palette: PaletteFile,
    #[serde(default)]
    pub crossref: CrossRefFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct RetryFile {
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
}

/// Palette maps are merged into the defaults rather than replacing them.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct PaletteFile {
    pub default_color: Option<String>,
    pub fallback_run: Option<String>,
    #[serde(default)]
    pub source_colors: BTreeMap<String, String>,
    #[serde(default)]
    pub run_colors: BTreeMap<String, String>,
    /// Keys are meta-issue ids; TOML only allows string keys.
    #[serde(default)]
    pub meta_runs: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct CrossRefFile {
    pub label_format: Option<String>,
    pub description_format: Option<String>,
}
