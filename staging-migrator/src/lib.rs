#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod body;
pub mod config;
pub mod crossref;
pub mod issues;
pub mod packs;
pub mod provision;
pub mod rate_limit;
pub mod runner;
pub mod summary;
pub mod templates;
pub mod tracker;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use body::{build_body_v1, build_body_v2, build_body_v2m, NormalizedIssue};
pub use config::{ConfigError, CrossRefLabels, LabelPalette, MigratorConfig};
pub use crossref::{CrossRefError, CrossRefMapping, MetaEntry};
pub use issues::{create_issue, IssueError, IssueStatus};
pub use packs::{load_compact_pack, load_keyed_pack, CompactRecord, KeyedRecord, Pack, PackError};
pub use provision::{LabelSpec, ProvisionOutcome, Provisioner};
pub use rate_limit::{RateLimiter, RetryPolicy};
pub use runner::{ImportSources, Runner, RunnerConfig, RunnerError};
pub use summary::{CrossRefSummary, ImportSummary, MetaSummary, PackSummary, ProvisionReport};
pub use templates::{MetaLabelRenderer, TemplateError};
pub use tracker::{CallOutcome, CommandOutput, DryRunCli, GhCli, InvokeError, Tracker, TrackerCli};
