//! Baseline importer: labels, then milestones, then issues per pack.

use super::{RunnerConfig, RunnerError};
use crate::body::{normalize_compact, normalize_keyed, NormalizedIssue};
use crate::config::LabelPalette;
use crate::issues::{create_issue, list_existing_titles, IssueStatus};
use crate::packs::{load_compact_pack, load_keyed_pack, Pack};
use crate::provision::{LabelSpec, Provisioner};
use crate::summary::{ImportSummary, PackSummary};
use crate::tracker::Tracker;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Locations of the three pack exports.
#[derive(Debug, Clone)]
pub struct ImportSources {
    /// V1 export, `{"issues": [...]}`.
    pub v1: PathBuf,
    /// V2 export, `{"issues": [...]}`.
    pub v2: PathBuf,
    /// V2M export, a bare array.
    pub v2m: PathBuf,
}

/// Issues of one pack, ready for the tracker.
#[derive(Debug, Clone)]
pub struct PackIssues {
    pub pack: Pack,
    pub issues: Vec<NormalizedIssue>,
}

/// Loads and normalizes every pack, in import order.
///
/// # Errors
///
/// Returns [`RunnerError::Pack`] if any export can't be loaded; nothing is
/// sent to the tracker in that case.
pub fn load_packs(sources: &ImportSources) -> Result<Vec<PackIssues>, RunnerError> {
    info!("Loading source JSON files...");
    let v1 = load_keyed_pack(&sources.v1)?;
    let v2 = load_keyed_pack(&sources.v2)?;
    let v2m = load_compact_pack(&sources.v2m)?;
    info!(
        "  V1: {}, V2: {}, V2M: {} = {} total",
        v1.len(),
        v2.len(),
        v2m.len(),
        v1.len() + v2.len() + v2m.len()
    );

    Ok(vec![
        PackIssues {
            pack: Pack::V1,
            issues: v1.iter().map(|r| normalize_keyed(Pack::V1, r)).collect(),
        },
        PackIssues {
            pack: Pack::V2,
            issues: v2.iter().map(|r| normalize_keyed(Pack::V2, r)).collect(),
        },
        PackIssues {
            pack: Pack::V2M,
            issues: v2m.iter().map(normalize_compact).collect(),
        },
    ])
}

/// Every label the import needs, sorted and deduplicated.
///
/// The source labels of all packs are always included.
#[must_use]
pub fn collect_labels(packs: &[PackIssues], palette: &LabelPalette) -> Vec<LabelSpec> {
    let names: BTreeSet<String> = Pack::ALL
        .iter()
        .map(|pack| pack.source_label())
        .chain(
            packs
                .iter()
                .flat_map(|p| &p.issues)
                .flat_map(|issue| issue.labels.iter().cloned()),
        )
        .collect();

    names
        .into_iter()
        .map(|name| LabelSpec {
            color: palette.color_for_label(&name).to_string(),
            name,
            description: None,
        })
        .collect()
}

/// Every pack-prefixed milestone the import needs, sorted and deduplicated.
#[must_use]
pub fn collect_milestones(packs: &[PackIssues]) -> BTreeSet<String> {
    packs
        .iter()
        .flat_map(|p| &p.issues)
        .filter_map(|issue| issue.milestone.clone())
        .collect()
}

pub(super) async fn run_import(
    config: &RunnerConfig,
    tracker: &Tracker,
    packs: &[PackIssues],
) -> Result<ImportSummary, RunnerError> {
    let settings = config.migrator();
    let mut summary = ImportSummary::new(config.dry_run());

    let provisioner = Provisioner::new(
        tracker,
        settings.label_progress_every,
        settings.issue_error_excerpt,
    );
    summary.labels = provisioner
        .ensure_labels(&collect_labels(packs, &settings.palette))
        .await;

    let milestones = collect_milestones(packs);
    summary.milestones = provisioner
        .ensure_milestones(milestones.iter().map(String::as_str))
        .await;

    let existing = if config.skip_existing() {
        let titles = list_existing_titles(tracker, settings.issue_list_limit).await?;
        info!(count = titles.len(), "Found existing issues");
        Some(titles)
    } else {
        None
    };

    for pack in packs {
        let pack_summary = import_pack(config, tracker, pack, existing.as_ref()).await;
        summary.packs.push(pack_summary);
    }

    Ok(summary)
}

async fn import_pack(
    config: &RunnerConfig,
    tracker: &Tracker,
    pack: &PackIssues,
    existing: Option<&HashSet<String>>,
) -> PackSummary {
    let settings = config.migrator();
    let total = pack.issues.len();
    let mut summary = PackSummary::new(pack.pack);
    info!("=== Importing {total} issues from {} ===", pack.pack);

    for (i, issue) in pack.issues.iter().enumerate() {
        let position = i + 1;

        let status = if existing.is_some_and(|titles| titles.contains(&issue.title)) {
            IssueStatus::Skipped {
                reason: "issue with this title exists".to_string(),
            }
        } else {
            match create_issue(tracker, issue, settings.issue_error_excerpt).await {
                Ok(status) => status,
                Err(e) => {
                    error!(key = %issue.key, error = %e, "Failed to create issue");
                    IssueStatus::Failed {
                        error: e.to_string(),
                    }
                }
            }
        };

        match &status {
            IssueStatus::Created { url } => {
                debug!(key = %issue.key, %url, "Issue created");
                if position % settings.issue_progress_every == 0 {
                    info!("  [{position}/{total}] OK: {}", issue.key);
                }
            }
            IssueStatus::Skipped { reason } => {
                info!("  [{position}/{total}] SKIP: {} ({reason})", issue.key);
            }
            IssueStatus::Failed { error } => {
                warn!("  [{position}/{total}] FAIL: {} — {error}", issue.key);
            }
        }
        summary.record(&status);
    }

    info!(
        "  Done: {} created, {} failed out of {total}",
        summary.created, summary.failed
    );
    summary
}
