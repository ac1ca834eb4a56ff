//! Cross-reference labeler: meta labels, then label applications.

use super::{RunnerConfig, RunnerError};
use crate::crossref::{apply_meta_label, meta_label_specs, CrossRefError, CrossRefMapping};
use crate::provision::Provisioner;
use crate::summary::CrossRefSummary;
use crate::templates::MetaLabelRenderer;
use crate::tracker::Tracker;
use tracing::info;

pub(super) async fn run_crossrefs(
    config: &RunnerConfig,
    tracker: &Tracker,
    mapping: &CrossRefMapping,
) -> Result<CrossRefSummary, RunnerError> {
    let settings = config.migrator();
    let mut summary = CrossRefSummary::new(config.dry_run());

    // Render every label up front so a bad format fails before any tracker call.
    let renderer = MetaLabelRenderer::new(&settings.crossref).map_err(CrossRefError::from)?;
    let labels = meta_label_specs(mapping, &renderer, &settings.palette)?;

    let provisioner = Provisioner::new(
        tracker,
        settings.label_progress_every,
        settings.label_error_excerpt,
    );
    summary.labels = provisioner.ensure_labels(&labels).await;

    info!(
        "=== Applying {} cross-reference labels ===",
        mapping.total_links()
    );
    for (entry, label) in mapping.entries().iter().zip(&labels) {
        let meta =
            apply_meta_label(tracker, entry, &label.name, settings.label_error_excerpt).await;
        summary.metas.push(meta);
    }

    Ok(summary)
}
