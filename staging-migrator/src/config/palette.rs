//! Label colors and meta-issue run grouping.

use super::ConfigError;
use std::collections::BTreeMap;

/// Color palette used when provisioning labels.
///
/// Source labels and meta-issue labels get fixed colors; every other label
/// falls back to [`LabelPalette::default_color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPalette {
    /// Colors for the `source:*` provenance labels.
    pub source_colors: BTreeMap<String, String>,

    /// Color for any label without an explicit entry.
    pub default_color: String,

    /// Colors per meta-issue run group (e.g. `run1`).
    pub run_colors: BTreeMap<String, String>,

    /// Run group assignment for each meta-issue id.
    pub meta_runs: BTreeMap<u64, String>,

    /// Group used for meta-issues missing from [`LabelPalette::meta_runs`].
    pub fallback_run: String,
}

impl Default for LabelPalette {
    fn default() -> Self {
        let source_colors = [
            ("source:v1", "0E8A16"),
            ("source:v2", "1D76DB"),
            ("source:v2m", "D93F0B"),
        ];
        let run_colors = [
            ("run1", "D93F0B"),
            ("run1.5", "E4E669"),
            ("run2", "1D76DB"),
            ("run3", "0E8A16"),
        ];

        let mut meta_runs = BTreeMap::new();
        for id in [2, 5, 9, 10, 11, 12, 13, 14, 15] {
            meta_runs.insert(id, "run1".to_string());
        }
        for id in [16, 17, 18, 45] {
            meta_runs.insert(id, "run1.5".to_string());
        }
        for id in (19..=28).chain(33..=44).chain([46]) {
            meta_runs.insert(id, "run2".to_string());
        }
        for id in 29..=32 {
            meta_runs.insert(id, "run3".to_string());
        }

        Self {
            source_colors: to_owned_map(&source_colors),
            default_color: "ededed".to_string(),
            run_colors: to_owned_map(&run_colors),
            meta_runs,
            fallback_run: "run2".to_string(),
        }
    }
}

impl LabelPalette {
    /// Returns the color for an importer label.
    #[must_use]
    pub fn color_for_label(&self, name: &str) -> &str {
        self.source_colors
            .get(name)
            .map_or(self.default_color.as_str(), String::as_str)
    }

    /// Returns the run group a meta-issue belongs to.
    #[must_use]
    pub fn run_for_meta(&self, meta_id: u64) -> &str {
        self.meta_runs
            .get(&meta_id)
            .map_or(self.fallback_run.as_str(), String::as_str)
    }

    /// Returns the label color for a meta-issue, via its run group.
    #[must_use]
    pub fn color_for_meta(&self, meta_id: u64) -> &str {
        self.run_colors
            .get(self.run_for_meta(meta_id))
            .map_or(self.default_color.as_str(), String::as_str)
    }

    /// Checks that every color is a hex triplet and that every group resolves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_color("palette.default-color", &self.default_color)?;
        for (name, color) in &self.source_colors {
            check_color(&format!("palette.source-colors.{name}"), color)?;
        }
        for (run, color) in &self.run_colors {
            check_color(&format!("palette.run-colors.{run}"), color)?;
        }

        let groups = self
            .meta_runs
            .iter()
            .map(|(id, run)| (format!("palette.meta-runs.{id}"), run))
            .chain(std::iter::once((
                "palette.fallback-run".to_string(),
                &self.fallback_run,
            )));
        for (field, run) in groups {
            if !self.run_colors.contains_key(run) {
                return Err(ConfigError::ValidationError {
                    field,
                    message: format!("run group '{run}' has no color"),
                });
            }
        }

        Ok(())
    }
}

fn to_owned_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn check_color(field: &str, color: &str) -> Result<(), ConfigError> {
    if color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            field: field.to_string(),
            message: format!("'{color}' is not a six digit hex color"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_labels_have_fixed_colors() {
        let palette = LabelPalette::default();

        assert_eq!(palette.color_for_label("source:v1"), "0E8A16");
        assert_eq!(palette.color_for_label("source:v2m"), "D93F0B");
        assert_eq!(palette.color_for_label("area:orchestration"), "ededed");
    }

    #[test]
    fn meta_issues_resolve_through_run_groups() {
        let palette = LabelPalette::default();

        assert_eq!(palette.run_for_meta(5), "run1");
        assert_eq!(palette.run_for_meta(45), "run1.5");
        assert_eq!(palette.run_for_meta(30), "run3");
        assert_eq!(palette.color_for_meta(17), "E4E669");
        // Unknown meta-issues use the fallback group.
        assert_eq!(palette.run_for_meta(999), "run2");
        assert_eq!(palette.color_for_meta(999), "1D76DB");
    }

    #[test]
    fn default_palette_is_valid() {
        LabelPalette::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_colors() {
        let mut palette = LabelPalette::default();
        palette.default_color = "#ededed".to_string();

        let result = palette.validate();
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "palette.default-color"
        ));
    }

    #[test]
    fn rejects_unknown_run_groups() {
        let mut palette = LabelPalette::default();
        palette.meta_runs.insert(7, "run9".to_string());

        assert!(matches!(
            palette.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
