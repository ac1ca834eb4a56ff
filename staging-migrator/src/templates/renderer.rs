//! Meta-issue label renderer.

use crate::config::CrossRefLabels;
use handlebars::{no_escape, Handlebars};
use serde_json::json;

const NAME_TEMPLATE: &str = "meta_label_name";
const DESCRIPTION_TEMPLATE: &str = "meta_label_description";

/// Creates a Handlebars registry for plain-text label rendering.
///
/// The registry is configured with:
/// - No HTML escaping (label names are plain text)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders cross-reference label names and descriptions for meta-issues.
pub struct MetaLabelRenderer {
    handlebars: Handlebars<'static>,
}

impl MetaLabelRenderer {
    /// Compiles the configured formats.
    ///
    /// # Errors
    ///
    /// Returns an error if either format is not a valid template.
    pub fn new(formats: &CrossRefLabels) -> Result<Self, super::TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(NAME_TEMPLATE, &formats.label_format)?;
        handlebars.register_template_string(DESCRIPTION_TEMPLATE, &formats.description_format)?;
        Ok(Self { handlebars })
    }

    /// Label name for `meta_id`, e.g. `v4:5`.
    ///
    /// # Errors
    ///
    /// Returns an error if the format references an unknown variable.
    pub fn name(&self, meta_id: u64) -> Result<String, super::TemplateError> {
        Ok(self
            .handlebars
            .render(NAME_TEMPLATE, &json!({ "id": meta_id }))?)
    }

    /// Label description for `meta_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the format references an unknown variable.
    pub fn description(&self, meta_id: u64) -> Result<String, super::TemplateError> {
        Ok(self
            .handlebars
            .render(DESCRIPTION_TEMPLATE, &json!({ "id": meta_id }))?)
    }
}
