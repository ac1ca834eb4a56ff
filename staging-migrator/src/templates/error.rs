//! Errors raised while rendering meta-issue label names and descriptions.

/// Label template failure.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// A label name or description failed to render, e.g. an unknown placeholder.
    #[error("Label template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// A configured label format is not a valid template.
    #[error("Invalid label template: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),
}
