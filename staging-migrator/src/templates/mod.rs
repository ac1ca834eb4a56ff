//! Label naming templates.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, MetaLabelRenderer};
