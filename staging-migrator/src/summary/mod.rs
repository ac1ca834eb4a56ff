//! Run summary types and helpers.

mod crossref_summary;
mod import_summary;
mod pack_summary;

pub use crate::provision::ProvisionReport;
pub use crossref_summary::{CrossRefSummary, MetaSummary};
pub use import_summary::ImportSummary;
pub use pack_summary::PackSummary;
