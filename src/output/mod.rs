mod format;
mod json;
mod table;

pub(crate) use json::{ReleaseSummary, releases_json, summary_json};
pub(crate) use table::print_releases_table;
