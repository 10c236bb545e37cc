use serde::Serialize;

use crate::error::AppError;
use crate::pages::ManifestEntry;

/// Run result printed after a successful `generate`
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ReleaseSummary {
    pub(crate) date: String,
    pub(crate) title: String,
}

pub(crate) fn summary_json(summary: &ReleaseSummary) -> Result<String, AppError> {
    serde_json::to_string_pretty(summary).map_err(|source| AppError::Serialize {
        what: "release summary",
        source,
    })
}

pub(crate) fn releases_json(entries: &[&ManifestEntry]) -> Result<String, AppError> {
    serde_json::to_string_pretty(entries).map_err(|source| AppError::Serialize {
        what: "releases",
        source,
    })
}
