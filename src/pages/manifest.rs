use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::{ensure_dir, lenient_string, write_file};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ManifestEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) seq: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) desc: String,
}

/// `releases/manifest.json`, newest first
#[derive(Debug, Clone, Default)]
pub(crate) struct Manifest {
    pub(crate) entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub(crate) fn path(pages_root: &Path) -> PathBuf {
        pages_root.join("releases").join("manifest.json")
    }

    /// Missing or unparseable manifests load as empty.
    pub(crate) fn load(pages_root: &Path) -> Self {
        let path = Self::path(pages_root);
        let Ok(content) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<ManifestEntry>>(&content) {
            Ok(entries) => Self { entries },
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring invalid manifest: {e}");
                Self::default()
            }
        }
    }

    /// Replace any entry with the same date or seq, keep newest first.
    pub(crate) fn upsert(&mut self, entry: ManifestEntry) {
        self.entries
            .retain(|e| e.date != entry.date && e.seq != entry.seq);
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.date.cmp(&a.date));
    }

    pub(crate) fn save(&self, pages_root: &Path) -> Result<(), AppError> {
        let path = Self::path(pages_root);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            AppError::Serialize {
                what: "manifest",
                source,
            }
        })?;
        write_file(&path, &json)
    }
}
