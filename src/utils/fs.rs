use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Read a text file; missing or unreadable files read as empty.
pub(crate) fn read_or_empty(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "input unavailable, using empty text");
            String::new()
        }
    }
}

pub(crate) fn ensure_dir(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), AppError> {
    fs::write(path, content).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy a release artifact. A missing source is reported as such.
pub(crate) fn copy_file(from: &Path, to: &Path) -> Result<(), AppError> {
    if !from.is_file() {
        return Err(AppError::MissingArtifact {
            path: from.to_path_buf(),
        });
    }
    fs::copy(from, to).map(|_| ()).map_err(|source| AppError::Write {
        path: to.to_path_buf(),
        source,
    })
}
