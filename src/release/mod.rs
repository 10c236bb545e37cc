//! Sanitized release artifacts

mod cover;
pub(crate) mod sanitize;
mod writer;

pub(crate) use cover::{cover_path, write_cover};
pub(crate) use writer::write_release;

use crate::consts::{TITLE_MAX_CHARS, UNTITLED};
use crate::generate::GenerationResult;

use sanitize::sanitize_html;

/// A generation result that is safe to write to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Release {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) to_next: String,
    pub(crate) cover_prompt: String,
    pub(crate) html: String,
}

impl Release {
    /// Only the HTML can trigger a fallback; metadata is normalized as-is.
    pub(crate) fn from_generation(result: GenerationResult) -> Self {
        Self {
            title: normalize_title(&result.title),
            description: result.description.trim().to_string(),
            to_next: result.to_next.trim().to_string(),
            cover_prompt: result.cover_prompt.trim().to_string(),
            html: sanitize_html(&result.html),
        }
    }

    pub(crate) fn readme(&self) -> String {
        format!(
            "{}\n\nDescription:\n{}\n\nTO_NEXT: {}\nCOVER: {}\n",
            self.title, self.description, self.to_next, self.cover_prompt
        )
    }
}

fn normalize_title(raw: &str) -> String {
    let title: String = raw.trim().chars().take(TITLE_MAX_CHARS).collect();
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}
