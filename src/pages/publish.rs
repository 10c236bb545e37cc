use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::release::cover_path;
use crate::utils::{copy_file, ensure_dir, read_or_empty};

use super::catalog::write_catalog;
use super::manifest::{Manifest, ManifestEntry};

const DESC_MAX_CHARS: usize = 400;

#[derive(Debug, Clone)]
pub(crate) struct PublishRequest {
    /// Normalized "YYYYMMDD"
    pub(crate) stamp: String,
    pub(crate) seq: String,
    pub(crate) title: String,
    pub(crate) dist: PathBuf,
    pub(crate) pages_root: PathBuf,
}

#[derive(Debug, Clone)]
pub(crate) struct PublishOutcome {
    pub(crate) entry: ManifestEntry,
    pub(crate) cover_copied: bool,
}

/// Sequence numbers are positive integers, stored without leading zeros.
pub(crate) fn parse_seq(input: &str) -> Result<String, AppError> {
    match input.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n.to_string()),
        _ => Err(AppError::InvalidSeq {
            input: input.to_string(),
        }),
    }
}

/// Pull the description block out of a readme.
///
/// Takes the lines after `Description:` up to a blank line or a
/// `TO_NEXT`/`COVER` marker. Without one, uses the first two non-blank lines
/// after the title.
pub(crate) fn extract_description(readme: &str) -> String {
    let lines: Vec<&str> = readme.lines().collect();
    let mut block = Vec::new();
    let mut in_desc = false;

    for line in &lines {
        let trimmed = line.trim();
        if !in_desc {
            if trimmed.to_lowercase().starts_with("description:") {
                in_desc = true;
            }
            continue;
        }
        let upper = trimmed.to_uppercase();
        if trimmed.is_empty() || upper.starts_with("TO_NEXT") || upper.starts_with("COVER") {
            break;
        }
        block.push(trimmed);
    }

    let mut desc = block.join(" ").trim().to_string();
    if desc.is_empty() {
        let body: Vec<&str> = lines
            .iter()
            .skip(1)
            .filter(|l| !l.trim().is_empty())
            .take(2)
            .copied()
            .collect();
        desc = body.join(" ").trim().to_string();
    }

    if desc.chars().count() > DESC_MAX_CHARS {
        let head: String = desc.chars().take(DESC_MAX_CHARS - 3).collect();
        desc = format!("{}...", head.trim_end());
    }
    desc
}

struct Artifact {
    source: PathBuf,
    name: &'static str,
}

fn artifacts(dist: &Path, stamp: &str) -> [Artifact; 3] {
    [
        Artifact {
            source: dist.join(format!("demo-{stamp}.html")),
            name: "index.html",
        },
        Artifact {
            source: dist.join(format!("readme-{stamp}.txt")),
            name: "readme.txt",
        },
        Artifact {
            source: cover_path(dist, stamp),
            name: "cover.png",
        },
    ]
}

/// Copy `names` from one release directory into another. A name missing from
/// the source is removed from the target so stale files don't linger.
fn mirror(from: &Path, to: &Path, names: &[&str]) -> Result<(), AppError> {
    for name in names {
        let source = from.join(name);
        let target = to.join(name);
        if source.is_file() {
            copy_file(&source, &target)?;
        } else if target.is_file() {
            let _ = fs::remove_file(&target);
        }
    }
    Ok(())
}

/// Publish one release into the pages tree and refresh manifest and catalog.
pub(crate) fn publish(req: &PublishRequest) -> Result<PublishOutcome, AppError> {
    let releases = req.pages_root.join("releases");
    let date_dir = releases.join("date").join(&req.stamp);
    let seq_dir = releases.join("seq").join(&req.seq);
    let latest_dir = req.pages_root.join("latest");
    for dir in [&date_dir, &seq_dir, &latest_dir] {
        ensure_dir(dir)?;
    }

    let artifacts = artifacts(&req.dist, &req.stamp);
    let mut names = Vec::new();
    let mut cover_copied = false;
    for artifact in &artifacts {
        let target = date_dir.join(artifact.name);
        if artifact.name == "cover.png" {
            if !artifact.source.is_file() {
                tracing::warn!(
                    path = %artifact.source.display(),
                    "no cover image, publishing without one (render it with `jsdemo cover`)"
                );
                if target.is_file() {
                    let _ = fs::remove_file(&target);
                }
                continue;
            }
            cover_copied = true;
        }
        copy_file(&artifact.source, &target)?;
        names.push(artifact.name);
    }
    if !cover_copied {
        names.push("cover.png");
    }

    mirror(&date_dir, &seq_dir, &names)?;

    let entry = ManifestEntry {
        date: req.stamp.clone(),
        seq: req.seq.clone(),
        title: req.title.clone(),
        desc: extract_description(&read_or_empty(&date_dir.join("readme.txt"))),
    };
    let mut manifest = Manifest::load(&req.pages_root);
    manifest.upsert(entry.clone());
    manifest.save(&req.pages_root)?;

    write_catalog(&req.pages_root)?;
    mirror(&date_dir, &latest_dir, &names)?;

    Ok(PublishOutcome {
        entry,
        cover_copied,
    })
}
