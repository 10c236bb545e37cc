use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::utils::{ensure_dir, write_file};

use super::Release;

#[derive(Debug, Clone)]
pub(crate) struct ReleasePaths {
    pub(crate) demo: PathBuf,
    pub(crate) readme: PathBuf,
}

impl ReleasePaths {
    pub(crate) fn new(out_dir: &Path, stamp: &str) -> Self {
        Self {
            demo: out_dir.join(format!("demo-{stamp}.html")),
            readme: out_dir.join(format!("readme-{stamp}.txt")),
        }
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Write the demo and readme for `stamp`.
///
/// Both files are staged next to their targets and renamed only once both
/// writes succeeded. If the second rename fails the first target is rolled
/// back to its previous content (or removed when there was none).
pub(crate) fn write_release(
    out_dir: &Path,
    stamp: &str,
    release: &Release,
) -> Result<ReleasePaths, AppError> {
    ensure_dir(out_dir)?;
    let paths = ReleasePaths::new(out_dir, stamp);
    let staged = [
        (sibling(&paths.demo, ".tmp"), &paths.demo, release.html.clone()),
        (sibling(&paths.readme, ".tmp"), &paths.readme, release.readme()),
    ];

    for (tmp, _, content) in &staged {
        if let Err(e) = write_file(tmp, content) {
            discard(&staged);
            return Err(e);
        }
    }

    let mut committed = Vec::new();
    for (tmp, target, _) in &staged {
        match commit(tmp, target) {
            Ok(backup) => committed.push((*target, backup)),
            Err(source) => {
                for (done, backup) in committed.into_iter().rev() {
                    rollback(done, backup);
                }
                discard(&staged);
                return Err(AppError::Write {
                    path: target.to_path_buf(),
                    source,
                });
            }
        }
    }
    for (_, backup) in committed {
        if let Some(backup) = backup {
            let _ = fs::remove_file(backup);
        }
    }

    tracing::debug!(demo = %paths.demo.display(), readme = %paths.readme.display(), "release written");
    Ok(paths)
}

/// Move `tmp` over `target`, keeping the previous file aside as `.bak`.
fn commit(tmp: &Path, target: &Path) -> std::io::Result<Option<PathBuf>> {
    let backup = target.is_file().then(|| sibling(target, ".bak"));
    if let Some(backup) = &backup {
        fs::rename(target, backup)?;
    }
    if let Err(e) = fs::rename(tmp, target) {
        if let Some(backup) = &backup {
            let _ = fs::rename(backup, target);
        }
        return Err(e);
    }
    Ok(backup)
}

fn rollback(target: &Path, backup: Option<PathBuf>) {
    match backup {
        Some(backup) => {
            let _ = fs::rename(backup, target);
        }
        None => {
            let _ = fs::remove_file(target);
        }
    }
}

fn discard(staged: &[(PathBuf, &PathBuf, String)]) {
    for (tmp, _, _) in staged {
        let _ = fs::remove_file(tmp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release() -> Release {
        Release {
            title: "T".to_string(),
            description: "D".to_string(),
            to_next: "N".to_string(),
            cover_prompt: "C".to_string(),
            html: "<html>\n<body>hi</body></html>".to_string(),
        }
    }

    #[test]
    fn writes_both_files_with_stamp() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dist");
        let paths = write_release(&out, "20250816", &release()).unwrap();

        assert_eq!(paths.demo, out.join("demo-20250816.html"));
        assert_eq!(paths.readme, out.join("readme-20250816.txt"));
        assert_eq!(fs::read_to_string(&paths.demo).unwrap(), "<html>\n<body>hi</body></html>");
        assert_eq!(
            fs::read_to_string(&paths.readme).unwrap(),
            "T\n\nDescription:\nD\n\nTO_NEXT: N\nCOVER: C\n"
        );
    }

    #[test]
    fn no_staging_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        write_release(dir.path(), "20250816", &release()).unwrap();
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| !n.ends_with(".tmp")));
    }

    #[test]
    fn same_day_run_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        write_release(dir.path(), "20250816", &release()).unwrap();
        let mut second = release();
        second.title = "Second".to_string();
        let paths = write_release(dir.path(), "20250816", &second).unwrap();
        assert!(fs::read_to_string(paths.readme).unwrap().starts_with("Second\n"));
    }

    #[test]
    fn failed_readme_commit_restores_previous_demo() {
        let dir = tempfile::tempdir().unwrap();
        let demo = dir.path().join("demo-20250816.html");
        fs::write(&demo, "old demo").unwrap();
        // A non-empty directory where the readme should go makes its rename fail
        let readme = dir.path().join("readme-20250816.txt");
        fs::create_dir(&readme).unwrap();
        fs::write(readme.join("keep"), "x").unwrap();

        let err = write_release(dir.path(), "20250816", &release()).unwrap_err();
        assert!(matches!(err, AppError::Write { ref path, .. } if *path == readme));
        assert_eq!(fs::read_to_string(&demo).unwrap(), "old demo");

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["demo-20250816.html", "readme-20250816.txt"]);
    }

    #[test]
    fn failed_readme_commit_removes_new_demo() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("readme-20250816.txt");
        fs::create_dir(&readme).unwrap();
        fs::write(readme.join("keep"), "x").unwrap();

        assert!(write_release(dir.path(), "20250816", &release()).is_err());
        assert!(!dir.path().join("demo-20250816.html").exists());
    }

    #[test]
    fn unwritable_out_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("dist");
        fs::write(&blocker, "not a directory").unwrap();
        let err = write_release(&blocker, "20250816", &release()).unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }
}
