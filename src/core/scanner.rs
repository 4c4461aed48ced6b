use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::{Error, Result};
use super::identifier::relative_id_path;

/// A nested JSON file found under an input root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// `/`-separated path relative to the scanned root.
    pub relative: String,
}

/// Recursively collect `*.json` files under `root`, sorted by path.
///
/// Files whose name ends with `exclude_suffix` (in-place backups) are skipped
/// so a second run never treats a backup as a source document.
pub fn scan_json_files(root: &Path, exclude_suffix: Option<&str>) -> Result<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(Error::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                return Err(Error::Io {
                    path,
                    source: io::Error::from(e),
                });
            }
        };

        if !entry.file_type().is_file() || !is_json(entry.path()) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if exclude_suffix.is_some_and(|suffix| !suffix.is_empty() && name.ends_with(suffix)) {
            continue;
        }

        files.push(SourceFile {
            relative: relative_id_path(root, entry.path())?,
            path: entry.into_path(),
        });
    }

    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}
