//! Backup-then-overwrite for in-place merges.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{Error, Result};

pub const DEFAULT_BACKUP_SUFFIX: &str = ".bak.json";

/// Sibling backup path: the full file name with `suffix` appended.
///
/// `msg.json` with `.bak.json` becomes `msg.json.bak.json`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Move `path` to its backup path, then write `contents` to `path`.
///
/// Refuses with [`Error::BackupExists`] when a backup is already present,
/// leaving both files untouched. The original is only overwritten after the
/// rename succeeded, so a failed write still leaves the old data in the backup.
pub fn replace_with_backup(path: &Path, contents: &str, suffix: &str) -> Result<PathBuf> {
    let backup = backup_path(path, suffix);

    let exists = backup.try_exists().map_err(|e| Error::io(&backup, e))?;
    if exists {
        return Err(Error::BackupExists { path: backup });
    }

    fs::rename(path, &backup).map_err(|e| Error::io(path, e))?;
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;

    Ok(backup)
}
