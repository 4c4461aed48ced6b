use std::path::PathBuf;

use crate::cli::Format;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Apply(ApplySummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub format: Format,
    pub file_count: usize,
    pub entry_count: usize,
    /// Catalog file (csv) or flat output folder (flat).
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct ApplySummary {
    pub file_count: usize,
    pub applied: usize,
    pub in_place: bool,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// A file skipped under `--keep-going`.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub relative: String,
    pub error: String,
}

/// Result of running a wordloc command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Empty unless `--keep-going` skipped files.
    pub failures: Vec<FileFailure>,
}
