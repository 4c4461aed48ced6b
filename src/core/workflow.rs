//! Per-file extract and apply operations.
//!
//! Each function handles exactly one source file and returns its errors
//! instead of reporting them; the command layer drives the loop and decides
//! whether a failure aborts the run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::backup::replace_with_backup;
use super::document::Document;
use super::error::{Error, Result};
use super::extract::{Entry, extract};
use super::formats::catalog::CatalogRow;
use super::formats::flat::write_flat;
use super::identifier::IdScope;
use super::merge::{MergeStats, TranslationMap, merge};
use super::scanner::SourceFile;

/// Where merged documents go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Same relative path under a separate output root.
    Output(&'a Path),
    /// Back to the source path, after renaming the original to a backup.
    InPlace { backup_suffix: &'a str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions<'a> {
    pub target: Target<'a>,
    /// Indent width of rewritten nested documents.
    pub indent: usize,
    /// Compute the merge without writing anything.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Merged document written to an output root.
    Written { path: PathBuf },
    /// No translations existed; the source bytes were copied verbatim.
    Copied { path: PathBuf },
    /// Source rewritten in place; the original now lives at `backup`.
    Replaced { backup: PathBuf },
    /// Nothing changed, nothing written.
    Unchanged,
    /// Dry run, nothing written.
    DryRun,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub relative: String,
    pub stats: MergeStats,
    pub outcome: Outcome,
}

/// Load `file` and extract its entries with the given id scope.
pub fn extract_file(file: &SourceFile, scope: IdScope<'_>) -> Result<Vec<Entry>> {
    let document = Document::load(&file.path)?;
    let entries = extract(&document, scope);
    debug!(file = %file.relative, entries = entries.len(), "extracted");
    Ok(entries)
}

/// Refuse an output root that resolves to the input root.
///
/// A missing output root is fine; it cannot be the input.
pub fn ensure_separate_output(input_root: &Path, output_root: &Path) -> Result<()> {
    if same_location(input_root, output_root) {
        return Err(Error::OutputIsInput {
            path: output_root.to_path_buf(),
        });
    }
    Ok(())
}

/// Catalog rows (long-form ids) for one file.
pub fn extract_catalog_rows(file: &SourceFile) -> Result<Vec<CatalogRow>> {
    let scope = IdScope::Corpus {
        file: &file.relative,
    };
    Ok(extract_file(file, scope)?
        .into_iter()
        .map(|entry| entry.into_catalog_row(&file.relative))
        .collect())
}

/// Write the flat JSON (short-form ids) for one file under `output_root`.
///
/// Returns the written path and the number of keys in the flat object.
/// Labels sharing a `labelName` yield the same short id; the later text wins
/// and each repeat is logged.
pub fn extract_flat_file(
    file: &SourceFile,
    output_root: &Path,
    indent: usize,
) -> Result<(PathBuf, usize)> {
    let entries = extract_file(file, IdScope::File)?;
    let target = output_root.join(&file.relative);
    ensure_not_source(file, &target)?;
    write_flat(&target, &entries, indent)?;
    Ok((target, unique_ids(&file.relative, &entries)))
}

fn unique_ids(relative: &str, entries: &[Entry]) -> usize {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            warn!(
                "{}: id {} occurs more than once; only the last text is kept",
                relative, entry.id
            );
        }
    }
    seen.len()
}

/// Merge `translations` into `file` and write the result per `options`.
///
/// `None` means no translation source exists for this file. With an output
/// root the source is then copied unchanged so every input has an output;
/// in place it is parsed (to surface malformed files) and left alone.
pub fn apply_file(
    file: &SourceFile,
    translations: Option<&TranslationMap>,
    scope: IdScope<'_>,
    options: &ApplyOptions<'_>,
) -> Result<FileReport> {
    let report = |stats, outcome| FileReport {
        relative: file.relative.clone(),
        stats,
        outcome,
    };

    if let (None, Target::Output(root)) = (translations, options.target) {
        if options.dry_run {
            return Ok(report(MergeStats::default(), Outcome::DryRun));
        }
        let target = root.join(&file.relative);
        ensure_not_source(file, &target)?;
        ensure_parent(&target)?;
        fs::copy(&file.path, &target).map_err(|e| Error::io(&target, e))?;
        return Ok(report(MergeStats::default(), Outcome::Copied { path: target }));
    }

    let mut document = Document::load(&file.path)?;
    let stats = match translations {
        Some(translations) => merge(&mut document, translations, scope),
        None => MergeStats::default(),
    };
    debug!(
        file = %file.relative,
        applied = stats.applied,
        changed = stats.changed,
        "merged"
    );

    if options.dry_run {
        return Ok(report(stats, Outcome::DryRun));
    }

    match options.target {
        Target::Output(root) => {
            let target = root.join(&file.relative);
            ensure_not_source(file, &target)?;
            ensure_parent(&target)?;
            let content = serialize(&document, &file.path, options.indent)?;
            fs::write(&target, content).map_err(|e| Error::io(&target, e))?;
            Ok(report(stats, Outcome::Written { path: target }))
        }
        Target::InPlace { .. } if stats.changed == 0 => Ok(report(stats, Outcome::Unchanged)),
        Target::InPlace { backup_suffix } => {
            let content = serialize(&document, &file.path, options.indent)?;
            let backup = replace_with_backup(&file.path, &content, backup_suffix)?;
            Ok(report(stats, Outcome::Replaced { backup }))
        }
    }
}

fn serialize(document: &Document, path: &Path, indent: usize) -> Result<String> {
    document
        .to_pretty_string(indent)
        .map_err(|e| Error::json(path, e))
}

/// Both paths exist and name the same file or directory.
fn same_location(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn ensure_not_source(file: &SourceFile, target: &Path) -> Result<()> {
    if same_location(&file.path, target) {
        return Err(Error::OutputIsInput {
            path: target.to_path_buf(),
        });
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(|e| Error::io(parent, e)),
        None => Ok(()),
    }
}
