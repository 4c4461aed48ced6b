use std::collections::HashSet;
use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Result, bail};
use tracing::{debug, warn};

use super::helper::process_files;
use super::{ApplySummary, CommandResult, CommandSummary, FileFailure};
use crate::cli::{ApplyCommand, Format, prompt::collect_roots, report};
use crate::config::{
    CSV_NESTED_INDENT, ConfigLoadResult, FLAT_NESTED_INDENT, MergeRoots, PartialRoots,
    validate_backup_suffix,
};
use crate::core::{
    self, ApplyOptions, FileReport, IdScope, MergeStats, SourceFile, Target,
    formats::{catalog::read_catalog, flat::read_flat},
    scan_json_files,
    workflow::{apply_file, ensure_separate_output},
};

pub fn apply(cmd: ApplyCommand, loaded: &ConfigLoadResult) -> Result<CommandResult> {
    let config = &loaded.config;

    if cmd.format == Format::Csv && cmd.output.is_none() {
        bail!(
            "--output is required with --format csv.\n\
             Hint: catalogs are applied to a separate output folder, never in place."
        );
    }

    let backup_suffix = cmd
        .backup_suffix
        .clone()
        .unwrap_or_else(|| config.backup_suffix.clone());
    validate_backup_suffix(&backup_suffix)?;

    let roots = resolve_roots(&cmd, loaded)?;

    let indent = cmd
        .indent
        .or(config.nested_indent)
        .unwrap_or(match cmd.format {
            Format::Csv => CSV_NESTED_INDENT,
            Format::Flat => FLAT_NESTED_INDENT,
        });

    let target = match &cmd.output {
        Some(dir) => {
            ensure_separate_output(&roots.input_root, dir)?;
            Target::Output(dir)
        }
        None => Target::InPlace {
            backup_suffix: &backup_suffix,
        },
    };
    let options = ApplyOptions {
        target,
        indent,
        dry_run: cmd.dry_run,
    };

    let files = scan_json_files(&roots.input_root, Some(&backup_suffix))?;
    debug!(files = files.len(), root = %roots.input_root.display(), "scanned input");

    let keep_going = cmd.common.keep_going;
    let mut failures = Vec::new();
    let reports = match cmd.format {
        Format::Csv => apply_catalog(
            &files,
            &roots.translations_root,
            &options,
            keep_going,
            &mut failures,
        )?,
        Format::Flat => apply_flat(
            &files,
            &roots.translations_root,
            &options,
            keep_going,
            &mut failures,
        )?,
    };

    let mut totals = MergeStats::default();
    for report in &reports {
        totals += report.stats;
    }

    Ok(CommandResult {
        summary: CommandSummary::Apply(ApplySummary {
            file_count: reports.len(),
            applied: totals.applied,
            in_place: cmd.output.is_none(),
            dry_run: cmd.dry_run,
        }),
        failures,
    })
}

/// Arguments first, then the config file, then (when allowed) the prompt.
fn resolve_roots(cmd: &ApplyCommand, loaded: &ConfigLoadResult) -> Result<MergeRoots> {
    let partial = PartialRoots {
        input_root: cmd.input_root.clone(),
        translations_root: cmd.translations.clone(),
    }
    .with_config(loaded);

    if partial.is_complete() || !(cmd.interactive || io::stdin().is_terminal()) {
        return partial.complete();
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    collect_roots(partial, cmd.format, &mut input, &mut output)
}

fn apply_catalog(
    files: &[SourceFile],
    catalog_path: &Path,
    options: &ApplyOptions<'_>,
    keep_going: bool,
    failures: &mut Vec<FileFailure>,
) -> Result<Vec<FileReport>> {
    let catalog = read_catalog(catalog_path)?;
    debug!(
        translations = catalog.translation_count(),
        blank_rows = catalog.blank_rows,
        "loaded catalog"
    );

    let known: HashSet<&str> = files.iter().map(|f| f.relative.as_str()).collect();
    let mut stale: Vec<&str> = catalog.files().filter(|f| !known.contains(f)).collect();
    stale.sort_unstable();
    for file in stale {
        warn!("Catalog rows for {} match no file under the input root", file);
    }

    process_files(files, keep_going, failures, |file| {
        let scope = IdScope::Corpus {
            file: &file.relative,
        };
        let report = apply_file(file, catalog.for_file(&file.relative), scope, options)?;
        finish_file(&report);
        Ok(report)
    })
}

fn apply_flat(
    files: &[SourceFile],
    translations_root: &Path,
    options: &ApplyOptions<'_>,
    keep_going: bool,
    failures: &mut Vec<FileFailure>,
) -> Result<Vec<FileReport>> {
    if !translations_root.is_dir() {
        return Err(core::Error::MissingRoot {
            path: translations_root.to_path_buf(),
        }
        .into());
    }

    process_files(files, keep_going, failures, |file| {
        let flat_path = translations_root.join(&file.relative);
        let translations = read_flat(&flat_path)?;
        if translations.is_none() {
            warn!("No translations found for: {}", flat_path.display());
        }
        let report = apply_file(file, translations.as_ref(), IdScope::File, options)?;
        finish_file(&report);
        Ok(report)
    })
}

fn finish_file(file_report: &FileReport) {
    if file_report.stats.unmatched > 0 {
        warn!(
            "{}: {} translation(s) matched no word; ids may be stale",
            file_report.relative, file_report.stats.unmatched
        );
    }
    report::print_file_report(file_report);
}
