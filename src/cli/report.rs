//! Console output: per-file progress lines and the final summary.
//!
//! Separate from core logic so wordloc can be used as a library without
//! printing side effects.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use super::Format;
use super::commands::helper::plural;
use super::commands::{
    ApplySummary, CommandResult, CommandSummary, ExtractSummary, FileFailure, InitSummary,
};
use crate::core::{FileReport, Outcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print one extracted file.
pub fn print_extracted(relative: &str, count: usize, written: Option<&Path>) {
    print_extracted_to(relative, count, written, &mut io::stdout().lock());
}

pub fn print_extracted_to<W: Write>(
    relative: &str,
    count: usize,
    written: Option<&Path>,
    writer: &mut W,
) {
    let _ = match written {
        Some(path) => writeln!(
            writer,
            "  {}: {} {} {} {}",
            relative,
            count,
            plural(count, "entry", "entries"),
            "->".blue(),
            path.display()
        ),
        None => writeln!(
            writer,
            "  {}: {} {}",
            relative,
            count,
            plural(count, "string", "strings")
        ),
    };
}

/// Print the outcome of applying translations to one file.
pub fn print_file_report(report: &FileReport) {
    print_file_report_to(report, &mut io::stdout().lock());
}

pub fn print_file_report_to<W: Write>(report: &FileReport, writer: &mut W) {
    let applied = report.stats.applied;
    let translations = plural(applied, "translation", "translations");

    let detail = match &report.outcome {
        Outcome::Written { .. } => format!("applied {} {}", applied, translations),
        Outcome::Copied { .. } => "no translations, copied as-is".dimmed().to_string(),
        Outcome::Replaced { backup } => format!(
            "applied {} {} (backup: {})",
            applied,
            translations,
            backup
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        ),
        Outcome::Unchanged if applied > 0 => "already up to date".dimmed().to_string(),
        Outcome::Unchanged => "no translations to apply".dimmed().to_string(),
        Outcome::DryRun => format!("would apply {} {}", applied, translations),
    };

    let _ = writeln!(writer, "  {}: {}", report.relative, detail);
}

/// Print a file skipped under `--keep-going`.
pub fn print_failure(relative: &str, err: &dyn Display) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}: {}",
        "error:".bold().red(),
        relative,
        err
    );
}

/// Print the final summary of a command.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract_summary(summary, writer),
        CommandSummary::Apply(summary) => print_apply_summary(summary, writer),
        CommandSummary::Init(summary) => print_init_summary(summary, writer),
    }
    print_failures(&result.failures, writer);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_extract_summary<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let what = match summary.format {
        Format::Csv => plural(summary.entry_count, "string", "strings"),
        Format::Flat => plural(summary.entry_count, "entry", "entries"),
    };
    let msg = format!(
        "Extracted {} {} from {} {} into {}",
        summary.entry_count,
        what,
        summary.file_count,
        plural(summary.file_count, "file", "files"),
        summary.output.display()
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_apply_summary<W: Write>(summary: &ApplySummary, writer: &mut W) {
    let files = format!(
        "{} {}",
        summary.file_count,
        plural(summary.file_count, "file", "files")
    );
    let translations = format!(
        "{} {}",
        summary.applied,
        plural(summary.applied, "translation", "translations")
    );

    let msg = if summary.dry_run {
        format!(
            "Processed {}, would apply {} (dry run, nothing written)",
            files, translations
        )
    } else if summary.in_place {
        format!("Processed {}, applied {} in-place", files, translations)
    } else {
        format!("Processed {}, applied {}", files, translations)
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_init_summary<W: Write>(summary: &InitSummary, writer: &mut W) {
    let msg = format!("Created {}", summary.path.display());
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_failures<W: Write>(failures: &[FileFailure], writer: &mut W) {
    if failures.is_empty() {
        return;
    }
    let msg = format!(
        "{} {} failed and {} skipped",
        failures.len(),
        plural(failures.len(), "file", "files"),
        if failures.len() == 1 { "was" } else { "were" }
    );
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), msg.red());
    for failure in failures {
        let _ = writeln!(writer, "  {} {}", failure.relative, failure.error.dimmed());
    }
}
