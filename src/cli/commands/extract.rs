use anyhow::Result;
use tracing::debug;

use super::helper::process_files;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::cli::report;
use crate::cli::{ExtractCommand, Format};
use crate::config::ConfigLoadResult;
use crate::core::{
    formats::catalog::{CatalogRow, write_catalog},
    scan_json_files,
    workflow::{ensure_separate_output, extract_catalog_rows, extract_flat_file},
};

pub fn extract(cmd: ExtractCommand, loaded: &ConfigLoadResult) -> Result<CommandResult> {
    let config = &loaded.config;
    let keep_going = cmd.common.keep_going;
    let files = scan_json_files(&cmd.input_root, Some(&config.backup_suffix))?;
    debug!(files = files.len(), root = %cmd.input_root.display(), "scanned input");

    let mut failures = Vec::new();

    let entry_count = match cmd.format {
        Format::Csv => {
            let per_file = process_files(&files, keep_going, &mut failures, |file| {
                let rows = extract_catalog_rows(file)?;
                report::print_extracted(&file.relative, rows.len(), None);
                Ok(rows)
            })?;
            let rows: Vec<CatalogRow> = per_file.into_iter().flatten().collect();
            write_catalog(&cmd.output, &rows)?;
            rows.len()
        }
        Format::Flat => {
            ensure_separate_output(&cmd.input_root, &cmd.output)?;
            let indent = cmd.indent.unwrap_or(config.flat_indent);
            let counts = process_files(&files, keep_going, &mut failures, |file| {
                let (path, count) = extract_flat_file(file, &cmd.output, indent)?;
                report::print_extracted(&file.relative, count, Some(&path));
                Ok(count)
            })?;
            counts.iter().sum()
        }
    };

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            format: cmd.format,
            file_count: files.len() - failures.len(),
            entry_count,
            output: cmd.output,
        }),
        failures,
    })
}
