use std::env;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{apply::apply, extract::extract, init::init},
};
use crate::config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config};

/// Dispatches to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and any skipped files
/// - `Err` if the command was aborted (missing folder, parse error, backup collision)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;

    match command {
        Some(Command::Extract(cmd)) => extract(cmd, &load(&cwd)?),
        Some(Command::Apply(cmd)) => apply(cmd, &load(&cwd)?),
        Some(Command::Init) => init(&cwd),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn load(cwd: &Path) -> Result<ConfigLoadResult> {
    let loaded = load_config(cwd)?;
    if loaded.from_file {
        debug!(dir = %loaded.base_dir.display(), "loaded {}", CONFIG_FILE_NAME);
    } else {
        debug!("no {} found, using defaults", CONFIG_FILE_NAME);
    }
    Ok(loaded)
}
