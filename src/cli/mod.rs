//! Command-line layer: argument parsing, config/prompt resolution, the
//! per-file loops, and console reporting. The merge logic itself lives in
//! [`crate::core`].

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod prompt;
mod report;
mod run;

pub use args::{ApplyCommand, Arguments, Command, CommonArgs, ExtractCommand, Format};
pub use commands::{CommandResult, CommandSummary};
pub use exit_status::{ExitStatus, exit_status_from_result};
pub use prompt::collect_roots;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(exit_status_from_result(&result))
}
