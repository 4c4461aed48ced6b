use std::process::ExitCode;

use super::commands::CommandResult;

/// Exit status for CLI commands.
///
/// - `Success` (0): every file was processed
/// - `Failure` (1): the run finished but some files were skipped (`--keep-going`)
/// - `Error` (2): the run was aborted (missing folder, parse error, backup collision, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every file was processed.
    Success,
    /// Finished, but at least one file failed and was skipped.
    Failure,
    /// Aborted by an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.failures.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    }
}
