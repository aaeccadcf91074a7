use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary};

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but found nothing, or refused to act
/// - `Error` (2): Command failed due to internal error (config error, missing directory, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but found nothing, or refused to act.
    Failure,
    /// Command failed due to internal error (config error, missing directory, etc.).
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

/// A missing translation is not a failure: it degrades to an empty string.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    let found = match &result.summary {
        CommandSummary::Translate(_) => true,
        CommandSummary::Dict(summary) => summary.value.is_some(),
        CommandSummary::Locales(summary) => !summary.locales.is_empty(),
        CommandSummary::Init(summary) => summary.created,
    };

    if found {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    }
}
