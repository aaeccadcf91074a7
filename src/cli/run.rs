/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// Every command resolves paths against the current directory.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and any scan warnings
/// - `Err` if the command fails (e.g., invalid config, missing messages directory)
use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{dict::dict, init::init, locales::locales, translate::translate},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;

    match command {
        Some(Command::Translate(cmd)) => translate(cmd, &cwd),
        Some(Command::Dict(cmd)) => dict(cmd, &cwd),
        Some(Command::Locales(cmd)) => locales(cmd, &cwd),
        Some(Command::Init) => init(&cwd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
