use std::path::Path;

use anyhow::Result;

use super::super::args::DictCommand;
use super::helper::load_store;
use super::{CommandResult, CommandSummary, DictSummary};

pub fn dict(cmd: DictCommand, cwd: &Path) -> Result<CommandResult> {
    let loaded = load_store(&cmd.common, cwd)?;
    let (_, actions) = loaded.context;

    let value = actions.dict(&cmd.path);
    let summary = DictSummary {
        path: cmd.path,
        value,
    };

    Ok(CommandResult::new(CommandSummary::Dict(summary)).with_warnings(loaded.warnings))
}
