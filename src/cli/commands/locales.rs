use std::path::Path;

use anyhow::Result;

use super::super::args::LocalesCommand;
use super::helper::load_store;
use super::{CommandResult, CommandSummary, LocaleInfo, LocalesSummary};

pub fn locales(cmd: LocalesCommand, cwd: &Path) -> Result<CommandResult> {
    let loaded = load_store(&cmd.common, cwd)?;
    let (_, actions) = loaded.context;

    let locales = actions
        .locales()
        .into_iter()
        .map(|locale| {
            let key_count = actions
                .dict(&locale)
                .and_then(|value| value.as_table().map(|table| table.len()))
                .unwrap_or_default();
            LocaleInfo { locale, key_count }
        })
        .collect();

    let summary = LocalesSummary {
        active: actions.locale(None),
        locales,
        messages_root: loaded.messages_root.display().to_string(),
    };

    Ok(CommandResult::new(CommandSummary::Locales(summary)).with_warnings(loaded.warnings))
}
