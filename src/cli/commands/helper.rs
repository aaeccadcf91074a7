use std::path::{Path, PathBuf};

use anyhow::Result;

use super::super::args::CommonArgs;
use crate::config::{ConfigLoadResult, load_config};
use crate::parsers::json::{MessageScanWarning, scan_message_files};
use crate::store::{TranslationContext, create_translation_context};

/// A store populated from the messages directory.
pub struct LoadedStore {
    pub context: TranslationContext,
    pub messages_root: PathBuf,
    pub warnings: Vec<MessageScanWarning>,
}

/// Resolve config and CLI overrides against `cwd`, then load every message
/// file into a fresh store.
///
/// Precedence: `--messages-root` / `--locale`, then `.i18nrc.json`, then
/// defaults (the system locale for the active locale).
pub fn load_store(common: &CommonArgs, cwd: &Path) -> Result<LoadedStore> {
    let ConfigLoadResult {
        config,
        from_file,
        root,
    } = load_config(cwd)?;

    let messages_root = match &common.messages_root {
        Some(path) => cwd.join(path),
        None => root.join(&config.messages_root),
    };
    let locale = common
        .locale
        .clone()
        .unwrap_or_else(|| config.resolved_locale());

    tracing::debug!(
        from_file,
        messages_root = %messages_root.display(),
        locale = %locale,
        "resolved settings"
    );

    let scanned = scan_message_files(&messages_root)?;
    Ok(LoadedStore {
        context: create_translation_context(scanned.dictionary, Some(locale)),
        messages_root,
        warnings: scanned.warnings,
    })
}
