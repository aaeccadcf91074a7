use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::value::{Dictionary, Table, Value};

/// A warning from scanning message files.
#[derive(Debug, Clone)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub dictionary: Dictionary,
    pub warnings: Vec<MessageScanWarning>,
}

/// Read one locale file. The document must be a JSON object.
pub fn parse_json_file(path: &Path) -> Result<Table> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    match value {
        Value::Table(table) => Ok(table),
        _ => bail!("Expected a JSON object at the top level of {:?}", path),
    }
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `<locale>.json` directly under `message_dir`.
///
/// Files that fail to parse are reported as warnings and skipped.
pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .i18nrc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    for entry in fs::read_dir(message_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            match parse_json_file(&path) {
                Ok(table) => {
                    tracing::debug!(locale = %locale, keys = table.len(), "loaded messages");
                    result.dictionary.insert(locale, table);
                }
                Err(e) => {
                    tracing::debug!(file = %path.display(), error = %e, "skipping unreadable messages");
                    result.warnings.push(MessageScanWarning {
                        file_path: path.to_string_lossy().to_string(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }
    }

    Ok(result)
}
