use crate::parsers::json::MessageScanWarning;
use crate::value::Value;

#[derive(Debug)]
pub enum CommandSummary {
    Translate(TranslateSummary),
    Dict(DictSummary),
    Locales(LocalesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct TranslateSummary {
    pub value: Value,
}

#[derive(Debug)]
pub struct DictSummary {
    pub path: String,
    /// `None` when nothing lives at `path`.
    pub value: Option<Value>,
}

#[derive(Debug)]
pub struct LocaleInfo {
    pub locale: String,
    /// Number of top-level keys in the locale table.
    pub key_count: usize,
}

#[derive(Debug)]
pub struct LocalesSummary {
    pub active: String,
    pub locales: Vec<LocaleInfo>,
    pub messages_root: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Message files that could not be loaded.
    pub warnings: Vec<MessageScanWarning>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<MessageScanWarning>) -> Self {
        self.warnings = warnings;
        self
    }
}
