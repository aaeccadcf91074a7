use std::path::Path;

use anyhow::{Context, Result, bail};

use super::super::args::TranslateCommand;
use super::helper::load_store;
use super::{CommandResult, CommandSummary, TranslateSummary};
use crate::value::{Params, Value};

pub fn translate(cmd: TranslateCommand, cwd: &Path) -> Result<CommandResult> {
    let params = collect_params(cmd.params_json.as_deref(), cmd.params)?;
    let loaded = load_store(&cmd.common, cwd)?;
    let (t, actions) = loaded.context;

    let value = t.translate(&cmd.key, Some(&params), cmd.default.map(Value::from));
    tracing::debug!(key = %cmd.key, locale = %actions.locale(None), "translated");
    let summary = TranslateSummary { value };

    Ok(CommandResult::new(CommandSummary::Translate(summary)).with_warnings(loaded.warnings))
}

/// `--params-json` first, then each `--param` on top of it. Dotted
/// `--param` names (`user.name=Ada`) build nested tables.
fn collect_params(json: Option<&str>, pairs: Vec<(String, String)>) -> Result<Params> {
    let mut params = match json {
        Some(raw) => {
            let value: Value =
                serde_json::from_str(raw).context("Failed to parse --params-json")?;
            match value {
                Value::Table(table) => table,
                _ => bail!("--params-json must be a JSON object"),
            }
        }
        None => Params::new(),
    };
    for (name, value) in pairs {
        insert_param(&mut params, &name, Value::from(value));
    }
    Ok(params)
}

/// Set `value` at the dotted `name`, replacing anything in the way that is
/// not a table.
fn insert_param(params: &mut Params, name: &str, value: Value) {
    match name.split_once('.') {
        Some((head, rest)) if !head.is_empty() && !rest.is_empty() => {
            let entry = params
                .entry(head.to_string())
                .or_insert_with(|| Value::Table(Params::new()));
            if !matches!(entry, Value::Table(_)) {
                *entry = Value::Table(Params::new());
            }
            if let Value::Table(table) = entry {
                insert_param(table, rest, value);
            }
        }
        _ => {
            params.insert(name.to_string(), value);
        }
    }
}
