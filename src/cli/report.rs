//! Report formatting and printing utilities.
//!
//! Command results go to stdout; scan warnings and "nothing found" notices
//! go to stderr so that stdout stays pipeable.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, DictSummary, InitSummary, LocalesSummary, TranslateSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::parsers::json::MessageScanWarning;
use crate::value::Value;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    print_warnings_to(&result.warnings, verbose, err);

    match &result.summary {
        CommandSummary::Translate(summary) => print_translate(summary, out),
        CommandSummary::Dict(summary) => print_dict(summary, out, err),
        CommandSummary::Locales(summary) => print_locales(summary, out, err),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

/// Print warnings about message files that could not be loaded.
///
/// Without `verbose` only a count is shown.
pub fn print_warnings_to<W: Write>(
    warnings: &[MessageScanWarning],
    verbose: bool,
    writer: &mut W,
) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} message file(s) could not be loaded (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

/// Tables and lists render as JSON; everything else in its string form.
fn render_value(value: &Value) -> String {
    match value {
        Value::Table(_) | Value::List(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

fn print_translate<W: Write>(summary: &TranslateSummary, out: &mut W) {
    let _ = writeln!(out, "{}", render_value(&summary.value));
}

fn print_dict<O: Write, E: Write>(summary: &DictSummary, out: &mut O, err: &mut E) {
    match &summary.value {
        Some(value) => {
            let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            let _ = writeln!(out, "{}", json);
        }
        None => {
            let _ = writeln!(
                err,
                "{} {}",
                FAILURE_MARK.red(),
                format!("Nothing found at '{}'", summary.path).red()
            );
        }
    }
}

fn print_locales<O: Write, E: Write>(summary: &LocalesSummary, out: &mut O, err: &mut E) {
    if summary.locales.is_empty() {
        let _ = writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            format!("No locale files found in {}", summary.messages_root).red()
        );
        return;
    }

    for info in &summary.locales {
        let is_active = info.locale == summary.active;
        let marker = if is_active { "*" } else { " " };
        let keys = format!(
            "({} {})",
            info.key_count,
            if info.key_count == 1 { "key" } else { "keys" }
        );
        let _ = writeln!(
            out,
            "{} {} {}",
            marker.green(),
            if is_active {
                info.locale.bold()
            } else {
                info.locale.normal()
            },
            keys.dimmed()
        );
    }

    if !summary.locales.iter().any(|info| info.locale == summary.active) {
        let _ = writeln!(
            err,
            "{} active locale '{}' has no messages",
            "warning:".bold().yellow(),
            summary.active
        );
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
    }
}
