//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `translate`: resolve a key in the active locale
//! - `dict`: print a locale table (or part of one) as JSON
//! - `locales`: list loaded locales
//! - `init`: write a default `.i18nrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::utils::parse_key_value;

#[derive(Debug, Parser)]
#[command(name = "i18n", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Dict(cmd)) => cmd.common.verbose,
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands that load messages.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Active locale (overrides config file and system locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Dotted translation key, e.g. Common.buttons.save
    pub key: String,

    /// Interpolation parameter, repeatable; dotted names nest: -p user.name=Ada
    #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Interpolation parameters as a JSON object (merged before --param)
    #[arg(long, value_name = "JSON")]
    pub params_json: Option<String>,

    /// Value to use when the key is missing
    #[arg(short, long)]
    pub default: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DictCommand {
    /// Locale, optionally followed by a dotted path inside it, e.g. en.Common
    pub path: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate a key in the active locale
    Translate(TranslateCommand),
    /// Print a locale table, or a value inside it, as JSON
    Dict(DictCommand),
    /// List the locales found in the messages directory
    Locales(LocalesCommand),
    /// Initialize a new .i18nrc.json configuration file
    Init,
}
