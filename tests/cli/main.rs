use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod dict;
mod init;
mod locales;
mod translate;

const BIN_NAME: &str = "i18n";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config discovery at the fixture root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with `messages/en.json` and `messages/fr.json`.
    pub fn with_messages() -> Result<Self> {
        let test = Self::new()?;
        test.write_file(
            "messages/en.json",
            r#"{
                "title": "Hello",
                "greet": "Hello {{ name }}, you have {{count}} messages",
                "Common": { "buttons": { "save": "Save", "cancel": "Cancel" } }
            }"#,
        )?;
        test.write_file(
            "messages/fr.json",
            r#"{
                "title": "Bonjour",
                "greet": "Bonjour {{ name }}"
            }"#,
        )?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn translate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("translate");
        cmd
    }

    pub fn dict_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("dict");
        cmd
    }

    pub fn locales_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("locales");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
