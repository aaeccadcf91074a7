use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    // 1. Parse as JSON
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    // 2. Verify default values
    assert_eq!(
        parsed.get("messagesRoot").and_then(Value::as_str),
        Some("./messages"),
        "Config should have a default 'messagesRoot'"
    );
    assert!(
        parsed.get("defaultLocale").is_none(),
        "Config should leave 'defaultLocale' to the system locale"
    );

    // 3. Verify formatting (2-space indentation)
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .i18nrc.json

    ----- stderr -----
    ");

    // Verify file exists
    assert!(test.root().join(".i18nrc.json").exists());

    // Verify content is valid and has expected structure
    let content = test.read_file(".i18nrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .i18nrc.json already exists
    ");

    // The existing file is left untouched
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    // Initialize config
    test.command().arg("init").output()?;

    test.write_file("messages/en.json", r#"{ "title": "Hello" }"#)?;

    // Verify translate works with initialized config
    assert_cmd_snapshot!(test.translate_command().args(["title", "-l", "en"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Usage: i18n"));
    assert!(stdout.contains("translate"));

    Ok(())
}
