use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_translate_plain_key() -> Result<()> {
    let test = CliTest::with_messages()?;

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
fn test_translate_with_params() -> Result<()> {
    let test = CliTest::with_messages()?;

    let mut cmd = test.translate_command();
    cmd.args(["greet", "-l", "en", "-p", "name=Tom", "--param", "count=3"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello Tom, you have 3 messages

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_with_params_json() -> Result<()> {
    let test = CliTest::with_messages()?;

    let mut cmd = test.translate_command();
    cmd.args(["greet", "-l", "en"])
        .args(["--params-json", r#"{"name": "Ann", "count": 2}"#])
        .args(["-p", "name=Bob"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello Bob, you have 2 messages

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_dotted_param_names() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "messages/en.json",
        r#"{ "welcome": "Welcome back, {{ user.name }}" }"#,
    )?;

    let mut cmd = test.translate_command();
    cmd.args(["welcome", "-l", "en", "-p", "user.name=Ada"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Welcome back, Ada

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_missing_key_prints_empty_line() -> Result<()> {
    let test = CliTest::with_messages()?;

    assert_cmd_snapshot!(test.translate_command().args(["Common.nope", "-l", "en"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----


    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_default_is_interpolated() -> Result<()> {
    let test = CliTest::with_messages()?;

    let mut cmd = test.translate_command();
    cmd.args(["nope", "-l", "en", "--default", "Hi {{ name }}", "-p", "name=Tom"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hi Tom

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_table_prints_json() -> Result<()> {
    let test = CliTest::with_messages()?;

    assert_cmd_snapshot!(test.translate_command().args(["Common.buttons", "-l", "en"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "cancel": "Cancel",
      "save": "Save"
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_translate_locale_flag_selects_table() -> Result<()> {
    let test = CliTest::with_messages()?;

    let mut cmd = test.translate_command();
    cmd.args(["greet", "-l", "fr", "-p", "name=Tom"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Bonjour Tom

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_uses_config_default_locale() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.write_file(".i18nrc.json", r#"{ "defaultLocale": "fr" }"#)?;

    assert_cmd_snapshot!(test.translate_command().arg("title"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Bonjour

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_config_messages_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nrc.json",
        r#"{ "messagesRoot": "./i18n", "defaultLocale": "sw" }"#,
    )?;
    test.write_file("i18n/sw.json", r#"{ "hello": "hej {{ name }}" }"#)?;

    assert_cmd_snapshot!(test.translate_command().args(["hello", "-p", "name=Tom"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    hej Tom

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_skips_broken_locale_file() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.write_file("messages/de.json", "{ broken")?;

    assert_cmd_snapshot!(test.translate_command().args(["title", "-l", "en"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Hello

    ----- stderr -----
    warning: 1 message file(s) could not be loaded (use -v for details)
    ");

    Ok(())
}

#[test]
fn test_translate_missing_messages_dir_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    insta::with_settings!({filters => vec![(r"'[^']*messages'", "'[MESSAGES_DIR]'")]}, {
        assert_cmd_snapshot!(test.translate_command().args(["title", "-l", "en"]), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Messages directory '[MESSAGES_DIR]' does not exist.
        Hint: Check your .i18nrc.json 'messagesRoot' setting.
        ");
    });

    Ok(())
}

#[test]
fn test_translate_verbose_logs_to_stderr() -> Result<()> {
    let test = CliTest::with_messages()?;

    // Log lines carry timestamps, so only look for the event.
    let output = test
        .translate_command()
        .args(["title", "-l", "en", "-v"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout)?, "Hello\n");
    assert!(String::from_utf8(output.stderr)?.contains("loaded messages"));

    Ok(())
}

#[test]
fn test_translate_rejects_malformed_param() -> Result<()> {
    let test = CliTest::with_messages()?;

    let output = test
        .translate_command()
        .args(["title", "-p", "oops"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr)?.contains("NAME=VALUE"));

    Ok(())
}
