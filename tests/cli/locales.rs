use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_locales_lists_and_marks_active() -> Result<()> {
    let test = CliTest::with_messages()?;

    assert_cmd_snapshot!(test.locales_command().args(["-l", "fr"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      en (3 keys)
    * fr (2 keys)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_locales_warns_when_active_locale_has_no_file() -> Result<()> {
    let test = CliTest::with_messages()?;

    assert_cmd_snapshot!(test.locales_command().args(["-l", "de"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
      en (3 keys)
      fr (2 keys)

    ----- stderr -----
    warning: active locale 'de' has no messages
    ");

    Ok(())
}

#[test]
fn test_locales_messages_root_override() -> Result<()> {
    let test = CliTest::with_messages()?;
    test.write_file("other/ja.json", r#"{ "title": "こんにちは" }"#)?;

    let mut cmd = test.locales_command();
    cmd.args(["--messages-root", "other", "-l", "ja"]);

    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    * ja (1 key)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_locales_empty_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/README.md", "no locales here")?;

    insta::with_settings!({filters => vec![(r"found in .*", "found in [MESSAGES_DIR]")]}, {
        assert_cmd_snapshot!(test.locales_command().args(["-l", "en"]), @r"
        success: false
        exit_code: 1
        ----- stdout -----

        ----- stderr -----
        ✘ No locale files found in [MESSAGES_DIR]
        ");
    });

    Ok(())
}
