use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_dict_nested_value() -> Result<()> {
    let test = CliTest::with_messages()?;

    assert_cmd_snapshot!(test.dict_command().arg("en.Common.buttons.save"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    "Save"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_dict_whole_locale() -> Result<()> {
    let test = CliTest::with_messages()?;

    assert_cmd_snapshot!(test.dict_command().arg("fr"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "greet": "Bonjour {{ name }}",
      "title": "Bonjour"
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_dict_ignores_active_locale() -> Result<()> {
    let test = CliTest::with_messages()?;

    assert_cmd_snapshot!(test.dict_command().args(["en.title", "-l", "fr"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    "Hello"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_dict_absent_path() -> Result<()> {
    let test = CliTest::with_messages()?;

    assert_cmd_snapshot!(test.dict_command().arg("xx.title"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ Nothing found at 'xx.title'
    ");

    Ok(())
}

#[test]
fn test_dict_does_not_descend_into_strings() -> Result<()> {
    let test = CliTest::with_messages()?;

    assert_cmd_snapshot!(test.dict_command().arg("en.title.length"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ Nothing found at 'en.title.length'
    ");

    Ok(())
}
