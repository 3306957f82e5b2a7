use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["tokens"], "./tokens.json");
    assert_eq!(
        parsed["glLinks"],
        serde_json::json!(["unfoldingWord/en_ult/master"])
    );
    assert_eq!(parsed["trySeparators"], false);
    assert!(
        parsed.get("includes").is_some(),
        "Config should have 'includes' field"
    );

    // 2-space indentation
    assert!(content.contains("\n  \"tokens\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .quotealignrc.json\n");

    assert!(test.root().join(".quotealignrc.json").exists());
    let content = test.read_file(".quotealignrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".quotealignrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Error: .quotealignrc.json already exists\n"
    );
    assert_eq!(test.read_file(".quotealignrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.command().arg("init").output()?;

    let output = test
        .resolve_command()
        .args(["--book", "TIT", "--reference", "1:1", "--quote", "Παῦλος"])
        .output()?;
    assert!(
        output.status.success(),
        "resolve should work with the initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Paul\t1\n");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_file(".quotealignrc.json", r#"{ "glLinks": ["en_ult"] }"#)?;

    let output = test
        .resolve_command()
        .args(["--book", "TIT", "--reference", "1:1", "--quote", "Παῦλος"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid entry in 'glLinks'"));

    Ok(())
}
