use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_resolve_original_to_gateway() -> Result<()> {
    let test = CliTest::with_tokens()?;

    let output = test
        .resolve_command()
        .args(["--book", "TIT", "--reference", "1:1", "--quote", "δοῦλος Θεοῦ"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "servant of God\t1\n");

    Ok(())
}

#[test]
fn test_resolve_gateway_to_original() -> Result<()> {
    let test = CliTest::with_tokens()?;

    let output = test
        .resolve_command()
        .args([
            "--book",
            "tit",
            "--reference",
            "1:4",
            "--quote",
            "Grace and peace",
            "--source",
            "en_ult",
            "--target",
            "el-x-koine_ugnt",
        ])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "χάρις καὶ εἰρήνη\t1\n");

    Ok(())
}

#[test]
fn test_resolve_json_output() -> Result<()> {
    let test = CliTest::with_tokens()?;

    let output = test
        .resolve_command()
        .args([
            "--book",
            "TIT",
            "--reference",
            "1:4",
            "--quote",
            "χάρις … εἰρήνη",
            "--json",
        ])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "{\"quote\":\"Grace & peace\",\"occurrence\":1}\n"
    );

    Ok(())
}

#[test]
fn test_resolve_other_target_and_token_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("data/tit.json", crate::TOKENS)?;

    let output = test
        .resolve_command()
        .args([
            "--tokens",
            "data/tit.json",
            "--book",
            "TIT",
            "--reference",
            "1:1",
            "--quote",
            "Παῦλος",
            "--target",
            "en_ust",
        ])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Paul\t1\n");

    Ok(())
}

#[test]
fn test_resolve_not_found_reports_issue() -> Result<()> {
    let test = CliTest::with_tokens()?;

    let output = test
        .resolve_command()
        .args(["--book", "TIT", "--reference", "1:1", "--quote", "Παῦλος", "--occurrence", "2"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    let err = stderr(&output);
    assert!(err.contains("error: \"Παῦλος\"  quote-not-found"), "{err}");
    assert!(err.contains("  --> TIT 1:1\n"), "{err}");
    assert!(err.contains("occurrence 2 not found"), "{err}");
    assert!(err.contains("= hint: retry with --try-separators"), "{err}");

    Ok(())
}

#[test]
fn test_resolve_try_separators_recovers() -> Result<()> {
    let test = CliTest::with_tokens()?;

    let without = test
        .resolve_command()
        .args([
            "--book", "TIT", "--reference", "1:1", "--quote", "Paul servant", "--source", "en_ult",
            "--target", "el-x-koine_ugnt",
        ])
        .output()?;
    assert_eq!(without.status.code(), Some(1));

    let with = test
        .resolve_command()
        .args([
            "--book",
            "TIT",
            "--reference",
            "1:1",
            "--quote",
            "Paul servant",
            "--source",
            "en_ult",
            "--target",
            "el-x-koine_ugnt",
            "--try-separators",
        ])
        .output()?;
    assert!(with.status.success(), "stderr: {}", stderr(&with));
    assert_eq!(stdout(&with), "Παῦλος δοῦλος\t1\n");

    Ok(())
}

#[test]
fn test_resolve_unknown_book_is_an_error() -> Result<()> {
    let test = CliTest::with_tokens()?;

    let output = test
        .resolve_command()
        .args(["--book", "XYZ", "--reference", "1:1", "--quote", "Παῦλος"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: Book XYZ not a valid Bible book\n");

    Ok(())
}

#[test]
fn test_resolve_missing_token_file_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .resolve_command()
        .args(["--book", "TIT", "--reference", "1:1", "--quote", "Παῦλος"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to read token file"));

    Ok(())
}

#[test]
fn test_resolve_missing_verse_is_an_error() -> Result<()> {
    let test = CliTest::with_tokens()?;

    let output = test
        .resolve_command()
        .args(["--book", "TIT", "--reference", "2:1", "--quote", "Παῦλος"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No tokens for TIT 2:1 in el-x-koine_ugnt"));

    Ok(())
}
