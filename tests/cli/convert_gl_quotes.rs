use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_convert_gl_quotes_in_place() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes(
        "tn_TIT.tsv",
        &[
            "1:1\tab12\t\t\tservant of God\t1\t",
            "1:4\tcd34\t\t\tGrace … peace\t1\t",
            "1:4\tef56\t\t\tκαὶ\t1\tAlready Greek.",
        ],
    )?;

    let output = test
        .convert_gl_quotes_command()
        .args(["-i", "tn_TIT.tsv", "-o", "tn_TIT.tsv"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("tn_TIT.tsv")?,
        "Reference\tID\tTags\tSupportReference\tQuote\tOccurrence\tNote\n\
         1:1\tab12\t\t\tδοῦλος Θεοῦ\t1\t\n\
         1:4\tcd34\t\t\tχάρις & εἰρήνη\t1\t\n\
         1:4\tef56\t\t\tκαὶ\t1\tAlready Greek.\n"
    );
    assert_eq!(
        stderr(&output),
        "\u{2713} 1 file: 2 quotes resolved, 1 row skipped\n"
    );

    Ok(())
}

#[test]
fn test_convert_gl_quotes_marks_failures() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("tn_TIT.tsv", &["1:1\tgh78\t\t\tan apostle\t1\t"])?;

    let output = test.convert_gl_quotes_command().args(["-i", "tn_TIT.tsv"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("1:1\tgh78\t\t\tQUOTE_NOT_FOUND: an apostle\t1\t\n"));
    let err = stderr(&output);
    assert!(err.contains("error: \"an apostle\"  quote-not-found"), "{err}");
    assert!(err.contains("in el-x-koine_ugnt:"), "{err}");

    Ok(())
}

#[test]
fn test_convert_gl_quotes_reprocess() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("tn_TIT.tsv", &["1:1\tij90\t\t\tQUOTE_NOT_FOUND: Paul\t1\t"])?;

    let skipped = test.convert_gl_quotes_command().args(["-i", "tn_TIT.tsv"]).output()?;
    assert!(skipped.status.success(), "stderr: {}", stderr(&skipped));
    assert!(stdout(&skipped).contains("\tQUOTE_NOT_FOUND: Paul\t"));

    let reprocessed = test
        .convert_gl_quotes_command()
        .args(["-i", "tn_TIT.tsv", "--reprocess"])
        .output()?;
    assert!(reprocessed.status.success(), "stderr: {}", stderr(&reprocessed));
    assert!(stdout(&reprocessed).contains("1:1\tij90\t\t\tΠαῦλος\t1\t\n"));

    Ok(())
}

#[test]
fn test_convert_gl_quotes_single_link_only() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("tn_TIT.tsv", &["1:1\tab12\t\t\tPaul\t1\t"])?;

    let output = test
        .convert_gl_quotes_command()
        .args([
            "-i",
            "tn_TIT.tsv",
            "--link",
            "unfoldingWord/en_ult",
            "--link",
            "unfoldingWord/en_ust",
        ])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: convert-gl-quotes takes a single --link\n"
    );

    Ok(())
}

#[test]
fn test_convert_gl_quotes_from_ust() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("tn_TIT.tsv", &["1:1\tab12\t\t\tPaul\t1\t"])?;

    let output = test
        .convert_gl_quotes_command()
        .args(["-i", "tn_TIT.tsv", "--link", "unfoldingWord/en_ust"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("1:1\tab12\t\t\tΠαῦλος\t1\t\n"));

    Ok(())
}

#[test]
fn test_convert_gl_quotes_unknown_repo_is_an_error() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("tn_TIT.tsv", &["1:1\tab12\t\t\tPaul\t1\t"])?;

    let output = test
        .convert_gl_quotes_command()
        .args(["-i", "tn_TIT.tsv", "--link", "es-419_gl/es-419_glt"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: No token data loaded for repository es-419_glt\n"
    );

    Ok(())
}
