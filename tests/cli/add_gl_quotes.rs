use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_add_gl_quotes_to_stdout() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes(
        "tn_TIT.tsv",
        &[
            "1:1\tab12\t\t\tΠαῦλος\t1\tPaul wrote.",
            "1:4\tcd34\t\t\tχάρις … εἰρήνη\t1\t",
            "front:intro\tef56\t\t\t\t0\tIntroduction",
        ],
    )?;

    let output = test.add_gl_quotes_command().args(["-i", "tn_TIT.tsv"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Reference\tID\tTags\tSupportReference\tQuote\tOccurrence\tGLQuote\tGLOccurrence\tNote\n\
         1:1\tab12\t\t\tΠαῦλος\t1\tPaul\t1\tPaul wrote.\n\
         1:4\tcd34\t\t\tχάρις … εἰρήνη\t1\tGrace & peace\t1\t\n\
         front:intro\tef56\t\t\t\t0\t\t\tIntroduction\n"
    );
    assert_eq!(
        stderr(&output),
        "\u{2713} 1 file: 2 quotes resolved, 1 row skipped\n"
    );

    Ok(())
}

#[test]
fn test_add_gl_quotes_writes_output_file() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("notes/tn_TIT.tsv", &["1:1\tab12\t\t\tδοῦλος Θεοῦ\t1\t"])?;

    let output = test
        .add_gl_quotes_command()
        .args(["-i", "notes/tn_TIT.tsv", "-o", "out/tn_TIT.tsv"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "");
    let written = test.read_file("out/tn_TIT.tsv")?;
    assert!(written.contains("\tδοῦλος Θεοῦ\t1\tservant of God\t1\t\n"));

    Ok(())
}

#[test]
fn test_add_gl_quotes_failure_exits_one() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes(
        "tn_TIT.tsv",
        &["1:1\tab12\t\t\tΠαῦλος\t1\t", "1:1\tgh78\t\t\tΠαῦλος\t3\t"],
    )?;

    let output = test.add_gl_quotes_command().args(["-i", "tn_TIT.tsv"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("\tΠαῦλος\t3\tQUOTE_NOT_FOUND: Παῦλος\t3\t"));
    let err = stderr(&output);
    assert!(err.contains("error: \"Παῦλος\"  quote-not-found"), "{err}");
    assert!(err.contains("--> tn_TIT.tsv:3\n"), "{err}");
    assert!(err.contains("= note: 1:1 gh78 in en_ult: occurrence 3 not found"), "{err}");
    assert!(err.contains("1 problem (1 error, 0 warnings)"), "{err}");
    assert!(err.ends_with("1 file: 1 quote resolved, 1 not found\n"), "{err}");

    Ok(())
}

#[test]
fn test_add_gl_quotes_multiple_links() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("tn_TIT.tsv", &["1:1\tab12\t\t\tΠαῦλος\t1\t"])?;

    let output = test
        .add_gl_quotes_command()
        .args([
            "-i",
            "tn_TIT.tsv",
            "--link",
            "unfoldingWord/en_ult",
            "--link",
            "unfoldingWord/en_ust/v86",
        ])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with(
        "Reference\tID\tTags\tSupportReference\tQuote\tOccurrence\t\
         GLQuote:en_ult\tGLOccurrence:en_ult\tGLQuote:en_ust\tGLOccurrence:en_ust\tNote\n"
    ));
    assert!(out.contains("\tΠαῦλος\t1\tPaul\t1\tPaul\t1\t\n"));

    Ok(())
}

#[test]
fn test_add_gl_quotes_links_from_config() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_file(
        ".quotealignrc.json",
        r#"{ "glLinks": ["unfoldingWord/en_ust"] }"#,
    )?;
    test.write_notes("tn_TIT.tsv", &["1:1\tab12\t\t\tΠαῦλος\t1\t"])?;

    let output = test.add_gl_quotes_command().args(["-i", "tn_TIT.tsv"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("\tΠαῦλος\t1\tPaul\t1\t\n"));

    Ok(())
}

#[test]
fn test_add_gl_quotes_directory() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("notes/nt/tn_TIT.tsv", &["1:1\tab12\t\t\tΠαῦλος\t1\t"])?;
    test.write_notes("notes/tn_XYZ.tsv", &["1:1\tcd34\t\t\tΠαῦλος\t1\t"])?;
    test.write_notes("notes/readme.tsv", &[])?;

    let output = test
        .add_gl_quotes_command()
        .args(["-i", "notes", "-o", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(test.read_file("out/nt/tn_TIT.tsv")?.contains("\tPaul\t1\t"));
    assert!(!test.root().join("out/tn_XYZ.tsv").exists());

    let err = stderr(&output);
    assert!(err.contains("error: \"Book XYZ not a valid Bible book\"  file-error"), "{err}");
    assert!(err.contains("warning: \"cannot infer the book from the file name\"  skipped-file"), "{err}");
    assert!(err.contains("2 problems (1 error, 1 warning)"), "{err}");
    assert!(err.ends_with("1 file: 1 quote resolved\n"), "{err}");

    Ok(())
}

#[test]
fn test_add_gl_quotes_directory_needs_output() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("notes/tn_TIT.tsv", &["1:1\tab12\t\t\tΠαῦλος\t1\t"])?;

    let output = test.add_gl_quotes_command().args(["-i", "notes"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: --output is required when --input is a directory\n"
    );

    Ok(())
}

#[test]
fn test_add_gl_quotes_book_flag() -> Result<()> {
    let test = CliTest::with_tokens()?;
    test.write_notes("titus-notes.tsv", &["1:1\tab12\t\t\tΠαῦλος\t1\t"])?;

    let inferred = test
        .add_gl_quotes_command()
        .args(["-i", "titus-notes.tsv"])
        .output()?;
    assert_eq!(inferred.status.code(), Some(2));
    assert!(stderr(&inferred).contains("Cannot infer the book"));

    let explicit = test
        .add_gl_quotes_command()
        .args(["-i", "titus-notes.tsv", "--book", "TIT"])
        .output()?;
    assert!(explicit.status.success(), "stderr: {}", stderr(&explicit));

    Ok(())
}
