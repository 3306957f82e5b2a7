//! Input/output plumbing shared by the table commands.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use super::{ConvertSummary, helper::SEPARATOR_HINT};
use crate::{
    cli::args::ConvertArgs,
    convert::ConversionOutput,
    core::{ConvertContext, infer_book, scan_files},
    issues::{FileErrorIssue, Issue, QuoteNotFoundIssue, SkippedFileIssue},
};

/// Run `convert` over `--input`, a single table or every table below a
/// directory, and write the results.
///
/// A single table that cannot be processed fails the command; inside a
/// directory it becomes a `file-error` issue and the rest carry on.
pub fn convert_input<F>(
    args: &ConvertArgs,
    ctx: &mut ConvertContext,
    mut convert: F,
) -> Result<(ConvertSummary, Vec<Issue>)>
where
    F: FnMut(&mut ConvertContext, &str, &str) -> Result<ConversionOutput>,
{
    let mut summary = ConvertSummary::default();
    let mut issues = Vec::new();

    if !args.input.is_dir() {
        let display = args.input.display().to_string();
        let Some(book) = book_for(args, &args.input) else {
            bail!(
                "Cannot infer the book from {}; pass --book",
                args.input.display()
            );
        };
        let content = fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {}", display))?;
        let output = convert(ctx, &book, &content)?;

        collect(&mut summary, &mut issues, &display, &output, ctx.options.try_separators);
        match &args.output {
            Some(path) => write_table(path, &output.output, &mut summary)?,
            None => summary.stdout = Some(output.output),
        }
        return Ok((summary, issues));
    }

    let Some(out_dir) = &args.output else {
        bail!("--output is required when --input is a directory");
    };
    let scan = scan_files(&args.input, &ctx.config.includes, &ctx.config.ignores);
    if scan.skipped_count > 0 {
        warn!(
            "{} path(s) skipped due to access errors",
            scan.skipped_count
        );
    }

    for file in &scan.files {
        let display = file.display().to_string();
        let Some(book) = book_for(args, file) else {
            issues.push(Issue::SkippedFile(SkippedFileIssue {
                file_path: display,
                reason: "cannot infer the book from the file name".to_string(),
            }));
            continue;
        };

        let converted = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", display))
            .and_then(|content| convert(ctx, &book, &content));
        let evicted = ctx.cache.evict_book(&book);
        debug!(file = %file.display(), evicted, "released cached verses");
        let output = match converted {
            Ok(output) => output,
            Err(err) => {
                issues.push(Issue::FileError(FileErrorIssue {
                    file_path: display,
                    error: format!("{err:#}"),
                }));
                continue;
            }
        };

        collect(&mut summary, &mut issues, &display, &output, ctx.options.try_separators);
        let relative = file.strip_prefix(&args.input).unwrap_or(file);
        write_table(&out_dir.join(relative), &output.output, &mut summary)?;
    }

    Ok((summary, issues))
}

fn book_for(args: &ConvertArgs, path: &Path) -> Option<String> {
    match &args.book {
        Some(book) => Some(book.clone()),
        None => infer_book(path).map(|info| info.code.to_string()),
    }
}

fn collect(
    summary: &mut ConvertSummary,
    issues: &mut Vec<Issue>,
    file_path: &str,
    output: &ConversionOutput,
    try_separators: bool,
) {
    summary.file_count += 1;
    summary.counts.pass += output.counts.pass;
    summary.counts.fail += output.counts.fail;
    summary.counts.skipped += output.counts.skipped;

    for failure in &output.failures {
        let issue = QuoteNotFoundIssue::from_row(file_path, failure.clone());
        let issue = if try_separators {
            issue
        } else {
            issue.with_hint(SEPARATOR_HINT)
        };
        issues.push(Issue::QuoteNotFound(issue));
    }
}

fn write_table(path: &Path, content: &str, summary: &mut ConvertSummary) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote table");
    summary.written.push(PathBuf::from(path));
    Ok(())
}
