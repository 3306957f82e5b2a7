//! Report formatting and printing utilities.
//!
//! Issues are shown cargo-style on stderr; converted tables and resolved
//! quotes go to stdout so they can be piped.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ConvertSummary, InitSummary, ResolveSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::pluralize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stderr.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stderr().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print the totals of a table conversion.
pub fn print_counts_to<W: Write>(summary: &ConvertSummary, clean: bool, writer: &mut W) {
    let counts = &summary.counts;
    let mut parts = vec![format!(
        "{} resolved",
        pluralize(counts.pass, "quote")
    )];
    if counts.fail > 0 {
        parts.push(format!("{} not found", counts.fail));
    }
    if counts.skipped > 0 {
        parts.push(format!("{} skipped", pluralize(counts.skipped, "row")));
    }
    let line = format!(
        "{}: {}",
        pluralize(summary.file_count, "file"),
        parts.join(", ")
    );

    if clean {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), line.green());
    } else {
        let _ = writeln!(writer, "{}", line);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let location = match issue.location() {
        ReportLocation::Row { path, line } => format!("{}:{}", path, line),
        ReportLocation::File { path } => path.to_string(),
        ReportLocation::Verse { reference } => reference.to_string(),
    };
    let _ = writeln!(writer, "  {} {}", "-->".blue(), location);

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "  {} {} {}",
            "=".blue(),
            "hint:".bold().cyan(),
            hint
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            pluralize(total_problems, "problem"),
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Resolve(summary) => print_resolve(summary, &result.issues),
        CommandSummary::Convert(summary) => print_convert(summary, &result.issues, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_resolve(summary: &ResolveSummary, issues: &[Issue]) {
    if let Some(aligned) = &summary.aligned {
        if summary.json {
            match serde_json::to_string(aligned) {
                Ok(json) => println!("{}", json),
                Err(err) => eprintln!("Error: {}", err),
            }
        } else {
            println!("{}\t{}", aligned.quote, aligned.occurrence);
        }
    }
    report(issues);
}

fn print_convert(summary: &ConvertSummary, issues: &[Issue], verbose: bool) {
    if let Some(table) = &summary.stdout {
        print!("{}", table);
    }

    let mut stderr = io::stderr().lock();
    report_to(issues, &mut stderr);
    if verbose {
        for path in &summary.written {
            let _ = writeln!(stderr, "Wrote {}", path.display());
        }
    }
    print_counts_to(summary, issues.is_empty(), &mut stderr);
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
