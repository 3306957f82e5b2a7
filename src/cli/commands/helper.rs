use super::{CommandKind, CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

/// Hint attached to unresolved quotes when the fallback search was off.
pub const SEPARATOR_HINT: &str = "retry with --try-separators to search other `&` placements";

pub fn finish(
    kind: CommandKind,
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        kind,
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
    }
}
