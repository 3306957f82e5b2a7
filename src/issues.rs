//! Issue types for quote resolution results.
//!
//! Each issue is self-contained with everything the reporter needs to show
//! it: where it happened, what failed and how to follow up.

use enum_dispatch::enum_dispatch;

use crate::convert::RowFailure;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    QuoteNotFound,
    FileError,
    SkippedFile,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::QuoteNotFound => write!(f, "quote-not-found"),
            Rule::FileError => write!(f, "file-error"),
            Rule::SkippedFile => write!(f, "skipped-file"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Where an unresolved quote came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOrigin {
    /// A data row of a note table; `line` is 1-based and counts the header.
    Row { file_path: String, line: usize },
    /// A single quote given on the command line, e.g. `TIT 1:1`.
    Verse { reference: String },
}

/// A quote that could not be aligned to the target text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteNotFoundIssue {
    pub origin: QuoteOrigin,
    pub reference: String,
    pub id: String,
    pub quote: String,
    /// Repository the quote was being resolved into.
    pub target: String,
    pub error: String,
    pub hint: Option<String>,
}

impl QuoteNotFoundIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::QuoteNotFound
    }

    /// Issue for a failed table row, located at its line in the input.
    pub fn from_row(file_path: &str, failure: RowFailure) -> Self {
        Self {
            origin: QuoteOrigin::Row {
                file_path: file_path.to_string(),
                line: failure.line,
            },
            reference: failure.reference,
            id: failure.id,
            quote: failure.quote,
            target: failure.target,
            error: failure.message,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// A whole table that could not be processed (unknown book, bad header...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl FileErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::FileError
    }
}

/// A scanned file left alone because its book could not be inferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFileIssue {
    pub file_path: String,
    pub reason: String,
}

impl SkippedFileIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::SkippedFile
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while resolving quotes.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    QuoteNotFound(QuoteNotFoundIssue),
    FileError(FileErrorIssue),
    SkippedFile(SkippedFileIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::QuoteNotFound(_) => QuoteNotFoundIssue::severity(),
            Issue::FileError(_) => FileErrorIssue::severity(),
            Issue::SkippedFile(_) => SkippedFileIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::QuoteNotFound(_) => QuoteNotFoundIssue::rule(),
            Issue::FileError(_) => FileErrorIssue::rule(),
            Issue::SkippedFile(_) => SkippedFileIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A line of a note table.
    Row { path: &'a str, line: usize },
    /// File-level only.
    File { path: &'a str },
    /// A verse reference, for quotes not read from a file.
    Verse { reference: &'a str },
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (quote, error...).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for QuoteNotFoundIssue {
    fn location(&self) -> ReportLocation<'_> {
        match &self.origin {
            QuoteOrigin::Row { file_path, line } => ReportLocation::Row {
                path: file_path,
                line: *line,
            },
            QuoteOrigin::Verse { reference } => ReportLocation::Verse { reference },
        }
    }

    fn message(&self) -> String {
        self.quote.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    fn details(&self) -> Option<String> {
        let id = if self.id.is_empty() {
            String::new()
        } else {
            format!(" {}", self.id)
        };
        Some(format!(
            "{}{} in {}: {}",
            self.reference, id, self.target, self.error
        ))
    }
}

impl Report for FileErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

impl Report for SkippedFileIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.reason.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("name the file like tn_<BOOK>.tsv or pass --book")
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_key(&self) -> (&str, usize) {
        match self.location() {
            ReportLocation::Row { path, line } => (path, line),
            ReportLocation::File { path } => (path, 0),
            ReportLocation::Verse { reference } => (reference, 0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: location, rule, message
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
