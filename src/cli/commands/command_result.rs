use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::convert::ConversionCounts;
use crate::core::AlignedQuote;
use crate::issues::Issue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Resolve,
    AddGlQuotes,
    ConvertGlQuotes,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Resolve(ResolveSummary),
    Convert(ConvertSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ResolveSummary {
    /// `None` when the quote could not be resolved.
    pub aligned: Option<AlignedQuote>,
    pub json: bool,
}

#[derive(Debug, Default)]
pub struct ConvertSummary {
    /// Totals over every processed table.
    pub counts: ConversionCounts,
    pub file_count: usize,
    /// Files written with `--output`.
    pub written: Vec<PathBuf>,
    /// Converted table for stdout when no `--output` was given.
    pub stdout: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running quote-align commands
pub struct CommandResult {
    pub kind: CommandKind,
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// Unresolved quotes and unprocessable files, sorted.
    pub issues: Vec<Issue>,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_errors && self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
