use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): every quote resolved (skipped rows and warnings allowed)
/// - `Failure` (1): some quote or table could not be resolved
/// - `Error` (2): the command could not run (bad config, unreadable token data...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
