use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, add_gl_quotes::add_gl_quotes, convert_gl_quotes::convert_gl_quotes,
        init::init, resolve::resolve,
    },
};

/// Dispatch to the command handler.
///
/// `Err` means the command could not run at all (bad config, unreadable
/// token data...); row-level failures come back as issues.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::AddGlQuotes(cmd)) => add_gl_quotes(cmd),
        Some(Command::ConvertGlQuotes(cmd)) => convert_gl_quotes(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
