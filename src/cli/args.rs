//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `resolve`: Align a single quote between two Bibles
//! - `add-gl-quotes`: Add gateway-language quote columns to note tables
//! - `convert-gl-quotes`: Replace gateway-language quotes with original-language ones
//! - `init`: Initialize quote-align configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::AddGlQuotes(cmd)) => cmd.args.common.verbose,
            Some(Command::ConvertGlQuotes(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Token data JSON (overrides config file)
    #[arg(long)]
    pub tokens: Option<PathBuf>,

    /// Retry failed quotes with other `&` placements and lower occurrences
    #[arg(long)]
    pub try_separators: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Book code, e.g. TIT
    #[arg(long)]
    pub book: String,

    /// Verse reference, e.g. 1:1, 1:1-3 or 1:1,3
    #[arg(long)]
    pub reference: String,

    /// Quote to resolve; separate discontinuous parts with `&`
    #[arg(long)]
    pub quote: String,

    /// Which occurrence of the quote in the reference (-1 takes the first match without disambiguating)
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub occurrence: i64,

    /// Repository the quote is taken from (default: the original-language Bible)
    #[arg(long)]
    pub source: Option<String>,

    /// Repository to resolve into (default: the first configured link)
    #[arg(long)]
    pub target: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Note table, or a directory of them
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (or directory when --input is a directory); stdout if absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Book code (default: inferred from file names like tn_TIT.tsv)
    #[arg(long)]
    pub book: Option<String>,

    /// Gateway-language Bible as org/repo[/ref] (overrides config file)
    /// Can be specified multiple times: --link unfoldingWord/en_ult --link unfoldingWord/en_ust
    #[arg(long = "link")]
    pub links: Vec<String>,

    /// Re-resolve rows already marked QUOTE_NOT_FOUND
    #[arg(long)]
    pub reprocess: bool,
}

#[derive(Debug, Args)]
pub struct AddGlQuotesCommand {
    #[command(flatten)]
    pub args: ConvertArgs,
}

#[derive(Debug, Args)]
pub struct ConvertGlQuotesCommand {
    #[command(flatten)]
    pub args: ConvertArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve one quote from a source Bible into a target Bible
    Resolve(ResolveCommand),
    /// Add GLQuote/GLOccurrence columns aligned to gateway-language Bibles
    AddGlQuotes(AddGlQuotesCommand),
    /// Replace gateway-language quotes with the aligned original-language quotes
    ConvertGlQuotes(ConvertGlQuotesCommand),
    /// Initialize a new .quotealignrc.json configuration file
    Init,
}
