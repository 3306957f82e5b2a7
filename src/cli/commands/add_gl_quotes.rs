use anyhow::Result;

use super::super::args::AddGlQuotesCommand;
use super::{CommandKind, CommandResult, CommandSummary, helper::finish, input::convert_input};
use crate::{convert::add_gl_quote_cols, core::ConvertContext};

pub fn add_gl_quotes(cmd: AddGlQuotesCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let mut ctx = ConvertContext::new(&args.common)?;
    if args.reprocess {
        ctx.options.reprocess_not_found = true;
    }
    let links = ctx.links(&args.links)?;

    let (summary, issues) = convert_input(args, &mut ctx, |ctx, book, content| {
        add_gl_quote_cols(&ctx.store, &mut ctx.cache, &links, book, content, ctx.options)
    })?;

    Ok(finish(
        CommandKind::AddGlQuotes,
        CommandSummary::Convert(summary),
        issues,
        true,
    ))
}
