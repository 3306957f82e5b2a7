use anyhow::{Result, bail};
use tracing::info;

use super::super::args::ConvertGlQuotesCommand;
use super::{CommandKind, CommandResult, CommandSummary, helper::finish, input::convert_input};
use crate::{convert::convert_gl_quotes_to_ol_quotes, core::ConvertContext};

pub fn convert_gl_quotes(cmd: ConvertGlQuotesCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    if args.links.len() > 1 {
        bail!("convert-gl-quotes takes a single --link");
    }

    let mut ctx = ConvertContext::new(&args.common)?;
    if args.reprocess {
        ctx.options.reprocess_not_found = true;
    }
    let links = ctx.links(&args.links)?;
    let Some(link) = links.first() else {
        bail!("No gateway-language Bible configured; pass --link org/repo");
    };
    if links.len() > 1 {
        info!("Using {} of {} configured links", link, links.len());
    }

    let (summary, issues) = convert_input(args, &mut ctx, |ctx, book, content| {
        convert_gl_quotes_to_ol_quotes(&ctx.store, &mut ctx.cache, link, book, content, ctx.options)
    })?;

    Ok(finish(
        CommandKind::ConvertGlQuotes,
        CommandSummary::Convert(summary),
        issues,
        true,
    ))
}
