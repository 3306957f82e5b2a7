use anyhow::{Context, Result};
use tracing::info;

use super::super::args::ResolveCommand;
use super::{
    CommandKind, CommandResult, CommandSummary, ResolveSummary,
    helper::{SEPARATOR_HINT, finish},
};
use crate::{
    convert::{require_book, require_repo, resolve_quote},
    core::{
        ConvertContext, books::is_original_language_repo, expand_reference, normalize_separators,
        original_language_repo,
    },
    issues::{Issue, QuoteNotFoundIssue, QuoteOrigin},
};

pub fn resolve(cmd: ResolveCommand) -> Result<CommandResult> {
    let ctx = ConvertContext::new(&cmd.common)?;
    let book = require_book(&cmd.book)?;

    let source = cmd
        .source
        .clone()
        .unwrap_or_else(|| original_language_repo(book.testament).to_string());
    let target = match &cmd.target {
        Some(target) => target.clone(),
        None => ctx
            .links(&[])?
            .into_iter()
            .next()
            .map(|link| link.repo)
            .context("No target repository; pass --target or configure glLinks")?,
    };
    require_repo(&ctx.store, &source)?;
    require_repo(&ctx.store, &target)?;

    let cvs = expand_reference(&cmd.reference)?;
    let source_tokens = ctx.store.verse_tokens(&source, book.code, &cvs)?;
    let target_tokens = ctx.store.verse_tokens(&target, book.code, &cvs)?;
    let quote = normalize_separators(&cmd.quote);

    let outcome = resolve_quote(
        ctx.options,
        &source_tokens,
        &target_tokens,
        &quote,
        cmd.occurrence,
        is_original_language_repo(&source),
    );

    let (aligned, issues) = match outcome {
        Ok(aligned) => {
            info!(%source, %target, quote = %aligned.quote, occurrence = aligned.occurrence, "resolved");
            (Some(aligned), Vec::new())
        }
        Err(err) => {
            let issue = QuoteNotFoundIssue {
                origin: QuoteOrigin::Verse {
                    reference: format!("{} {}", book.code, cmd.reference),
                },
                reference: cmd.reference.clone(),
                id: String::new(),
                quote,
                target,
                error: err.to_string(),
                hint: (!ctx.options.try_separators).then(|| SEPARATOR_HINT.to_string()),
            };
            (None, vec![Issue::QuoteNotFound(issue)])
        }
    };

    Ok(finish(
        CommandKind::Resolve,
        CommandSummary::Resolve(ResolveSummary {
            aligned,
            json: cmd.json,
        }),
        issues,
        true,
    ))
}
