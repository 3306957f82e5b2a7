//! Single-attempt quote resolution: match, project, reconcile.

use serde::Serialize;
use tracing::debug;

use super::error::{MatchDirection, ResolveError};
use super::matcher::resolve_groups;
use super::occurrence::reconcile_occurrence;
use super::projector::project_to_target;
use super::token::Token;
use super::tokenizer::{GROUP_SEPARATOR, split_quote_groups};

/// A quote expressed in the target text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedQuote {
    pub quote: String,
    pub occurrence: i64,
}

/// Resolve `quote` (at `occurrence`) from `source` into `target`.
///
/// `occurrence` is 1-based; `-1` takes the first match. Occurrence `0` and
/// quotes without any words are rejected up front.
pub fn get_aligned_quote(
    source: &[Token],
    target: &[Token],
    quote: &str,
    occurrence: i64,
    source_is_orig_lang: bool,
) -> Result<AlignedQuote, ResolveError> {
    if occurrence == 0 {
        return Err(ResolveError::EmptySourceQuote);
    }
    let groups = split_quote_groups(quote, source_is_orig_lang);
    if groups.is_empty() {
        return Err(ResolveError::EmptySourceQuote);
    }

    let spans = resolve_groups(source, &groups, occurrence)?;
    let direction = MatchDirection::from_source(source_is_orig_lang);
    let projection = project_to_target(source, &spans, target, direction)?;

    let first_group = &projection.groups[0];
    let reconciled = reconcile_occurrence(
        target,
        first_group,
        projection.first_anchor_occurrence,
        !source_is_orig_lang,
    );
    debug!(
        %direction,
        quote,
        occurrence,
        resolved = %projection.groups.join(GROUP_SEPARATOR),
        resolved_occurrence = reconciled,
        "resolved quote"
    );

    Ok(AlignedQuote {
        quote: projection.groups.join(GROUP_SEPARATOR),
        occurrence: i64::from(reconciled),
    })
}
