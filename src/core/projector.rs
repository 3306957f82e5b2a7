//! Projection of matched source tokens onto the target stream.
//!
//! Membership of a target token is decided by cross-referencing alignment
//! scopes. Two situations occur in practice:
//!
//! - The matched source tokens carry scopes (gateway text aligned to the
//!   original): a target word belongs to the projection when its own
//!   `(payload, occurrence, chapter, verse)` is one of those scope keys.
//! - The source tokens carry no scopes (original-language text): a target
//!   word belongs when one of *its* scopes points at a matched source token.

use std::collections::HashSet;

use super::error::{MatchDirection, ResolveError};
use super::matcher::MatchSpan;
use super::occurrence::Occurrences;
use super::scope::AlignmentScopeKey;
use super::token::{Token, collapse_whitespace};

/// Target groups reconstructed from the alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub groups: Vec<String>,
    /// Occurrence of the word token that opened the first group.
    pub first_anchor_occurrence: u32,
}

enum Membership {
    /// Scope keys carried by the matched source tokens.
    SourceScopes(HashSet<AlignmentScopeKey>),
    /// Keys of the matched source tokens themselves.
    SourceTokens(HashSet<AlignmentScopeKey>),
}

impl Membership {
    fn build(source: &[Token], matches: &[MatchSpan]) -> Self {
        let scope_keys: HashSet<AlignmentScopeKey> = matched_tokens(source, matches)
            .flat_map(|(_, token)| {
                token
                    .scopes
                    .iter()
                    .filter_map(move |scope| {
                        AlignmentScopeKey::parse(scope, &token.chapter, &token.verse)
                    })
            })
            .collect();
        if !scope_keys.is_empty() {
            return Membership::SourceScopes(scope_keys);
        }

        let occurrences = Occurrences::compute(source);
        let token_keys = matched_tokens(source, matches)
            .map(|(index, token)| {
                AlignmentScopeKey::new(
                    &token.payload,
                    occurrences.get(index),
                    &token.chapter,
                    &token.verse,
                )
            })
            .collect();
        Membership::SourceTokens(token_keys)
    }

    fn contains(&self, token: &Token, occurrence: u32) -> bool {
        match self {
            Membership::SourceScopes(keys) => keys.contains(&AlignmentScopeKey::new(
                &token.payload,
                occurrence,
                &token.chapter,
                &token.verse,
            )),
            Membership::SourceTokens(keys) => token.scopes.iter().any(|scope| {
                AlignmentScopeKey::parse(scope, &token.chapter, &token.verse)
                    .is_some_and(|key| keys.contains(&key))
            }),
        }
    }
}

fn matched_tokens<'a>(
    source: &'a [Token],
    matches: &'a [MatchSpan],
) -> impl Iterator<Item = (usize, &'a Token)> + 'a {
    matches
        .iter()
        .flat_map(|span| span.indices.iter().copied())
        .filter_map(move |index| source.get(index).map(|token| (index, token)))
}

/// Walk `target` and collect the contiguous runs aligned to `matches`.
///
/// Non-word material between two aligned words is kept with whitespace
/// collapsed; material after the last aligned word of a run is dropped.
pub fn project_to_target(
    source: &[Token],
    matches: &[MatchSpan],
    target: &[Token],
    direction: MatchDirection,
) -> Result<Projection, ResolveError> {
    let membership = Membership::build(source, matches);
    let occurrences = Occurrences::compute(target);

    let mut groups = Vec::new();
    let mut first_anchor_occurrence = None;
    let mut current: Option<String> = None;
    let mut pending = String::new();

    for (index, token) in target.iter().enumerate() {
        if !token.is_word_like() {
            if current.is_some() {
                pending.push_str(&token.payload);
            }
            continue;
        }

        let occurrence = occurrences.get(index);
        if membership.contains(token, occurrence) {
            match current.as_mut() {
                Some(run) => {
                    run.push_str(&collapse_whitespace(&pending));
                    run.push_str(&token.payload);
                }
                None => {
                    first_anchor_occurrence.get_or_insert(occurrence);
                    current = Some(token.payload.clone());
                }
            }
        } else if let Some(run) = current.take() {
            groups.push(run);
        }
        pending.clear();
    }
    if let Some(run) = current {
        groups.push(run);
    }

    match first_anchor_occurrence {
        Some(first_anchor_occurrence) if !groups.is_empty() => Ok(Projection {
            groups,
            first_anchor_occurrence,
        }),
        _ => Err(ResolveError::NoTargetGroupsFound { direction }),
    }
}
