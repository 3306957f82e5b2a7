//! Locating quote word groups in the source stream.

use tracing::trace;

use super::error::ResolveError;
use super::token::Token;
use super::tokenizer::{WordGroup, words_match};

/// Tokens matched for one word group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan {
    /// Indices (into the source stream) of the matched word tokens, in order.
    pub indices: Vec<usize>,
    /// Index right after the last matched token; the next scan cursor.
    pub end: usize,
}

impl MatchSpan {
    pub fn start(&self) -> usize {
        self.indices.first().copied().unwrap_or(self.end)
    }
}

/// Match `words` against consecutive word tokens starting at `start`.
///
/// Non-word tokens are stepped over without consuming a word. The first word
/// token that differs from the pending word fails the whole attempt; the
/// caller retries from `start + 1`.
pub fn find_consecutive_tokens(tokens: &[Token], words: &[String], start: usize) -> Option<MatchSpan> {
    let mut index = start;
    let mut word_index = 0;
    let mut indices = Vec::with_capacity(words.len());

    while index < tokens.len() && word_index < words.len() {
        let token = &tokens[index];
        if !token.is_word_like() {
            index += 1;
            continue;
        }
        if !words_match(&token.payload, &words[word_index]) {
            break;
        }
        indices.push(index);
        word_index += 1;
        index += 1;
    }

    if word_index == words.len() && !words.is_empty() {
        Some(MatchSpan { indices, end: index })
    } else {
        None
    }
}

/// Locate every group of a quote, left to right, without overlap.
///
/// Group 0 is taken at `first_occurrence` (a negative value means "first
/// match"); every later group is the first match after the previous group.
pub fn resolve_groups(
    tokens: &[Token],
    groups: &[WordGroup],
    first_occurrence: i64,
) -> Result<Vec<MatchSpan>, ResolveError> {
    let mut spans = Vec::with_capacity(groups.len());
    let mut cursor = 0;

    for (group_index, group) in groups.iter().enumerate() {
        let wanted = if group_index == 0 && first_occurrence > 0 {
            first_occurrence as usize
        } else {
            1
        };

        let mut found = 0;
        let mut index = cursor;
        let mut accepted = None;

        while index < tokens.len() {
            match find_consecutive_tokens(tokens, group, index) {
                Some(span) => {
                    found += 1;
                    if found == wanted {
                        accepted = Some(span);
                        break;
                    }
                    index = span.end;
                }
                None => index += 1,
            }
        }

        let span = accepted.ok_or_else(|| ResolveError::OccurrenceNotFound {
            group: group.join(" "),
            occurrence: wanted as i64,
            position: cursor,
        })?;

        trace!(group = %group.join(" "), start = span.start(), end = span.end, "matched group");
        cursor = span.end;
        spans.push(span);
    }

    Ok(spans)
}
