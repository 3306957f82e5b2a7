//! Occurrence bookkeeping.
//!
//! An occurrence is the 1-based ordinal of a word within its own
//! `chapter:verse`. It is computed in one forward pass and returned as a
//! parallel array, so the token slices stay immutable and can be shared
//! between concurrent resolutions.

use std::collections::HashMap;

use super::token::Token;
use super::tokenizer::tokenize;

/// Occurrence number of every token of a stream, by index.
///
/// Non-word tokens have occurrence `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrences(Vec<u32>);

impl Occurrences {
    /// Count per `(chapter, verse, payload)` from the start of the stream.
    ///
    /// The counts at index `i` equal what a scan starting anywhere at or before
    /// `i` would have accumulated, so callers never need to re-walk a prefix.
    pub fn compute(tokens: &[Token]) -> Self {
        let mut counts: HashMap<(&str, &str, &str), u32> = HashMap::new();
        let values = tokens
            .iter()
            .map(|token| {
                if !token.is_word_like() {
                    return 0;
                }
                let count = counts
                    .entry((&token.chapter, &token.verse, &token.payload))
                    .or_insert(0);
                *count += 1;
                *count
            })
            .collect();
        Self(values)
    }

    pub fn get(&self, index: usize) -> u32 {
        self.0.get(index).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Re-derive the occurrence of `phrase` as plain text in the target stream.
///
/// `anchor` is the token-level occurrence of the phrase's first word. The
/// target's word payloads are joined into a sentence; each position where the
/// whole phrase matches is numbered, and the number attached to the anchor's
/// starter-word occurrence is returned. Falls back to `anchor` when the
/// phrase cannot be found as plain text.
pub fn reconcile_occurrence(
    target: &[Token],
    phrase: &str,
    anchor: u32,
    is_orig_lang_target: bool,
) -> u32 {
    let sentence = target
        .iter()
        .filter(|token| token.is_word_like())
        .map(|token| token.payload.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let phrase_words = tokenize(phrase, is_orig_lang_target);
    let Some(first_word) = phrase_words.first() else {
        return anchor;
    };
    let sentence_words = tokenize(&sentence, is_orig_lang_target);

    let mut by_starter: HashMap<u32, u32> = HashMap::new();
    let mut starter_occurrence = 0;
    let mut phrase_occurrence = 0;

    for (i, word) in sentence_words.iter().enumerate() {
        if word == first_word {
            starter_occurrence += 1;
        }
        if sentence_words[i..].starts_with(&phrase_words) {
            phrase_occurrence += 1;
            by_starter.insert(starter_occurrence, phrase_occurrence);
        }
    }

    by_starter.get(&anchor).copied().unwrap_or(anchor)
}
