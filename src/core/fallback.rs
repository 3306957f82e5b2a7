//! Retrying resolution with alternative separator placements.
//!
//! Hand-written quotes often drop or misplace the `&` between discontinuous
//! word groups. When the quote as written cannot be resolved, every other
//! way of splitting its words into ordered groups is tried, for the requested
//! occurrence and then for each lower one.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use super::aligned_quote::{AlignedQuote, get_aligned_quote};
use super::error::ResolveError;
use super::token::Token;
use super::tokenizer::{GROUP_SEPARATOR, normalize_separators};

static WORD_SPLIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s&]+").unwrap());

enum Stage {
    Original,
    Unseparated,
    /// Gap indices (gap `i` sits between word `i` and word `i + 1`), strictly increasing.
    Separated(Vec<usize>),
    Done,
}

/// Candidate spellings of a quote, in the order they are tried.
///
/// 1. the quote as written;
/// 2. all words in one group;
/// 3. one separator in each possible gap;
/// 4. for `k = 2 ..= n - 1`, every increasing selection of `k` gaps.
///
/// Candidates identical to the quote as written are not repeated.
pub struct QuoteCombinations {
    original: String,
    words: Vec<String>,
    stage: Stage,
}

impl QuoteCombinations {
    pub fn new(quote: &str) -> Self {
        let normalized: String = normalize_separators(quote).nfkc().collect();
        let words = WORD_SPLIT_REGEX
            .split(&normalized)
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect();
        Self {
            original: quote.to_string(),
            words,
            stage: Stage::Original,
        }
    }

    fn gap_count(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    fn render(&self, gaps: &[usize]) -> String {
        let mut out = String::new();
        let mut gaps = gaps.iter().peekable();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                if gaps.next_if(|&&gap| gap == i - 1).is_some() {
                    out.push_str(GROUP_SEPARATOR);
                } else {
                    out.push(' ');
                }
            }
            out.push_str(word);
        }
        out
    }

    /// Next increasing selection after `gaps`, moving to `k + 1` gaps once
    /// every `k`-selection has been produced.
    fn advance(&self, mut gaps: Vec<usize>) -> Stage {
        let total = self.gap_count();
        let k = gaps.len();

        if let Some(slot) = (0..k).rev().find(|&slot| gaps[slot] < total - k + slot) {
            gaps[slot] += 1;
            for next in slot + 1..k {
                gaps[next] = gaps[next - 1] + 1;
            }
            return Stage::Separated(gaps);
        }

        if k < total {
            Stage::Separated((0..=k).collect())
        } else {
            Stage::Done
        }
    }
}

impl Iterator for QuoteCombinations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let candidate = match std::mem::replace(&mut self.stage, Stage::Done) {
                Stage::Original => {
                    if self.words.len() > 1 {
                        self.stage = Stage::Unseparated;
                    }
                    return Some(self.original.clone());
                }
                Stage::Unseparated => {
                    self.stage = Stage::Separated(vec![0]);
                    self.render(&[])
                }
                Stage::Separated(gaps) => {
                    let candidate = self.render(&gaps);
                    self.stage = self.advance(gaps);
                    candidate
                }
                Stage::Done => return None,
            };
            if candidate != self.original {
                return Some(candidate);
            }
        }
    }
}

/// Resolve `quote`, falling back to other occurrences and segmentations.
///
/// The requested occurrence is tried first, then each lower one down to 1
/// (a negative occurrence is tried as-is only). Lower occurrences start at the
/// number of words in `source`, since no phrase can occur more often than
/// that. The first successful attempt wins; if none succeeds the first error
/// encountered is returned.
pub fn resolve_with_fallback(
    source: &[Token],
    target: &[Token],
    quote: &str,
    occurrence: i64,
    source_is_orig_lang: bool,
) -> Result<AlignedQuote, ResolveError> {
    let word_count = source.iter().filter(|token| token.is_word_like()).count();
    let highest_lower = if occurrence > 1 {
        (occurrence - 1).min(i64::try_from(word_count).unwrap_or(i64::MAX))
    } else {
        0
    };
    let occurrences = std::iter::once(occurrence).chain((1..=highest_lower).rev());

    let mut first_error = None;
    for candidate_occurrence in occurrences {
        for candidate in QuoteCombinations::new(quote) {
            match get_aligned_quote(
                source,
                target,
                &candidate,
                candidate_occurrence,
                source_is_orig_lang,
            ) {
                Ok(resolved) => {
                    if candidate != quote || candidate_occurrence != occurrence {
                        debug!(
                            quote,
                            candidate = %candidate,
                            occurrence = candidate_occurrence,
                            "resolved with fallback"
                        );
                    }
                    return Ok(resolved);
                }
                Err(err) => {
                    debug!(candidate = %candidate, occurrence = candidate_occurrence, error = %err, "attempt failed");
                    first_error.get_or_insert(err);
                }
            }
        }
    }

    Err(first_error.unwrap_or(ResolveError::EmptySourceQuote))
}
