//! Alignment-scope parsing.
//!
//! A scope string links a token to one word of the other language:
//!
//! ```text
//! attribute/milestone/zaln/x-align/<n>/<alignedWord>:<occurrence>:<occurrenceCount>[:chapter:verse]
//! ```

use unicode_normalization::UnicodeNormalization;

/// Cross-reference key between the two languages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlignmentScopeKey {
    pub payload: String,
    pub occurrence: u32,
    pub chapter: String,
    pub verse: String,
}

impl AlignmentScopeKey {
    pub fn new(payload: &str, occurrence: u32, chapter: &str, verse: &str) -> Self {
        Self {
            payload: payload.to_string(),
            occurrence,
            chapter: chapter.to_string(),
            verse: verse.to_string(),
        }
    }

    /// Parse a scope string carried by a token at `chapter:verse`.
    ///
    /// The scope's own `:chapter:verse` suffix wins over the carrying token's
    /// coordinates when present. Returns `None` for anything that is not an
    /// alignment reference.
    pub fn parse(scope: &str, chapter: &str, verse: &str) -> Option<Self> {
        let body = scope.rsplit('/').next()?;
        let parts: Vec<&str> = body.split(':').collect();

        let (word, occurrence, cv) = match parts.as_slice() {
            [word, occurrence, _count] => (*word, *occurrence, None),
            [word, occurrence, _count, c, v] => (*word, *occurrence, Some((*c, *v))),
            _ => return None,
        };
        if word.is_empty() {
            return None;
        }
        let occurrence = occurrence.parse::<u32>().ok()?;
        let (chapter, verse) = cv.unwrap_or((chapter, verse));

        Some(Self {
            payload: word.nfc().collect(),
            occurrence,
            chapter: chapter.to_string(),
            verse: verse.to_string(),
        })
    }
}

/// Render a scope string in the engine's format (used by fixtures and tools).
pub fn alignment_scope(word: &str, occurrence: u32, occurrences: u32) -> String {
    format!("attribute/milestone/zaln/x-align/0/{word}:{occurrence}:{occurrences}")
}
