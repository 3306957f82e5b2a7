//! Token model shared by the source and target streams.
//!
//! Tokens arrive from the external document engine (one list per verse) and are
//! treated as read-only by every stage of the resolver. Occurrence numbers are
//! never stored on the token; see [`Occurrences`](super::occurrence::Occurrences).

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Sub-type tag attached by the document engine.
///
/// Only [`SubType::WordLike`] tokens take part in matching; everything else is
/// treated as inter-word material (punctuation, spacing, line breaks).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubType {
    WordLike,
    Punctuation,
    LineSpace,
    Eol,
    Other(String),
}

impl From<String> for SubType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "wordLike" => SubType::WordLike,
            "punctuation" => SubType::Punctuation,
            "lineSpace" => SubType::LineSpace,
            "eol" => SubType::Eol,
            _ => SubType::Other(value),
        }
    }
}

impl From<SubType> for String {
    fn from(value: SubType) -> Self {
        match value {
            SubType::WordLike => "wordLike".to_string(),
            SubType::Punctuation => "punctuation".to_string(),
            SubType::LineSpace => "lineSpace".to_string(),
            SubType::Eol => "eol".to_string(),
            SubType::Other(other) => other,
        }
    }
}

/// One lexical unit of a verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub sub_type: SubType,
    pub payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u64>,
    /// Alignment scopes, e.g. `attribute/milestone/zaln/x-align/0/Παῦλος:1:1`.
    #[serde(default)]
    pub scopes: Vec<String>,
    #[serde(default)]
    pub chapter: String,
    #[serde(default)]
    pub verse: String,
}

impl Token {
    /// Build a token with a normalized payload and no scopes.
    pub fn new(sub_type: SubType, payload: &str, chapter: &str, verse: &str) -> Self {
        Self {
            sub_type,
            payload: normalize_payload(payload),
            position: None,
            scopes: Vec::new(),
            chapter: chapter.to_string(),
            verse: verse.to_string(),
        }
    }

    pub fn word(payload: &str, chapter: &str, verse: &str) -> Self {
        Self::new(SubType::WordLike, payload, chapter, verse)
    }

    pub fn punctuation(payload: &str, chapter: &str, verse: &str) -> Self {
        Self::new(SubType::Punctuation, payload, chapter, verse)
    }

    pub fn space(chapter: &str, verse: &str) -> Self {
        Self {
            sub_type: SubType::LineSpace,
            payload: " ".to_string(),
            position: None,
            scopes: Vec::new(),
            chapter: chapter.to_string(),
            verse: verse.to_string(),
        }
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    pub fn is_word_like(&self) -> bool {
        self.sub_type == SubType::WordLike
    }

    /// `chapter:verse` label of the verse this token belongs to.
    pub fn cv(&self) -> String {
        format!("{}:{}", self.chapter, self.verse)
    }
}

/// Collapse whitespace runs to one space and apply canonical composition (NFC).
///
/// Payloads that are pure whitespace collapse to a single space rather than
/// disappearing, so spacing tokens keep separating words.
pub fn normalize_payload(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut in_space = false;
    for c in payload.nfc() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Collapse every whitespace run (including newlines) to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
