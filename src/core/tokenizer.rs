//! Language-aware word tokenizer for quotes and plain verse text.
//!
//! Two policies exist:
//!
//! - **Original language** (Hebrew/Greek): maqaf, paseq, sof pasuq and other
//!   punctuation separate words; a trailing `’` or `'` stays on the word it
//!   follows (Greek elision such as `δι’`).
//! - **Gateway language**: punctuation separates words; an apostrophe is kept
//!   only between two letters (`God’s`).
//!
//! Both policies apply NFC so that combining-mark variants compare equal.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// The literal separator placed between word groups of a quote.
pub const GROUP_SEPARATOR: &str = " & ";

static ELLIPSIS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*…\s*").unwrap());

static GROUP_SPLIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*&\s*").unwrap());

/// One `&`-delimited segment of a quote.
pub type WordGroup = Vec<String>;

/// Split `text` into normalized words, dropping punctuation-only pieces.
pub fn tokenize(text: &str, is_orig_lang: bool) -> Vec<String> {
    let text: String = text.replace("\\n", " ").nfc().collect();
    let chars: Vec<char> = text.chars().collect();

    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_word_char(c) {
            current.push(c);
            continue;
        }
        if is_apostrophe(c) && !current.is_empty() {
            let followed_by_letter = chars.get(i + 1).is_some_and(|next| is_word_char(*next));
            if is_orig_lang || followed_by_letter {
                current.push(c);
                continue;
            }
        }
        if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Replace ellipses and escaped line breaks so only ` & ` separates groups.
pub fn normalize_separators(quote: &str) -> String {
    let quote = quote.replace("\\n", " ");
    ELLIPSIS_REGEX
        .replace_all(&quote, GROUP_SEPARATOR)
        .into_owned()
}

/// Split a quote into word groups, tokenizing each group independently.
///
/// Empty groups (e.g. from a leading `&` or a group made only of
/// punctuation) are dropped.
pub fn split_quote_groups(quote: &str, is_orig_lang: bool) -> Vec<WordGroup> {
    let quote = normalize_separators(quote);
    GROUP_SPLIT_REGEX
        .split(&quote)
        .map(|group| tokenize(group, is_orig_lang))
        .filter(|group| !group.is_empty())
        .collect()
}

/// Case-insensitive comparison of a token payload against a quote word.
pub fn words_match(payload: &str, word: &str) -> bool {
    payload == word || payload.to_lowercase() == word.to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

fn is_apostrophe(c: char) -> bool {
    c == '\u{2019}' || c == '\''
}
