//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

static HEBREW_OR_GREEK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{0590}-\u{05FF}\u{FB1D}-\u{FB4F}\u{0370}-\u{03FF}\u{1F00}-\u{1FFF}]").unwrap()
});

/// Checks if the text contains at least one Hebrew or Greek character.
///
/// Used to tell original-language quotes apart from gateway-language ones.
///
/// # Examples
///
/// ```
/// use quote_align::utils::contains_hebrew_or_greek;
///
/// assert!(contains_hebrew_or_greek("סֶֽלָה"));
/// assert!(contains_hebrew_or_greek("Παῦλος"));
/// assert!(!contains_hebrew_or_greek("Paul, a servant"));
/// ```
pub fn contains_hebrew_or_greek(text: &str) -> bool {
    HEBREW_OR_GREEK_REGEX.is_match(text)
}

/// `"1 file"` / `"3 files"`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
