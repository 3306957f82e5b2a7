//! Batch conversion of translation-note tables.
//!
//! Both directions share the same shape:
//!
//! 1. Validate the book and the token data up front (batch-level errors).
//! 2. Walk the rows sequentially, skipping what needs no work and fetching
//!    verse streams through the caller's [`VerseCache`].
//! 3. Resolve the prepared rows in parallel against the shared streams.
//! 4. Write results back in row order; a failed row gets the
//!    `QUOTE_NOT_FOUND:` sentinel and an error line, never an abort.

mod add_gl_quotes;
mod gl_to_ol;

use std::sync::Arc;

use anyhow::{Result, bail};

use crate::core::{
    AlignedQuote, BookInfo, CacheKey, ResolveError, Token, TokenStore, VerseCache, book_info,
    expand_reference, get_aligned_quote, resolve_with_fallback,
};

pub use add_gl_quotes::add_gl_quote_cols;
pub use gl_to_ol::convert_gl_quotes_to_ol_quotes;

/// Organization of the original-language Bibles.
pub const ORIGINAL_LANGUAGE_ORG: &str = "unfoldingWord";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Retry failed quotes with other separator placements and lower occurrences.
    pub try_separators: bool,
    /// Re-resolve rows already marked `QUOTE_NOT_FOUND:`.
    pub reprocess_not_found: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionCounts {
    pub pass: usize,
    pub fail: usize,
    pub skipped: usize,
}

/// One row (and target text) that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// 1-based line of the row in the input table.
    pub line: usize,
    pub reference: String,
    pub id: String,
    pub quote: String,
    /// Repository the quote was being resolved into.
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConversionOutput {
    /// The rewritten TSV.
    pub output: String,
    /// `Error: <BOOK> <reference> <ID> <message>` lines.
    pub errors: Vec<String>,
    pub failures: Vec<RowFailure>,
    pub counts: ConversionCounts,
}

impl ConversionOutput {
    fn record_failure(&mut self, book: &str, failure: RowFailure) {
        self.errors.push(format!(
            "Error: {} {} {} {}",
            book, failure.reference, failure.id, failure.message
        ));
        self.counts.fail += 1;
        self.failures.push(failure);
    }
}

pub(crate) fn require_book(book: &str) -> Result<&'static BookInfo> {
    match book_info(book) {
        Some(info) => Ok(info),
        None => bail!("Book {} not a valid Bible book", book),
    }
}

pub(crate) fn require_repo(store: &TokenStore, repo: &str) -> Result<()> {
    if !store.has_repo(repo) {
        bail!("No token data loaded for repository {}", repo);
    }
    Ok(())
}

/// Verse stream for `reference`, loaded once per (org, repo, reference).
pub(crate) fn load_verses(
    store: &TokenStore,
    cache: &mut VerseCache,
    org: &str,
    repo: &str,
    book: &str,
    reference: &str,
) -> Result<Arc<[Token]>> {
    let key = CacheKey::new(org, repo, book, reference);
    cache.get_or_load(&key, || {
        let cvs = expand_reference(reference)?;
        store.verse_tokens(repo, book, &cvs)
    })
}

/// Run one resolution with or without the fallback search.
pub(crate) fn resolve_quote(
    options: ConversionOptions,
    source: &[Token],
    target: &[Token],
    quote: &str,
    occurrence: i64,
    source_is_orig_lang: bool,
) -> Result<AlignedQuote, ResolveError> {
    if options.try_separators {
        resolve_with_fallback(source, target, quote, occurrence, source_is_orig_lang)
    } else {
        get_aligned_quote(source, target, quote, occurrence, source_is_orig_lang)
    }
}

pub(crate) fn parse_occurrence(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid occurrence \"{}\"", value.trim()))
}
