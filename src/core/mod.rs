//! Alignment-based quote resolution.
//!
//! A quote in one Bible (source) is located token by token, its alignment
//! scopes are projected onto a second Bible (target), and the covered target
//! words are read back as the aligned quote.
//!
//! ## Pipeline
//!
//! 1. [`tokenizer`]: quote → word groups separated by `&`
//! 2. [`matcher`]: groups → consecutive source spans
//! 3. [`projector`]: spans → target word groups via shared scopes
//! 4. [`occurrence`]: first target group → occurrence in the target verse
//!
//! [`fallback`] wraps the pipeline with alternative segmentations, and
//! [`context`] ties the token store, the verse cache and configuration
//! together for the CLI.

pub mod aligned_quote;
pub mod books;
pub mod cache;
pub mod context;
pub mod error;
pub mod fallback;
pub mod file_scanner;
pub mod link;
pub mod matcher;
pub mod occurrence;
pub mod parsers;
pub mod projector;
pub mod reference;
pub mod scope;
pub mod token;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aligned_quote::{AlignedQuote, get_aligned_quote};
pub use books::{BookInfo, Testament, book_info, infer_book, original_language_repo};
pub use cache::{CacheKey, VerseCache};
pub use context::ConvertContext;
pub use error::{MatchDirection, ResolveError};
pub use fallback::resolve_with_fallback;
pub use file_scanner::{ScanResult, scan_files};
pub use link::BibleLink;
pub use parsers::tokens::TokenStore;
pub use parsers::tsv::{QuoteColumn, TsvTable, is_not_found, mark_not_found, strip_not_found};
pub use reference::{ChapterVerse, expand_reference};
pub use token::Token;
pub use tokenizer::normalize_separators;
