//! File parsers for token data and translation-note tables.
//!
//! - `tokens`: per-verse token streams produced by the document engine
//! - `tsv`: tab-separated note tables with quote columns

pub mod tokens;
pub mod tsv;
