//! quote-align - resolve translation-note quotes through word alignments
//!
//! Translation notes quote the original-language Bible (Hebrew, Greek) and
//! a gateway-language Bible (English, Spanish...). quote-align finds a quote
//! in one text and reads the aligned words back out of the other, one verse
//! or one note table at a time.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `convert`: Batch conversion of note tables in both directions
//! - `core`: Tokens, alignment scopes and the resolution pipeline
//! - `issues`: Issue type definitions and reporting
//! - `logging`: tracing subscriber setup
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod convert;
pub mod core;
pub mod issues;
pub mod logging;
pub mod utils;
