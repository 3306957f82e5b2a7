//! Token-store loading.
//!
//! The document engine's output is a JSON object keyed by repository, then
//! book code, then `chapter:verse` (or `chapter:v1-v2` for verse spans):
//!
//! ```json
//! { "en_ult": { "TIT": { "1:1": [ { "subType": "wordLike", "payload": "Paul", "scopes": [...] } ] } } }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::core::books::GREEK_NT_REPO;
use crate::core::reference::ChapterVerse;
use crate::core::token::{Token, normalize_payload};

type RawStore = HashMap<String, HashMap<String, HashMap<String, Vec<Token>>>>;

/// Verse streams of one book of one repository.
#[derive(Debug, Default)]
struct BookTokens {
    /// Token blocks as delivered; a verse-span block appears once.
    blocks: Vec<Vec<Token>>,
    /// `chapter:verse` → index into `blocks`.
    verses: HashMap<String, usize>,
}

/// Per-verse token streams for every loaded repository.
#[derive(Debug, Default)]
pub struct TokenStore {
    repos: HashMap<String, HashMap<String, BookTokens>>,
}

impl TokenStore {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read token file: {:?}", path))?;
        Self::from_json(&content).with_context(|| format!("Failed to parse token file: {:?}", path))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawStore = serde_json::from_str(content)?;
        let mut store = TokenStore::default();

        for (repo, books) in raw {
            let merge_elision = repo == GREEK_NT_REPO;
            let repo_entry = store.repos.entry(repo.clone()).or_default();

            for (book, verses) in books {
                let book_entry = repo_entry.entry(book.to_uppercase()).or_default();
                for (key, tokens) in verses {
                    let (chapter, verse_span) = key
                        .split_once(':')
                        .ok_or_else(|| anyhow!("Invalid verse key \"{key}\" in {repo} {book}"))?;
                    let span: Vec<&str> = verse_span.split('-').collect();

                    let tokens = annotate(tokens, chapter, span[0], merge_elision);
                    let index = book_entry.blocks.len();
                    book_entry.blocks.push(tokens);
                    for verse in span {
                        book_entry.verses.insert(format!("{chapter}:{verse}"), index);
                    }
                }
                debug!(repo = %repo, book = %book, verses = book_entry.verses.len(), "loaded tokens");
            }
        }

        Ok(store)
    }

    pub fn has_repo(&self, repo: &str) -> bool {
        self.repos.contains_key(repo)
    }

    pub fn repos(&self) -> impl Iterator<Item = &str> {
        self.repos.keys().map(String::as_str)
    }

    /// Concatenated token stream for the given verses, in order.
    ///
    /// Consecutive verses that come from one verse-span block contribute the
    /// block once.
    pub fn verse_tokens(&self, repo: &str, book: &str, cvs: &[ChapterVerse]) -> Result<Vec<Token>> {
        let books = self
            .repos
            .get(repo)
            .ok_or_else(|| anyhow!("No token data for repository {repo}"))?;
        let book_code = book.to_uppercase();
        let book_tokens = books
            .get(&book_code)
            .ok_or_else(|| anyhow!("No token data for {book_code} in {repo}"))?;

        let mut tokens = Vec::new();
        let mut last_block = None;
        for cv in cvs {
            let index = *book_tokens
                .verses
                .get(&cv.to_string())
                .ok_or_else(|| anyhow!("No tokens for {book_code} {cv} in {repo}"))?;
            if last_block != Some(index) {
                tokens.extend(book_tokens.blocks[index].iter().cloned());
                last_block = Some(index);
            }
        }
        Ok(tokens)
    }
}

fn annotate(mut tokens: Vec<Token>, chapter: &str, verse: &str, merge_elision: bool) -> Vec<Token> {
    for token in &mut tokens {
        token.payload = normalize_payload(&token.payload);
        token.chapter = chapter.to_string();
        token.verse = verse.to_string();
    }
    if merge_elision {
        for i in 0..tokens.len().saturating_sub(1) {
            if tokens[i].is_word_like() && tokens[i + 1].payload == "’" {
                tokens[i].payload.push('’');
                tokens[i + 1].payload.clear();
            }
        }
    }
    tokens
}
