//! Caller-owned verse-stream cache.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use super::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub org: String,
    pub repo: String,
    /// `BOOK reference`, e.g. `TIT 1:1-3`.
    pub reference: String,
}

impl CacheKey {
    pub fn new(org: &str, repo: &str, book: &str, reference: &str) -> Self {
        Self {
            org: org.to_string(),
            repo: repo.to_string(),
            reference: format!("{} {}", book.to_uppercase(), reference.trim()),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.org, self.repo, self.reference)
    }
}

/// Token streams keyed by (organization, repository, reference).
///
/// Values are shared slices, so handing them to parallel row resolution does
/// not copy tokens.
#[derive(Debug, Default)]
pub struct VerseCache {
    entries: HashMap<CacheKey, Arc<[Token]>>,
}

impl VerseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<[Token]>> {
        self.entries.get(key).cloned()
    }

    /// Cached stream for `key`, running `load` on a miss.
    ///
    /// A failed load is not cached.
    pub fn get_or_load<F>(&mut self, key: &CacheKey, load: F) -> Result<Arc<[Token]>>
    where
        F: FnOnce() -> Result<Vec<Token>>,
    {
        if let Some(tokens) = self.entries.get(key) {
            return Ok(Arc::clone(tokens));
        }
        let tokens: Arc<[Token]> = load()?.into();
        self.entries.insert(key.clone(), Arc::clone(&tokens));
        Ok(tokens)
    }

    pub fn insert(&mut self, key: CacheKey, tokens: Vec<Token>) -> Arc<[Token]> {
        let tokens: Arc<[Token]> = tokens.into();
        self.entries.insert(key, Arc::clone(&tokens));
        tokens
    }

    pub fn evict(&mut self, key: &CacheKey) -> Option<Arc<[Token]>> {
        self.entries.remove(key)
    }

    /// Drop every stream of `book`, returning how many were removed.
    pub fn evict_book(&mut self, book: &str) -> usize {
        let prefix = format!("{} ", book.to_uppercase());
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.reference.starts_with(&prefix));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
