//! Cache-backed dictionary client

use std::sync::Arc;

use super::cache::LookupCache;
use super::entry::DictionaryEntry;
use super::source::{DefinitionSource, HttpSource, LookupError};

/// Looks words up in the cache first and falls back to the source.
///
/// The cache is injected so the editor can read the same records for
/// synonym extraction.
pub struct DictionaryClient<S = HttpSource> {
    cache: Arc<dyn LookupCache>,
    source: S,
}

impl<S: DefinitionSource> DictionaryClient<S> {
    pub fn new(cache: Arc<dyn LookupCache>, source: S) -> Self {
        Self { cache, source }
    }

    pub fn cache(&self) -> &Arc<dyn LookupCache> {
        &self.cache
    }

    /// Entries for `word`, which must already be lowercase.
    ///
    /// Cached records are returned as stored, with no freshness check. A
    /// fetched result is cached before it is returned, negative answers
    /// included. Failed fetches leave the cache untouched.
    pub async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        if let Some(cached) = self.cache.get(word) {
            log::debug!("cache hit {}", word);
            return Ok(cached);
        }

        log::debug!("cache miss {}", word);
        let entries = self.source.fetch(word).await.inspect_err(|e| {
            log::error!("Lookup failed: {}", e);
        })?;

        self.cache.update(word, entries.clone());
        Ok(entries)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
