//! Shared test utilities for lexi
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::dictionary::{
        Definition, DefinitionSource, DictionaryClient, DictionaryEntry, LookupCache, LookupError,
        Meaning, MemoryCache,
    };

    /// Helper to run async tests with a tokio runtime
    pub fn run_async<F: std::future::Future>(f: F) -> F::Output {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");
        rt.block_on(f)
    }

    /// Definition source that answers from a fixed table and counts fetches.
    /// Words missing from the table get the "No Definitions Found" entry.
    #[derive(Default)]
    pub struct FakeSource {
        responses: HashMap<String, Result<Vec<DictionaryEntry>, LookupError>>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, word: &str, entries: Vec<DictionaryEntry>) -> Self {
            self.responses.insert(word.to_string(), Ok(entries));
            self
        }

        pub fn failing(mut self, word: &str, error: LookupError) -> Self {
            self.responses.insert(word.to_string(), Err(error));
            self
        }

        /// Shared counter that stays readable after the source is moved
        pub fn call_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.calls)
        }
    }

    impl DefinitionSource for FakeSource {
        async fn fetch(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .get(word)
                .cloned()
                .unwrap_or_else(|| Ok(vec![DictionaryEntry::no_definitions()]))
        }
    }

    /// Meaning with one definition line per entry in `definitions`
    pub fn meaning(part_of_speech: &str, definitions: &[&str], synonyms: &[&str]) -> Meaning {
        Meaning {
            part_of_speech: part_of_speech.to_string(),
            definitions: definitions
                .iter()
                .map(|d| Definition {
                    definition: d.to_string(),
                    example: None,
                })
                .collect(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            antonyms: Vec::new(),
        }
    }

    pub fn entry(word: &str, meanings: Vec<Meaning>) -> DictionaryEntry {
        DictionaryEntry {
            word: Some(word.to_string()),
            meanings: Some(meanings),
            ..DictionaryEntry::default()
        }
    }

    /// The two-meaning "hello" entry used across formatter tests
    pub fn hello_entry() -> DictionaryEntry {
        entry(
            "hello",
            vec![
                meaning("noun", &["hey"], &["hi", "greetings"]),
                meaning("verb", &["hi"], &["yo"]),
            ],
        )
    }

    pub fn shared_cache() -> Arc<dyn LookupCache> {
        Arc::new(MemoryCache::new())
    }

    pub fn client_with(source: FakeSource) -> DictionaryClient<FakeSource> {
        DictionaryClient::new(shared_cache(), source)
    }

    /// KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// App over an in-memory document with no worker attached
    pub fn test_app(text: &str) -> App {
        test_app_with_cache(text, shared_cache())
    }

    pub fn test_app_with_cache(text: &str, cache: Arc<dyn LookupCache>) -> App {
        App::new(
            crate::document::Document::from_text(text),
            cache,
            &Config::default(),
        )
    }

    /// Cache pre-filled with `hello_entry()` under "hello"
    pub fn cache_with_hello() -> Arc<dyn LookupCache> {
        let cache = shared_cache();
        cache.update("hello", vec![hello_entry()]);
        cache
    }
}
