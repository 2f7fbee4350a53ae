//! Where definitions come from on a cache miss
//!
//! `HttpSource` issues one GET per word against the dictionary API using
//! reqwest. There are no retries and no timeout.

use std::future::Future;

use reqwest::{Client, Url};
use thiserror::Error;

use super::entry::{DictionaryEntry, parse_entries};

/// Longest slice of an error body carried into `LookupError::Api`
const MAX_ERROR_BODY: usize = 200;

/// Errors that can occur while looking up a word
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    /// The configured API URL cannot carry a word path segment
    #[error("Invalid dictionary URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The request never produced a response
    #[error("Network error looking up '{word}': {message}")]
    Network { word: String, message: String },

    /// Non-success status with a body that is not a dictionary payload
    #[error("Dictionary API error ({code}) for '{word}': {message}")]
    Api {
        word: String,
        code: u16,
        message: String,
    },

    /// Success status with a body that is not a dictionary payload
    #[error("Unreadable dictionary response for '{word}': {message}")]
    Parse { word: String, message: String },
}

/// Fetches the entries for a single (already lowercased) word
pub trait DefinitionSource: Send + Sync {
    fn fetch(
        &self,
        word: &str,
    ) -> impl Future<Output = Result<Vec<DictionaryEntry>, LookupError>> + Send;
}

/// Dictionary API over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    /// Create a source for `base_url`; the word becomes its last path segment
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let invalid = |message: String| LookupError::InvalidUrl {
            url: base_url.to_string(),
            message,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("URL cannot have path segments".to_string()));
        }

        Ok(Self {
            client: Client::new(),
            base_url: parsed,
        })
    }

    /// Full request URL for `word`, percent-encoded as one path segment
    pub fn url_for(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

impl DefinitionSource for HttpSource {
    async fn fetch(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let url = self.url_for(word);
        log::debug!("Fetching definitions from {}", url);

        let network = |e: reqwest::Error| LookupError::Network {
            word: word.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;

        interpret_response(word, status.as_u16(), &body)
    }
}

/// Turn a status and body into entries.
///
/// A success status must carry an entry array. An error status is only a
/// result when its body is the "No Definitions Found" object, which the API
/// sends with a 404 for unknown words.
pub fn interpret_response(
    word: &str,
    status: u16,
    body: &str,
) -> Result<Vec<DictionaryEntry>, LookupError> {
    let success = (200..300).contains(&status);
    match parse_entries(body) {
        Ok(entries) if success => Ok(entries),
        Ok(entries) if entries.first().is_some_and(DictionaryEntry::is_no_definitions) => {
            Ok(entries)
        }
        Err(e) if success => Err(LookupError::Parse {
            word: word.to_string(),
            message: e.to_string(),
        }),
        _ => Err(LookupError::Api {
            word: word.to_string(),
            code: status,
            message: truncate_body(body),
        }),
    }
}

fn truncate_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response".to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY).collect()
}
