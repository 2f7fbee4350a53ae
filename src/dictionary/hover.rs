//! Hover text for a word
//!
//! Produces markdown-like lines: a `#` header with the word, a `##` header
//! per part of speech, then one line per definition.

use super::client::DictionaryClient;
use super::entry::Meaning;
use super::source::{DefinitionSource, LookupError};

/// Format the meanings of `word` as hover lines.
///
/// Without meanings only the header line is produced.
pub fn format_hover(word: &str, meanings: Option<&[Meaning]>) -> Vec<String> {
    let mut lines = vec![format!("# {}", word)];

    for meaning in meanings.unwrap_or_default() {
        lines.push(format!("## {}", meaning.part_of_speech));
        lines.extend(meaning.definitions.iter().map(|d| d.definition.clone()));
    }

    lines
}

/// Hover lines for `word`, or `None` when there is nothing to show.
///
/// The word is lowercased before the lookup. Only the first entry is
/// rendered; an empty result or a "No Definitions Found" first entry yields
/// `None` whatever its meanings hold.
pub async fn display_text<S: DefinitionSource>(
    client: &DictionaryClient<S>,
    word: &str,
) -> Result<Option<Vec<String>>, LookupError> {
    let word = word.to_lowercase();
    let entries = client.lookup(&word).await?;
    log::debug!("checking hover {}", word);

    let Some(first) = entries.first() else {
        return Ok(None);
    };

    if first.is_no_definitions() {
        return Ok(None);
    }

    Ok(Some(format_hover(&word, first.meanings.as_deref())))
}

#[cfg(test)]
#[path = "hover_tests.rs"]
mod hover_tests;
