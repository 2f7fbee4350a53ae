//! Editor host adapters
//!
//! The editor is a collaborator of the dictionary core: it answers questions
//! about the document (`EditorHost`) and calls the two entry points here.
//! Keeping this layer thin means the lookup logic is testable without a
//! terminal.

use crate::dictionary::{
    DefinitionSource, DictionaryClient, LookupCache, LookupError, Synonyms, display_text,
    extract_synonyms,
};

/// A word's position on one line, in character columns (`end` exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRange {
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl WordRange {
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// What the core needs to read from the active document
pub trait EditorHost {
    /// Currently selected text, empty when nothing is selected
    fn current_selection_text(&self) -> String;

    /// Range of the word under the cursor, if the cursor touches one
    fn word_range_at_cursor(&self) -> Option<WordRange>;

    fn text_in_range(&self, range: &WordRange) -> String;
}

/// Outcome of the synonym command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynonymCommand {
    /// Tell the user there is nothing to pick; the document is not touched
    Message(String),
    /// Offer these choices; the picked one replaces the selection
    Pick(Vec<String>),
}

/// Word the host should request a hover for
pub fn hover_word(host: &impl EditorHost) -> Option<String> {
    let range = host.word_range_at_cursor()?;
    let word = host.text_in_range(&range);
    (!word.is_empty()).then_some(word)
}

/// Hover lines for `word`, `None` when no hover should be shown
pub async fn provide_hover<S: DefinitionSource>(
    client: &DictionaryClient<S>,
    word: &str,
) -> Result<Option<Vec<String>>, LookupError> {
    if word.trim().is_empty() {
        return Ok(None);
    }
    display_text(client, word).await
}

/// Synonym choices for `selection`, or the message to show instead
pub fn provide_synonym_command(cache: &dyn LookupCache, selection: &str) -> SynonymCommand {
    match extract_synonyms(cache, selection) {
        Synonyms::Choices(choices) => SynonymCommand::Pick(choices),
        Synonyms::NoneAvailable => {
            SynonymCommand::Message(format!("No synonyms found for {}", selection))
        }
    }
}
