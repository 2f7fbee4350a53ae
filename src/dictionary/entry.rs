//! Dictionary API payload types
//!
//! Mirrors the JSON returned by the dictionary API. Everything the API may
//! leave out is optional or defaulted here, so partially-shaped responses
//! decode instead of failing.

use serde::{Deserialize, Serialize};

/// Title the API uses to report an unknown word in-band
pub const NO_DEFINITIONS_TITLE: &str = "No Definitions Found";

/// One API record for a word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Vec<Meaning>>,
}

impl DictionaryEntry {
    /// True when this entry is the API's "no definitions" answer
    pub fn is_no_definitions(&self) -> bool {
        self.title.as_deref() == Some(NO_DEFINITIONS_TITLE)
    }

    /// Sentinel entry as the API sends it for unknown words
    pub fn no_definitions() -> Self {
        Self {
            title: Some(NO_DEFINITIONS_TITLE.to_string()),
            ..Self::default()
        }
    }
}

/// A part-of-speech grouping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Both shapes the API answers with: an array for known words and a single
/// object for the "no definitions" case.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Entries(Vec<DictionaryEntry>),
    Single(DictionaryEntry),
}

/// Decode a response body into the entry sequence
pub fn parse_entries(body: &str) -> Result<Vec<DictionaryEntry>, serde_json::Error> {
    let payload: Payload = serde_json::from_str(body)?;
    Ok(match payload {
        Payload::Entries(entries) => entries,
        Payload::Single(entry) => vec![entry],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_BODY: &str = r#"[
        {
            "word": "hello",
            "phonetic": "həˈləʊ",
            "phonetics": [{"text": "həˈləʊ", "audio": ""}],
            "origin": "early 19th century",
            "meanings": [
                {
                    "partOfSpeech": "exclamation",
                    "definitions": [
                        {
                            "definition": "used as a greeting or to begin a phone conversation.",
                            "example": "hello there, Katie!",
                            "synonyms": [],
                            "antonyms": []
                        }
                    ],
                    "synonyms": ["hi", "greetings"],
                    "antonyms": ["bye"]
                }
            ]
        }
    ]"#;

    const NOT_FOUND_BODY: &str = r#"{
        "title": "No Definitions Found",
        "message": "Sorry pal, we couldn't find definitions for the word you were looking for.",
        "resolution": "You can try the search again at later time or head to the web instead."
    }"#;

    #[test]
    fn test_parse_array_body() {
        let entries = parse_entries(HELLO_BODY).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.word.as_deref(), Some("hello"));
        assert!(!entry.is_no_definitions());

        let meanings = entry.meanings.as_ref().unwrap();
        assert_eq!(meanings[0].part_of_speech, "exclamation");
        assert_eq!(meanings[0].synonyms, vec!["hi", "greetings"]);
        assert_eq!(
            meanings[0].definitions[0].example.as_deref(),
            Some("hello there, Katie!")
        );
    }

    #[test]
    fn test_parse_not_found_object_becomes_single_entry() {
        let entries = parse_entries(NOT_FOUND_BODY).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_no_definitions());
        assert!(entries[0].meanings.is_none());
    }

    #[test]
    fn test_parse_empty_array() {
        let entries = parse_entries("[]").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_meaning_without_synonyms_defaults_to_empty() {
        let body = r#"[{"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"x"}]}]}]"#;
        let entries = parse_entries(body).unwrap();
        let meaning = &entries[0].meanings.as_ref().unwrap()[0];
        assert!(meaning.synonyms.is_empty());
        assert!(meaning.antonyms.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_entries("<html>Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_parse_rejects_scalar() {
        assert!(parse_entries("42").is_err());
    }

    #[test]
    fn test_reserialized_entries_decode_identically() {
        let entries = parse_entries(HELLO_BODY).unwrap();
        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(parse_entries(&json).unwrap(), entries);
    }

    #[test]
    fn test_no_definitions_constructor() {
        let entry = DictionaryEntry::no_definitions();
        assert!(entry.is_no_definitions());
        assert_eq!(entry.title.as_deref(), Some(NO_DEFINITIONS_TITLE));
    }
}
