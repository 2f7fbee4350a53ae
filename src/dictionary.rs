//! Dictionary lookups for lexi
//!
//! Cache-backed lookup against the dictionary API, hover formatting and
//! synonym extraction. Nothing in here knows about the terminal; the editor
//! reaches it through the adapters in `crate::host`.

mod cache;
mod client;
mod entry;
mod hover;
mod source;
mod synonyms;

pub use cache::{FileCache, LookupCache, MemoryCache};
pub use client::DictionaryClient;
pub use entry::{Definition, DictionaryEntry, Meaning, NO_DEFINITIONS_TITLE, parse_entries};
pub use hover::{display_text, format_hover};
pub use source::{DefinitionSource, HttpSource, LookupError, interpret_response};
pub use synonyms::{Synonyms, extract_synonyms};
