//! Synonym extraction from cached lookups

use super::cache::LookupCache;

/// What the synonym command can offer for a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Synonyms {
    /// Nothing cached for the selection, or an empty cached result
    NoneAvailable,
    /// The selection followed by every synonym of the first entry
    Choices(Vec<String>),
}

/// Collect synonyms for `selection` from the cache only.
///
/// The word is expected to have been looked up already (by hovering it), so
/// a miss means "no synonyms" rather than a fetch. Synonyms of all meanings
/// of the first entry are flattened in order, duplicates kept, and the
/// selection itself comes first so keeping it is a choice.
pub fn extract_synonyms(cache: &dyn LookupCache, selection: &str) -> Synonyms {
    let Some(entries) = cache.get(&selection.to_lowercase()) else {
        return Synonyms::NoneAvailable;
    };

    let Some(first) = entries.first() else {
        return Synonyms::NoneAvailable;
    };

    let mut choices = vec![selection.to_string()];
    choices.extend(
        first
            .meanings
            .iter()
            .flatten()
            .flat_map(|meaning| meaning.synonyms.iter().cloned()),
    );

    Synonyms::Choices(choices)
}
