use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Fuzzy filter over synonym choices
pub struct ChoiceMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for ChoiceMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceMatcher").finish_non_exhaustive()
    }
}

impl Default for ChoiceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Indices of matching choices, best match first.
    ///
    /// Every space-separated term must match. Equal scores keep the
    /// original choice order.
    pub fn filter(&self, query: &str, choices: &[String]) -> Vec<usize> {
        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return (0..choices.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = choices
            .iter()
            .enumerate()
            .filter_map(|(idx, choice)| {
                let mut total_score: i64 = 0;
                for term in &terms {
                    total_score += self.matcher.fuzzy_match(choice, term)?;
                }
                Some((idx, total_score))
            })
            .collect();

        // Stable sort
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_indices() {
        let matcher = ChoiceMatcher::new();
        let result = matcher.filter("", &choices(&["happy", "glad", "content"]));
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn test_whitespace_query_returns_all_indices() {
        let matcher = ChoiceMatcher::new();
        let result = matcher.filter("   ", &choices(&["happy", "glad"]));
        assert_eq!(result, vec![0, 1]);
    }

    #[test]
    fn test_exact_match_scores_highest() {
        let matcher = ChoiceMatcher::new();
        let entries = choices(&["cheerful", "cheer", "merry"]);

        let result = matcher.filter("cheer", &entries);
        assert_eq!(result.len(), 2);
        assert!(!result.contains(&2));
    }

    #[test]
    fn test_fuzzy_matching() {
        let matcher = ChoiceMatcher::new();
        let result = matcher.filter("grts", &choices(&["greetings", "hi", "salutation"]));
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = ChoiceMatcher::new();
        let result = matcher.filter("HEY", &choices(&["hey", "Hey"]));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_no_matches_returns_empty() {
        let matcher = ChoiceMatcher::new();
        assert!(matcher.filter("xyz", &choices(&["hello", "hi"])).is_empty());
    }

    #[test]
    fn test_multi_word_query_ands_terms() {
        let matcher = ChoiceMatcher::new();
        let entries = choices(&["good morning", "good day", "morning"]);

        let result = matcher.filter("good morn", &entries);
        assert_eq!(result, vec![0]);
    }
}
