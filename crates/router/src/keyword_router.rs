//! KeywordRouter - Substring keyword extraction

use knowledge::DomainExpert;
use shared::KeywordMatch;
use tracing::debug;

/// Split a concept name into lowercase whitespace/hyphen-delimited tokens
pub fn concept_tokens(concept: &str) -> Vec<String> {
    concept
        .to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Routes a prompt to the concepts each expert knows about.
///
/// A concept matches when any of its tokens occurs as a substring of the
/// lowercased prompt. There is no word-boundary check, so "dynamics" also
/// fires inside "aerodynamics".
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordRouter;

impl KeywordRouter {
    pub fn new() -> Self {
        Self
    }

    /// Extract matches for every expert, in registration order.
    ///
    /// Every expert gets an entry, possibly empty. Concepts within a domain
    /// are sorted ascending and deduplicated.
    pub fn extract<'a>(
        &self,
        prompt: &str,
        experts: impl IntoIterator<Item = &'a DomainExpert>,
    ) -> KeywordMatch {
        let prompt = prompt.to_lowercase();
        let mut matches = KeywordMatch::new();

        for expert in experts {
            let matched: Vec<String> = expert
                .knowledge()
                .names()
                .filter(|name| Self::matches(&prompt, name))
                .map(str::to_string)
                .collect();

            debug!(domain = %expert.name(), matched = matched.len(), "Extracted keywords");
            matches.insert(expert.name(), matched);
        }

        matches
    }

    /// Whether a concept fires for an already-lowercased prompt
    pub fn matches(prompt_lower: &str, concept: &str) -> bool {
        concept_tokens(concept)
            .iter()
            .any(|token| prompt_lower.contains(token.as_str()))
    }
}
