use crate::services::normalizer::{normalize, NormalizedText};
use crate::services::templates::{is_stop_word, PHRASE_PATTERNS, WORD_SYNONYMS};
use std::collections::BTreeSet;
use tracing::debug;

/// Derives canonical concept tags from free text.
///
/// Two independent passes feed the result: the phrase pattern table catches
/// multi-word idioms ("can't sleep", "feel like giving up"), and the synonym
/// table expands individual words. Their tag sets are unioned.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl KeywordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Union of the concept tags of every phrase pattern matching the text
    pub fn match_phrases(&self, normalized_text: &str) -> BTreeSet<String> {
        let mut concepts = BTreeSet::new();
        for pattern in PHRASE_PATTERNS.iter() {
            if pattern.regex.is_match(normalized_text) {
                debug!(pattern = pattern.regex.as_str(), "phrase pattern matched");
                concepts.extend(pattern.concepts.iter().map(|c| c.to_string()));
            }
        }
        concepts
    }

    /// Token-level tags with the fallbacks applied: every non-stop-word
    /// token regardless of length, then the whole text as one topic.
    pub fn expand(&self, normalized: &NormalizedText) -> BTreeSet<String> {
        let mut concepts = self.expand_tokens(&normalized.tokens);
        if concepts.is_empty() {
            concepts = self.fallback_tags(normalized);
        }
        concepts
    }

    /// Phrase matches unioned with synonym expansion. The expansion
    /// fallbacks only apply when both passes come back empty.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let normalized = normalize(text);
        let mut concepts = self.match_phrases(&normalized.text);
        concepts.extend(self.expand_tokens(&normalized.tokens));

        if concepts.is_empty() {
            concepts = self.fallback_tags(&normalized);
        }

        debug!(?concepts, "extracted concept tags");
        concepts
    }

    fn expand_tokens(&self, tokens: &[String]) -> BTreeSet<String> {
        let mut concepts = BTreeSet::new();
        for token in tokens {
            if is_stop_word(token) || token.len() < 3 {
                continue;
            }
            concepts.insert(token.clone());
            if let Some(synonyms) = WORD_SYNONYMS.get(token.as_str()) {
                concepts.extend(synonyms.iter().map(|s| s.to_string()));
            }
        }
        concepts
    }

    fn fallback_tags(&self, normalized: &NormalizedText) -> BTreeSet<String> {
        let mut concepts: BTreeSet<String> = normalized
            .tokens
            .iter()
            .filter(|token| !is_stop_word(token))
            .cloned()
            .collect();

        if concepts.is_empty() && !normalized.is_empty() {
            concepts.insert(normalized.text.clone());
        }
        concepts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_phrase_patterns_catch_idioms() {
        let extractor = KeywordExtractor::new();
        let concepts = extractor.match_phrases("i can't sleep and i feel like giving up");

        assert!(concepts.is_superset(&tags(&["peace", "rest", "anxiety"])));
        assert!(concepts.is_superset(&tags(&["perseverance", "hope", "strength"])));
    }

    #[test]
    fn test_phrase_patterns_are_not_exclusive() {
        let extractor = KeywordExtractor::new();
        // "stressed" and "overwhelmed" rows both contribute
        let concepts = extractor.match_phrases("stressed and overwhelmed");
        assert!(concepts.contains("trust"));
        assert!(concepts.contains("help"));
    }

    #[test]
    fn test_expand_adds_token_and_synonyms() {
        let extractor = KeywordExtractor::new();
        let concepts = extractor.expand(&normalize("I am so worried"));

        assert_eq!(concepts, tags(&["worried", "anxiety", "worry", "trust"]));
    }

    #[test]
    fn test_expand_falls_back_to_short_tokens() {
        let extractor = KeywordExtractor::new();
        // "ox" is shorter than three characters but not a stop word
        let concepts = extractor.expand(&normalize("the ox"));
        assert_eq!(concepts, tags(&["ox"]));
    }

    #[test]
    fn test_expand_falls_back_to_whole_text() {
        let extractor = KeywordExtractor::new();
        let concepts = extractor.expand(&normalize("What is the"));
        assert_eq!(concepts, tags(&["what is the"]));
    }

    #[test]
    fn test_expand_empty_input_yields_empty_set() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.expand(&normalize("   ")).is_empty());
    }

    #[test]
    fn test_extract_unions_phrase_and_word_tags() {
        let extractor = KeywordExtractor::new();
        let concepts = extractor.extract("I feel lonely and scared");

        // phrase row for "lonely"
        assert!(concepts.contains("presence"));
        // synonym expansion for "scared"
        assert!(concepts.contains("courage"));
        // tokens themselves
        assert!(concepts.contains("lonely"));
        assert!(concepts.contains("scared"));
        assert!(!concepts.contains("and"));
    }

    #[test]
    fn test_extract_phrase_hit_suppresses_fallback() {
        let extractor = KeywordExtractor::new();
        let concepts = extractor.extract("help me");
        assert_eq!(concepts, tags(&["help", "strength", "provision"]));
    }
}
