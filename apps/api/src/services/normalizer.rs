use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new(r"[a-z]+").unwrap();
}

/// Lower-cased, trimmed message and its word tokens
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    pub text: String,
    /// Maximal runs of ASCII letters, in message order
    pub tokens: Vec<String>,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of whitespace-separated words
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// The text with trailing sentence punctuation removed
    pub fn bare(&self) -> &str {
        strip_trailing_punctuation(&self.text)
    }
}

pub fn normalize(text: &str) -> NormalizedText {
    let text = text.trim().to_lowercase();
    let tokens = tokenize(&text);
    NormalizedText { text, tokens }
}

/// Split text into lower-case ASCII letter runs
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Word tokens of already lower-cased text with their byte spans
pub fn word_spans(text: &str) -> Vec<(Range<usize>, &str)> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| (m.range(), m.as_str()))
        .collect()
}

pub fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim_end_matches(|c: char| matches!(c, '.' | '?' | '!' | ','))
        .trim_end()
}
