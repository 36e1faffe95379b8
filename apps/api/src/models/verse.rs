use super::reference::VerseReference;
use serde::{Deserialize, Serialize};

/// Default translation served by the bundled corpus
pub const DEFAULT_TRANSLATION: &str = "KJV";

/// Verse text resolved from the corpus for a reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseText {
    pub reference: VerseReference,
    /// Rendered citation, e.g. `John 3:16`
    pub citation: String,
    pub text: String,
    pub translation: String,
    /// Concept or emotion that led to this verse being picked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
}

impl VerseText {
    pub fn new(reference: VerseReference, text: impl Into<String>) -> Self {
        Self {
            citation: reference.to_string(),
            reference,
            text: text.into(),
            translation: DEFAULT_TRANSLATION.to_string(),
            matched: None,
        }
    }

    pub fn matched_by(mut self, label: impl Into<String>) -> Self {
        self.matched = Some(label.into());
        self
    }
}
