use super::reference::VerseReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the user wants, as decided by the intent classifier.
///
/// Serialized as `{"type": "<variant>", "data": {...}}`; unit variants carry
/// no `data` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    DailyReading,
    Challenge {
        /// Challenge words found verbatim in the message
        emotions: BTreeSet<String>,
        raw_message: String,
    },
    Bookmark {
        reference: Option<VerseReference>,
    },
    BookmarkAll {
        references: Vec<VerseReference>,
    },
    BookmarkNo,
    Progress,
    Complete,
    Search {
        topic: String,
    },
    GetVerse {
        reference: VerseReference,
    },
    General {
        raw_message: String,
    },
}

impl Intent {
    /// Stable snake_case name, identical to the serialized `type` tag
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::DailyReading => "daily_reading",
            Intent::Challenge { .. } => "challenge",
            Intent::Bookmark { .. } => "bookmark",
            Intent::BookmarkAll { .. } => "bookmark_all",
            Intent::BookmarkNo => "bookmark_no",
            Intent::Progress => "progress",
            Intent::Complete => "complete",
            Intent::Search { .. } => "search",
            Intent::GetVerse { .. } => "get_verse",
            Intent::General { .. } => "general",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_variant_serialization() {
        let value = serde_json::to_value(Intent::Greeting).unwrap();
        assert_eq!(value, json!({"type": "greeting"}));
    }

    #[test]
    fn test_payload_variant_serialization() {
        let intent = Intent::GetVerse {
            reference: VerseReference::verse("John", 3, 16).unwrap(),
        };
        let value = serde_json::to_value(&intent).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "get_verse",
                "data": {"reference": {"book": "John", "chapter": 3, "verse_start": 16}}
            })
        );
        assert_eq!(value["type"], intent.name());
    }

    #[test]
    fn test_deserialize_search() {
        let intent: Intent =
            serde_json::from_value(json!({"type": "search", "data": {"topic": "grace"}})).unwrap();
        assert_eq!(
            intent,
            Intent::Search {
                topic: "grace".to_string()
            }
        );
    }
}
