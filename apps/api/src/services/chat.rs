use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{ChatRequest, ChatResponse, Intent, VerseReference, VerseText};
use crate::services::corpus::ScriptureCorpus;
use crate::services::intent_classifier::IntentClassifier;
use crate::services::planner::{plan, Agent};
use crate::services::reading_plan;
use crate::services::scripture_matcher::{reflection_question, ScriptureMatcher};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Runs one chat turn: classify, plan, then serve the retrieval side of
/// the plan. Storage actions are planned but left to the caller.
pub struct ChatService {
    classifier: IntentClassifier,
    matcher: ScriptureMatcher,
    search_max_results: usize,
    daily_chapter_count: usize,
}

impl ChatService {
    pub fn new(corpus: Arc<dyn ScriptureCorpus>, config: &Config) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            matcher: ScriptureMatcher::new(corpus),
            search_max_results: config.search_max_results,
            daily_chapter_count: config.daily_chapter_count,
        }
    }

    pub fn classify(&self, message: &str) -> Intent {
        self.classifier.classify(message)
    }

    pub fn respond(&self, request: &ChatRequest) -> Result<ChatResponse> {
        if request.message.trim().is_empty() {
            return Err(ApiError::InvalidInput("Message cannot be empty".to_string()));
        }

        let user_id = request.user_id.unwrap_or_else(Uuid::new_v4);
        let intent = self.classifier.classify(&request.message);
        let action_plan = plan(&intent);
        let storage_deferred = action_plan.touches(Agent::Memory);
        let position = request.position.as_ref();

        let mut response = ChatResponse {
            user_id,
            intent: intent.clone(),
            actions: action_plan.actions,
            verses: Vec::new(),
            reading: Vec::new(),
            reflection: None,
            progress: None,
            next_position: None,
            timestamp: Utc::now(),
        };

        match &intent {
            Intent::DailyReading => {
                let chapters = reading_plan::next_chapters(position, self.daily_chapter_count);
                response.verses = self.matcher.fetch_chapters(&chapters);
                response.reflection = chapters
                    .first()
                    .map(|first| reflection_question(&first.book, first.chapter).to_string());
                response.reading = chapters;
            }
            Intent::Challenge {
                emotions,
                raw_message,
            } => {
                let verses = self
                    .matcher
                    .find_relevant_verses(emotions, Some(raw_message.as_str()));
                response.verses = if verses.is_empty() {
                    self.matcher.comfort_verses()
                } else {
                    verses
                };
            }
            Intent::Search { topic } => {
                response.verses = self.matcher.search_verses(topic, self.search_max_results);
            }
            Intent::GetVerse { reference } => {
                response.verses = self.lookup(std::slice::from_ref(reference));
            }
            Intent::Bookmark { reference } => {
                response.verses = self.lookup(
                    reference
                        .as_ref()
                        .map(std::slice::from_ref)
                        .unwrap_or_default(),
                );
            }
            Intent::BookmarkAll { references } => {
                response.verses = self.lookup(references);
            }
            Intent::Progress => {
                let completed = reading_plan::chapters_before(position);
                response.progress = Some(reading_plan::progress(completed));
            }
            Intent::Complete => {
                response.next_position =
                    Some(reading_plan::advance(position, self.daily_chapter_count));
            }
            Intent::Greeting | Intent::BookmarkNo | Intent::General { .. } => {}
        }

        info!(
            user_id = %user_id,
            intent = intent.name(),
            verses = response.verses.len(),
            storage_deferred,
            "Chat turn served"
        );
        Ok(response)
    }

    fn lookup(&self, references: &[VerseReference]) -> Vec<VerseText> {
        references
            .iter()
            .filter_map(|reference| self.matcher.get_specific_verse(reference))
            .collect()
    }

    pub fn verse_of_the_day(&self, date: NaiveDate) -> Result<VerseText> {
        self.matcher.verse_of_the_day(date).ok_or_else(|| {
            ApiError::NotFound(format!("No verse of the day available for {}", date))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChapterRef;
    use crate::services::corpus::InMemoryCorpus;
    use crate::services::planner::{ActionKind, PlannedAction};
    use crate::services::scripture_matcher::GENERAL_COMFORT;

    fn service() -> ChatService {
        ChatService::new(Arc::new(InMemoryCorpus::seeded()), &Config::default())
    }

    fn request(message: &str) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            user_id: None,
            position: None,
        }
    }

    #[test]
    fn test_empty_message_is_rejected() {
        let err = service().respond(&request("   ")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn test_user_id_is_preserved() {
        let user_id = Uuid::new_v4();
        let response = service()
            .respond(&ChatRequest {
                user_id: Some(user_id),
                ..request("hello")
            })
            .unwrap();
        assert_eq!(response.user_id, user_id);
        assert_eq!(response.intent, Intent::Greeting);
        assert!(response.verses.is_empty());
    }

    #[test]
    fn test_get_verse_resolves_text() {
        let response = service().respond(&request("John 3:16")).unwrap();
        assert_eq!(response.verses.len(), 1);
        assert_eq!(response.verses[0].citation, "John 3:16");
        assert_eq!(
            response.actions.first(),
            Some(&PlannedAction::new(Agent::Matcher, ActionKind::GetSpecificVerse))
        );
    }

    #[test]
    fn test_unresolvable_reference_yields_no_verse() {
        let response = service().respond(&request("Obadiah 1:3")).unwrap();
        assert!(matches!(response.intent, Intent::GetVerse { .. }));
        assert!(response.verses.is_empty());
    }

    #[test]
    fn test_challenge_without_match_gets_comfort_verses() {
        let response = service().respond(&request("so desperate")).unwrap();
        assert!(matches!(response.intent, Intent::Challenge { .. }));
        assert_eq!(response.verses.len(), 3);
        assert!(response
            .verses
            .iter()
            .all(|v| v.matched.as_deref() == Some(GENERAL_COMFORT)));
    }

    #[test]
    fn test_challenge_with_match() {
        let response = service().respond(&request("I am so worried")).unwrap();
        assert!(!response.verses.is_empty());
        assert!(response
            .verses
            .iter()
            .all(|v| v.matched.as_deref() != Some(GENERAL_COMFORT)));
    }

    #[test]
    fn test_daily_reading_uses_position() {
        let response = service()
            .respond(&ChatRequest {
                position: Some(ChapterRef::new("Matthew", 1)),
                ..request("daily reading")
            })
            .unwrap();
        assert_eq!(
            response.reading,
            vec![ChapterRef::new("Matthew", 1), ChapterRef::new("Matthew", 2)]
        );
        assert_eq!(response.verses.len(), 2);
        assert_eq!(
            response.reflection.as_deref(),
            Some("What does Jesus' teaching here reveal about God's kingdom?")
        );
    }

    #[test]
    fn test_complete_advances_position() {
        let response = service()
            .respond(&ChatRequest {
                position: Some(ChapterRef::new("Mark", 16)),
                ..request("done")
            })
            .unwrap();
        assert_eq!(response.next_position, Some(ChapterRef::new("Luke", 2)));
    }

    #[test]
    fn test_progress_from_position() {
        let response = service()
            .respond(&ChatRequest {
                position: Some(ChapterRef::new("Mark", 1)),
                ..request("show progress")
            })
            .unwrap();
        let progress = response.progress.unwrap();
        assert_eq!(progress.completed_chapters, 28);
        assert_eq!(progress.progress_percent, 10.8);
    }

    #[test]
    fn test_save_all_looks_up_each_reference() {
        let response = service()
            .respond(&request("save all: John 3:16, Psalm 23:1"))
            .unwrap();
        assert_eq!(response.verses.len(), 2);
    }

    #[test]
    fn test_search_respects_configured_limit() {
        let response = service().respond(&request("find god")).unwrap();
        assert_eq!(
            response.intent,
            Intent::Search {
                topic: "god".to_string()
            }
        );
        assert_eq!(response.verses.len(), Config::default().search_max_results);
    }

    #[test]
    fn test_verse_of_the_day() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let verse = service().verse_of_the_day(date).unwrap();
        assert!(!verse.text.is_empty());

        let empty = ChatService::new(Arc::new(InMemoryCorpus::empty()), &Config::default());
        assert!(matches!(
            empty.verse_of_the_day(date),
            Err(ApiError::NotFound(_))
        ));
    }
}
