use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use book::Testament;
pub use intent::Intent;
pub use reference::VerseReference;
pub use verse::VerseText;

pub mod book;
mod intent;
mod reference;
mod verse;

use crate::services::planner::PlannedAction;

/// A chapter position in a reading plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterRef {
    pub book: String,
    pub chapter: u32,
}

impl ChapterRef {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
        }
    }
}

/// Reading plan completion statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingProgress {
    pub completed_chapters: u32,
    pub total_chapters: u32,
    pub progress_percent: f64,
}

/// Request structure for a chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Free-text user message
    pub message: String,
    /// Caller-managed session identifier; a fresh one is issued when absent
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Current reading position, supplied by the caller's progress store
    #[serde(default)]
    pub position: Option<ChapterRef>,
}

/// Response structure for a chat turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub user_id: Uuid,
    pub intent: Intent,
    /// Collaborator actions planned for the intent, in execution order
    pub actions: Vec<PlannedAction>,
    /// Verses retrieved for the intent
    pub verses: Vec<VerseText>,
    /// Chapters scheduled for a daily reading
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reading: Vec<ChapterRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    /// Plan statistics derived from the supplied position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<ReadingProgress>,
    /// Position after a completed reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_position: Option<ChapterRef>,
    pub timestamp: DateTime<Utc>,
}

/// Request structure for bare classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

/// Health check response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Current timestamp in RFC3339 format
    pub timestamp: String,
}

/// Error response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
