use crate::models::Intent;
use serde::{Deserialize, Serialize};

/// Collaborator responsible for carrying out an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Agent {
    /// Reading progress and bookmark storage
    Memory,
    /// Verse retrieval
    Matcher,
    /// Reply rendering
    Composer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Greet,
    GetNextChapters,
    FetchChapters,
    PresentDailyReading,
    FindRelevantVerses,
    ComfortResponse,
    SaveBookmark,
    ConfirmBookmark,
    SaveBookmarks,
    ConfirmBookmarks,
    Acknowledge,
    GetProgress,
    ShowProgress,
    MarkComplete,
    CelebrateCompletion,
    SearchVerses,
    PresentSearchResults,
    GetSpecificVerse,
    PresentVerse,
    GeneralResponse,
}

/// One step of an action plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedAction {
    pub agent: Agent,
    pub action: ActionKind,
}

impl PlannedAction {
    pub const fn new(agent: Agent, action: ActionKind) -> Self {
        Self { agent, action }
    }
}

/// Ordered collaborator actions for one intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub actions: Vec<PlannedAction>,
}

impl ActionPlan {
    pub fn touches(&self, agent: Agent) -> bool {
        self.actions.iter().any(|step| step.agent == agent)
    }
}

fn steps_for(intent: &Intent) -> Vec<PlannedAction> {
    use ActionKind::*;
    use Agent::*;

    match intent {
        Intent::Greeting => vec![PlannedAction::new(Composer, Greet)],
        Intent::DailyReading => vec![
            PlannedAction::new(Memory, GetNextChapters),
            PlannedAction::new(Matcher, FetchChapters),
            PlannedAction::new(Composer, PresentDailyReading),
        ],
        Intent::Challenge { .. } => vec![
            PlannedAction::new(Matcher, FindRelevantVerses),
            PlannedAction::new(Composer, ComfortResponse),
        ],
        Intent::Bookmark { .. } => vec![
            PlannedAction::new(Memory, SaveBookmark),
            PlannedAction::new(Composer, ConfirmBookmark),
        ],
        Intent::BookmarkAll { .. } => vec![
            PlannedAction::new(Memory, SaveBookmarks),
            PlannedAction::new(Composer, ConfirmBookmarks),
        ],
        Intent::BookmarkNo => vec![PlannedAction::new(Composer, Acknowledge)],
        Intent::Progress => vec![
            PlannedAction::new(Memory, GetProgress),
            PlannedAction::new(Composer, ShowProgress),
        ],
        Intent::Complete => vec![
            PlannedAction::new(Memory, MarkComplete),
            PlannedAction::new(Composer, CelebrateCompletion),
        ],
        Intent::Search { .. } => vec![
            PlannedAction::new(Matcher, SearchVerses),
            PlannedAction::new(Composer, PresentSearchResults),
        ],
        Intent::GetVerse { .. } => vec![
            PlannedAction::new(Matcher, GetSpecificVerse),
            PlannedAction::new(Composer, PresentVerse),
        ],
        Intent::General { .. } => vec![PlannedAction::new(Composer, GeneralResponse)],
    }
}

/// Map an intent to the collaborator actions that serve it
pub fn plan(intent: &Intent) -> ActionPlan {
    ActionPlan {
        actions: steps_for(intent),
    }
}
