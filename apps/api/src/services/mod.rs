pub mod chat;
pub mod corpus;
pub mod intent_classifier;
pub mod keyword_extractor;
pub mod normalizer;
pub mod planner;
pub mod reading_plan;
pub mod reference_parser;
pub mod scripture_matcher;
pub mod templates;
pub mod topic_extractor;

// Re-export public types
pub use chat::ChatService;
pub use corpus::{InMemoryCorpus, ScriptureCorpus};
pub use intent_classifier::{classify_and_extract, IntentClassifier};
pub use keyword_extractor::KeywordExtractor;
pub use planner::{plan, ActionPlan, PlannedAction};
pub use reference_parser::{find_references, parse_reference};
pub use scripture_matcher::ScriptureMatcher;
pub use topic_extractor::extract_topic;
