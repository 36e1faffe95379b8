//! Priority-ordered intent classification.
//!
//! Each rule inspects the message and either claims it with an [`Intent`]
//! or passes. Rules run in table order and the first claim wins; the last
//! rule always claims, so classification is total.

use crate::models::{Intent, VerseReference};
use crate::services::normalizer::{normalize, word_spans, NormalizedText};
use crate::services::reference_parser::{find_references, parse_reference};
use crate::services::templates::{
    contains_any, is_greeting, starts_with_phrase, BIBLE_TOPICS, BOOKMARK_WORDS,
    CHALLENGE_WORDS, COMMAND_WORDS, COMPLETION_WORDS, DAILY_READING_PHRASES, DECLINE_PHRASES,
    PROGRESS_PHRASES, SAVE_ALL_PATTERN, SEARCH_TRIGGERS,
};
use crate::services::topic_extractor::extract_topic;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Longest message still eligible for the known-topic search shortcut
const MAX_TOPIC_MESSAGE_CHARS: usize = 50;

/// Longest message, in words, that reads as a bare search query
const MAX_SEARCH_WORDS: usize = 5;

/// A message as seen by the intent rules
pub struct MessageContext<'a> {
    pub raw: &'a str,
    pub normalized: NormalizedText,
}

impl<'a> MessageContext<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: normalize(raw),
        }
    }

    fn text(&self) -> &str {
        &self.normalized.text
    }
}

/// One step of the classification chain
pub struct IntentRule {
    pub name: &'static str,
    pub apply: fn(&MessageContext) -> Option<Intent>,
}

static INTENT_RULES: &[IntentRule] = &[
    IntentRule { name: "decline_bookmark", apply: decline_bookmark },
    IntentRule { name: "save_all", apply: save_all },
    IntentRule { name: "verse_reference", apply: verse_reference },
    IntentRule { name: "greeting", apply: greeting },
    IntentRule { name: "completion", apply: completion },
    IntentRule { name: "bookmark", apply: bookmark },
    IntentRule { name: "progress", apply: progress },
    IntentRule { name: "daily_reading", apply: daily_reading },
    IntentRule { name: "search_trigger", apply: search_trigger },
    IntentRule { name: "challenge", apply: challenge },
    IntentRule { name: "known_topic", apply: known_topic },
    IntentRule { name: "search_shaped", apply: search_shaped },
    IntentRule { name: "general", apply: general },
];

fn decline_bookmark(ctx: &MessageContext) -> Option<Intent> {
    DECLINE_PHRASES
        .iter()
        .any(|phrase| starts_with_phrase(ctx.text(), phrase))
        .then_some(Intent::BookmarkNo)
}

fn save_all(ctx: &MessageContext) -> Option<Intent> {
    let caps = SAVE_ALL_PATTERN.captures(ctx.text())?;
    let references: Vec<VerseReference> = caps[1]
        .split(',')
        .filter_map(|segment| {
            let parsed = parse_reference(segment);
            if parsed.is_none() {
                debug!("Dropping unparseable bookmark segment: {}", segment.trim());
            }
            parsed
        })
        .collect();

    Some(Intent::BookmarkAll { references })
}

fn verse_reference(ctx: &MessageContext) -> Option<Intent> {
    parse_reference(ctx.raw).map(|reference| Intent::GetVerse { reference })
}

fn greeting(ctx: &MessageContext) -> Option<Intent> {
    is_greeting(ctx.text()).then_some(Intent::Greeting)
}

fn completion(ctx: &MessageContext) -> Option<Intent> {
    COMPLETION_WORDS
        .contains(&ctx.normalized.bare())
        .then_some(Intent::Complete)
}

/// An action word plus any citation in the same message. Words inside a
/// citation's span do not count, so "read mark 5" names a book and saves
/// nothing. A citation that follows an action word is preferred.
fn bookmark(ctx: &MessageContext) -> Option<Intent> {
    let references = find_references(ctx.text());
    if references.is_empty() {
        return None;
    }

    let action_words: Vec<_> = word_spans(ctx.text())
        .into_iter()
        .filter(|(_, word)| BOOKMARK_WORDS.contains(word))
        .map(|(span, _)| span)
        .collect();

    let outside: Vec<_> = references
        .into_iter()
        .filter(|found| {
            action_words
                .iter()
                .any(|span| span.end <= found.start || span.start >= found.end)
        })
        .collect();

    let chosen = outside
        .iter()
        .position(|found| action_words.iter().any(|span| span.end <= found.start))
        .unwrap_or(0);

    outside.into_iter().nth(chosen).map(|found| Intent::Bookmark {
        reference: Some(found.reference),
    })
}

fn progress(ctx: &MessageContext) -> Option<Intent> {
    contains_any(ctx.text(), PROGRESS_PHRASES).then_some(Intent::Progress)
}

fn daily_reading(ctx: &MessageContext) -> Option<Intent> {
    contains_any(ctx.text(), DAILY_READING_PHRASES).then_some(Intent::DailyReading)
}

fn search_trigger(ctx: &MessageContext) -> Option<Intent> {
    contains_any(ctx.text(), SEARCH_TRIGGERS).then(|| Intent::Search {
        topic: extract_topic(ctx.text()),
    })
}

fn challenge(ctx: &MessageContext) -> Option<Intent> {
    let emotions: BTreeSet<String> = CHALLENGE_WORDS
        .iter()
        .filter(|word| ctx.text().contains(*word))
        .map(|word| word.to_string())
        .collect();

    if emotions.is_empty() {
        return None;
    }
    Some(Intent::Challenge {
        emotions,
        raw_message: ctx.raw.to_string(),
    })
}

fn known_topic(ctx: &MessageContext) -> Option<Intent> {
    let text = ctx.text();
    let exact = BIBLE_TOPICS.contains(&ctx.normalized.bare());
    let mentioned =
        text.chars().count() <= MAX_TOPIC_MESSAGE_CHARS && contains_any(text, BIBLE_TOPICS);

    (exact || mentioned).then(|| Intent::Search {
        topic: text.to_string(),
    })
}

fn search_shaped(ctx: &MessageContext) -> Option<Intent> {
    let words = ctx.normalized.word_count();
    let bare = ctx.normalized.bare();
    let is_command = COMMAND_WORDS.contains(&bare) || COMPLETION_WORDS.contains(&bare);

    let shaped = (1..=MAX_SEARCH_WORDS).contains(&words) && !is_greeting(ctx.text()) && !is_command;
    shaped.then(|| Intent::Search {
        topic: ctx.text().to_string(),
    })
}

fn general(ctx: &MessageContext) -> Option<Intent> {
    Some(Intent::General {
        raw_message: ctx.raw.to_string(),
    })
}

/// Stateless classifier over the static rule chain
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> {
        INTENT_RULES.iter().map(|rule| rule.name)
    }

    pub fn classify(&self, raw_message: &str) -> Intent {
        let ctx = MessageContext::new(raw_message);

        for rule in INTENT_RULES {
            if let Some(intent) = (rule.apply)(&ctx) {
                debug!(rule = rule.name, "intent rule matched");
                info!("Classified message as {}", intent.name());
                return intent;
            }
        }

        // The chain ends in an unconditional rule; kept for totality.
        Intent::General {
            raw_message: raw_message.to_string(),
        }
    }
}

/// Classify a raw user message into exactly one intent with its payload
pub fn classify_and_extract(raw_message: &str) -> Intent {
    IntentClassifier::new().classify(raw_message)
}
