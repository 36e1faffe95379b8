use crate::services::templates::{TOPIC_PATTERNS, TOPIC_TRIGGERS};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref TRAILING_FILLER: Regex =
        Regex::new(r"\s+(?:please|thanks|thank you|in the bible)$").unwrap();
    static ref LEADING_PREPOSITION: Regex = Regex::new(r"^(?:about|for|on)\s+").unwrap();
    static ref TRAILING_PREPOSITION: Regex = Regex::new(r"\s+(?:about|for|on)$").unwrap();
}

fn clean_capture(capture: &str) -> String {
    let mut topic = capture
        .trim()
        .trim_end_matches(['?', '!', '.', ','])
        .trim_end()
        .to_string();

    while let Some(end) = TRAILING_FILLER.find(&topic).map(|m| m.start()) {
        topic.truncate(end);
    }
    topic
}

fn strip_triggers(text: &str) -> String {
    let mut triggers = TOPIC_TRIGGERS.to_vec();
    triggers.sort_by_key(|trigger| std::cmp::Reverse(trigger.len()));

    let mut residual = text.to_string();
    for trigger in triggers {
        residual = residual.replace(trigger, " ");
    }

    let residual = residual.split_whitespace().collect::<Vec<_>>().join(" ");
    let residual = LEADING_PREPOSITION.replace(&residual, "");
    TRAILING_PREPOSITION.replace(&residual, "").into_owned()
}

/// Recover the bare topic from a search request.
///
/// The first trigger pattern whose capture survives cleanup wins. Otherwise
/// every known trigger is cut out of the text, longest first. The result is
/// never empty for non-empty input: the normalized text is returned as is
/// when nothing is left.
pub fn extract_topic(text: &str) -> String {
    let normalized = text.trim().to_lowercase();

    for pattern in TOPIC_PATTERNS.iter() {
        let Some(capture) = pattern.captures(&normalized).and_then(|caps| caps.get(1)) else {
            continue;
        };
        let topic = clean_capture(capture.as_str());
        if !topic.is_empty() {
            debug!(pattern = pattern.as_str(), %topic, "topic pattern matched");
            return topic;
        }
    }

    let residual = strip_triggers(&normalized);
    if residual.is_empty() {
        normalized
    } else {
        residual
    }
}
