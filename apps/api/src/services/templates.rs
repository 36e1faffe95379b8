//! Static rule tables for message classification and keyword extraction.
//!
//! Every table is built once on first use and never mutated afterwards.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// A compiled phrase pattern and the concept tags it contributes
#[derive(Debug)]
pub struct PhrasePattern {
    pub regex: Regex,
    pub concepts: &'static [&'static str],
}

/// Idiomatic and emotional phrasing mapped to concept tags.
/// All matching rows contribute; none excludes another.
static PHRASE_PATTERN_SOURCES: &[(&str, &[&str])] = &[
    // Emotions
    (r"heart is heavy|heavy heart|feeling down|feeling low|feeling blue", &["sadness", "comfort", "sorrow"]),
    (r"can'?t sleep|trouble sleeping|sleepless|insomnia", &["peace", "rest", "anxiety"]),
    (r"feeling empty|feel empty|emptiness", &["purpose", "fulfillment", "joy"]),
    (r"burned out|burn out|exhausted|worn out", &["rest", "strength", "peace"]),
    (r"overwhelmed|too much|can'?t cope|can'?t handle", &["peace", "strength", "help"]),
    (r"stressed|stress|stressful", &["peace", "rest", "anxiety", "trust"]),
    (r"panic|panicking|panic attack", &["peace", "fear", "comfort"]),
    (r"crying|can'?t stop crying|tears", &["comfort", "sadness", "hope"]),
    (r"numb|feel nothing|emotionless", &["hope", "comfort", "healing"]),
    (r"angry at god|mad at god|why god", &["faith", "trust", "suffering"]),
    (r"feel like giving up|want to quit|give up", &["perseverance", "hope", "strength"]),
    (r"feel worthless|not good enough|inadequate", &["identity", "love", "worth", "grace"]),
    (r"feel unloved|nobody loves me|unlovable", &["love", "acceptance", "grace"]),
    (r"feel rejected|rejection|rejected", &["acceptance", "love", "comfort"]),
    (r"feel abandoned|abandoned", &["presence", "comfort", "faithfulness"]),
    // Relationships
    (r"marriage problems|marriage trouble|spouse|husband|wife", &["marriage", "love", "patience", "forgiveness"]),
    (r"divorce|getting divorced|separated", &["marriage", "comfort", "guidance", "healing"]),
    (r"boyfriend|girlfriend|dating|relationship", &["love", "wisdom", "purity", "patience"]),
    (r"broke up|breakup|break up|broken heart", &["comfort", "healing", "hope"]),
    (r"cheated|cheating|affair|unfaithful", &["forgiveness", "healing", "trust"]),
    (r"fight with|argument|arguing|disagreement", &["peace", "patience", "forgiveness"]),
    (r"don'?t trust|can'?t trust|trust issues", &["trust", "healing", "faith"]),
    (r"family problems|family issues|parents|siblings", &["family", "love", "patience", "forgiveness"]),
    (r"lonely|loneliness|no friends|alone", &["loneliness", "comfort", "presence"]),
    (r"friend betrayed|betrayal|betrayed", &["forgiveness", "trust", "healing"]),
    // Work and finances
    (r"lost my job|fired|laid off|unemployed", &["provision", "trust", "faith", "hope"]),
    (r"need a job|looking for work|job search", &["provision", "guidance", "patience"]),
    (r"hate my job|miserable at work|bad job", &["contentment", "patience", "guidance"]),
    (r"difficult boss|boss problems|coworker", &["patience", "wisdom", "peace"]),
    (r"money problems|financial|debt|bills|broke", &["provision", "trust", "contentment"]),
    (r"can'?t pay|can'?t afford", &["provision", "trust", "faith"]),
    (r"poor|poverty|struggling financially", &["provision", "hope", "contentment"]),
    // Health
    (r"sick|illness|disease|unwell|health problems", &["healing", "faith", "comfort", "hope"]),
    (r"cancer|terminal|dying", &["healing", "hope", "comfort", "eternal"]),
    (r"chronic pain|pain|suffering physically", &["healing", "comfort", "strength"]),
    (r"mental health|depression|bipolar", &["healing", "hope", "peace", "comfort"]),
    (r"addiction|addicted|alcoholic|drugs", &["freedom", "deliverance", "strength", "healing"]),
    (r"suicidal|suicide|end my life|don'?t want to live", &["hope", "life", "love", "help", "purpose"]),
    (r"pregnant|pregnancy|expecting", &["blessing", "children", "provision", "trust"]),
    (r"miscarriage|lost the baby|stillborn", &["comfort", "grief", "hope", "healing"]),
    // Loss and grief
    (r"someone died|death of|passed away|lost someone", &["death", "comfort", "hope", "resurrection"]),
    (r"grieving|grief|mourning", &["comfort", "grief", "hope"]),
    (r"funeral|memorial", &["comfort", "hope", "resurrection", "eternal"]),
    (r"miss them|missing someone|wish they were here", &["comfort", "hope"]),
    (r"widow|widower|lost my spouse", &["comfort", "provision", "hope"]),
    (r"lost my parent|mom died|dad died|parent passed", &["comfort", "grief", "hope"]),
    (r"lost my child|child died", &["comfort", "grief", "hope", "healing"]),
    // Faith and spirituality
    (r"don'?t feel god|god is silent|where is god", &["faith", "presence", "trust", "waiting"]),
    (r"losing faith|lost my faith|doubt god", &["faith", "doubt", "trust"]),
    (r"how to pray|teach me to pray|prayer life", &["prayer"]),
    (r"how to hear god|god'?s voice", &["guidance", "prayer"]),
    (r"backsliding|fell away|returned to sin", &["repentance", "grace", "forgiveness", "restoration"]),
    (r"tempted|temptation|struggling with sin", &["temptation", "strength", "victory", "purity"]),
    (r"how to be saved|become christian|accept jesus", &["salvation", "faith", "eternal"]),
    (r"church hurt|hurt by church|church problems", &["forgiveness", "healing", "fellowship"]),
    // Life decisions
    (r"don'?t know what to do|confused|uncertain", &["guidance", "wisdom", "direction"]),
    (r"big decision|major decision|life decision", &["guidance", "wisdom", "trust"]),
    (r"god'?s will|what should i do|which path", &["guidance", "wisdom", "direction"]),
    (r"moving|relocating|new city", &["guidance", "trust", "provision"]),
    (r"new job offer|career change", &["guidance", "wisdom", "provision"]),
    (r"getting married|engaged|wedding", &["marriage", "love", "blessing", "wisdom"]),
    (r"having a baby|starting family|first child", &["children", "blessing", "family", "trust"]),
    // Fear and worry
    (r"afraid of death|fear of dying|scared to die", &["death", "eternal", "hope", "fear"]),
    (r"afraid of future|worried about tomorrow", &["future", "trust", "anxiety", "provision"]),
    (r"fear of failure|afraid to fail", &["courage", "fear", "faith", "strength"]),
    (r"worried about children|fear for my kids", &["protection", "trust", "prayer", "family"]),
    // Success and failure
    (r"failed|failure|messed up|made mistake", &["grace", "forgiveness", "hope", "restoration"]),
    (r"jealous of|envy|others have more", &["contentment", "jealousy", "gratitude"]),
    (r"ashamed|shame|embarrassed", &["grace", "forgiveness", "acceptance"]),
    // Common needs
    (r"need help|help me|i need", &["help", "strength", "provision"]),
    (r"need peace|want peace", &["peace"]),
    (r"need strength|give me strength", &["strength"]),
    (r"need hope|give me hope", &["hope"]),
    (r"need wisdom|need advice", &["wisdom", "guidance"]),
    (r"need courage|need bravery", &["courage", "fear", "strength"]),
    (r"need patience|be patient", &["patience"]),
    (r"need love|feel loved", &["love"]),
    (r"need comfort|need comforting", &["comfort"]),
    (r"need healing|heal me", &["healing"]),
    (r"thank god|grateful|thankful|blessed", &["thanksgiving", "gratitude", "praise"]),
];

/// Ordered "trigger phrase + captured rest" patterns for topic extraction
static TOPIC_PATTERN_SOURCES: &[&str] = &[
    r"what does the bible say about\s+(.+)",
    r"bible says about\s+(.+)",
    r"scripture about\s+(.+)",
    r"verses? about\s+(.+)",
    r"find verses? (?:about|on|for)\s+(.+)",
    r"find\s+(.+)",
    r"search for\s+(.+)",
    r"search\s+(.+)",
    r"show me verses? (?:about|on|for)\s+(.+)",
    r"show me\s+(.+)",
    r"look for\s+(.+)",
    r"look up\s+(.+)",
];

/// Trigger substrings stripped from a query when no topic pattern captures
pub static TOPIC_TRIGGERS: &[&str] = &[
    "find",
    "search",
    "show me",
    "look for",
    "look up",
    "verses about",
    "verse about",
    "what does the bible say about",
    "scripture about",
];

/// Replies declining a bookmark offer
pub static DECLINE_PHRASES: &[&str] = &[
    "no thanks",
    "no thank you",
    "skip",
    "not now",
    "maybe later",
];

pub static GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Whole-message replies marking a reading as finished
pub static COMPLETION_WORDS: &[&str] = &["done", "finished", "completed"];

/// Bare replies that are never treated as a search
pub static COMMAND_WORDS: &[&str] = &["yes", "no", "ok", "okay"];

/// Words requesting that a verse be saved
pub static BOOKMARK_WORDS: &[&str] = &["save", "bookmark", "remember", "mark"];

pub static PROGRESS_PHRASES: &[&str] = &[
    "my progress",
    "show progress",
    "how far",
    "what chapter am i",
    "where am i",
];

pub static DAILY_READING_PHRASES: &[&str] = &[
    "read today",
    "daily reading",
    "next chapter",
    "continue reading",
    "today's reading",
    "todays reading",
    "reading for today",
];

pub static SEARCH_TRIGGERS: &[&str] = &[
    "find",
    "search",
    "verses about",
    "verse about",
    "show me",
    "scripture about",
    "what does the bible say about",
    "bible says about",
    "look for",
    "look up",
];

/// Emotion words matched as substrings of the message
pub static CHALLENGE_WORDS: &[&str] = &[
    "struggle",
    "struggling",
    "anxious",
    "anxiety",
    "afraid",
    "fear",
    "worried",
    "worry",
    "sad",
    "depressed",
    "depression",
    "angry",
    "anger",
    "lonely",
    "loneliness",
    "hopeless",
    "desperate",
    "hurt",
];

/// Short topics that route straight to a search
pub static BIBLE_TOPICS: &[&str] = &[
    "love", "faith", "hope", "grace", "peace", "joy", "wisdom", "strength",
    "forgiveness", "mercy", "salvation", "prayer", "healing", "trust",
    "patience", "kindness", "humility", "courage", "fear", "anxiety",
    "death", "life", "heaven", "hell", "sin", "repentance", "baptism",
    "holy spirit", "jesus", "god", "father", "christ", "lord", "king",
    "blessing", "worship", "praise", "thanksgiving", "obedience",
    "righteousness", "justice", "truth", "light", "darkness", "evil",
    "temptation", "devil", "satan", "angel", "miracle", "resurrection",
    "eternal", "glory", "kingdom", "gospel", "commandment", "covenant",
    "prophet", "apostle", "disciple", "church", "marriage", "family",
    "children", "money", "wealth", "poverty", "work", "rest", "sabbath",
];

lazy_static! {
    pub static ref PHRASE_PATTERNS: Vec<PhrasePattern> = PHRASE_PATTERN_SOURCES
        .iter()
        .map(|&(pattern, concepts)| PhrasePattern {
            regex: Regex::new(pattern).unwrap(),
            concepts,
        })
        .collect();

    pub static ref TOPIC_PATTERNS: Vec<Regex> = TOPIC_PATTERN_SOURCES
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect();

    /// Explicit "save all: ref, ref, ..." command
    pub static ref SAVE_ALL_PATTERN: Regex =
        Regex::new(r"^(?:save|bookmark)\s+all\s*:?\s*(.+)$").unwrap();

    /// Single-word synonyms expanded into concept tags
    pub static ref WORD_SYNONYMS: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        // Feelings
        m.insert("scared", vec!["fear", "afraid", "courage"]);
        m.insert("afraid", vec!["fear", "courage"]);
        m.insert("worried", vec!["anxiety", "worry", "trust"]);
        m.insert("anxious", vec!["anxiety", "peace"]);
        m.insert("happy", vec!["joy"]);
        m.insert("sad", vec!["sadness", "sorrow", "comfort"]);
        m.insert("depressed", vec!["sadness", "despair", "hope"]);
        m.insert("angry", vec!["anger", "patience"]);
        m.insert("mad", vec!["anger"]);
        m.insert("frustrated", vec!["patience", "peace"]);
        m.insert("peaceful", vec!["peace"]);
        m.insert("loving", vec!["love"]);
        m.insert("hopeful", vec!["hope"]);
        m.insert("hopeless", vec!["hope", "despair"]);
        m.insert("forgiving", vec!["forgiveness"]);
        m.insert("merciful", vec!["mercy"]);
        m.insert("wise", vec!["wisdom"]);
        m.insert("strong", vec!["strength"]);
        m.insert("weak", vec!["strength", "weakness"]);
        m.insert("patient", vec!["patience"]);
        m.insert("humble", vec!["humility"]);
        m.insert("proud", vec!["pride", "humility"]);
        m.insert("jealous", vec!["jealousy", "envy", "contentment"]);
        m.insert("grateful", vec!["thanksgiving", "gratitude"]);
        m.insert("thankful", vec!["thanksgiving", "gratitude"]);
        m.insert("lonely", vec!["loneliness", "comfort"]);
        m.insert("alone", vec!["loneliness", "presence"]);
        m.insert("lost", vec!["guidance", "direction"]);
        m.insert("confused", vec!["wisdom", "guidance"]);
        m.insert("hurt", vec!["healing", "comfort"]);

        // Circumstances
        m.insert("sick", vec!["healing"]);
        m.insert("dying", vec!["death", "life", "hope"]);
        m.insert("grieving", vec!["grief", "comfort"]);
        m.insert("mourning", vec!["comfort", "grief"]);
        m.insert("money", vec!["provision", "wealth", "contentment"]);
        m.insert("poor", vec!["provision", "poverty", "contentment"]);
        m.insert("job", vec!["work", "provision"]);
        m.insert("marriage", vec!["marriage", "love"]);
        m.insert("divorced", vec!["divorce", "healing"]);
        m.insert("children", vec!["children", "family"]);
        m.insert("family", vec!["family", "love"]);
        m.insert("friend", vec!["friendship"]);
        m.insert("enemy", vec!["enemies", "forgiveness"]);

        // Faith
        m.insert("sin", vec!["forgiveness", "repentance", "grace"]);
        m.insert("sinned", vec!["forgiveness", "repentance"]);
        m.insert("tempted", vec!["temptation", "strength"]);
        m.insert("pray", vec!["prayer"]);
        m.insert("worship", vec!["worship", "praise"]);
        m.insert("believe", vec!["faith", "belief"]);
        m.insert("trust", vec!["trust", "faith"]);
        m.insert("doubting", vec!["doubt", "faith"]);
        m.insert("saved", vec!["salvation"]);
        m.insert("heaven", vec!["heaven", "eternal"]);
        m.insert("jesus", vec!["jesus", "christ", "savior"]);
        m.insert("forgive", vec!["forgiveness"]);
        m.insert("heal", vec!["healing"]);
        m.insert("restore", vec!["restoration", "healing"]);
        m.insert("guide", vec!["guidance"]);
        m.insert("protect", vec!["protection"]);
        m.insert("comfort", vec!["comfort"]);
        m
    };

    /// Function words excluded from token-level tag candidates
    pub static ref STOP_WORDS: HashSet<&'static str> = [
        "a", "an", "the", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "do", "does", "did", "will", "would", "could",
        "should", "may", "might", "must", "shall", "can", "need", "dare",
        "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by",
        "from", "as", "into", "through", "during", "before", "after",
        "above", "below", "between", "under", "again", "further", "then",
        "once", "here", "there", "when", "where", "why", "how", "all",
        "each", "few", "more", "most", "other", "some", "such", "no", "nor",
        "not", "only", "own", "same", "so", "than", "too", "very", "just",
        "and", "but", "if", "or", "because", "until", "while", "about",
        "what", "which", "who", "whom", "this", "that", "these", "those",
        "am", "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
        "you", "your", "yours", "yourself", "yourselves", "he", "him", "his",
        "himself", "she", "her", "hers", "herself", "it", "its", "itself",
        "they", "them", "their", "theirs", "themselves", "tell", "say",
        "says", "said", "bible", "verse", "verses", "scripture", "scriptures",
        "find", "show", "give", "get", "want", "know", "think", "please",
        "thanks", "thank", "something", "anything", "everything",
        "really", "like", "going", "today", "now", "always", "never",
    ]
    .into_iter()
    .collect();
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// True when `text` equals `phrase` or starts with it followed by a
/// non-alphanumeric character.
pub fn starts_with_phrase(text: &str, phrase: &str) -> bool {
    match text.strip_prefix(phrase) {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(true, |next| !next.is_alphanumeric()),
        None => false,
    }
}

pub fn is_greeting(text: &str) -> bool {
    GREETINGS
        .iter()
        .any(|greeting| starts_with_phrase(text, greeting))
}

pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(PHRASE_PATTERNS.len(), PHRASE_PATTERN_SOURCES.len());
        assert_eq!(TOPIC_PATTERNS.len(), TOPIC_PATTERN_SOURCES.len());
        assert!(SAVE_ALL_PATTERN.is_match("save all: john 3:16"));
    }

    #[test]
    fn test_every_phrase_pattern_has_concepts() {
        assert!(PHRASE_PATTERNS.iter().all(|p| !p.concepts.is_empty()));
    }

    #[test]
    fn test_starts_with_phrase_respects_word_boundary() {
        assert!(starts_with_phrase("hi", "hi"));
        assert!(starts_with_phrase("hi there", "hi"));
        assert!(starts_with_phrase("hi!", "hi"));
        assert!(!starts_with_phrase("history", "hi"));
        assert!(!starts_with_phrase("oh hi", "hi"));
    }

    #[test]
    fn test_greetings() {
        assert!(is_greeting("good morning friend"));
        assert!(is_greeting("hey"));
        assert!(!is_greeting("heaven"));
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("bible"));
        assert!(!is_stop_word("grace"));
    }
}
