use crate::models::{ChapterRef, Testament, VerseReference, VerseText};
use crate::services::corpus::ScriptureCorpus;
use crate::services::keyword_extractor::KeywordExtractor;
use crate::services::reference_parser::parse_reference;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

/// Verses contributed by each emotion entry that a challenge word hits
const VERSES_PER_EMOTION: usize = 2;
/// Cap on verses returned for a challenge
const MAX_RELEVANT_VERSES: usize = 3;
/// Verses taken from a loosely matching concept during search fallback
const PARTIAL_CONCEPT_VERSES: usize = 3;

/// Concept tag to verse citations, best first
static CONCEPT_SOURCES: &[(&str, &[&str])] = &[
    // Emotions
    ("anxiety", &["Philippians 4:6-7", "Matthew 6:34", "Isaiah 41:10", "1 Peter 5:7", "Psalm 55:22"]),
    ("fear", &["2 Timothy 1:7", "Isaiah 41:10", "Psalm 56:3", "Joshua 1:9", "Deuteronomy 31:6"]),
    ("sad", &["Psalm 34:18", "Matthew 5:4", "2 Corinthians 1:3-4", "Psalm 147:3", "John 14:1"]),
    ("sadness", &["Psalm 34:18", "Matthew 5:4", "2 Corinthians 1:3-4"]),
    ("lonely", &["Deuteronomy 31:6", "Psalm 68:6", "Matthew 28:20", "Hebrews 13:5"]),
    ("angry", &["Ephesians 4:26-27", "Proverbs 15:1", "James 1:19-20", "Psalm 37:8"]),
    ("doubt", &["James 1:6-8", "Hebrews 11:1", "Mark 9:24", "Jude 1:22"]),
    ("guilt", &["1 John 1:9", "Romans 8:1", "Psalm 103:12", "Isaiah 43:25"]),
    ("hopeless", &["Jeremiah 29:11", "Romans 15:13", "Psalm 42:5", "Lamentations 3:22-23"]),
    ("weak", &["Isaiah 40:31", "Philippians 4:13", "Psalm 46:1", "2 Corinthians 12:9"]),
    // Spiritual concepts
    ("love", &["1 Corinthians 13:4-8", "John 3:16", "1 John 4:8", "Romans 8:38-39", "John 15:12"]),
    ("peace", &["John 14:27", "Philippians 4:7", "Romans 5:1", "Isaiah 26:3", "Colossians 3:15"]),
    ("joy", &["Nehemiah 8:10", "Psalm 16:11", "John 15:11", "Romans 15:13", "Philippians 4:4"]),
    ("faith", &["Hebrews 11:1", "Romans 10:17", "James 2:17", "2 Corinthians 5:7", "Mark 11:22"]),
    ("hope", &["Romans 15:13", "Jeremiah 29:11", "Hebrews 6:19", "Psalm 42:11", "Romans 8:24-25"]),
    ("trust", &["Proverbs 3:5-6", "Psalm 56:3", "Isaiah 26:4", "Nahum 1:7", "Psalm 37:5"]),
    ("prayer", &["Matthew 6:6", "Philippians 4:6", "1 Thessalonians 5:17", "James 5:16", "Luke 18:1"]),
    ("worship", &["Psalm 95:6", "John 4:24", "Psalm 100:2", "Romans 12:1", "Hebrews 13:15"]),
    // Life situations
    ("strength", &["Philippians 4:13", "Isaiah 40:31", "Psalm 46:1", "2 Corinthians 12:9"]),
    ("wisdom", &["James 1:5", "Proverbs 3:5-6", "Colossians 3:16", "Proverbs 2:6"]),
    ("guidance", &["Proverbs 3:5-6", "Psalm 32:8", "Isaiah 30:21", "James 1:5"]),
    ("patience", &["James 1:3-4", "Romans 12:12", "Galatians 5:22", "Psalm 37:7"]),
    ("forgiveness", &["1 John 1:9", "Ephesians 4:32", "Matthew 6:14-15", "Colossians 3:13"]),
    ("healing", &["Psalm 147:3", "Jeremiah 17:14", "Exodus 15:26", "1 Peter 2:24"]),
    ("comfort", &["2 Corinthians 1:3-4", "Psalm 23:4", "Matthew 5:4", "John 14:1"]),
    ("provision", &["Philippians 4:19", "Matthew 6:26", "Psalm 23:1", "Luke 12:24"]),
    // Common Bible words
    ("beginning", &["Genesis 1:1", "John 1:1", "Proverbs 9:10", "Psalm 111:10"]),
    ("shepherd", &["Psalm 23:1", "John 10:11", "Hebrews 13:20", "1 Peter 5:4"]),
    ("light", &["John 8:12", "Matthew 5:14", "Psalm 119:105", "1 John 1:5"]),
    ("life", &["John 10:10", "John 14:6", "Romans 6:23", "1 John 5:12"]),
    ("salvation", &["Romans 10:9", "Ephesians 2:8-9", "Acts 4:12", "John 3:16"]),
    ("grace", &["Ephesians 2:8-9", "2 Corinthians 12:9", "Romans 3:24", "Titus 2:11"]),
    ("eternal", &["John 3:16", "John 17:3", "1 John 5:13", "Romans 6:23"]),
    ("kingdom", &["Matthew 6:33", "Luke 17:21", "Mark 1:15", "Matthew 5:3"]),
    ("glory", &["Romans 8:18", "2 Corinthians 4:17", "Psalm 19:1", "Isaiah 60:1"]),
    ("heaven", &["Matthew 6:20", "Philippians 3:20", "John 14:2", "Revelation 21:4"]),
];

/// Emotion key, trigger words, and the concept whose verses it borrows
static EMOTION_SOURCES: &[(&str, &[&str], &str)] = &[
    ("anxiety", &["anxious", "worried", "worry", "stress", "overwhelmed"], "anxiety"),
    ("fear", &["afraid", "scared", "fear", "fearful", "terror"], "fear"),
    ("sadness", &["sad", "depressed", "down", "sorrow", "grief"], "sad"),
    ("loneliness", &["lonely", "alone", "isolated", "abandoned"], "lonely"),
    ("anger", &["angry", "mad", "furious", "rage", "frustrated"], "angry"),
    ("doubt", &["doubt", "uncertain", "confused", "questioning"], "doubt"),
    ("guilt", &["guilty", "shame", "regret", "condemned"], "guilt"),
    ("hope", &["hopeless", "despair", "discouraged", "giving up"], "hopeless"),
    ("strength", &["weak", "tired", "exhausted", "weary"], "weak"),
    ("guidance", &["lost", "direction", "guidance", "wisdom", "decision"], "guidance"),
];

static DAILY_VERSE_SOURCES: &[&str] = &[
    "Philippians 4:13", "Jeremiah 29:11", "Proverbs 3:5-6",
    "Isaiah 40:31", "Romans 8:28", "Psalm 23:1",
    "John 3:16", "Matthew 6:33", "Joshua 1:9",
    "Psalm 46:1", "2 Corinthians 12:9", "Philippians 4:6-7",
    "Isaiah 41:10", "Proverbs 16:3", "Psalm 37:4",
    "Matthew 11:28", "Romans 15:13", "Psalm 118:24",
    "Colossians 3:23", "James 1:5",
];

static REFLECTION_QUESTIONS: &[(&str, &[&str])] = &[
    ("Matthew", &[
        "How does this passage challenge your understanding of discipleship?",
        "What does Jesus' teaching here reveal about God's kingdom?",
        "How can you apply this teaching in your daily life?",
    ]),
    ("Psalms", &[
        "What does this psalm teach you about worship?",
        "How can you make this prayer your own today?",
        "What aspect of God's character is highlighted here?",
    ]),
    ("Proverbs", &[
        "What wisdom can you apply to a current situation?",
        "How does this proverb align with or challenge your thinking?",
        "What practical step can you take based on this wisdom?",
    ]),
    ("Romans", &[
        "How does this deepen your understanding of the Gospel?",
        "What does this passage teach about grace?",
        "How should this truth transform your daily walk?",
    ]),
];

static DEFAULT_REFLECTION_QUESTIONS: &[&str] = &[
    "What is God teaching you through this passage?",
    "How can you apply this truth today?",
    "What stands out to you most in this reading?",
    "How does this passage point to Christ?",
    "What action will you take in response to this Scripture?",
];

/// Presented when a challenge matches no emotion or concept
static COMFORT_VERSE_SOURCES: &[&str] = &["Psalm 46:1", "Romans 8:28", "Philippians 4:6"];

/// Label attached to comfort verses
pub const GENERAL_COMFORT: &str = "general_comfort";

struct EmotionEntry {
    key: &'static str,
    keywords: &'static [&'static str],
    verses: Vec<VerseReference>,
}

fn parse_all(citations: &[&str]) -> Vec<VerseReference> {
    citations.iter().filter_map(|c| parse_reference(c)).collect()
}

lazy_static! {
    static ref CONCEPT_VERSES: Vec<(&'static str, Vec<VerseReference>)> = CONCEPT_SOURCES
        .iter()
        .map(|&(concept, citations)| (concept, parse_all(citations)))
        .collect();

    static ref EMOTION_TABLE: Vec<EmotionEntry> = EMOTION_SOURCES
        .iter()
        .map(|&(key, keywords, concept)| EmotionEntry {
            key,
            keywords,
            verses: concept_verses(concept).to_vec(),
        })
        .collect();

    static ref DAILY_VERSES: Vec<VerseReference> = parse_all(DAILY_VERSE_SOURCES);

    static ref COMFORT_VERSES: Vec<VerseReference> = parse_all(COMFORT_VERSE_SOURCES);
}

fn concept_verses(concept: &str) -> &'static [VerseReference] {
    CONCEPT_VERSES
        .iter()
        .find(|(key, _)| *key == concept)
        .map(|(_, verses)| verses.as_slice())
        .unwrap_or(&[])
}

/// 64-bit FNV-1a
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}

/// Daily reference for a calendar date; stable for the whole day
pub fn verse_of_the_day(date: NaiveDate) -> VerseReference {
    let key = date.format("%Y-%m-%d").to_string();
    let index = (fnv1a(key.as_bytes()) % DAILY_VERSES.len() as u64) as usize;
    DAILY_VERSES[index].clone()
}

/// Reflection prompt for a passage, chosen by chapter number
pub fn reflection_question(book: &str, chapter: u32) -> &'static str {
    let questions = REFLECTION_QUESTIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(book))
        .map(|(_, questions)| *questions)
        .unwrap_or(DEFAULT_REFLECTION_QUESTIONS);

    questions[chapter as usize % questions.len()]
}

/// Retrieval paths driven by classified intents
#[derive(Clone)]
pub struct ScriptureMatcher {
    corpus: Arc<dyn ScriptureCorpus>,
    extractor: KeywordExtractor,
}

impl ScriptureMatcher {
    pub fn new(corpus: Arc<dyn ScriptureCorpus>) -> Self {
        Self {
            corpus,
            extractor: KeywordExtractor::new(),
        }
    }

    fn resolve(&self, reference: &VerseReference, label: &str) -> Option<VerseText> {
        let verse = self.corpus.get_verse_by_reference(reference);
        if verse.is_none() {
            debug!("Dropping unresolvable reference {}", reference);
        }
        verse.map(|v| v.matched_by(label))
    }

    /// Verses for a set of challenge words and, optionally, the concepts in
    /// the original message. Empty when nothing matches.
    pub fn find_relevant_verses(
        &self,
        emotions: &BTreeSet<String>,
        message: Option<&str>,
    ) -> Vec<VerseText> {
        let mut candidates: Vec<(&VerseReference, &str)> = Vec::new();

        for emotion in emotions {
            for entry in EMOTION_TABLE.iter() {
                if entry.key == emotion.as_str() || entry.keywords.contains(&emotion.as_str()) {
                    candidates.extend(
                        entry
                            .verses
                            .iter()
                            .take(VERSES_PER_EMOTION)
                            .map(|r| (r, entry.key)),
                    );
                }
            }
        }

        let concepts = message
            .map(|m| self.extractor.extract(m))
            .unwrap_or_default();
        for (concept, verses) in CONCEPT_VERSES.iter() {
            if concepts.contains(*concept) {
                if let Some(first) = verses.first() {
                    candidates.push((first, *concept));
                }
            }
        }

        let mut seen = HashSet::new();
        let verses: Vec<VerseText> = candidates
            .into_iter()
            .filter(|(reference, _)| seen.insert(reference.to_string()))
            .filter_map(|(reference, label)| self.resolve(reference, label))
            .take(MAX_RELEVANT_VERSES)
            .collect();

        info!(
            "Found {} relevant verses for {} emotion words",
            verses.len(),
            emotions.len()
        );
        verses
    }

    /// Generic comfort verses presented when a challenge matched nothing
    pub fn comfort_verses(&self) -> Vec<VerseText> {
        COMFORT_VERSES
            .iter()
            .filter_map(|reference| self.resolve(reference, GENERAL_COMFORT))
            .collect()
    }

    /// Text search balanced across testaments, falling back to the concept
    /// table when the text search finds nothing.
    pub fn search_verses(&self, topic: &str, max_results: usize) -> Vec<VerseText> {
        let topic = topic.trim().to_lowercase();
        if topic.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let old = self.corpus.search_text(&topic, max_results, Some(Testament::Old));
        let new = self.corpus.search_text(&topic, max_results, Some(Testament::New));

        let mut results = Vec::with_capacity(max_results);
        let (mut old, mut new) = (old.into_iter(), new.into_iter());
        while results.len() < max_results {
            let before = results.len();
            results.extend(old.next());
            if results.len() < max_results {
                results.extend(new.next());
            }
            if results.len() == before {
                break;
            }
        }

        if !results.is_empty() {
            debug!("Text search for '{}' found {} verses", topic, results.len());
            return results;
        }

        self.search_concepts(&topic, max_results)
    }

    fn search_concepts(&self, topic: &str, max_results: usize) -> Vec<VerseText> {
        if let Some((concept, verses)) = CONCEPT_VERSES.iter().find(|(key, _)| *key == topic) {
            let found = self.resolve_all(verses, concept, max_results);
            if !found.is_empty() {
                return found;
            }
        }

        for (concept, verses) in CONCEPT_VERSES.iter() {
            if topic.contains(concept) || concept.contains(topic) {
                let limit = PARTIAL_CONCEPT_VERSES.min(max_results);
                let found = self.resolve_all(verses, concept, limit);
                if !found.is_empty() {
                    debug!("Concept fallback '{}' matched '{}'", concept, topic);
                    return found;
                }
            }
        }

        Vec::new()
    }

    fn resolve_all(&self, references: &[VerseReference], label: &str, limit: usize) -> Vec<VerseText> {
        references
            .iter()
            .take(limit)
            .filter_map(|reference| self.resolve(reference, label))
            .collect()
    }

    pub fn get_specific_verse(&self, reference: &VerseReference) -> Option<VerseText> {
        self.corpus.get_verse_by_reference(reference)
    }

    /// Whole-chapter text for each scheduled chapter the corpus holds
    pub fn fetch_chapters(&self, chapters: &[ChapterRef]) -> Vec<VerseText> {
        chapters
            .iter()
            .filter_map(|chapter| VerseReference::chapter(chapter.book.as_str(), chapter.chapter))
            .filter_map(|reference| self.corpus.get_verse_by_reference(&reference))
            .collect()
    }

    pub fn verse_of_the_day(&self, date: NaiveDate) -> Option<VerseText> {
        self.corpus.get_verse_by_reference(&verse_of_the_day(date))
    }
}
