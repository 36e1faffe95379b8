use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Structured Bible citation: `Book Chapter[:Verse[-VerseEnd]]`
///
/// An absent `verse_start` means the whole chapter; an absent `verse_end`
/// with a present `verse_start` means a single verse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseReference {
    pub book: String,
    pub chapter: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_end: Option<u32>,
}

impl VerseReference {
    /// Build a reference, rejecting zero chapters/verses, an end verse
    /// without a start verse, and ranges that run backwards.
    pub fn new(
        book: impl Into<String>,
        chapter: u32,
        verse_start: Option<u32>,
        verse_end: Option<u32>,
    ) -> Option<Self> {
        if chapter == 0 {
            return None;
        }
        match (verse_start, verse_end) {
            (Some(0), _) => return None,
            (None, Some(_)) => return None,
            (Some(start), Some(end)) if end < start => return None,
            _ => {}
        }

        Some(Self {
            book: book.into(),
            chapter,
            verse_start,
            verse_end,
        })
    }

    pub fn chapter(book: impl Into<String>, chapter: u32) -> Option<Self> {
        Self::new(book, chapter, None, None)
    }

    pub fn verse(book: impl Into<String>, chapter: u32, verse: u32) -> Option<Self> {
        Self::new(book, chapter, Some(verse), None)
    }

    /// Inclusive verse span, or `None` for a whole chapter
    pub fn verses(&self) -> Option<RangeInclusive<u32>> {
        self.verse_start
            .map(|start| start..=self.verse_end.unwrap_or(start))
    }
}

impl fmt::Display for VerseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;
        if let Some(start) = self.verse_start {
            write!(f, ":{}", start)?;
            if let Some(end) = self.verse_end {
                write!(f, "-{}", end)?;
            }
        }
        Ok(())
    }
}
