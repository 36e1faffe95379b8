//! Bible citation parsing: `Book Chapter[:Verse[-VerseEnd]]`.
//!
//! Book grammars are tried in a fixed order (numbered, multi-word, single
//! word) so that "1 John 3:16" never parses as book "1" or as plain "John".

use crate::models::book::{resolve_book_name, MULTI_WORD_BOOKS};
use crate::models::VerseReference;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

const CHAPTER_VERSE_SUFFIX: &str =
    r"\s+(?P<chapter>\d+)(?:\s*:\s*(?P<verse>\d+)(?:\s*-\s*(?P<end>\d+))?)?\b";

struct ReferenceRule {
    name: &'static str,
    regex: Regex,
    book: fn(&Captures) -> Option<&'static str>,
}

lazy_static! {
    static ref REFERENCE_RULES: Vec<ReferenceRule> = {
        let multi_word = MULTI_WORD_BOOKS
            .iter()
            .map(|(name, _)| name.split_whitespace().collect::<Vec<_>>().join(r"\s+"))
            .collect::<Vec<_>>()
            .join("|");

        vec![
            ReferenceRule {
                name: "numbered_book",
                regex: Regex::new(&format!(
                    r"(?i)^(?P<num>[1-3])\s*(?P<book>[a-z]+){}",
                    CHAPTER_VERSE_SUFFIX
                ))
                .unwrap(),
                book: |caps| resolve_book_name(&format!("{} {}", &caps["num"], &caps["book"])),
            },
            ReferenceRule {
                name: "multi_word_book",
                regex: Regex::new(&format!(
                    r"(?i)^(?P<book>{}){}",
                    multi_word, CHAPTER_VERSE_SUFFIX
                ))
                .unwrap(),
                book: |caps| resolve_book_name(&caps["book"]),
            },
            ReferenceRule {
                name: "single_word_book",
                regex: Regex::new(&format!(
                    r"(?i)^(?P<book>[a-z]+){}",
                    CHAPTER_VERSE_SUFFIX
                ))
                .unwrap(),
                book: |caps| resolve_book_name(&caps["book"]),
            },
        ]
    };
}

/// A reference located inside a longer message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    pub reference: VerseReference,
    /// Byte offset of the citation start in the searched text
    pub start: usize,
    /// Byte offset just past the citation
    pub end: usize,
}

fn parse_number(caps: &Captures, group: &str) -> Option<Option<u32>> {
    match caps.name(group) {
        Some(m) => m.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}

/// Apply one rule at the start of `text`, returning the reference and the
/// length of the consumed prefix.
fn apply_rule(rule: &ReferenceRule, text: &str) -> Option<(VerseReference, usize)> {
    let caps = rule.regex.captures(text)?;
    let book = (rule.book)(&caps)?;

    let chapter = parse_number(&caps, "chapter")??;
    let verse_start = parse_number(&caps, "verse")?;
    let verse_end = parse_number(&caps, "end")?;

    let reference = VerseReference::new(book, chapter, verse_start, verse_end)?;
    let consumed = caps.get(0).map(|m| m.end())?;

    debug!(rule = rule.name, %reference, "reference rule matched");
    Some((reference, consumed))
}

fn parse_at(text: &str) -> Option<(VerseReference, usize)> {
    REFERENCE_RULES.iter().find_map(|rule| apply_rule(rule, text))
}

/// Parse a message that consists of exactly one citation.
///
/// Surrounding whitespace and trailing `.`, `?` or `!` are ignored. The
/// returned book is always the canonical name.
pub fn parse_reference(text: &str) -> Option<VerseReference> {
    let text = text.trim().trim_end_matches(['.', '?', '!']).trim_end();
    if text.is_empty() {
        return None;
    }

    REFERENCE_RULES.iter().find_map(|rule| {
        apply_rule(rule, text)
            .filter(|(_, consumed)| *consumed == text.len())
            .map(|(reference, _)| reference)
    })
}

/// Every citation embedded in `text`, left to right. Word starts are
/// scanned in order and scanning resumes after each citation found.
pub fn find_references(text: &str) -> Vec<ReferenceMatch> {
    let mut found = Vec::new();
    let mut resume_at = 0;
    let mut previous: Option<char> = None;

    for (index, ch) in text.char_indices() {
        let word_start = ch.is_alphanumeric() && previous.map_or(true, |p| !p.is_alphanumeric());
        previous = Some(ch);
        if !word_start || index < resume_at {
            continue;
        }

        if let Some((reference, consumed)) = parse_at(&text[index..]) {
            resume_at = index + consumed;
            found.push(ReferenceMatch {
                reference,
                start: index,
                end: resume_at,
            });
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(book: &str, chapter: u32, start: u32, end: Option<u32>) -> VerseReference {
        VerseReference::new(book, chapter, Some(start), end).unwrap()
    }

    #[test]
    fn test_single_verse() {
        assert_eq!(parse_reference("John 3:16"), Some(verse("John", 3, 16, None)));
    }

    #[test]
    fn test_verse_range() {
        assert_eq!(
            parse_reference("Romans 8:28-30"),
            Some(verse("Romans", 8, 28, Some(30)))
        );
        assert_eq!(
            parse_reference("romans 8 : 28 - 30"),
            Some(verse("Romans", 8, 28, Some(30)))
        );
    }

    #[test]
    fn test_whole_chapter() {
        assert_eq!(
            parse_reference("psalm 23"),
            VerseReference::chapter("Psalms", 23)
        );
    }

    #[test]
    fn test_numbered_books() {
        assert_eq!(
            parse_reference("1 John 3:16"),
            Some(verse("1 John", 3, 16, None))
        );
        assert_eq!(
            parse_reference("2cor 12:9"),
            Some(verse("2 Corinthians", 12, 9, None))
        );
        assert_eq!(parse_reference("4 John 3:16"), None);
    }

    #[test]
    fn test_multi_word_books() {
        assert_eq!(
            parse_reference("Song of Solomon 2:4"),
            Some(verse("Song of Solomon", 2, 4, None))
        );
        assert_eq!(
            parse_reference("song of songs 1"),
            VerseReference::chapter("Song of Solomon", 1)
        );
    }

    #[test]
    fn test_abbreviations_resolve_to_canonical_names() {
        assert_eq!(
            parse_reference("rom 8:28"),
            Some(verse("Romans", 8, 28, None))
        );
        assert_eq!(parse_reference("ro 8:28"), None);
    }

    #[test]
    fn test_trailing_punctuation_is_ignored() {
        assert_eq!(parse_reference("John 3:16?"), Some(verse("John", 3, 16, None)));
        assert_eq!(parse_reference("  Jn 3:16 "), None);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert_eq!(parse_reference("John 0:16"), None);
        assert_eq!(parse_reference("John 3:0"), None);
        assert_eq!(parse_reference("Romans 8:30-28"), None);
        assert_eq!(parse_reference("John 99999999999:1"), None);
    }

    #[test]
    fn test_non_references() {
        assert_eq!(parse_reference(""), None);
        assert_eq!(parse_reference("hello"), None);
        assert_eq!(parse_reference("hello 5"), None);
        assert_eq!(parse_reference("read John 3:16"), None);
        assert_eq!(parse_reference("John 3:16 please"), None);
    }

    #[test]
    fn test_rendered_reference_reparses() {
        let references = [
            verse("John", 3, 16, None),
            verse("1 John", 4, 8, None),
            verse("Romans", 8, 28, Some(30)),
            verse("Song of Solomon", 2, 4, None),
            VerseReference::chapter("Psalms", 23).unwrap(),
        ];
        for reference in references {
            assert_eq!(parse_reference(&reference.to_string()), Some(reference));
        }
    }

    #[test]
    fn test_find_reference_inside_message() {
        let found = find_references("please save John 3:16 for me").remove(0);
        assert_eq!(found.reference, verse("John", 3, 16, None));
        assert_eq!(found.start, 12);
        assert_eq!(found.end, 21);
    }

    #[test]
    fn test_find_reference_prefers_numbered_book() {
        let found = find_references("bookmark 1 John 1:9").remove(0);
        assert_eq!(found.reference, verse("1 John", 1, 9, None));
        assert_eq!(found.start, 9);
    }

    #[test]
    fn test_find_references_lists_every_citation() {
        let found = find_references("i read psalm 23 today, save john 3:16");
        let references: Vec<_> = found.iter().map(|m| m.reference.clone()).collect();
        assert_eq!(
            references,
            vec![VerseReference::chapter("Psalms", 23).unwrap(), verse("John", 3, 16, None)]
        );
        assert_eq!((found[0].start, found[0].end), (7, 15));
    }

    #[test]
    fn test_find_references_does_not_rescan_inside_a_citation() {
        let found = find_references("1 john 3:16");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].reference, verse("1 John", 3, 16, None));
    }

    #[test]
    fn test_find_reference_without_citation() {
        assert!(find_references("save this verse").is_empty());
        assert!(find_references("").is_empty());
    }
}
