use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of books in the Old Testament partition of the canon
pub const OLD_TESTAMENT_BOOK_COUNT: usize = 39;

/// The 66 canonical book names in canonical order
pub static CANONICAL_BOOKS: [&str; 66] = [
    // Old Testament
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    // New Testament
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Multi-word book names (and their aliases) that the single-word
/// reference grammar cannot capture, paired with the canonical name.
pub static MULTI_WORD_BOOKS: [(&str, &str); 2] = [
    ("song of solomon", "Song of Solomon"),
    ("song of songs", "Song of Solomon"),
];

/// Alternate spellings that are neither equal to nor a prefix of a canonical name
static BOOK_ALIASES: [(&str, &str); 2] = [
    ("songofsongs", "Song of Solomon"),
    ("revelations", "Revelation"),
];

/// Corpus partition a book belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn label(&self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn compact(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Position of a canonical book name, compared case-insensitively
pub fn canonical_index(book: &str) -> Option<usize> {
    let key = compact(book);
    CANONICAL_BOOKS
        .iter()
        .position(|canonical| compact(canonical) == key)
}

/// Testament partition of a canonical book name
pub fn testament_of(book: &str) -> Option<Testament> {
    canonical_index(book).map(|index| {
        if index < OLD_TESTAMENT_BOOK_COUNT {
            Testament::Old
        } else {
            Testament::New
        }
    })
}

/// Resolve a candidate book name to its canonical spelling.
///
/// A candidate matches when it equals a canonical name case-insensitively
/// (internal spaces ignored), or when it is at least three characters long
/// and a canonical name starts with it. Exact matches win over prefixes, and
/// an ambiguous prefix resolves to the first book in canonical order.
pub fn resolve_book_name(candidate: &str) -> Option<&'static str> {
    let key = compact(candidate);
    if key.is_empty() {
        return None;
    }

    if let Some(canonical) = CANONICAL_BOOKS
        .iter()
        .find(|canonical| compact(canonical) == key)
    {
        return Some(canonical);
    }

    if let Some((_, canonical)) = BOOK_ALIASES.iter().find(|(alias, _)| *alias == key) {
        return Some(canonical);
    }

    if key.chars().count() < 3 {
        return None;
    }

    CANONICAL_BOOKS
        .iter()
        .find(|canonical| compact(canonical).starts_with(&key))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_names_resolve_case_insensitively() {
        assert_eq!(resolve_book_name("john"), Some("John"));
        assert_eq!(resolve_book_name("1 JOHN"), Some("1 John"));
        assert_eq!(resolve_book_name("1john"), Some("1 John"));
        assert_eq!(resolve_book_name("song of solomon"), Some("Song of Solomon"));
    }

    #[test]
    fn test_abbreviations_resolve_by_prefix() {
        assert_eq!(resolve_book_name("rom"), Some("Romans"));
        assert_eq!(resolve_book_name("psalm"), Some("Psalms"));
        assert_eq!(resolve_book_name("gen"), Some("Genesis"));
        // Philippians precedes Philemon in canonical order
        assert_eq!(resolve_book_name("phil"), Some("Philippians"));
    }

    #[test]
    fn test_short_or_unknown_candidates_are_rejected() {
        assert_eq!(resolve_book_name("ro"), None);
        assert_eq!(resolve_book_name("hello"), None);
        assert_eq!(resolve_book_name(""), None);
        assert_eq!(resolve_book_name("4 john"), None);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(resolve_book_name("song of songs"), Some("Song of Solomon"));
        assert_eq!(resolve_book_name("Revelations"), Some("Revelation"));
    }

    #[test]
    fn test_testament_partition() {
        assert_eq!(testament_of("Malachi"), Some(Testament::Old));
        assert_eq!(testament_of("Matthew"), Some(Testament::New));
        assert_eq!(testament_of("psalms"), Some(Testament::Old));
        assert_eq!(testament_of("Narnia"), None);
        assert_eq!(CANONICAL_BOOKS.len() - OLD_TESTAMENT_BOOK_COUNT, 27);
    }
}
