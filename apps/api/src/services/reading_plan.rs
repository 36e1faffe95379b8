use crate::models::{ChapterRef, ReadingProgress};

/// New Testament books in reading order with their chapter counts
pub static NEW_TESTAMENT_PLAN: &[(&str, u32)] = &[
    ("Matthew", 28),
    ("Mark", 16),
    ("Luke", 24),
    ("John", 21),
    ("Acts", 28),
    ("Romans", 16),
    ("1 Corinthians", 16),
    ("2 Corinthians", 13),
    ("Galatians", 6),
    ("Ephesians", 6),
    ("Philippians", 4),
    ("Colossians", 4),
    ("1 Thessalonians", 5),
    ("2 Thessalonians", 3),
    ("1 Timothy", 6),
    ("2 Timothy", 4),
    ("Titus", 3),
    ("Philemon", 1),
    ("Hebrews", 13),
    ("James", 5),
    ("1 Peter", 5),
    ("2 Peter", 3),
    ("1 John", 5),
    ("2 John", 1),
    ("3 John", 1),
    ("Jude", 1),
    ("Revelation", 22),
];

pub const TOTAL_CHAPTERS: u32 = 260;

fn plan_index(book: &str) -> Option<usize> {
    NEW_TESTAMENT_PLAN
        .iter()
        .position(|(name, _)| name.eq_ignore_ascii_case(book.trim()))
}

/// Plan coordinates of a position. Unknown books start over at Matthew 1,
/// and a chapter past the end of its book rolls into the next book.
fn locate(position: Option<&ChapterRef>) -> (usize, u32) {
    let Some(position) = position else {
        return (0, 1);
    };
    let Some(index) = plan_index(&position.book) else {
        return (0, 1);
    };

    let chapter = position.chapter.max(1);
    if chapter > NEW_TESTAMENT_PLAN[index].1 {
        ((index + 1) % NEW_TESTAMENT_PLAN.len(), 1)
    } else {
        (index, chapter)
    }
}

fn step((index, chapter): (usize, u32)) -> (usize, u32) {
    if chapter < NEW_TESTAMENT_PLAN[index].1 {
        (index, chapter + 1)
    } else {
        ((index + 1) % NEW_TESTAMENT_PLAN.len(), 1)
    }
}

fn to_ref((index, chapter): (usize, u32)) -> ChapterRef {
    ChapterRef::new(NEW_TESTAMENT_PLAN[index].0, chapter)
}

/// The `count` chapters starting at `position`, wrapping from Revelation 22
/// back to Matthew 1
pub fn next_chapters(position: Option<&ChapterRef>, count: usize) -> Vec<ChapterRef> {
    let mut cursor = locate(position);
    let mut chapters = Vec::with_capacity(count);
    for _ in 0..count {
        chapters.push(to_ref(cursor));
        cursor = step(cursor);
    }
    chapters
}

/// Position after reading `count` chapters from `position`
pub fn advance(position: Option<&ChapterRef>, count: usize) -> ChapterRef {
    let cursor = (0..count).fold(locate(position), |cursor, _| step(cursor));
    to_ref(cursor)
}

/// Chapters of the plan that precede `position`
pub fn chapters_before(position: Option<&ChapterRef>) -> u32 {
    let (index, chapter) = locate(position);
    let whole_books: u32 = NEW_TESTAMENT_PLAN[..index].iter().map(|(_, c)| c).sum();
    whole_books + chapter - 1
}

pub fn progress(completed_chapters: u32) -> ReadingProgress {
    let percent = (f64::from(completed_chapters) / f64::from(TOTAL_CHAPTERS)) * 100.0;
    ReadingProgress {
        completed_chapters,
        total_chapters: TOTAL_CHAPTERS,
        progress_percent: ((percent * 10.0).round() / 10.0).min(100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_totals() {
        let total: u32 = NEW_TESTAMENT_PLAN.iter().map(|(_, chapters)| chapters).sum();
        assert_eq!(total, TOTAL_CHAPTERS);
        assert_eq!(NEW_TESTAMENT_PLAN.len(), 27);
    }

    #[test]
    fn test_next_chapters_within_book() {
        let start = ChapterRef::new("John", 3);
        assert_eq!(
            next_chapters(Some(&start), 2),
            vec![ChapterRef::new("John", 3), ChapterRef::new("John", 4)]
        );
    }

    #[test]
    fn test_next_chapters_cross_book_boundary() {
        let start = ChapterRef::new("Matthew", 28);
        assert_eq!(
            next_chapters(Some(&start), 2),
            vec![ChapterRef::new("Matthew", 28), ChapterRef::new("Mark", 1)]
        );
    }

    #[test]
    fn test_next_chapters_wrap_after_revelation() {
        let start = ChapterRef::new("Revelation", 22);
        assert_eq!(
            next_chapters(Some(&start), 2),
            vec![ChapterRef::new("Revelation", 22), ChapterRef::new("Matthew", 1)]
        );
    }

    #[test]
    fn test_unknown_or_missing_position_starts_at_matthew() {
        assert_eq!(next_chapters(None, 1), vec![ChapterRef::new("Matthew", 1)]);
        let genesis = ChapterRef::new("Genesis", 5);
        assert_eq!(
            next_chapters(Some(&genesis), 1),
            vec![ChapterRef::new("Matthew", 1)]
        );
    }

    #[test]
    fn test_single_chapter_books() {
        let start = ChapterRef::new("philemon", 1);
        assert_eq!(
            next_chapters(Some(&start), 2),
            vec![ChapterRef::new("Philemon", 1), ChapterRef::new("Hebrews", 1)]
        );
    }

    #[test]
    fn test_advance() {
        let start = ChapterRef::new("Jude", 1);
        assert_eq!(advance(Some(&start), 2), ChapterRef::new("Revelation", 2));
        assert_eq!(advance(None, 0), ChapterRef::new("Matthew", 1));
    }

    #[test]
    fn test_chapters_before() {
        assert_eq!(chapters_before(None), 0);
        assert_eq!(chapters_before(Some(&ChapterRef::new("Mark", 1))), 28);
        assert_eq!(chapters_before(Some(&ChapterRef::new("Revelation", 22))), 259);
    }

    #[test]
    fn test_progress_rounding_and_clamp() {
        assert_eq!(progress(0).progress_percent, 0.0);
        assert_eq!(progress(1).progress_percent, 0.4);
        assert_eq!(progress(130).progress_percent, 50.0);
        assert_eq!(progress(300).progress_percent, 100.0);
        assert_eq!(progress(260).total_chapters, 260);
    }
}
