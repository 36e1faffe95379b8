use crate::models::book::{canonical_index, testament_of, CANONICAL_BOOKS};
use crate::models::{Testament, VerseReference, VerseText};
use std::collections::BTreeMap;
use tracing::debug;

/// Read access to verse text.
///
/// Implementations never substitute a different verse for one they cannot
/// find; absence is reported as `None` or an empty result.
pub trait ScriptureCorpus: Send + Sync {
    /// Resolve a single verse, a verse range or a whole chapter
    fn get_verse_by_reference(&self, reference: &VerseReference) -> Option<VerseText>;

    /// Case-insensitive substring search in corpus order, truncated at
    /// `max_results` and optionally restricted to one testament
    fn search_text(
        &self,
        query: &str,
        max_results: usize,
        partition: Option<Testament>,
    ) -> Vec<VerseText>;
}

/// (book, chapter, verse, KJV text)
static SEED_VERSES: &[(&str, u32, u32, &str)] = &[
    ("Genesis", 1, 1, "In the beginning God created the heaven and the earth."),
    ("Genesis", 1, 2, "And the earth was without form, and void; and darkness was upon the face of the deep. And the Spirit of God moved upon the face of the waters."),
    ("Genesis", 1, 3, "And God said, Let there be light: and there was light."),
    ("Deuteronomy", 31, 6, "Be strong and of a good courage, fear not, nor be afraid of them: for the LORD thy God, he it is that doth go with thee; he will not fail thee, nor forsake thee."),
    ("Joshua", 1, 9, "Have not I commanded thee? Be strong and of a good courage; be not afraid, neither be thou dismayed: for the LORD thy God is with thee whithersoever thou goest."),
    ("Nehemiah", 8, 10, "Then he said unto them, Go your way, eat the fat, and drink the sweet, and send portions unto them for whom nothing is prepared: for this day is holy unto our LORD: neither be ye sorry; for the joy of the LORD is your strength."),
    ("Psalms", 16, 11, "Thou wilt shew me the path of life: in thy presence is fulness of joy; at thy right hand there are pleasures for evermore."),
    ("Psalms", 23, 1, "The LORD is my shepherd; I shall not want."),
    ("Psalms", 23, 2, "He maketh me to lie down in green pastures: he leadeth me beside the still waters."),
    ("Psalms", 23, 3, "He restoreth my soul: he leadeth me in the paths of righteousness for his name's sake."),
    ("Psalms", 23, 4, "Yea, though I walk through the valley of the shadow of death, I will fear no evil: for thou art with me; thy rod and thy staff they comfort me."),
    ("Psalms", 23, 5, "Thou preparest a table before me in the presence of mine enemies: thou anointest my head with oil; my cup runneth over."),
    ("Psalms", 23, 6, "Surely goodness and mercy shall follow me all the days of my life: and I will dwell in the house of the LORD for ever."),
    ("Psalms", 34, 18, "The LORD is nigh unto them that are of a broken heart; and saveth such as be of a contrite spirit."),
    ("Psalms", 37, 4, "Delight thyself also in the LORD; and he shall give thee the desires of thine heart."),
    ("Psalms", 37, 5, "Commit thy way unto the LORD; trust also in him; and he shall bring it to pass."),
    ("Psalms", 42, 11, "Why art thou cast down, O my soul? and why art thou disquieted within me? hope thou in God: for I shall yet praise him, who is the health of my countenance, and my God."),
    ("Psalms", 46, 1, "God is our refuge and strength, a very present help in trouble."),
    ("Psalms", 55, 22, "Cast thy burden upon the LORD, and he shall sustain thee: he shall never suffer the righteous to be moved."),
    ("Psalms", 56, 3, "What time I am afraid, I will trust in thee."),
    ("Psalms", 103, 12, "As far as the east is from the west, so far hath he removed our transgressions from us."),
    ("Psalms", 118, 24, "This is the day which the LORD hath made; we will rejoice and be glad in it."),
    ("Psalms", 119, 105, "Thy word is a lamp unto my feet, and a light unto my path."),
    ("Psalms", 147, 3, "He healeth the broken in heart, and bindeth up their wounds."),
    ("Proverbs", 3, 5, "Trust in the LORD with all thine heart; and lean not unto thine own understanding."),
    ("Proverbs", 3, 6, "In all thy ways acknowledge him, and he shall direct thy paths."),
    ("Proverbs", 15, 1, "A soft answer turneth away wrath: but grievous words stir up anger."),
    ("Proverbs", 16, 3, "Commit thy works unto the LORD, and thy thoughts shall be established."),
    ("Isaiah", 26, 3, "Thou wilt keep him in perfect peace, whose mind is stayed on thee: because he trusteth in thee."),
    ("Isaiah", 40, 31, "But they that wait upon the LORD shall renew their strength; they shall mount up with wings as eagles; they shall run, and not be weary; and they shall walk, and not faint."),
    ("Isaiah", 41, 10, "Fear thou not; for I am with thee: be not dismayed; for I am thy God: I will strengthen thee; yea, I will help thee; yea, I will uphold thee with the right hand of my righteousness."),
    ("Jeremiah", 17, 14, "Heal me, O LORD, and I shall be healed; save me, and I shall be saved: for thou art my praise."),
    ("Jeremiah", 29, 11, "For I know the thoughts that I think toward you, saith the LORD, thoughts of peace, and not of evil, to give you an expected end."),
    ("Lamentations", 3, 22, "It is of the LORD's mercies that we are not consumed, because his compassions fail not."),
    ("Lamentations", 3, 23, "They are new every morning: great is thy faithfulness."),
    ("Matthew", 1, 1, "The book of the generation of Jesus Christ, the son of David, the son of Abraham."),
    ("Matthew", 1, 2, "Abraham begat Isaac; and Isaac begat Jacob; and Jacob begat Judas and his brethren;"),
    ("Matthew", 2, 1, "Now when Jesus was born in Bethlehem of Judaea in the days of Herod the king, behold, there came wise men from the east to Jerusalem,"),
    ("Matthew", 5, 4, "Blessed are they that mourn: for they shall be comforted."),
    ("Matthew", 6, 33, "But seek ye first the kingdom of God, and his righteousness; and all these things shall be added unto you."),
    ("Matthew", 6, 34, "Take therefore no thought for the morrow: for the morrow shall take thought for the things of itself. Sufficient unto the day is the evil thereof."),
    ("Matthew", 11, 28, "Come unto me, all ye that labour and are heavy laden, and I will give you rest."),
    ("Matthew", 28, 20, "Teaching them to observe all things whatsoever I have commanded you: and, lo, I am with you alway, even unto the end of the world. Amen."),
    ("John", 1, 1, "In the beginning was the Word, and the Word was with God, and the Word was God."),
    ("John", 3, 16, "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life."),
    ("John", 3, 17, "For God sent not his Son into the world to condemn the world; but that the world through him might be saved."),
    ("John", 8, 12, "Then spake Jesus again unto them, saying, I am the light of the world: he that followeth me shall not walk in darkness, but shall have the light of life."),
    ("John", 10, 10, "The thief cometh not, but for to steal, and to kill, and to destroy: I am come that they might have life, and that they might have it more abundantly."),
    ("John", 10, 11, "I am the good shepherd: the good shepherd giveth his life for the sheep."),
    ("John", 14, 1, "Let not your heart be troubled: ye believe in God, believe also in me."),
    ("John", 14, 6, "Jesus saith unto him, I am the way, the truth, and the life: no man cometh unto the Father, but by me."),
    ("John", 14, 27, "Peace I leave with you, my peace I give unto you: not as the world giveth, give I unto you. Let not your heart be troubled, neither let it be afraid."),
    ("John", 15, 12, "This is my commandment, That ye love one another, as I have loved you."),
    ("Romans", 5, 1, "Therefore being justified by faith, we have peace with God through our Lord Jesus Christ:"),
    ("Romans", 6, 23, "For the wages of sin is death; but the gift of God is eternal life through Jesus Christ our Lord."),
    ("Romans", 8, 1, "There is therefore now no condemnation to them which are in Christ Jesus, who walk not after the flesh, but after the Spirit."),
    ("Romans", 8, 28, "And we know that all things work together for good to them that love God, to them who are the called according to his purpose."),
    ("Romans", 8, 29, "For whom he did foreknow, he also did predestinate to be conformed to the image of his Son, that he might be the firstborn among many brethren."),
    ("Romans", 8, 30, "Moreover whom he did predestinate, them he also called: and whom he called, them he also justified: and whom he justified, them he also glorified."),
    ("Romans", 10, 9, "That if thou shalt confess with thy mouth the Lord Jesus, and shalt believe in thine heart that God hath raised him from the dead, thou shalt be saved."),
    ("Romans", 10, 17, "So then faith cometh by hearing, and hearing by the word of God."),
    ("Romans", 12, 12, "Rejoicing in hope; patient in tribulation; continuing instant in prayer;"),
    ("Romans", 15, 13, "Now the God of hope fill you with all joy and peace in believing, that ye may abound in hope, through the power of the Holy Ghost."),
    ("1 Corinthians", 13, 4, "Charity suffereth long, and is kind; charity envieth not; charity vaunteth not itself, is not puffed up,"),
    ("2 Corinthians", 1, 3, "Blessed be God, even the Father of our Lord Jesus Christ, the Father of mercies, and the God of all comfort;"),
    ("2 Corinthians", 1, 4, "Who comforteth us in all our tribulation, that we may be able to comfort them which are in any trouble, by the comfort wherewith we ourselves are comforted of God."),
    ("2 Corinthians", 5, 7, "(For we walk by faith, not by sight:)"),
    ("2 Corinthians", 12, 9, "And he said unto me, My grace is sufficient for thee: for my strength is made perfect in weakness. Most gladly therefore will I rather glory in my infirmities, that the power of Christ may rest upon me."),
    ("Ephesians", 2, 8, "For by grace are ye saved through faith; and that not of yourselves: it is the gift of God:"),
    ("Ephesians", 2, 9, "Not of works, lest any man should boast."),
    ("Ephesians", 4, 32, "And be ye kind one to another, tenderhearted, forgiving one another, even as God for Christ's sake hath forgiven you."),
    ("Philippians", 4, 4, "Rejoice in the Lord alway: and again I say, Rejoice."),
    ("Philippians", 4, 6, "Be careful for nothing; but in every thing by prayer and supplication with thanksgiving let your requests be made known unto God."),
    ("Philippians", 4, 7, "And the peace of God, which passeth all understanding, shall keep your hearts and minds through Christ Jesus."),
    ("Philippians", 4, 13, "I can do all things through Christ which strengtheneth me."),
    ("Philippians", 4, 19, "But my God shall supply all your need according to his riches in glory by Christ Jesus."),
    ("Colossians", 3, 13, "Forbearing one another, and forgiving one another, if any man have a quarrel against any: even as Christ forgave you, so also do ye."),
    ("Colossians", 3, 23, "And whatsoever ye do, do it heartily, as to the Lord, and not unto men;"),
    ("1 Thessalonians", 5, 17, "Pray without ceasing."),
    ("2 Timothy", 1, 7, "For God hath not given us the spirit of fear; but of power, and of love, and of a sound mind."),
    ("Hebrews", 11, 1, "Now faith is the substance of things hoped for, the evidence of things not seen."),
    ("Hebrews", 13, 5, "Let your conversation be without covetousness; and be content with such things as ye have: for he hath said, I will never leave thee, nor forsake thee."),
    ("James", 1, 5, "If any of you lack wisdom, let him ask of God, that giveth to all men liberally, and upbraideth not; and it shall be given him."),
    ("James", 1, 19, "Wherefore, my beloved brethren, let every man be swift to hear, slow to speak, slow to wrath:"),
    ("James", 1, 20, "For the wrath of man worketh not the righteousness of God."),
    ("1 Peter", 5, 7, "Casting all your care upon him; for he careth for you."),
    ("1 John", 1, 9, "If we confess our sins, he is faithful and just to forgive us our sins, and to cleanse us from all unrighteousness."),
    ("1 John", 4, 8, "He that loveth not knoweth not God; for God is love."),
    ("Revelation", 21, 4, "And God shall wipe away all tears from their eyes; and there shall be no more death, neither sorrow, nor crying, neither shall there be any more pain: for the former things are passed away."),
];

#[derive(Debug, Clone)]
struct StoredVerse {
    text: String,
    lowered: String,
}

/// (canonical book index, chapter, verse)
type VerseKey = (usize, u32, u32);

/// Read-only verse store held in memory, iterated in canonical order
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    verses: BTreeMap<VerseKey, StoredVerse>,
}

impl InMemoryCorpus {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Corpus preloaded with commonly requested KJV verses
    pub fn seeded() -> Self {
        let mut corpus = Self::empty();
        for (book, chapter, verse, text) in SEED_VERSES {
            corpus.insert(book, *chapter, *verse, *text);
        }
        debug!("Seeded in-memory corpus with {} verses", corpus.len());
        corpus
    }

    /// Store a verse; returns false for a book outside the canon or a zero
    /// chapter or verse number.
    pub fn insert(&mut self, book: &str, chapter: u32, verse: u32, text: impl Into<String>) -> bool {
        let Some(index) = canonical_index(book) else {
            return false;
        };
        if chapter == 0 || verse == 0 {
            return false;
        }

        let text = text.into();
        let lowered = text.to_lowercase();
        self.verses
            .insert((index, chapter, verse), StoredVerse { text, lowered });
        true
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    fn joined<'a>(verses: impl Iterator<Item = &'a StoredVerse>) -> Option<String> {
        let parts: Vec<&str> = verses.map(|v| v.text.as_str()).collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

impl ScriptureCorpus for InMemoryCorpus {
    fn get_verse_by_reference(&self, reference: &VerseReference) -> Option<VerseText> {
        let index = canonical_index(&reference.book)?;
        let chapter = reference.chapter;

        let text = match reference.verses() {
            None => Self::joined(
                self.verses
                    .range((index, chapter, 0)..=(index, chapter, u32::MAX))
                    .map(|(_, v)| v),
            )?,
            Some(span) => {
                let (start, end) = (*span.start(), *span.end());
                // A range resolves only when its first verse is present
                self.verses.get(&(index, chapter, start))?;
                Self::joined(
                    self.verses
                        .range((index, chapter, start)..=(index, chapter, end))
                        .map(|(_, v)| v),
                )?
            }
        };

        let canonical = VerseReference {
            book: CANONICAL_BOOKS[index].to_string(),
            ..reference.clone()
        };
        debug!("Resolved {}", canonical);
        Some(VerseText::new(canonical, text))
    }

    fn search_text(
        &self,
        query: &str,
        max_results: usize,
        partition: Option<Testament>,
    ) -> Vec<VerseText> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() || max_results == 0 {
            return Vec::new();
        }

        self.verses
            .iter()
            .filter(|((index, _, _), _)| {
                partition.map_or(true, |p| testament_of(CANONICAL_BOOKS[*index]) == Some(p))
            })
            .filter(|(_, verse)| verse.lowered.contains(&needle))
            .take(max_results)
            .filter_map(|((index, chapter, verse), stored)| {
                VerseReference::verse(CANONICAL_BOOKS[*index], *chapter, *verse)
                    .map(|reference| VerseText::new(reference, stored.text.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> InMemoryCorpus {
        InMemoryCorpus::seeded()
    }

    #[test]
    fn test_seed_books_are_canonical() {
        assert_eq!(corpus().len(), SEED_VERSES.len());
    }

    #[test]
    fn test_single_verse_lookup() {
        let verse = corpus()
            .get_verse_by_reference(&VerseReference::verse("John", 3, 16).unwrap())
            .unwrap();
        assert_eq!(verse.citation, "John 3:16");
        assert!(verse.text.starts_with("For God so loved the world"));
        assert_eq!(verse.translation, "KJV");
    }

    #[test]
    fn test_lookup_canonicalizes_book_case() {
        let verse = corpus()
            .get_verse_by_reference(&VerseReference::verse("psalms", 46, 1).unwrap())
            .unwrap();
        assert_eq!(verse.reference.book, "Psalms");
    }

    #[test]
    fn test_range_joins_present_verses() {
        let reference = VerseReference::new("Romans", 8, Some(28), Some(30)).unwrap();
        let verse = corpus().get_verse_by_reference(&reference).unwrap();
        assert_eq!(verse.citation, "Romans 8:28-30");
        assert!(verse.text.contains("work together for good"));
        assert!(verse.text.ends_with("them he also glorified."));
    }

    #[test]
    fn test_range_requires_first_verse() {
        // 8:27 is not stored even though 8:28 is
        let reference = VerseReference::new("Romans", 8, Some(27), Some(28)).unwrap();
        assert!(corpus().get_verse_by_reference(&reference).is_none());
    }

    #[test]
    fn test_whole_chapter_joins_stored_verses() {
        let chapter = VerseReference::chapter("Psalms", 23).unwrap();
        let verse = corpus().get_verse_by_reference(&chapter).unwrap();
        assert!(verse.text.starts_with("The LORD is my shepherd"));
        assert!(verse.text.ends_with("house of the LORD for ever."));
    }

    #[test]
    fn test_missing_reference_is_absent() {
        let corpus = corpus();
        assert!(corpus
            .get_verse_by_reference(&VerseReference::verse("John", 3, 15).unwrap())
            .is_none());
        assert!(corpus
            .get_verse_by_reference(&VerseReference::chapter("Obadiah", 1).unwrap())
            .is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let results = corpus().search_text("SHEPHERD", 10, None);
        let citations: Vec<_> = results.iter().map(|v| v.citation.as_str()).collect();
        assert_eq!(citations, vec!["Psalms 23:1", "John 10:11"]);
    }

    #[test]
    fn test_search_respects_partition_and_limit() {
        let corpus = corpus();
        let old = corpus.search_text("peace", 10, Some(Testament::Old));
        assert!(!old.is_empty());
        assert!(old
            .iter()
            .all(|v| testament_of(&v.reference.book) == Some(Testament::Old)));

        let limited = corpus.search_text("god", 2, None);
        assert_eq!(limited.len(), 2);
        assert!(corpus.search_text("", 5, None).is_empty());
        assert!(corpus.search_text("god", 0, None).is_empty());
    }

    #[test]
    fn test_insert_rejects_unknown_books() {
        let mut corpus = InMemoryCorpus::empty();
        assert!(!corpus.insert("Narnia", 1, 1, "text"));
        assert!(corpus.insert("Jude", 1, 25, "To the only wise God our Saviour"));
        assert_eq!(corpus.len(), 1);
    }
}
