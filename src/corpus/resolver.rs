use std::collections::BTreeMap;

use super::types::{Book, BookSummary, ChapterView, Corpus, LookupError, Translation, VerseView};

/// The query engine over a loaded, immutable corpus.
///
/// Construction happens once at startup; after that the resolver is shared
/// read-only across all request handlers.
#[derive(Debug)]
pub struct Resolver {
    corpus: Corpus,
    /// Legacy policy: a verse that exists but whose text is empty is reported
    /// as not found. On by default to match the original API.
    empty_verse_is_missing: bool,
}

impl Resolver {
    pub fn new(corpus: Corpus) -> Self {
        Self::with_policy(corpus, true)
    }

    pub fn with_policy(corpus: Corpus, empty_verse_is_missing: bool) -> Self {
        Self {
            corpus,
            empty_verse_is_missing,
        }
    }

    /// Codes of the translations that loaded successfully, in load order.
    pub fn translations(&self) -> Vec<&str> {
        self.corpus.codes().collect()
    }

    fn translation(&self, code: &str) -> Result<&Translation, LookupError> {
        self.corpus
            .get(code)
            .ok_or_else(|| LookupError::TranslationUnavailable {
                code: code.to_string(),
            })
    }

    /// Lists the books of a translation in source order.
    ///
    /// An empty translation yields an empty vec; only an unknown translation
    /// code is an error.
    pub fn list_books(&self, code: &str) -> Result<Vec<BookSummary>, LookupError> {
        let translation = self.translation(code)?;
        Ok(translation
            .books
            .iter()
            .map(|book| BookSummary {
                name: book.name.clone(),
                abbrev: book.abbrev.clone(),
                chapter_count: book.chapters.len(),
            })
            .collect())
    }

    /// Resolves a user-supplied book identifier against name and abbreviation.
    ///
    /// Matching is case-insensitive and evaluated in a fixed precedence order,
    /// returning the first hit:
    /// 1. exact match on the abbreviation,
    /// 2. exact match on the full name,
    /// 3. substring: query in name, query in abbreviation, or abbreviation in
    ///    query.
    ///
    /// Exact hits outrank substring hits so that short abbreviations (which
    /// are substrings of many names) stay unambiguous. Ties at the same level
    /// resolve to the first book in source order.
    pub fn find_book<'a>(&'a self, code: &str, query: &str) -> Result<&'a Book, LookupError> {
        let books = &self.translation(code)?.books;
        let needle = query.trim().to_lowercase();

        // An empty needle would substring-match every book.
        if needle.is_empty() {
            return Err(LookupError::BookNotFound {
                query: query.to_string(),
            });
        }

        books
            .iter()
            .find(|b| b.abbrev.to_lowercase() == needle)
            .or_else(|| books.iter().find(|b| b.name.to_lowercase() == needle))
            .or_else(|| {
                books.iter().find(|b| {
                    let name = b.name.to_lowercase();
                    let abbrev = b.abbrev.to_lowercase();
                    name.contains(&needle) || abbrev.contains(&needle) || needle.contains(&abbrev)
                })
            })
            .ok_or_else(|| LookupError::BookNotFound {
                query: query.to_string(),
            })
    }

    /// Resolves a full chapter, returning its verses as a 1-based map.
    pub fn chapter(
        &self,
        code: &str,
        book_query: &str,
        chapter: u32,
    ) -> Result<ChapterView, LookupError> {
        let book = self.find_book(code, book_query)?;
        let verses = Self::chapter_verses(book, chapter)?;

        let verses: BTreeMap<u32, String> = verses
            .iter()
            .enumerate()
            .map(|(i, text)| (i as u32 + 1, text.clone()))
            .collect();

        Ok(ChapterView {
            book: book.name.clone(),
            abbrev: book.abbrev.clone(),
            chapter,
            verses,
        })
    }

    /// Resolves a single verse by 1-based chapter and verse number.
    pub fn verse(
        &self,
        code: &str,
        book_query: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<VerseView, LookupError> {
        let book = self.find_book(code, book_query)?;
        let verses = Self::chapter_verses(book, chapter)?;

        let not_found = || LookupError::VerseNotFound {
            book: book.name.clone(),
            chapter,
            verse,
        };

        let text = match verse {
            0 => return Err(not_found()),
            v => verses.get(v as usize - 1).ok_or_else(not_found)?,
        };

        if self.empty_verse_is_missing && text.is_empty() {
            return Err(not_found());
        }

        Ok(VerseView {
            book: book.name.clone(),
            abbrev: book.abbrev.clone(),
            chapter,
            verse,
            text: text.clone(),
        })
    }

    fn chapter_verses(book: &Book, chapter: u32) -> Result<&[String], LookupError> {
        let out_of_range = || LookupError::ChapterNotFound {
            book: book.name.clone(),
            chapter,
        };

        match chapter {
            0 => Err(out_of_range()),
            c => book
                .chapters
                .get(c as usize - 1)
                .map(|verses| verses.as_slice())
                .ok_or_else(out_of_range),
        }
    }
}
