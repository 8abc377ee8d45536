//! Corpus Data Types
//!
//! Defines the canonical in-memory model that every source schema normalizes
//! into, plus the error taxonomy returned by the resolver.

use std::collections::BTreeMap;

use thiserror::Error;

/// Verse texts of a single chapter, stored 0-indexed in source order.
///
/// Chapter and verse numbers are always 1-based at the API boundary; the
/// resolver does the translation between the two.
pub type Chapter = Vec<String>;

/// One book of a translation: display name, short abbreviation and its
/// chapters in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub name: String,
    pub abbrev: String,
    pub chapters: Vec<Chapter>,
}

/// One loaded translation (e.g. "nvi", "acf"), identified by a lowercase code.
///
/// Book order is the insertion order of the source document and is significant:
/// ties during tolerant matching resolve to the first book in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub code: String,
    pub books: Vec<Book>,
}

/// The full set of translations available to the resolver.
///
/// A translation that failed to load is simply absent here, never present as
/// an empty shell. The corpus is read-only after construction.
#[derive(Debug, Default)]
pub struct Corpus {
    translations: Vec<Translation>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, translation: Translation) {
        self.translations.push(translation);
    }

    /// Looks up a translation by code, case-insensitively.
    pub fn get(&self, code: &str) -> Option<&Translation> {
        self.translations
            .iter()
            .find(|t| t.code.eq_ignore_ascii_case(code))
    }

    /// Codes of the loaded translations, in load order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.translations.iter().map(|t| t.code.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }
}

/// One row of the book listing: display name, abbreviation and chapter count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub name: String,
    pub abbrev: String,
    pub chapter_count: usize,
}

/// A fully resolved chapter: verse number (1-based) to verse text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterView {
    pub book: String,
    pub abbrev: String,
    pub chapter: u32,
    pub verses: BTreeMap<u32, String>,
}

/// A fully resolved single verse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseView {
    pub book: String,
    pub abbrev: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// Everything that can go wrong during a lookup.
///
/// All failures are plain return values; nothing in the resolver panics or
/// performs I/O. Display messages keep the Portuguese wording of the legacy
/// API, which is what clients see in the `erro` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The requested translation never loaded (or does not exist at all); the
    /// two cases are indistinguishable to clients.
    #[error("Versão não disponível")]
    TranslationUnavailable { code: String },

    /// No book matched the query at any precedence level.
    #[error("Livro não encontrado")]
    BookNotFound { query: String },

    /// The book resolved but the chapter number is out of range. Carries the
    /// resolved book's display name for the error payload.
    #[error("Capítulo não encontrado")]
    ChapterNotFound { book: String, chapter: u32 },

    /// The chapter resolved but the verse number is out of range (or the verse
    /// text is empty, under the legacy lookup policy).
    #[error("Versículo não encontrado")]
    VerseNotFound { book: String, chapter: u32, verse: u32 },

    /// Unexpected failure during lookup. Maps to HTTP 500.
    #[error("Erro interno: {0}")]
    Internal(String),
}
