//! Loader Data Types
//!
//! Serde shapes for the two JSON source schemas that translation documents
//! arrive in. These exist only long enough to be normalized into the canonical
//! corpus model; nothing downstream of the loader ever sees them.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A whole translation document.
///
/// Schema A is a bare array of books; schema B wraps the list in a
/// `{"livros": [...]}` object. Both occur in the wild, so the loader accepts
/// either via an untagged enum.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawDocument {
    Books(Vec<RawBook>),
    Wrapped { livros: Vec<RawBook> },
}

impl RawDocument {
    pub fn into_books(self) -> Vec<RawBook> {
        match self {
            RawDocument::Books(books) => books,
            RawDocument::Wrapped { livros } => livros,
        }
    }
}

/// One book in either source schema.
///
/// The legacy shape stores chapters as bare arrays of verse strings; the
/// wrapped shape numbers each chapter explicitly and keys verses by number.
/// Extra fields (`id`, etc.) are ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawBook {
    Legacy {
        name: String,
        abbrev: String,
        chapters: Vec<Vec<String>>,
    },
    Wrapped {
        nome: String,
        abreviatura: String,
        capitulos: Vec<RawChapter>,
    },
}

/// A numbered chapter from the wrapped schema.
///
/// `versiculos` keys are verse numbers as strings ("1", "2", ... "10"); the
/// loader sorts them numerically, not lexically.
#[derive(Debug, Deserialize)]
pub struct RawChapter {
    pub numero: u32,
    pub versiculos: BTreeMap<String, String>,
}
