use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::types::{RawBook, RawChapter, RawDocument};
use crate::corpus::types::{Book, Chapter, Corpus, Translation};

/// One configured translation: its code and the JSON file backing it.
#[derive(Debug, Clone)]
pub struct TranslationSource {
    pub code: String,
    pub path: PathBuf,
}

/// Loads every configured translation, skipping the ones that fail.
///
/// A missing or corrupt file is logged and the translation left absent from
/// the corpus; the resolver then reports it as unavailable instead of the
/// process refusing to start.
pub fn load_corpus(sources: &[TranslationSource]) -> Corpus {
    let mut corpus = Corpus::new();

    for source in sources {
        match load_translation(&source.code, &source.path) {
            Ok(translation) => {
                tracing::info!(
                    "Loaded translation '{}' ({} books) from {}",
                    translation.code,
                    translation.books.len(),
                    source.path.display()
                );
                corpus.insert(translation);
            }
            Err(err) => {
                tracing::error!("Failed to load translation '{}': {:#}", source.code, err);
            }
        }
    }

    corpus
}

/// Reads and normalizes a single translation document.
pub fn load_translation(code: &str, path: &Path) -> anyhow::Result<Translation> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    parse_translation(code, &raw).with_context(|| format!("parsing {}", path.display()))
}

/// Parses a translation document from its JSON text.
pub fn parse_translation(code: &str, json: &str) -> anyhow::Result<Translation> {
    let document: RawDocument = serde_json::from_str(json)?;

    let books = document
        .into_books()
        .into_iter()
        .map(normalize_book)
        .collect::<anyhow::Result<Vec<Book>>>()?;

    Ok(Translation {
        code: code.to_lowercase(),
        books,
    })
}

fn normalize_book(raw: RawBook) -> anyhow::Result<Book> {
    match raw {
        RawBook::Legacy {
            name,
            abbrev,
            chapters,
        } => Ok(Book {
            name,
            abbrev,
            chapters,
        }),
        RawBook::Wrapped {
            nome,
            abreviatura,
            mut capitulos,
        } => {
            capitulos.sort_by_key(|c| c.numero);
            let chapters = capitulos
                .into_iter()
                .map(|c| normalize_chapter(&nome, c))
                .collect::<anyhow::Result<Vec<Chapter>>>()?;

            Ok(Book {
                name: nome,
                abbrev: abreviatura,
                chapters,
            })
        }
    }
}

/// Flattens a `{numero, versiculos}` chapter into an ordered verse list.
///
/// Map keys sort numerically so that verse "10" lands after verse "2"; the
/// external 1-based numbering is positional from here on.
fn normalize_chapter(book: &str, chapter: RawChapter) -> anyhow::Result<Chapter> {
    let RawChapter { numero, versiculos } = chapter;

    let mut verses: Vec<(u32, String)> = versiculos
        .into_iter()
        .map(|(key, text)| {
            let number: u32 = key
                .parse()
                .with_context(|| format!("bad verse key {:?} in {} chapter {}", key, book, numero))?;
            Ok((number, text))
        })
        .collect::<anyhow::Result<_>>()?;

    verses.sort_by_key(|(number, _)| *number);
    Ok(verses.into_iter().map(|(_, text)| text).collect())
}
