use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::Path;
use axum::{Extension, Json};

use super::error::ApiError;
use super::types::{BookEntry, BooksResponse, ChapterResponse, RootResponse, API_STATUS};
use crate::config::Config;
use crate::corpus::resolver::Resolver;

pub async fn handle_root(Extension(resolver): Extension<Arc<Resolver>>) -> Json<RootResponse> {
    Json(RootResponse {
        status: API_STATUS.to_string(),
        versoes: resolver
            .translations()
            .into_iter()
            .map(|code| code.to_string())
            .collect(),
    })
}

/// `GET /books` — the legacy route, pinned to the configured default
/// translation.
pub async fn handle_default_books(
    Extension(resolver): Extension<Arc<Resolver>>,
    Extension(config): Extension<Arc<Config>>,
) -> Result<Json<BooksResponse>, ApiError> {
    list_books(&resolver, &config.default_translation)
}

pub async fn handle_list_books(
    Path(versao): Path<String>,
    Extension(resolver): Extension<Arc<Resolver>>,
) -> Result<Json<BooksResponse>, ApiError> {
    list_books(&resolver, &versao)
}

fn list_books(resolver: &Resolver, versao: &str) -> Result<Json<BooksResponse>, ApiError> {
    let books = resolver.list_books(versao)?;

    Ok(Json(BooksResponse {
        versao: versao.to_uppercase(),
        total_livros: books.len(),
        livros: books
            .into_iter()
            .map(|book| BookEntry {
                nome: book.name,
                abreviatura: book.abbrev,
                total_capitulos: book.chapter_count,
            })
            .collect(),
    }))
}

pub async fn handle_chapter(
    Path((versao, livro, capitulo)): Path<(String, String, String)>,
    Extension(resolver): Extension<Arc<Resolver>>,
) -> Result<Json<ChapterResponse>, ApiError> {
    let chapter = parse_segment(&capitulo);

    let view = resolver
        .chapter(&versao, &livro, chapter)
        .map_err(|err| ApiError::from_lookup(err).with_chapter(&capitulo))?;

    Ok(Json(ChapterResponse {
        versao: versao.to_lowercase(),
        livro: view.book,
        abreviatura: view.abbrev,
        capitulo: view.chapter,
        versiculos: view.verses,
    }))
}

pub async fn handle_verse(
    Path((versao, livro, capitulo, versiculo)): Path<(String, String, String, String)>,
    Extension(resolver): Extension<Arc<Resolver>>,
) -> Result<Json<ChapterResponse>, ApiError> {
    let chapter = parse_segment(&capitulo);
    let verse = parse_segment(&versiculo);

    let view = resolver
        .verse(&versao, &livro, chapter, verse)
        .map_err(|err| {
            ApiError::from_lookup(err)
                .with_chapter(&capitulo)
                .with_verse(&versiculo)
        })?;

    let mut versiculos = BTreeMap::new();
    versiculos.insert(view.verse, view.text);

    Ok(Json(ChapterResponse {
        versao: versao.to_lowercase(),
        livro: view.book,
        abreviatura: view.abbrev,
        capitulo: view.chapter,
        versiculos,
    }))
}

/// Parses a numeric path segment; anything non-numeric maps to 0, which is
/// out of range for every 1-based lookup and falls through as not-found.
pub(crate) fn parse_segment(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}
