//! API Data Types
//!
//! JSON response DTOs for the HTTP surface. Field names follow the legacy
//! Portuguese wire format, so several fields carry serde renames.

use std::collections::BTreeMap;

use serde::Serialize;

/// Status string returned by the root route, kept verbatim from the legacy
/// service.
pub const API_STATUS: &str = "API da Bíblia Online 🙏";

/// Response for `GET /`: service status and the loaded translation codes.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: String,
    pub versoes: Vec<String>,
}

/// One entry of the book listing.
#[derive(Debug, Serialize)]
pub struct BookEntry {
    pub nome: String,
    pub abreviatura: String,
    #[serde(rename = "totalCapitulos")]
    pub total_capitulos: usize,
}

/// Response for the book listing routes.
#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub versao: String,
    #[serde(rename = "totalLivros")]
    pub total_livros: usize,
    pub livros: Vec<BookEntry>,
}

/// Response for chapter and verse routes.
///
/// A verse lookup returns the same shape with `versiculos` holding the single
/// requested verse. Map keys serialize as strings ("1", "2", ...) per JSON,
/// ordered numerically.
#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub versao: String,
    pub livro: String,
    pub abreviatura: String,
    pub capitulo: u32,
    pub versiculos: BTreeMap<u32, String>,
}

/// Not-found / error payload.
///
/// Only the fields relevant to the failed lookup are present, echoing what the
/// client asked for: `{erro, livro}` for an unknown book, `{erro, livro,
/// capitulo}` for a bad chapter, and so on.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub erro: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capitulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versiculo: Option<String>,
}
