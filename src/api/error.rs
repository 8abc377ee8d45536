use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::ErrorResponse;
use crate::corpus::types::LookupError;

/// A failed lookup on its way out as an HTTP response.
///
/// Wraps the resolver's `LookupError` together with the raw chapter/verse path
/// segments, so the error payload can echo exactly what the client sent (the
/// parsed numbers would mangle non-numeric input like "abc").
#[derive(Debug)]
pub struct ApiError {
    pub kind: LookupError,
    capitulo: Option<String>,
    versiculo: Option<String>,
}

impl ApiError {
    pub fn from_lookup(kind: LookupError) -> Self {
        Self {
            kind,
            capitulo: None,
            versiculo: None,
        }
    }

    pub fn with_chapter(mut self, raw: &str) -> Self {
        self.capitulo = Some(raw.to_string());
        self
    }

    pub fn with_verse(mut self, raw: &str) -> Self {
        self.versiculo = Some(raw.to_string());
        self
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            LookupError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::NOT_FOUND,
        }
    }

    /// Builds the wire payload, populating only the fields relevant to the
    /// failed lookup.
    pub fn body(&self) -> ErrorResponse {
        let mut body = ErrorResponse {
            erro: self.kind.to_string(),
            versao: None,
            livro: None,
            capitulo: None,
            versiculo: None,
        };

        match &self.kind {
            LookupError::TranslationUnavailable { code } => {
                body.versao = Some(code.clone());
            }
            LookupError::BookNotFound { query } => {
                body.livro = Some(query.clone());
            }
            LookupError::ChapterNotFound { book, chapter } => {
                body.livro = Some(book.clone());
                body.capitulo = Some(
                    self.capitulo
                        .clone()
                        .unwrap_or_else(|| chapter.to_string()),
                );
            }
            LookupError::VerseNotFound {
                book,
                chapter,
                verse,
            } => {
                body.livro = Some(book.clone());
                body.capitulo = Some(
                    self.capitulo
                        .clone()
                        .unwrap_or_else(|| chapter.to_string()),
                );
                body.versiculo = Some(
                    self.versiculo
                        .clone()
                        .unwrap_or_else(|| verse.to_string()),
                );
            }
            LookupError::Internal(_) => {}
        }

        body
    }
}

impl From<LookupError> for ApiError {
    fn from(kind: LookupError) -> Self {
        Self::from_lookup(kind)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
