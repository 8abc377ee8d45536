//! API Module
//!
//! The HTTP surface of the service, exposed via the Axum web server.
//!
//! ## Routes
//! - `GET /` — service status plus the codes of the loaded translations.
//! - `GET /books` — book listing for the configured default translation.
//! - `GET /biblia/:versao/livros` — book listing for one translation.
//! - `GET /biblia/:versao/:livro/:capitulo` — a full chapter.
//! - `GET /biblia/:versao/:livro/:capitulo/:versiculo` — a single verse.
//!
//! ## Conventions
//! Response field names keep the Portuguese wire format of the legacy API
//! (`versao`, `livros`, `versiculos`, `erro`, ...). Every not-found condition
//! maps to 404 with a payload echoing the original query terms; only
//! unexpected internal failures map to 500. Numeric path segments arrive as
//! strings and parse tolerantly, so non-numeric input becomes a not-found
//! result rather than a crash.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers.
//! - **`error`**: `ApiError`, the bridge from `LookupError` to HTTP responses.
//! - **`types`**: JSON response DTOs.

pub mod error;
pub mod handlers;
pub mod types;
