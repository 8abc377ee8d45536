//! Loader Module
//!
//! Handles the acquisition and normalization of translation documents at
//! startup.
//!
//! ## Workflow
//! 1. **Read**: Loads each configured JSON file from disk.
//! 2. **Parse**: Accepts either known source schema (a bare array of books, or
//!    a `{"livros": [...]}` wrapper with numbered chapters).
//! 3. **Normalize**: Converts everything into the canonical corpus model, so
//!    the resolver never branches on source shape.
//! 4. **Tolerate**: A translation that fails to read or parse is logged and
//!    left out of the corpus; the process keeps serving the rest.

pub mod reader;
pub mod types;

pub use reader::{load_corpus, load_translation, TranslationSource};
