//! Corpus Module
//!
//! The core component responsible for resolving book, chapter and verse queries
//! against the loaded translations.
//!
//! ## Overview
//! The corpus is built once at startup and never mutated afterwards, so all
//! request handlers share it behind an `Arc` without any locking. Every lookup
//! is a synchronous, bounded operation: a linear scan over at most a few dozen
//! books followed by direct indexed access into chapters and verses.
//!
//! ## Responsibilities
//! - **Model**: The canonical Translation/Book/Chapter/Verse shapes that both
//!   source schemas normalize into.
//! - **Resolution**: Tolerant book matching (name or abbreviation,
//!   case-insensitive, partial-match) with a fixed precedence order.
//! - **Addressing**: 1-based chapter and verse numbering at the boundary,
//!   regardless of internal 0-based storage.
//!
//! ## Submodules
//! - **`resolver`**: The query engine (`Resolver`) and its lookup policy.
//! - **`types`**: The canonical data model and the `LookupError` taxonomy.

pub mod resolver;
pub mod types;

#[cfg(test)]
mod tests;
