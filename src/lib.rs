//! Bíblia API Library
//!
//! This library crate defines the core modules of the Bible content service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`corpus`**: The core lookup logic. Holds the canonical in-memory model
//!   (Translation/Book/Chapter/Verse) and the `Resolver` that answers book,
//!   chapter and verse queries with tolerant, case-insensitive matching.
//! - **`loader`**: The data intake layer. Reads translation JSON documents from
//!   disk at startup and normalizes two different source schemas into the
//!   canonical model.
//! - **`api`**: The HTTP surface. Axum handlers and the JSON response/error
//!   types exposed to clients (field names follow the legacy Portuguese API).
//! - **`config`**: Environment-driven configuration (listen address, data
//!   directory, translation set, lookup policy).

pub mod api;
pub mod config;
pub mod corpus;
pub mod loader;
