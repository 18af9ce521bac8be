//! Error types for the catalog engine.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate. None of them is fatal: the engine degrades every failure into
//! an inspectable state (an `Error` phase, an empty ledger, a persistence warning).

use thiserror::Error;

/// The main error type for catalog engine operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fetch collaborator rejected a page or search request.
    ///
    /// The string is the provider's human-readable message. The engine never
    /// interprets it beyond showing it to the user.
    #[error("{0}")]
    Fetch(String),

    /// Reading or writing the favorites store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Builds a fetch failure from any displayable provider error.
    pub fn fetch(message: impl std::fmt::Display) -> Self {
        Self::Fetch(message.to_string())
    }

    /// Message suitable for showing to the user in an error state.
    ///
    /// Fetch failures carry the provider's own wording; everything else falls back
    /// to the full `Display` form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(message) if message.trim().is_empty() => "Something went wrong".to_string(),
            Self::Fetch(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// A specialized `Result` type for catalog engine operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
