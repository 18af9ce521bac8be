//! Domain layer for the catalog engine.
//!
//! Core types independent of storage, provider transport or presentation.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Catalog entries, media kinds, favorite keys and collection ids
//! - [`payload`]: Provider payload shapes mapped into entries

pub mod entry;
pub mod error;
pub mod payload;

pub use entry::{CatalogEntry, CollectionId, FavoriteKey, MediaKind};
pub use error::{CatalogError, Result};
pub use payload::{ApiPage, PageResponse, RawRecord};
