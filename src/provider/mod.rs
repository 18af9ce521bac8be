//! Fetch collaborator boundary.
//!
//! The engine never performs I/O towards the provider itself. It asks a
//! [`CatalogFetcher`] for pages and searches and receives `'static` boxed futures,
//! so a request can be parked in the driver's in-flight set and resolved later,
//! possibly after it has been superseded.
//!
//! # Modules
//!
//! - `fixture`: file-backed provider serving TMDB-shaped JSON pages

pub mod fixture;

pub use fixture::FixtureCatalog;

use crate::domain::error::Result;
use crate::domain::{CatalogEntry, CollectionId, PageResponse};
use futures_util::future::BoxFuture;

/// Source of catalog pages and search results.
///
/// Failures are reported as [`CatalogError::Fetch`](crate::domain::CatalogError::Fetch)
/// with a human-readable message; the engine does not interpret them further.
pub trait CatalogFetcher: Send + Sync {
    /// Fetches page `page` (1-based) of `collection`.
    fn fetch_page(&self, collection: CollectionId, page: u32) -> BoxFuture<'static, Result<PageResponse>>;

    /// Runs a free-text search.
    fn search(&self, query: &str) -> BoxFuture<'static, Result<Vec<CatalogEntry>>>;
}
