//! Favorites store abstraction.
//!
//! The [`FavoritesStore`] trait is the narrow interface the favorites ledger uses to
//! persist its markers. It deliberately exposes only whole-set reads and writes:
//! the ledger mirrors its full set on every mutation, so there is no partial
//! update API to keep consistent.

use crate::domain::error::Result;
use crate::domain::FavoriteKey;

/// Persistent backend for favorite markers.
///
/// # Implementations
///
/// - [`crate::storage::JsonFavoritesStore`]: JSON file with atomic writes
/// - [`crate::storage::MemoryFavoritesStore`]: session-only, nothing touches disk
pub trait FavoritesStore: Send {
    /// Reads every stored marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or holds unparseable data.
    /// Callers treat this as an empty set.
    fn read_favorites(&self) -> Result<Vec<FavoriteKey>>;

    /// Replaces the stored markers with `favorites`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The caller's in-memory set stays
    /// authoritative.
    fn write_favorites(&mut self, favorites: &[FavoriteKey]) -> Result<()>;
}
