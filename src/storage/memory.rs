//! In-memory favorites store for sessions without persistence.

use crate::domain::error::Result;
use crate::domain::FavoriteKey;
use crate::storage::backend::FavoritesStore;

/// Keeps favorites for the lifetime of the process only.
#[derive(Debug, Default, Clone)]
pub struct MemoryFavoritesStore {
    favorites: Vec<FavoriteKey>,
}

impl MemoryFavoritesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `favorites`.
    #[must_use]
    pub fn with_favorites(favorites: Vec<FavoriteKey>) -> Self {
        Self { favorites }
    }
}

impl FavoritesStore for MemoryFavoritesStore {
    fn read_favorites(&self) -> Result<Vec<FavoriteKey>> {
        Ok(self.favorites.clone())
    }

    fn write_favorites(&mut self, favorites: &[FavoriteKey]) -> Result<()> {
        self.favorites = favorites.to_vec();
        Ok(())
    }
}
