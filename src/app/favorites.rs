//! Favorites ledger with write-through persistence.
//!
//! The ledger owns the set of `(id, kind)` markers for the session. It reads its
//! store once when opened and writes the full set back on every toggle before
//! returning. Store failures never escape as hard errors: a failed read starts the
//! session with an empty ledger, a failed write is handed back to the caller as a
//! warning while the in-memory set stays authoritative.

use crate::domain::{CatalogError, FavoriteKey};
use crate::storage::FavoritesStore;
use std::collections::BTreeSet;

/// Result of a [`FavoritesLedger::toggle`] call.
#[derive(Debug)]
pub struct ToggleOutcome {
    /// Membership after the toggle.
    pub is_favorite: bool,
    /// Set when the store rejected the write. The toggle still took effect.
    pub persist_error: Option<CatalogError>,
}

/// Set of favorite markers backed by a [`FavoritesStore`].
pub struct FavoritesLedger {
    favorites: BTreeSet<FavoriteKey>,
    store: Box<dyn FavoritesStore>,
}

impl FavoritesLedger {
    /// Opens the ledger, eagerly reading `store`.
    pub fn open(store: Box<dyn FavoritesStore>) -> Self {
        let favorites = match store.read_favorites() {
            Ok(keys) => keys.into_iter().collect::<BTreeSet<_>>(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read favorites, starting with an empty ledger");
                BTreeSet::new()
            }
        };

        tracing::debug!(count = favorites.len(), "favorites ledger opened");
        Self { favorites, store }
    }

    #[must_use]
    pub fn is_favorite(&self, key: FavoriteKey) -> bool {
        self.favorites.contains(&key)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub const fn all(&self) -> &BTreeSet<FavoriteKey> {
        &self.favorites
    }

    /// Flips membership of `key` and persists the whole set.
    ///
    /// Applying the same toggle twice restores the prior membership.
    pub fn toggle(&mut self, key: FavoriteKey) -> ToggleOutcome {
        let is_favorite = if self.favorites.remove(&key) {
            false
        } else {
            self.favorites.insert(key);
            true
        };

        tracing::debug!(id = key.id, kind = %key.kind, is_favorite, "favorite toggled");

        let snapshot: Vec<FavoriteKey> = self.favorites.iter().copied().collect();
        let persist_error = match self.store.write_favorites(&snapshot) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "could not persist favorites, keeping in-memory state");
                Some(e)
            }
        };

        ToggleOutcome { is_favorite, persist_error }
    }
}

impl std::fmt::Debug for FavoritesLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesLedger")
            .field("favorites", &self.favorites)
            .finish_non_exhaustive()
    }
}
