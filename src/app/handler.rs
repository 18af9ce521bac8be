//! User intents and their dispatch onto the engine.
//!
//! Everything a presentation layer can ask for arrives as an [`Intent`].
//! [`CatalogEngine::handle`] applies it and returns the fetch to start, if the
//! intent needs one. The engine redraws on its own; the caller only runs fetches.
//!
//! # Intent Types
//!
//! - **Favorites**: `ToggleFavorite`
//! - **Projection**: `ChangeSort`, `ChangeViewMode`
//! - **Loading**: `SelectCollection`, `RequestNextPage`, `Retry`
//! - **Search**: `SubmitSearch` (debounced; blank text restores the listing)

use super::engine::{CatalogEngine, FetchJob};
use super::modes::{SortSpec, ViewMode};
use crate::domain::{CollectionId, FavoriteKey};
use tokio::time::Instant;

/// Requests coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Flips favorite membership of one entry.
    ToggleFavorite(FavoriteKey),
    ChangeSort(SortSpec),
    ChangeViewMode(ViewMode),
    /// Puts another collection on screen.
    SelectCollection(CollectionId),
    /// Appends the next listing page.
    RequestNextPage,
    /// Latest search input, possibly blank.
    SubmitSearch(String),
    /// Repeats the request that failed.
    Retry,
}

impl CatalogEngine {
    /// Applies `intent` received at `now`.
    ///
    /// `now` only matters for `SubmitSearch`, which starts the quiet interval.
    pub fn handle(&mut self, intent: Intent, now: Instant) -> Option<FetchJob> {
        let _span = tracing::debug_span!("handle_intent", intent = ?intent).entered();

        match intent {
            Intent::ToggleFavorite(key) => {
                let outcome = self.toggle_favorite(key);
                if let Some(e) = outcome.persist_error {
                    tracing::debug!(error = %e, "favorite kept in memory only");
                }
                None
            }
            Intent::ChangeSort(sort) => {
                self.set_sort(sort);
                None
            }
            Intent::ChangeViewMode(view_mode) => {
                self.set_view_mode(view_mode);
                None
            }
            Intent::SelectCollection(collection) => self.select_collection(collection),
            Intent::RequestNextPage => self.next_page(),
            Intent::SubmitSearch(text) => self.submit_search(&text, now),
            Intent::Retry => self.retry(),
        }
    }
}
