//! Render dispatcher: collection state in, view model out.
//!
//! The dispatcher is the only place view models are built. Computation is pure and
//! deterministic; handing the result to the presentation layer goes through the
//! [`Presenter`] trait so the engine never touches any drawing state itself.
//!
//! ```text
//! CollectionState + favorites + sort + view mode → project → ViewModel → Presenter
//! ```

use super::helpers::{average_rating, format_date, format_rating, poster_url};
use super::viewmodel::{CatalogStats, DisplayEntry, EmptyState, ViewModel};
use crate::app::load_cycle::CollectionState;
use crate::app::modes::{Phase, SortSpec, ViewMode};
use crate::app::projection::project;
use crate::domain::{FavoriteKey, MediaKind};
use std::collections::BTreeSet;

/// Receives every externally visible change.
pub trait Presenter: Send {
    fn present(&mut self, view: &ViewModel);
}

impl<F> Presenter for F
where
    F: FnMut(&ViewModel) + Send,
{
    fn present(&mut self, view: &ViewModel) {
        self(view);
    }
}

/// Builds view models and forwards them to a [`Presenter`].
pub struct RenderDispatcher {
    image_base_url: String,
    presenter: Box<dyn Presenter>,
}

impl RenderDispatcher {
    pub fn new(image_base_url: impl Into<String>, presenter: Box<dyn Presenter>) -> Self {
        Self {
            image_base_url: image_base_url.into(),
            presenter,
        }
    }

    /// Computes the view model for `state`. No I/O, same inputs give the same output.
    #[must_use]
    pub fn compute_view_model(
        &self,
        state: &CollectionState,
        favorites: &BTreeSet<FavoriteKey>,
        sort: SortSpec,
        view_mode: ViewMode,
    ) -> ViewModel {
        let projected = project(state.entries(), sort, view_mode, favorites);

        let stats = CatalogStats {
            displayed: projected.len(),
            favorites: favorites.len(),
            average_rating: average_rating(projected.iter().copied()),
        };

        let empty_state = (state.phase == Phase::Loaded && projected.is_empty())
            .then(|| empty_state_for(state, view_mode));

        let visible_entries = projected
            .into_iter()
            .map(|entry| DisplayEntry {
                is_favorite: favorites.contains(&entry.key()),
                rating_label: format_rating(entry.rating_average),
                release_label: format_date(entry.release_date),
                poster_url: poster_url(&self.image_base_url, entry.poster_ref.as_deref()),
                entry: entry.clone(),
            })
            .collect();

        let can_load_more = state.cursor.has_more()
            && view_mode == ViewMode::All
            && state.query.is_none()
            && state.phase != Phase::Loading;

        ViewModel {
            collection: state.collection,
            visible_entries,
            favorite_marks: favorites.clone(),
            phase: state.phase,
            error_message: match state.phase {
                Phase::Error => state.last_error.clone(),
                _ => None,
            },
            empty_state,
            stats,
            can_load_more,
            query: state.query.clone(),
            sort,
            view_mode,
        }
    }

    /// Hands `view` to the presenter.
    pub fn dispatch(&mut self, view: &ViewModel) {
        tracing::trace!(
            phase = ?view.phase,
            visible = view.visible_entries.len(),
            "dispatching view model"
        );
        self.presenter.present(view);
    }
}

impl std::fmt::Debug for RenderDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderDispatcher")
            .field("image_base_url", &self.image_base_url)
            .finish_non_exhaustive()
    }
}

fn empty_state_for(state: &CollectionState, view_mode: ViewMode) -> EmptyState {
    let noun = match state.collection.kind() {
        MediaKind::Film => "films",
        MediaKind::Series => "series",
    };

    match (&state.query, view_mode) {
        (_, ViewMode::FavoritesOnly) => EmptyState {
            message: format!("No favorite {noun} yet"),
            subtitle: "Mark entries as favorites to see them here".to_string(),
        },
        (Some(query), ViewMode::All) => EmptyState {
            message: format!("No {noun} found"),
            subtitle: format!("Nothing matches \"{query}\""),
        },
        (None, ViewMode::All) => EmptyState {
            message: format!("No {noun} found"),
            subtitle: "The catalog returned no entries".to_string(),
        },
    }
}
