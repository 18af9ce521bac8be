//! View model types representing renderable catalog state.
//!
//! View models are immutable snapshots computed by
//! [`RenderDispatcher::compute_view_model`](crate::ui::RenderDispatcher::compute_view_model).
//! They contain no business logic, only display-ready data, so a presenter can
//! either diff consecutive snapshots or redraw from scratch.

use crate::app::modes::{Phase, SortSpec, ViewMode};
use crate::domain::{CatalogEntry, CollectionId, FavoriteKey};
use std::collections::BTreeSet;

/// Complete view model for one catalog grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Collection the grid shows.
    pub collection: CollectionId,

    /// Projected entries, in display order.
    pub visible_entries: Vec<DisplayEntry>,

    /// Every favorite marker, across kinds and collections.
    pub favorite_marks: BTreeSet<FavoriteKey>,

    /// Load-cycle phase of the collection.
    pub phase: Phase,

    /// User-facing message when `phase` is `Error`.
    pub error_message: Option<String>,

    /// Set only when the collection is loaded and nothing is visible.
    pub empty_state: Option<EmptyState>,

    /// Summary figures over the visible entries.
    pub stats: CatalogStats,

    /// Whether a "load more" control should be offered.
    pub can_load_more: bool,

    /// Active search query, if the grid shows search results.
    pub query: Option<String>,

    pub sort: SortSpec,
    pub view_mode: ViewMode,
}

impl ViewModel {
    /// Ids of the visible entries, in display order.
    #[must_use]
    pub fn entry_ids(&self) -> Vec<u64> {
        self.visible_entries.iter().map(|d| d.entry.id).collect()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }
}

/// One card in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEntry {
    pub entry: CatalogEntry,

    pub is_favorite: bool,

    /// Rating with one decimal (`"7.4"`).
    pub rating_label: String,

    /// Long-form release date, or `"Unknown date"`.
    pub release_label: String,

    /// Absolute poster URL when the entry has a poster.
    pub poster_url: Option<String>,
}

/// Figures shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatalogStats {
    /// Number of visible entries.
    pub displayed: usize,

    /// Number of favorites in the ledger.
    pub favorites: usize,

    /// Mean rating of the visible entries, one decimal; 0 when nothing is visible.
    pub average_rating: f64,
}

/// Explicit "nothing to show" marker, distinct from loading and error states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No films found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
