//! Sort, view and load-phase state types.
//!
//! These enums parameterize the projection and describe where a collection is in
//! its load cycle:
//!
//! - [`SortKey`] / [`SortOrder`] (bundled as [`SortSpec`]): how visible entries are ordered
//! - [`ViewMode`]: whether every entry or only favorites are visible
//! - [`Phase`]: Idle → Loading → Loaded / Error

use serde::{Deserialize, Serialize};

/// Field the projection sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Title,
    Rating,
    ReleaseDate,
}

impl SortKey {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "title" | "name" => Some(Self::Title),
            "rating" | "vote_average" => Some(Self::Rating),
            "date" | "release-date" | "release_date" => Some(Self::ReleaseDate),
            _ => None,
        }
    }
}

/// Direction of the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Sort key and order applied together by the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    #[must_use]
    pub const fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }
}

impl Default for SortSpec {
    /// Best rated first, as the catalog opens.
    fn default() -> Self {
        Self::new(SortKey::Rating, SortOrder::Descending)
    }
}

/// Which entries the projection keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    All,
    FavoritesOnly,
}

/// Load-cycle phase of one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last tracked request succeeded.
    Loaded,
    /// The last tracked request failed; see `last_error`.
    Error,
}
