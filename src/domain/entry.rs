//! Catalog entry domain model.
//!
//! A [`CatalogEntry`] is a single film or series as received from the provider.
//! Entries are immutable once received and owned by the collection they were
//! fetched into. Favorites are keyed by [`FavoriteKey`], the `(id, kind)` pair,
//! since provider ids are only unique within one kind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media an entry describes.
///
/// Serialized with the provider's vocabulary (`movie` / `tv`) so persisted
/// favorites stay readable by other clients of the same store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    #[serde(rename = "movie")]
    Film,
    #[serde(rename = "tv")]
    Series,
}

impl MediaKind {
    /// Provider path segment for this kind (`movie` or `tv`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Film => "movie",
            Self::Series => "tv",
        }
    }

    /// Parses a kind from its provider name or a human alias.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "movie" | "film" | "films" => Some(Self::Film),
            "tv" | "series" | "show" => Some(Self::Series),
            _ => None,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a favorite marker: provider id plus media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FavoriteKey {
    pub id: u64,
    pub kind: MediaKind,
}

impl FavoriteKey {
    #[must_use]
    pub const fn new(id: u64, kind: MediaKind) -> Self {
        Self { id, kind }
    }
}

/// Logical grid of entries fetched page by page from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionId {
    PopularFilms,
    PopularSeries,
}

impl CollectionId {
    /// Kind of every entry this collection yields.
    #[must_use]
    pub const fn kind(self) -> MediaKind {
        match self {
            Self::PopularFilms => MediaKind::Film,
            Self::PopularSeries => MediaKind::Series,
        }
    }

    /// Heading shown by presentation layers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PopularFilms => "Popular films",
            Self::PopularSeries => "Popular series",
        }
    }
}

/// A single media item as received from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: u64,
    pub kind: MediaKind,
    pub title: String,
    pub overview: Option<String>,
    pub poster_ref: Option<String>,
    /// `None` when the provider sent no date or one that does not parse.
    pub release_date: Option<NaiveDate>,
    /// Average rating on a 0–10 scale.
    pub rating_average: f64,
    pub rating_count: u64,
}

impl CatalogEntry {
    /// Creates an entry with only identity and title set.
    ///
    /// Mostly useful for fixtures; provider data goes through
    /// [`crate::domain::payload`].
    #[must_use]
    pub fn new(id: u64, kind: MediaKind, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            overview: None,
            poster_ref: None,
            release_date: None,
            rating_average: 0.0,
            rating_count: 0,
        }
    }

    #[must_use]
    pub fn with_rating(mut self, average: f64, count: u64) -> Self {
        self.rating_average = average;
        self.rating_count = count;
        self
    }

    #[must_use]
    pub fn with_release_date(mut self, date: Option<NaiveDate>) -> Self {
        self.release_date = date;
        self
    }

    #[must_use]
    pub const fn key(&self) -> FavoriteKey {
        FavoriteKey::new(self.id, self.kind)
    }
}
