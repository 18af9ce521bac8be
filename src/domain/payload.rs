//! Provider payload shapes and their mapping into [`CatalogEntry`].
//!
//! The provider speaks TMDB-style JSON: films carry `title` and `release_date`,
//! series carry `name` and `first_air_date`. Both map onto a single
//! [`RawRecord`] through serde aliases. Only presence is validated; a missing or
//! malformed date degrades to `None` rather than failing the page.

use super::entry::{CatalogEntry, MediaKind};
use chrono::NaiveDate;
use serde::Deserialize;

/// One result record as sent by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub id: u64,
    #[serde(alias = "name", default)]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(alias = "first_air_date", default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub vote_count: Option<u64>,
}

impl RawRecord {
    /// Converts the record into an entry of the given kind.
    #[must_use]
    pub fn into_entry(self, kind: MediaKind) -> CatalogEntry {
        let release_date = self.release_date.as_deref().and_then(parse_release_date);
        if release_date.is_none() {
            tracing::trace!(id = self.id, raw = ?self.release_date, "release date missing or invalid");
        }

        CatalogEntry {
            id: self.id,
            kind,
            title: self.title,
            overview: self.overview.filter(|text| !text.trim().is_empty()),
            poster_ref: self.poster_path.filter(|path| !path.is_empty()),
            release_date,
            rating_average: self.vote_average.filter(|v| v.is_finite()).unwrap_or(0.0),
            rating_count: self.vote_count.unwrap_or(0),
        }
    }
}

/// Paged listing envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPage {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<RawRecord>,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

const fn first_page() -> u32 {
    1
}

impl ApiPage {
    /// Maps every record into an entry of `kind`, keeping provider order.
    #[must_use]
    pub fn into_page_response(self, kind: MediaKind) -> PageResponse {
        PageResponse {
            results: self.results.into_iter().map(|r| r.into_entry(kind)).collect(),
            page: self.page.max(1),
            total_pages: self.total_pages.max(1),
        }
    }
}

/// A page of typed results handed to the engine by the fetch collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub results: Vec<CatalogEntry>,
    pub page: u32,
    pub total_pages: u32,
}

impl PageResponse {
    #[must_use]
    pub const fn new(results: Vec<CatalogEntry>, page: u32, total_pages: u32) -> Self {
        Self { results, page, total_pages }
    }
}

/// Parses a provider date (`YYYY-MM-DD`). Empty or malformed input yields `None`.
#[must_use]
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
