//! File-backed provider for demos and tests.
//!
//! Loads TMDB-shaped listing pages from a directory once and serves them from
//! memory:
//!
//! ```text
//! <dir>/movie-popular-1.json
//! <dir>/movie-popular-2.json
//! <dir>/tv-popular-1.json
//! ```
//!
//! Searches run over every loaded film title with multi-token fuzzy matching: the
//! query is split on whitespace and every token must match.

use super::CatalogFetcher;
use crate::domain::error::{CatalogError, Result};
use crate::domain::payload::ApiPage;
use crate::domain::{CatalogEntry, CollectionId, MediaKind, PageResponse};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use futures_util::future::{self, BoxFuture, FutureExt};
use std::collections::BTreeMap;
use std::path::Path;

/// In-memory catalog loaded from JSON page files.
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    pages: BTreeMap<(CollectionId, u32), PageResponse>,
}

impl FixtureCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `movie-popular-N.json` / `tv-popular-N.json` file in `dir`.
    ///
    /// Other files are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or a matching file does not
    /// parse.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("fixture_from_dir", dir = ?dir).entered();
        let mut catalog = Self::new();

        for dir_entry in std::fs::read_dir(dir)? {
            let path = dir_entry?.path();
            let Some((collection, page)) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(parse_page_file_stem)
            else {
                continue;
            };

            let contents = std::fs::read_to_string(&path)?;
            let api_page: ApiPage = serde_json::from_str(&contents)
                .map_err(|e| CatalogError::Config(format!("invalid fixture {}: {e}", path.display())))?;

            tracing::debug!(collection = ?collection, page, results = api_page.results.len(), "fixture page loaded");
            catalog.insert_page(collection, page, api_page.into_page_response(collection.kind()));
        }

        Ok(catalog)
    }

    /// Registers `response` as page `page` of `collection`.
    pub fn insert_page(&mut self, collection: CollectionId, page: u32, response: PageResponse) {
        self.pages.insert((collection, page), response);
    }

    #[must_use]
    pub fn page_count(&self, collection: CollectionId) -> usize {
        self.pages.keys().filter(|(c, _)| *c == collection).count()
    }

    fn lookup(&self, collection: CollectionId, page: u32) -> Result<PageResponse> {
        self.pages
            .get(&(collection, page))
            .cloned()
            .ok_or_else(|| CatalogError::fetch(format!("Could not load {} (page {page})", collection.label().to_lowercase())))
    }

    fn matching_films(&self, query: &str) -> Vec<CatalogEntry> {
        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return Vec::new();
        }
        let matcher = SkimMatcherV2::default();

        self.pages
            .iter()
            .filter(|((collection, _), _)| collection.kind() == MediaKind::Film)
            .flat_map(|(_, page)| page.results.iter())
            .filter(|entry| {
                let title = entry.title.to_lowercase();
                tokens.iter().all(|token| matcher.fuzzy_match(&title, token).is_some())
            })
            .cloned()
            .collect()
    }
}

impl CatalogFetcher for FixtureCatalog {
    fn fetch_page(&self, collection: CollectionId, page: u32) -> BoxFuture<'static, Result<PageResponse>> {
        future::ready(self.lookup(collection, page)).boxed()
    }

    fn search(&self, query: &str) -> BoxFuture<'static, Result<Vec<CatalogEntry>>> {
        let results = self.matching_films(query);
        tracing::debug!(query = %query, matches = results.len(), "fixture search");
        future::ready(Ok(results)).boxed()
    }
}

/// `movie-popular-2` → `(PopularFilms, 2)`.
fn parse_page_file_stem(stem: &str) -> Option<(CollectionId, u32)> {
    let (prefix, page) = stem.rsplit_once('-')?;
    let collection = match prefix {
        "movie-popular" => CollectionId::PopularFilms,
        "tv-popular" => CollectionId::PopularSeries,
        _ => return None,
    };
    let page = page.parse::<u32>().ok().filter(|p| *p >= 1)?;
    Some((collection, page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, json: &str) {
        std::fs::write(dir.join(name), json).unwrap();
    }

    #[test]
    fn stems_map_to_collection_pages() {
        assert_eq!(parse_page_file_stem("movie-popular-2"), Some((CollectionId::PopularFilms, 2)));
        assert_eq!(parse_page_file_stem("tv-popular-1"), Some((CollectionId::PopularSeries, 1)));
        assert_eq!(parse_page_file_stem("tv-popular-0"), None);
        assert_eq!(parse_page_file_stem("notes"), None);
    }

    #[tokio::test]
    async fn serves_pages_and_searches_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "movie-popular-1.json",
            r#"{"page":1,"total_pages":2,"results":[
                {"id":1,"title":"Alien","release_date":"1979-05-25","vote_average":8.1,"vote_count":10},
                {"id":2,"title":"Aliens","release_date":"1986-07-18","vote_average":7.9,"vote_count":10},
                {"id":3,"title":"Heat","release_date":"1995-12-15","vote_average":7.9,"vote_count":10}]}"#,
        );
        write(
            dir.path(),
            "tv-popular-1.json",
            r#"{"page":1,"total_pages":1,"results":[{"id":1,"name":"Alien Nation","first_air_date":"1989-09-18"}]}"#,
        );
        write(dir.path(), "README.txt", "ignored");

        let catalog = FixtureCatalog::from_dir(dir.path()).unwrap();
        assert_eq!(catalog.page_count(CollectionId::PopularFilms), 1);

        let page = catalog.fetch_page(CollectionId::PopularSeries, 1).await.unwrap();
        assert_eq!(page.results[0].kind, MediaKind::Series);

        let hits: Vec<u64> = catalog.search("alien").await.unwrap().iter().map(|e| e.id).collect();
        assert_eq!(hits, vec![1, 2]);

        let missing = catalog.fetch_page(CollectionId::PopularFilms, 2).await;
        assert!(matches!(missing, Err(CatalogError::Fetch(_))));
    }
}
