//! Shared fixtures for scenario tests: a scripted fetcher and a recording presenter.

#![allow(dead_code)]

use futures_util::future::{BoxFuture, FutureExt};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::time::Duration;
use visionary::app::{EngineSettings, FavoritesLedger};
use visionary::domain::PageResponse;
use visionary::provider::CatalogFetcher;
use visionary::storage::{FavoritesStore, MemoryFavoritesStore};
use visionary::ui::RenderDispatcher;
use visionary::{CatalogEngine, CatalogEntry, CatalogError, CollectionId, MediaKind, Result, ViewModel};

#[derive(Debug, Clone)]
struct Scripted {
    delay: Duration,
    outcome: std::result::Result<PageResponse, String>,
}

impl Scripted {
    fn respond(self) -> BoxFuture<'static, Result<PageResponse>> {
        async move {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.outcome.map_err(CatalogError::fetch)
        }
        .boxed()
    }
}

/// Fetcher answering from scripted responses.
///
/// Each key holds a queue; the last response of a queue is repeated forever.
/// Every call is recorded as `"<collection>:<page>"` or `"search:<query>"`.
#[derive(Default)]
pub struct ScriptedFetcher {
    pages: Mutex<HashMap<(CollectionId, u32), VecDeque<Scripted>>>,
    searches: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, collection: CollectionId, page: u32, entries: Vec<CatalogEntry>, total_pages: u32) -> Self {
        self.page_after(collection, page, Duration::ZERO, Ok(PageResponse::new(entries, page, total_pages)))
    }

    pub fn failing_page(self, collection: CollectionId, page: u32, message: &str) -> Self {
        self.page_after(collection, page, Duration::ZERO, Err(message.to_string()))
    }

    pub fn page_after(
        self,
        collection: CollectionId,
        page: u32,
        delay: Duration,
        outcome: std::result::Result<PageResponse, String>,
    ) -> Self {
        self.pages
            .lock()
            .unwrap()
            .entry((collection, page))
            .or_default()
            .push_back(Scripted { delay, outcome });
        self
    }

    pub fn search_after(self, query: &str, delay: Duration, entries: Vec<CatalogEntry>) -> Self {
        self.searches
            .lock()
            .unwrap()
            .entry(query.to_string())
            .or_default()
            .push_back(Scripted { delay, outcome: Ok(PageResponse::new(entries, 1, 1)) });
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next(queue: Option<&mut VecDeque<Scripted>>) -> Option<Scripted> {
        let queue = queue?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl CatalogFetcher for ScriptedFetcher {
    fn fetch_page(&self, collection: CollectionId, page: u32) -> BoxFuture<'static, Result<PageResponse>> {
        self.calls.lock().unwrap().push(format!("{collection:?}:{page}"));
        let scripted = Self::next(self.pages.lock().unwrap().get_mut(&(collection, page))).unwrap_or(Scripted {
            delay: Duration::ZERO,
            outcome: Err(format!("no page {page}")),
        });
        scripted.respond()
    }

    fn search(&self, query: &str) -> BoxFuture<'static, Result<Vec<CatalogEntry>>> {
        self.calls.lock().unwrap().push(format!("search:{query}"));
        let scripted = Self::next(self.searches.lock().unwrap().get_mut(query)).unwrap_or(Scripted {
            delay: Duration::ZERO,
            outcome: Ok(PageResponse::new(Vec::new(), 1, 1)),
        });
        scripted.respond().map(|result| result.map(|page| page.results)).boxed()
    }
}

/// Every view model the engine dispatched, in order.
pub type Recorded = Arc<Mutex<Vec<ViewModel>>>;

pub fn film(id: u64, title: &str, rating: f64) -> CatalogEntry {
    CatalogEntry::new(id, MediaKind::Film, title).with_rating(rating, 100)
}

pub fn ids(vm: &ViewModel) -> Vec<u64> {
    vm.entry_ids()
}

pub fn engine_with_store(
    fetcher: Arc<ScriptedFetcher>,
    store: Box<dyn FavoritesStore>,
    settings: EngineSettings,
) -> (CatalogEngine, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    let dispatcher = RenderDispatcher::new(
        "https://image.tmdb.org/t/p/w500",
        Box::new(move |vm: &ViewModel| sink.lock().unwrap().push(vm.clone())),
    );
    let engine = CatalogEngine::new(fetcher, FavoritesLedger::open(store), dispatcher, settings);
    (engine, recorded)
}

pub fn engine(fetcher: Arc<ScriptedFetcher>) -> (CatalogEngine, Recorded) {
    engine_with_store(fetcher, Box::new(MemoryFavoritesStore::new()), EngineSettings::default())
}
