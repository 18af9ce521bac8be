//! The catalog engine: one owner for every piece of session state.
//!
//! [`CatalogEngine`] holds the favorites ledger, one [`LoadCycleController`] per
//! collection, the search debouncer, the sort and view settings and the render
//! dispatcher. Every operation runs to completion on the caller's task; fetches are
//! handed out as [`FetchJob`]s so the caller decides when to await them, and
//! results come back through [`CatalogEngine::complete`].
//!
//! A view model is dispatched after every externally visible change. Stale
//! completions and changes to a collection that is not on screen dispatch nothing.

use super::debounce::{SearchDebouncer, SubmitOutcome};
use super::favorites::{FavoritesLedger, ToggleOutcome};
use super::load_cycle::{CollectionState, LoadCycleController, LoadRequest, RequestTicket, Resolution};
use super::modes::{Phase, SortSpec, ViewMode};
use crate::domain::error::Result;
use crate::domain::{CollectionId, FavoriteKey, PageResponse};
use crate::provider::CatalogFetcher;
use crate::ui::{RenderDispatcher, ViewModel};
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tokio::time::{Duration, Instant};

/// A fetch issued by the engine, not yet awaited.
pub struct FetchJob {
    pub ticket: RequestTicket,
    pub future: BoxFuture<'static, Result<PageResponse>>,
}

impl FetchJob {
    /// Pairs the fetch with its ticket so it can sit in an unordered in-flight set.
    #[must_use]
    pub fn into_completion(self) -> BoxFuture<'static, (RequestTicket, Result<PageResponse>)> {
        let Self { ticket, future } = self;
        async move { (ticket, future.await) }.boxed()
    }
}

impl std::fmt::Debug for FetchJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchJob").field("ticket", &self.ticket).finish_non_exhaustive()
    }
}

/// Session settings that are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub quiet_interval: Duration,
    pub default_collection: CollectionId,
    pub sort: SortSpec,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            quiet_interval: super::debounce::DEFAULT_QUIET_INTERVAL,
            default_collection: CollectionId::PopularFilms,
            sort: SortSpec::default(),
        }
    }
}

pub struct CatalogEngine {
    favorites: FavoritesLedger,
    films: LoadCycleController,
    series: LoadCycleController,
    active: CollectionId,
    debouncer: SearchDebouncer,
    sort: SortSpec,
    view_mode: ViewMode,
    dispatcher: RenderDispatcher,
    fetcher: Arc<dyn CatalogFetcher>,
    persistence_warning: Option<String>,
}

impl CatalogEngine {
    pub fn new(
        fetcher: Arc<dyn CatalogFetcher>,
        favorites: FavoritesLedger,
        dispatcher: RenderDispatcher,
        settings: EngineSettings,
    ) -> Self {
        tracing::debug!(
            collection = ?settings.default_collection,
            sort = ?settings.sort,
            quiet_ms = settings.quiet_interval.as_millis() as u64,
            "catalog engine created"
        );

        Self {
            favorites,
            films: LoadCycleController::new(CollectionId::PopularFilms),
            series: LoadCycleController::new(CollectionId::PopularSeries),
            active: settings.default_collection,
            debouncer: SearchDebouncer::new(settings.quiet_interval),
            sort: settings.sort,
            view_mode: ViewMode::default(),
            dispatcher,
            fetcher,
            persistence_warning: None,
        }
    }

    #[must_use]
    pub const fn active_collection(&self) -> CollectionId {
        self.active
    }

    #[must_use]
    pub const fn sort(&self) -> SortSpec {
        self.sort
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoritesLedger {
        &self.favorites
    }

    #[must_use]
    pub const fn controller(&self, collection: CollectionId) -> &LoadCycleController {
        match collection {
            CollectionId::PopularFilms => &self.films,
            CollectionId::PopularSeries => &self.series,
        }
    }

    fn controller_mut(&mut self, collection: CollectionId) -> &mut LoadCycleController {
        match collection {
            CollectionId::PopularFilms => &mut self.films,
            CollectionId::PopularSeries => &mut self.series,
        }
    }

    /// State of the collection on screen.
    #[must_use]
    pub const fn state(&self) -> &CollectionState {
        self.controller(self.active).state()
    }

    /// Last favorites write failure, cleared by the next successful write.
    #[must_use]
    pub fn persistence_warning(&self) -> Option<&str> {
        self.persistence_warning.as_deref()
    }

    /// When the pending search becomes due.
    #[must_use]
    pub fn search_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// View model of the collection on screen.
    #[must_use]
    pub fn view_model(&self) -> ViewModel {
        self.dispatcher
            .compute_view_model(self.state(), self.favorites.all(), self.sort, self.view_mode)
    }

    fn emit(&mut self) {
        let view = self.view_model();
        self.dispatcher.dispatch(&view);
    }

    /// Loads page 1 of the collection on screen.
    pub fn start_session(&mut self) -> FetchJob {
        let _span = tracing::debug_span!("start_session", collection = ?self.active).entered();
        self.start(LoadRequest::Page(1))
    }

    /// Begins `request` on the active collection and returns the fetch to run.
    ///
    /// Provider search covers films only, so a search always lands in
    /// [`CollectionId::PopularFilms`] and puts that collection on screen.
    pub fn start(&mut self, request: LoadRequest) -> FetchJob {
        if matches!(request, LoadRequest::Search(_)) && self.active != CollectionId::PopularFilms {
            tracing::debug!(from = ?self.active, "search switches to films");
            self.active = CollectionId::PopularFilms;
        }
        let collection = self.active;
        let ticket = self.controller_mut(collection).begin(request);

        let future = match &ticket.request {
            LoadRequest::Page(page) => self.fetcher.fetch_page(collection, *page),
            LoadRequest::Search(query) => self
                .fetcher
                .search(query)
                .map(|result| result.map(|entries| PageResponse::new(entries, 1, 1)))
                .boxed(),
        };

        self.emit();
        FetchJob { ticket, future }
    }

    /// Feeds a fetch result back. Stale results change nothing and dispatch nothing.
    pub fn complete(&mut self, ticket: &RequestTicket, result: Result<PageResponse>) -> Resolution {
        let _span = tracing::debug_span!(
            "complete",
            collection = ?ticket.collection,
            generation = ticket.generation
        )
        .entered();

        let resolution = self.controller_mut(ticket.collection).resolve(ticket, result);
        if resolution != Resolution::Stale && ticket.collection == self.active {
            self.emit();
        }
        resolution
    }

    pub fn toggle_favorite(&mut self, key: FavoriteKey) -> ToggleOutcome {
        let _span = tracing::debug_span!("toggle_favorite", id = key.id, kind = %key.kind).entered();

        let outcome = self.favorites.toggle(key);
        self.persistence_warning = outcome.persist_error.as_ref().map(|e| e.user_message());
        self.emit();
        outcome
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        tracing::debug!(sort = ?sort, "sort changed");
        self.sort = sort;
        self.emit();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        tracing::debug!(view_mode = ?view_mode, "view mode changed");
        self.view_mode = view_mode;
        self.emit();
    }

    /// Puts `collection` on screen. A collection never loaded before starts at page 1.
    ///
    /// Any pending search belonged to the previous collection and is dropped.
    pub fn select_collection(&mut self, collection: CollectionId) -> Option<FetchJob> {
        if collection == self.active {
            return None;
        }
        let _span = tracing::debug_span!("select_collection", from = ?self.active, to = ?collection).entered();

        self.debouncer.cancel();
        self.active = collection;

        if self.controller(collection).phase() == Phase::Idle {
            return Some(self.start(LoadRequest::Page(1)));
        }
        self.emit();
        None
    }

    /// Requests the next listing page, unless a load is running or nothing is left.
    pub fn next_page(&mut self) -> Option<FetchJob> {
        let controller = self.controller(self.active);
        if controller.is_loading() {
            tracing::debug!("next page ignored while loading");
            return None;
        }
        let request = controller.next_page_request()?;
        Some(self.start(request))
    }

    /// Repeats the request that left the active collection in `Error`.
    pub fn retry(&mut self) -> Option<FetchJob> {
        let controller = self.controller(self.active);
        if controller.phase() != Phase::Error {
            return None;
        }
        let request = controller.retry_request()?;
        tracing::debug!(request = ?request, "retrying");
        Some(self.start(request))
    }

    /// Feeds search input at `now`.
    ///
    /// Non-blank text is parked in the debouncer and nothing is fetched yet. Blank
    /// text restores the default listing when a search had replaced it.
    pub fn submit_search(&mut self, text: &str, now: Instant) -> Option<FetchJob> {
        match self.debouncer.submit(text, now) {
            SubmitOutcome::Scheduled { .. } => None,
            SubmitOutcome::RestoreDefault => self.restore_listing(),
        }
    }

    /// Reloads page 1 when a search had replaced the listing or nothing was loaded.
    fn restore_listing(&mut self) -> Option<FetchJob> {
        let state = self.state();
        if state.query.is_some() || state.phase == Phase::Idle {
            Some(self.start(LoadRequest::Page(1)))
        } else {
            None
        }
    }

    /// Starts the pending search once its quiet interval has passed.
    pub fn poll_search(&mut self, now: Instant) -> Option<FetchJob> {
        let query = self.debouncer.take_due(now)?;
        let _span = tracing::debug_span!("search", query = %query).entered();
        Some(self.start(LoadRequest::Search(query)))
    }

    /// Awaits `job` and applies its result.
    pub async fn run_job(&mut self, job: FetchJob) -> Resolution {
        let FetchJob { ticket, future } = job;
        let result = future.await;
        self.complete(&ticket, result)
    }

    /// Loads listing page `page` of the active collection to completion.
    pub async fn load_page(&mut self, page: u32) -> Resolution {
        let job = self.start(LoadRequest::Page(page));
        self.run_job(job).await
    }

    /// Runs a search immediately, bypassing the debouncer.
    ///
    /// Blank input restores the listing instead, as in
    /// [`submit_search`](Self::submit_search). `None` when nothing had to be fetched.
    pub async fn search(&mut self, query: &str) -> Option<Resolution> {
        self.debouncer.cancel();
        let query = query.trim();
        let job = if query.is_empty() {
            self.restore_listing()?
        } else {
            self.start(LoadRequest::Search(query.to_string()))
        };
        Some(self.run_job(job).await)
    }

    /// [`retry`](Self::retry) run to completion. `None` when there was nothing to retry.
    pub async fn retry_now(&mut self) -> Option<Resolution> {
        let job = self.retry()?;
        Some(self.run_job(job).await)
    }
}

impl std::fmt::Debug for CatalogEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEngine")
            .field("active", &self.active)
            .field("sort", &self.sort)
            .field("view_mode", &self.view_mode)
            .field("favorites", &self.favorites)
            .field("films", &self.films.state().phase)
            .field("series", &self.series.state().phase)
            .finish_non_exhaustive()
    }
}
