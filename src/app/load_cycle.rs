//! Per-collection load cycle: Idle → Loading → Loaded / Error.
//!
//! A [`LoadCycleController`] tracks at most one request per collection. Each
//! [`begin`](LoadCycleController::begin) hands out a [`RequestTicket`] carrying a
//! fresh generation number; only the ticket of the latest request can resolve the
//! collection. Anything older is a stale response and is dropped without touching
//! state.
//!
//! # Transitions
//!
//! ```text
//! Idle / Loaded / Error ──begin──▶ Loading ──Ok──▶ Loaded
//!                                     └─────Err──▶ Error (entries kept)
//! ```
//!
//! Fresh requests (`Page(1)`, `Search`) reset the cursor when they begin;
//! continuations (`Page(n > 1)`) append to it.

use super::modes::Phase;
use super::pagination::PaginationCursor;
use crate::domain::{CatalogEntry, CatalogError, CollectionId, PageResponse};

/// What a collection is asked to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    /// A page of the collection's default listing.
    Page(u32),
    /// Provider search replacing the listing.
    Search(String),
}

impl LoadRequest {
    /// Whether the request replaces the accumulated entries.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        match self {
            Self::Page(page) => *page <= 1,
            Self::Search(_) => true,
        }
    }
}

/// Handle for one issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub collection: CollectionId,
    pub generation: u64,
    pub request: LoadRequest,
}

/// How a resolution was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Loaded { appended: usize },
    Failed { message: String },
    /// Superseded by a newer request; nothing changed.
    Stale,
}

/// Observable state of one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState {
    pub collection: CollectionId,
    pub cursor: PaginationCursor,
    pub phase: Phase,
    pub last_error: Option<String>,
    /// Active search query; `None` while browsing the default listing.
    pub query: Option<String>,
}

impl CollectionState {
    #[must_use]
    pub fn new(collection: CollectionId) -> Self {
        Self {
            collection,
            cursor: PaginationCursor::new(),
            phase: Phase::Idle,
            last_error: None,
            query: None,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        self.cursor.entries()
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.cursor.page()
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.cursor.total_pages()
    }
}

/// Load-cycle state machine for one collection.
#[derive(Debug, Clone)]
pub struct LoadCycleController {
    state: CollectionState,
    generation: u64,
    in_flight: Option<u64>,
    last_request: Option<LoadRequest>,
}

impl LoadCycleController {
    #[must_use]
    pub fn new(collection: CollectionId) -> Self {
        Self {
            state: CollectionState::new(collection),
            generation: 0,
            in_flight: None,
            last_request: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CollectionState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Enters `Loading` for `request`, superseding any request still in flight.
    pub fn begin(&mut self, request: LoadRequest) -> RequestTicket {
        self.generation += 1;
        if let Some(previous) = self.in_flight.replace(self.generation) {
            tracing::debug!(
                collection = ?self.state.collection,
                superseded_generation = previous,
                "request superseded"
            );
        }

        if request.is_fresh() {
            self.state.cursor.reset();
            self.state.query = match &request {
                LoadRequest::Search(query) => Some(query.clone()),
                LoadRequest::Page(_) => None,
            };
        }

        self.state.phase = Phase::Loading;
        self.state.last_error = None;
        self.last_request = Some(request.clone());

        tracing::debug!(
            collection = ?self.state.collection,
            generation = self.generation,
            request = ?request,
            "load started"
        );

        RequestTicket {
            collection: self.state.collection,
            generation: self.generation,
            request,
        }
    }

    /// Applies the outcome of the request identified by `ticket`.
    pub fn resolve(&mut self, ticket: &RequestTicket, result: Result<PageResponse, CatalogError>) -> Resolution {
        if ticket.collection != self.state.collection || self.in_flight != Some(ticket.generation) {
            tracing::debug!(
                collection = ?ticket.collection,
                generation = ticket.generation,
                current = ?self.in_flight,
                "discarding stale response"
            );
            return Resolution::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(response) => {
                let appended = response.results.len();
                let accepted = match &ticket.request {
                    LoadRequest::Search(_) => self.state.cursor.append_page(response.results, 1, 1),
                    LoadRequest::Page(page) => {
                        self.state.cursor.append_page(response.results, *page, response.total_pages)
                    }
                };
                self.state.phase = Phase::Loaded;

                if accepted {
                    tracing::debug!(collection = ?self.state.collection, appended, "load finished");
                    Resolution::Loaded { appended }
                } else {
                    Resolution::Stale
                }
            }
            Err(e) => {
                let message = e.user_message();
                tracing::debug!(collection = ?self.state.collection, error = %e, "load failed");
                self.state.phase = Phase::Error;
                self.state.last_error = Some(message.clone());
                Resolution::Failed { message }
            }
        }
    }

    /// The request to repeat on retry.
    #[must_use]
    pub fn retry_request(&self) -> Option<LoadRequest> {
        self.last_request.clone()
    }

    /// `Page(page + 1)` when browsing the listing and more pages exist.
    #[must_use]
    pub fn next_page_request(&self) -> Option<LoadRequest> {
        if self.state.query.is_some() || !self.state.cursor.has_more() {
            return None;
        }
        Some(LoadRequest::Page(self.state.cursor.page() + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaKind;

    fn films(ids: &[u64]) -> Vec<CatalogEntry> {
        ids.iter()
            .map(|&id| CatalogEntry::new(id, MediaKind::Film, format!("Film {id}")))
            .collect()
    }

    fn ids(controller: &LoadCycleController) -> Vec<u64> {
        controller.state().entries().iter().map(|e| e.id).collect()
    }

    #[test]
    fn starts_idle() {
        let controller = LoadCycleController::new(CollectionId::PopularFilms);
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.retry_request().is_none());
        assert!(!controller.is_loading());
    }

    #[test]
    fn failed_continuation_keeps_entries() {
        let mut controller = LoadCycleController::new(CollectionId::PopularFilms);

        let first = controller.begin(LoadRequest::Page(1));
        assert_eq!(controller.phase(), Phase::Loading);
        controller.resolve(&first, Ok(PageResponse::new(films(&[1, 2]), 1, 2)));
        assert_eq!(controller.phase(), Phase::Loaded);

        let second = controller.next_page_request().unwrap();
        assert_eq!(second, LoadRequest::Page(2));
        let ticket = controller.begin(second);
        let resolution = controller.resolve(&ticket, Err(CatalogError::fetch("network down")));

        assert_eq!(resolution, Resolution::Failed { message: "network down".into() });
        assert_eq!(controller.phase(), Phase::Error);
        assert_eq!(controller.state().last_error.as_deref(), Some("network down"));
        assert_eq!(ids(&controller), vec![1, 2]);
        assert_eq!(controller.retry_request(), Some(LoadRequest::Page(2)));
    }

    #[test]
    fn superseded_ticket_is_stale() {
        let mut controller = LoadCycleController::new(CollectionId::PopularFilms);

        let old = controller.begin(LoadRequest::Search("alien".into()));
        let new = controller.begin(LoadRequest::Search("aliens".into()));

        assert_eq!(controller.resolve(&old, Ok(PageResponse::new(films(&[9]), 1, 1))), Resolution::Stale);
        assert_eq!(controller.phase(), Phase::Loading);
        assert!(ids(&controller).is_empty());

        assert_eq!(
            controller.resolve(&new, Ok(PageResponse::new(films(&[3]), 1, 1))),
            Resolution::Loaded { appended: 1 }
        );
        assert_eq!(ids(&controller), vec![3]);
        assert_eq!(controller.state().query.as_deref(), Some("aliens"));
    }

    #[test]
    fn resolved_ticket_cannot_resolve_twice() {
        let mut controller = LoadCycleController::new(CollectionId::PopularFilms);
        let ticket = controller.begin(LoadRequest::Page(1));
        controller.resolve(&ticket, Ok(PageResponse::new(films(&[1]), 1, 1)));

        assert_eq!(controller.resolve(&ticket, Err(CatalogError::fetch("late"))), Resolution::Stale);
        assert_eq!(controller.phase(), Phase::Loaded);
    }

    #[test]
    fn fresh_request_resets_and_search_disables_paging() {
        let mut controller = LoadCycleController::new(CollectionId::PopularFilms);
        let ticket = controller.begin(LoadRequest::Page(1));
        controller.resolve(&ticket, Ok(PageResponse::new(films(&[1, 2]), 1, 5)));
        assert!(controller.next_page_request().is_some());

        let search = controller.begin(LoadRequest::Search("memento".into()));
        assert!(ids(&controller).is_empty());
        controller.resolve(&search, Ok(PageResponse::new(films(&[77]), 1, 9)));

        assert_eq!(controller.state().total_pages(), 1);
        assert!(controller.next_page_request().is_none());

        let restore = controller.begin(LoadRequest::Page(1));
        assert!(controller.state().query.is_none());
        controller.resolve(&restore, Ok(PageResponse::new(films(&[1]), 1, 5)));
        assert_eq!(controller.next_page_request(), Some(LoadRequest::Page(2)));
    }

    #[test]
    fn ticket_from_other_collection_is_stale() {
        let mut films_ctl = LoadCycleController::new(CollectionId::PopularFilms);
        let mut series_ctl = LoadCycleController::new(CollectionId::PopularSeries);
        let _ = films_ctl.begin(LoadRequest::Page(1));
        let series_ticket = series_ctl.begin(LoadRequest::Page(1));

        assert_eq!(films_ctl.resolve(&series_ticket, Ok(PageResponse::new(vec![], 1, 1))), Resolution::Stale);
    }
}
