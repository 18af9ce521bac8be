//! Application layer: catalog state, its transitions, and the session loop.
//!
//! Sits between the presentation (a [`Presenter`](crate::ui::Presenter) fed with
//! view models) and the domain/storage/provider layers.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! Intent → CatalogEngine::handle → state mutation → ViewModel → Presenter
//!                  │                      ↑
//!                  └── FetchJob ── fetch ─┘ (complete, stale results dropped)
//! ```
//!
//! # Modules
//!
//! - [`engine`]: [`CatalogEngine`], the single owner of session state
//! - [`handler`]: [`Intent`] and its dispatch
//! - [`driver`]: `tokio::select!` loop running an engine against an intent channel
//! - [`favorites`]: Favorites ledger with write-through persistence
//! - [`pagination`]: Page cursor accumulating entries
//! - [`projection`]: Pure filter and sort over loaded entries
//! - [`debounce`]: Single-slot search debouncer
//! - [`load_cycle`]: Per-collection Idle/Loading/Loaded/Error state machine
//! - [`modes`]: Sort, view and phase types

pub mod debounce;
pub mod driver;
pub mod engine;
pub mod favorites;
pub mod handler;
pub mod load_cycle;
pub mod modes;
pub mod pagination;
pub mod projection;

pub use debounce::{SearchDebouncer, SubmitOutcome};
pub use engine::{CatalogEngine, EngineSettings, FetchJob};
pub use favorites::{FavoritesLedger, ToggleOutcome};
pub use handler::Intent;
pub use load_cycle::{CollectionState, LoadCycleController, LoadRequest, RequestTicket, Resolution};
pub use modes::{Phase, SortKey, SortOrder, SortSpec, ViewMode};
pub use pagination::PaginationCursor;
pub use projection::project;
