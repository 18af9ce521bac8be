//! Visionary: catalog state and projection engine for film and series listings.
//!
//! Visionary keeps the state behind a browsing UI for paginated media catalogs:
//! - Favorites ledger with write-through JSON persistence
//! - Page cursor accumulating listing pages, with stale responses discarded
//! - Pure sort/filter projection (title, rating, release date; all or favorites)
//! - Debounced free-text search that replaces and restores the listing
//! - Immutable view models handed to a pluggable presenter

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs): stdin commands, text rendering   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ Intent (mpsc)
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - CatalogEngine + driver loop                      │
//! │  - Load cycle, pagination, debounce                 │
//! │  - Projection                                       │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Provider      │
//! │ (ui/)         │   │ (storage/)    │   │ (provider/)   │
//! │ - View models │   │ - JSON I/O    │   │ - Fetch trait │
//! │ - Text render │   │ - Memory      │   │ - Fixtures    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Entries, keys, payload mapping, errors           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use visionary::provider::FixtureCatalog;
//! use visionary::{initialize, Config, ViewModel};
//!
//! let config = Config::from_toml_str(r#"
//!     quiet_interval_ms = 150
//!     sort_key = "title"
//!     sort_order = "ascending"
//! "#)?;
//!
//! let engine = initialize(&config, Arc::new(FixtureCatalog::new()), Box::new(|vm: &ViewModel| {
//!     println!("{} entries", vm.visible_entries.len());
//! }));
//! assert_eq!(engine.sort().key, visionary::SortKey::Title);
//! # Ok::<(), visionary::CatalogError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod provider;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{CatalogEngine, EngineSettings, FetchJob, Intent, Phase, SortKey, SortOrder, SortSpec, ViewMode};
pub use domain::{CatalogEntry, CatalogError, CollectionId, FavoriteKey, MediaKind, Result};
pub use ui::{Presenter, ViewModel};

use app::FavoritesLedger;
use provider::CatalogFetcher;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storage::{FavoritesStore, JsonFavoritesStore, MemoryFavoritesStore};
use tokio::time::Duration;
use ui::RenderDispatcher;

/// Poster images are served from this base unless configured otherwise.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Engine configuration, read from a TOML file.
///
/// Every key is optional.
///
/// # Example
///
/// ```toml
/// quiet_interval_ms = 300
/// favorites_file = "~/.local/share/visionary/favorites.json"
/// image_base_url = "https://image.tmdb.org/t/p/w500"
/// default_collection = "popular-series"
/// sort_key = "release-date"
/// sort_order = "descending"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Quiet interval before a typed search is sent. Default: 300
    pub quiet_interval_ms: u64,

    /// Favorites document location; `~` is expanded.
    ///
    /// Default: `<data dir>/visionary/favorites.json`
    pub favorites_file: Option<String>,

    /// Prefix for poster URLs.
    pub image_base_url: String,

    /// Collection shown when a session starts. Default: `popular-films`
    pub default_collection: CollectionId,

    /// Default: `rating`
    pub sort_key: SortKey,

    /// Default: `descending`
    pub sort_order: SortOrder,

    /// Tracing filter used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let sort = SortSpec::default();
        Self {
            quiet_interval_ms: 300,
            favorites_file: None,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            default_collection: CollectionId::PopularFilms,
            sort_key: sort.key,
            sort_order: sort.order,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] for malformed TOML, unknown keys or
    /// out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Reads and parses the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("load_config", path = ?path).entered();
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    #[must_use]
    pub fn favorites_path(&self) -> PathBuf {
        self.favorites_file
            .as_deref()
            .map_or_else(infrastructure::default_favorites_path, infrastructure::expand_tilde)
    }

    #[must_use]
    pub const fn sort(&self) -> SortSpec {
        SortSpec::new(self.sort_key, self.sort_order)
    }

    #[must_use]
    pub const fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            quiet_interval: Duration::from_millis(self.quiet_interval_ms),
            default_collection: self.default_collection,
            sort: self.sort(),
        }
    }
}

/// Builds an engine from `config`.
///
/// Favorites are persisted to [`Config::favorites_path`]. When that location
/// cannot be prepared the session keeps favorites in memory only and logs a
/// warning.
pub fn initialize(config: &Config, fetcher: Arc<dyn CatalogFetcher>, presenter: Box<dyn Presenter>) -> CatalogEngine {
    tracing::debug!("initializing catalog engine");

    let path = config.favorites_path();
    let store: Box<dyn FavoritesStore> = match JsonFavoritesStore::new(path.clone()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "favorites file unavailable, keeping favorites in memory");
            Box::new(MemoryFavoritesStore::new())
        }
    };

    CatalogEngine::new(
        fetcher,
        FavoritesLedger::open(store),
        RenderDispatcher::new(config.image_base_url.clone(), presenter),
        config.engine_settings(),
    )
}
