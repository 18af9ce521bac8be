//! Storage layer for persisted favorite markers.
//!
//! # Modules
//!
//! - `backend`: [`FavoritesStore`] trait consumed by the favorites ledger
//! - `json`: JSON file store with atomic writes
//! - `memory`: session-only store
//! - `models`: on-disk record types separate from domain keys

pub mod backend;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::FavoritesStore;
pub use json::JsonFavoritesStore;
pub use memory::MemoryFavoritesStore;
pub use models::FavoriteRecord;
