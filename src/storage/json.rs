//! JSON file-based favorites store.
//!
//! Stores favorite markers in a small human-readable JSON document. Writes go to a
//! temporary file that is then renamed over the target, so a crash mid-write never
//! leaves a truncated document behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "favorites": [
//!     { "id": 550, "type": "movie" },
//!     { "id": 1399, "type": "tv" }
//!   ]
//! }
//! ```

use crate::domain::error::{CatalogError, Result};
use crate::domain::FavoriteKey;
use crate::storage::backend::FavoritesStore;
use crate::storage::models::FavoriteRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    favorites: Vec<FavoriteRecord>,
}

/// JSON file favorites store.
///
/// Every read goes to disk; nothing is cached here because the ledger already
/// keeps the authoritative in-memory copy.
#[derive(Debug)]
pub struct JsonFavoritesStore {
    file_path: PathBuf,
}

impl JsonFavoritesStore {
    /// Opens a store at `file_path`, creating parent directories as needed.
    ///
    /// The file itself is not created until the first write; a missing file reads
    /// as an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON favorites store");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self { file_path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| CatalogError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(CatalogError::Storage(format!(
                "unsupported favorites format version {}",
                data.version
            )));
        }

        Ok(data)
    }

    fn save_to_file(&self, data: &StoreData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| CatalogError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.file_path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        Ok(())
    }
}

impl FavoritesStore for JsonFavoritesStore {
    fn read_favorites(&self) -> Result<Vec<FavoriteKey>> {
        let _span = tracing::debug_span!("json_read_favorites", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("favorites file absent, starting empty");
            return Ok(Vec::new());
        }

        let data = Self::load_from_file(&self.file_path)?;
        tracing::debug!(count = data.favorites.len(), "favorites loaded");
        Ok(data.favorites.into_iter().map(FavoriteKey::from).collect())
    }

    fn write_favorites(&mut self, favorites: &[FavoriteKey]) -> Result<()> {
        let _span = tracing::debug_span!("json_write_favorites", count = favorites.len()).entered();

        let data = StoreData {
            version: FORMAT_VERSION,
            favorites: favorites.iter().copied().map(FavoriteRecord::from).collect(),
        };
        self.save_to_file(&data)?;

        tracing::debug!("favorites saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaKind;

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFavoritesStore::new(dir.path().join("nested/favorites.json")).unwrap();

        assert!(store.read_favorites().unwrap().is_empty());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn written_favorites_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let keys = vec![
            FavoriteKey::new(550, MediaKind::Film),
            FavoriteKey::new(1399, MediaKind::Series),
        ];

        let mut store = JsonFavoritesStore::new(path.clone()).unwrap();
        store.write_favorites(&keys).unwrap();
        assert!(!path.with_extension("tmp").exists());

        let reopened = JsonFavoritesStore::new(path).unwrap();
        assert_eq!(reopened.read_favorites().unwrap(), keys);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFavoritesStore::new(path).unwrap();
        assert!(matches!(store.read_favorites(), Err(CatalogError::Storage(_))));
    }

    #[test]
    fn newer_format_versions_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, r#"{"version": 9, "favorites": []}"#).unwrap();

        let store = JsonFavoritesStore::new(path).unwrap();
        assert!(store.read_favorites().is_err());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::create_dir(&path).unwrap();
        let mut store = JsonFavoritesStore::new(path.clone()).unwrap();

        let result = store.write_favorites(&[FavoriteKey::new(1, MediaKind::Film)]);

        assert!(matches!(result, Err(CatalogError::Io(_))));
        assert!(!path.with_extension("tmp").exists());
    }
}
