//! Storage record models for the favorites store.
//!
//! Records are kept separate from the domain [`FavoriteKey`] so the on-disk shape
//! (`{"id": 550, "type": "movie"}`) can stay stable independently of domain types.

use crate::domain::{FavoriteKey, MediaKind};
use serde::{Deserialize, Serialize};

/// A persisted favorite marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// Provider id of the entry.
    pub id: u64,

    /// Media kind, serialized under the provider's `type` field name.
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl From<FavoriteKey> for FavoriteRecord {
    fn from(key: FavoriteKey) -> Self {
        Self { id: key.id, kind: key.kind }
    }
}

impl From<FavoriteRecord> for FavoriteKey {
    fn from(record: FavoriteRecord) -> Self {
        Self::new(record.id, record.kind)
    }
}
