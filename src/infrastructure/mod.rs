//! Infrastructure layer for filesystem and environment lookups.
//!
//! Resolves where the favorites file lives by default and expands user-supplied
//! paths from the configuration file.

pub mod paths;

pub use paths::{default_favorites_path, expand_tilde, get_data_dir};
