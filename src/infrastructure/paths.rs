//! Path helpers for per-user storage.

use std::path::PathBuf;

const APP_DIR: &str = "visionary";
const FAVORITES_FILE: &str = "favorites.json";

/// Returns the data directory for visionary storage.
///
/// `<platform data dir>/visionary`, e.g. `~/.local/share/visionary` on Linux.
/// Falls back to `./visionary` when the platform reports no data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default location of the favorites document.
#[must_use]
pub fn default_favorites_path() -> PathBuf {
    get_data_dir().join(FAVORITES_FILE)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and every path on a system without a home directory, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use visionary::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
