//! Pagination cursor accumulating entries across "load more" calls.

use crate::domain::CatalogEntry;

/// Current page, total pages and the entries accumulated so far.
///
/// Entries are appended in the order they were received and are never
/// de-duplicated: the provider is trusted not to repeat ids across pages.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationCursor {
    entries: Vec<CatalogEntry>,
    page: u32,
    total_pages: u32,
}

impl Default for PaginationCursor {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            page: 1,
            total_pages: 1,
        }
    }
}

impl PaginationCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to page 1 with no entries.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.page = 1;
        self.total_pages = 1;
    }

    /// Appends `new_entries` believed to belong to `page`.
    ///
    /// Returns `false` without touching the cursor when `page` is older than the
    /// recorded page (a stale response). A `total_pages` below `page` is raised to
    /// `page`, so `page <= total_pages` always holds.
    pub fn append_page(&mut self, new_entries: Vec<CatalogEntry>, page: u32, total_pages: u32) -> bool {
        if page < self.page {
            tracing::debug!(
                page,
                current_page = self.page,
                "rejecting stale page"
            );
            return false;
        }

        let appended = new_entries.len();
        self.entries.extend(new_entries);
        self.page = page.max(1);
        self.total_pages = total_pages.max(self.page);

        tracing::debug!(
            page = self.page,
            total_pages = self.total_pages,
            appended,
            total_entries = self.entries.len(),
            "page appended"
        );
        true
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }
}
