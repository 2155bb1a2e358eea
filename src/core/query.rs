//! List query state and pagination utilities

use serde::{Deserialize, Serialize};

/// Transient view state for one list: search text, category filter and page.
///
/// Changing the search text or the filter always sends the view back to the
/// first page, otherwise a narrowed result set could leave the user on a page
/// that no longer exists.
///
/// # Example
/// ```rust
/// use gymdesk::core::query::ListQuery;
///
/// let mut query = ListQuery::new(20);
/// query.set_page(3);
/// query.set_search("ali");
/// assert_eq!(query.page(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    /// Free-text search, matched case-insensitively
    search: String,

    /// Exact category value, `None` for "all"
    filter: Option<String>,

    /// Page number (starts at 1)
    page: usize,

    /// Number of rows per page
    page_size: usize,
}

pub const DEFAULT_PAGE_SIZE: usize = 20;

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filter: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get page size, ensuring minimum of 1
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Whether a search or filter narrows the list
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.filter.is_some()
    }

    /// Set the search text and go back to page 1
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Set the category filter and go back to page 1.
    ///
    /// An empty string means "all", same as `None`.
    pub fn set_filter<S: Into<String>>(&mut self, filter: Option<S>) {
        self.filter = filter.map(Into::into).filter(|f| !f.is_empty());
        self.page = 1;
    }

    /// Clear search and filter and go back to page 1
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.filter = None;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size and go back to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Step forward, staying within `total_pages`
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page() < total_pages {
            self.page = self.page() + 1;
        }
    }

    /// Step back, staying at or above page 1
    pub fn prev_page(&mut self) {
        self.page = self.page().saturating_sub(1).max(1);
    }

    /// Pull the page back inside `1..=total_pages`; no-op when nothing matches
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page().min(total_pages.max(1));
    }

    /// Zero-based slice bounds of the current page, saturating at `usize::MAX`
    pub fn bounds(&self) -> (usize, usize) {
        let start = (self.page() - 1).saturating_mul(self.page_size());
        (start, start.saturating_add(self.page_size()))
    }
}

/// Pagination metadata for a projected page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages, 0 when nothing matches
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        // Ensure page size is at least 1 to avoid division by zero
        let page_size = page_size.max(1);
        let page = page.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(page_size) };
        let start = (page - 1).saturating_mul(page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: start.saturating_add(page_size) < total,
            has_prev: page > 1,
        }
    }

    /// Nothing matched; render a "no results" state, not a page control
    pub fn is_no_results(&self) -> bool {
        self.total == 0
    }

    /// "Page X of Y", or `None` in the no-results state
    pub fn label(&self) -> Option<String> {
        if self.is_no_results() {
            None
        } else {
            Some(format!("Page {} of {}", self.page, self.total_pages))
        }
    }
}
