//! Search controller.
//!
//! Owns the result list, the filter chips, the loading flag, and the
//! pagination offset. Results are replaced wholesale on every search.
//! Requests carry a monotonically increasing sequence number; replies
//! older than the most recently issued request are discarded so a slow
//! early request can never clobber a newer result set.

use tracing::{debug, warn};

use wayfarer_types::error::BackendError;
use wayfarer_types::listing::Listing;
use wayfarer_types::search::SearchReply;

/// Sentinel the backend treats as "load the unfiltered initial set".
/// Sent for the automatic first load and whenever the user searches with
/// an empty box.
pub const FIRST_CALL_QUERY: &str = "firstcall";

/// Listings shown per page.
pub const PAGE_SIZE: usize = 10;

/// Fallback when a non-OK reply carried no server message.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// Fixed message for transport-level failures.
pub const BACKEND_UNAVAILABLE_MESSAGE: &str =
    "Backend unavailable. Check that the search backend is running.";

/// An outbound search request the view should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// State machine for the listings search view.
#[derive(Debug)]
pub struct SearchController {
    listings: Vec<Listing>,
    filters: Vec<String>,
    error_message: Option<String>,
    loading: bool,
    current_page: usize,
    page_size: usize,
    issued_seq: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            listings: Vec::new(),
            filters: Vec::new(),
            error_message: None,
            loading: false,
            current_page: 1,
            page_size,
            issued_seq: 0,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Begin a search: set the loading flag, clear the previous error,
    /// reset to page 1, and hand the view a sequence-tagged request. A
    /// blank query becomes the [`FIRST_CALL_QUERY`] sentinel.
    pub fn begin_search(&mut self, raw_query: &str) -> SearchRequest {
        let trimmed = raw_query.trim();
        let query = if trimmed.is_empty() {
            FIRST_CALL_QUERY
        } else {
            trimmed
        };

        self.loading = true;
        self.error_message = None;
        self.current_page = 1;
        self.issued_seq += 1;

        SearchRequest {
            seq: self.issued_seq,
            query: query.to_string(),
        }
    }

    /// Apply a completed reply. Returns false (and changes nothing) when
    /// the reply is stale, i.e. a newer request has been issued since.
    ///
    /// The reply's listings and filters replace the current set even when
    /// it carries an error message (a non-OK status can still return
    /// partial results). Clearing the loading flag is the final step.
    pub fn apply_reply(&mut self, seq: u64, reply: SearchReply) -> bool {
        if !self.is_current(seq) {
            debug!(seq, issued = self.issued_seq, "discarding stale search reply");
            return false;
        }

        self.error_message = reply.error_message;
        self.listings = reply.listings;
        self.filters = reply.filters;
        self.loading = false;
        true
    }

    /// Apply a transport or decode failure: clear results and filters and
    /// surface the fixed unavailable message. Stale failures are discarded
    /// like stale replies.
    pub fn apply_failure(&mut self, seq: u64, error: &BackendError) -> bool {
        if !self.is_current(seq) {
            debug!(seq, issued = self.issued_seq, "discarding stale search failure");
            return false;
        }

        warn!(error = %error, "search request failed");
        self.listings.clear();
        self.filters.clear();
        self.error_message = Some(BACKEND_UNAVAILABLE_MESSAGE.to_string());
        self.loading = false;
        true
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.issued_seq
    }

    // --- Pagination (pure client-side slicing) ---

    /// Number of pages: `ceil(total / page_size)`.
    pub fn total_pages(&self) -> usize {
        self.listings.len().div_ceil(self.page_size)
    }

    /// The slice of listings on the current page.
    pub fn page_listings(&self) -> &[Listing] {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.listings.len());
        if start >= self.listings.len() {
            &[]
        } else {
            &self.listings[start..end]
        }
    }

    /// Index of the first listing on the current page (0-based), for
    /// numbering cards across pages.
    pub fn page_offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Advance one page; false if already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; false if already on page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.has_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a specific page; false if out of range.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
            true
        } else {
            false
        }
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}
