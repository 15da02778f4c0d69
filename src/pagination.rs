use crate::data_models::WikipediaSearchResponse;

/// Number of results requested from Wikipedia per page.
pub const PAGE_SIZE: u64 = 20;

/// Zero-based offset of the first result on the 1-based `page`,
/// `None` when the offset does not fit in a `u64`.
pub fn result_offset(page: u64, page_size: u64) -> Option<u64> {
    page.saturating_sub(1).checked_mul(page_size)
}

/// Number of pages needed to show `total_hits` results.
pub fn total_pages(total_hits: u64, page_size: u64) -> u64 {
    total_hits.div_ceil(page_size)
}

/// Pagination state of one search request.
///
/// Stores the page a "next" link should point to rather than the page being
/// shown; `current_page` recovers the latter.
#[derive(Debug, Clone)]
pub struct Search {
    pub query: String,
    pub total_pages: u64,
    pub next_page: u64,
    pub results: WikipediaSearchResponse,
}

impl Search {
    pub fn new(
        query: String,
        requested_page: u64,
        page_size: u64,
        results: WikipediaSearchResponse,
    ) -> Self {
        Search {
            query,
            total_pages: total_pages(results.total_hits(), page_size),
            next_page: requested_page + 1,
            results,
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.next_page >= self.total_pages
    }

    pub fn current_page(&self) -> u64 {
        if self.next_page == 1 {
            return self.next_page;
        }
        self.next_page.saturating_sub(1)
    }

    pub fn previous_page(&self) -> u64 {
        self.current_page().saturating_sub(1)
    }
}
