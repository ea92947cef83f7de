//! Pagination types and traits
//!
//! Defines the page-fetch contract of a search and the state an iterator
//! keeps between fetches.

use crate::error::{Error, Result};
use crate::request::{RequestArticlesInfo, RequestEventsInfo, ResultRequest, ReturnInfo};
use crate::search::{Query, QueryArticles, QueryEvents};
use crate::types::{JsonObject, JsonValue, SortBy};
use serde::Deserialize;

/// Caller settings that stay fixed for a whole iteration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterOptions {
    /// Ordering applied by the service to every page
    pub sort_by: SortBy,
    pub sort_by_asc: bool,
    /// Details to include for each item
    pub return_info: ReturnInfo,
    /// Stop after this many items; `None` for all results
    pub max_items: Option<usize>,
}

impl IterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sort(mut self, sort_by: SortBy, ascending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_by_asc = ascending;
        self
    }

    #[must_use]
    pub fn return_info(mut self, info: ReturnInfo) -> Self {
        self.return_info = info;
        self
    }

    #[must_use]
    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }
}

/// Lifecycle of an iterator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterPhase {
    /// Nothing fetched yet
    Configured,
    /// Buffer is empty and another page may exist
    Fetching,
    /// Items are waiting in the buffer
    HasBufferedItems,
    /// No more items will be yielded
    Exhausted,
    /// A page request failed; no more items will be yielded
    Failed,
}

impl IterPhase {
    /// Whether `next` can still yield an item
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Exhausted | Self::Failed)
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Page number of the next request (starts at 1)
    pub next_page: u32,
    /// Page count reported by the first successful fetch
    pub total_pages: Option<u32>,
    /// Result count reported by the first successful fetch
    pub total_results: Option<u64>,
    /// Items handed to the caller so far
    pub yielded: usize,
    /// Page requests issued so far
    pub fetches: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            next_page: 1,
            total_pages: None,
            total_results: None,
            yielded: 0,
            fetches: 0,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cursor has moved past the last known page
    pub fn past_last_page(&self) -> bool {
        self.total_pages
            .is_some_and(|total| self.next_page > total)
    }

    /// Record totals; only the first successful fetch counts
    pub fn learn_totals(&mut self, pages: u32, total_results: u64) {
        if self.total_pages.is_none() {
            self.total_pages = Some(pages);
            self.total_results = Some(total_results);
        }
    }
}

/// One page of a list facet as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacetPage {
    pub results: Vec<JsonValue>,
    pub pages: u32,
    pub total_results: u64,
    pub page: u32,
}

impl FacetPage {
    /// Extract `facet` from a response document
    ///
    /// A response without the facet is an empty page. A response carrying
    /// an `error` field becomes [`Error::Remote`].
    pub fn from_response(response: &JsonValue, facet: &str) -> Result<Self> {
        if let Some(error) = response.get("error") {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), str::to_string);
            return Err(Error::remote(message));
        }
        match response.get(facet) {
            Some(value) => Ok(Self::deserialize(value)?),
            None => Ok(Self::default()),
        }
    }
}

/// A search whose list facet can be fetched page by page
pub trait PagedQuery: Query {
    /// Response key holding the list
    const FACET: &'static str;

    /// Largest page the service returns for this facet
    const MAX_PAGE_SIZE: u32;

    /// Request body for one page; the query itself is left untouched
    fn page_request(&self, page: u32, count: u32, options: &IterOptions) -> Result<JsonObject>;

    /// Request body that only asks for the total result count
    fn count_request(&self) -> Result<JsonObject> {
        self.page_request(1, 1, &IterOptions::default())
    }
}

impl PagedQuery for QueryEvents {
    const FACET: &'static str = "events";
    const MAX_PAGE_SIZE: u32 = RequestEventsInfo::MAX_COUNT;

    fn page_request(&self, page: u32, count: u32, options: &IterOptions) -> Result<JsonObject> {
        let request = RequestEventsInfo::new(page, count)?
            .sort(options.sort_by, options.sort_by_asc)
            .return_info(options.return_info.clone());
        let mut payload = self.params();
        payload.extend(request.params());
        Ok(payload)
    }
}

impl PagedQuery for QueryArticles {
    const FACET: &'static str = "articles";
    const MAX_PAGE_SIZE: u32 = RequestArticlesInfo::MAX_COUNT;

    fn page_request(&self, page: u32, count: u32, options: &IterOptions) -> Result<JsonObject> {
        let request = RequestArticlesInfo::new(page, count)?
            .sort(options.sort_by, options.sort_by_asc)
            .return_info(options.return_info.clone());
        let mut payload = self.params();
        payload.extend(request.params());
        Ok(payload)
    }
}
