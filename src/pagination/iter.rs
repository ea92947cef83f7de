//! Lazy iteration over all results of a search
//!
//! Pages are requested one at a time, only when the buffer runs dry. Remote
//! errors never surface as `Err` from [`QueryIter::next`]: they are logged,
//! the page counts as empty and the iterator ends.

use super::types::{FacetPage, IterOptions, IterPhase, PageState, PagedQuery};
use crate::client::Transport;
use crate::error::Result;
use crate::search::{QueryArticles, QueryEvents};
use crate::types::JsonValue;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Pull-based iterator over the list facet of a search
///
/// The iterator owns its query and cursor and borrows the transport. It is
/// single-pass: build a new one to run the search again.
pub struct QueryIter<'a, Q, T: ?Sized> {
    query: Q,
    transport: &'a T,
    options: IterOptions,
    state: PageState,
    buffer: VecDeque<JsonValue>,
    phase: IterPhase,
}

/// Iterator over matching events
pub type QueryEventsIter<'a, T> = QueryIter<'a, QueryEvents, T>;

/// Iterator over matching articles
pub type QueryArticlesIter<'a, T> = QueryIter<'a, QueryArticles, T>;

impl<'a, Q, T> QueryIter<'a, Q, T>
where
    Q: PagedQuery,
    T: Transport + ?Sized,
{
    pub fn new(query: Q, transport: &'a T, options: IterOptions) -> Self {
        Self {
            query,
            transport,
            options,
            state: PageState::new(),
            buffer: VecDeque::new(),
            phase: IterPhase::Configured,
        }
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn options(&self) -> &IterOptions {
        &self.options
    }

    pub fn phase(&self) -> IterPhase {
        self.phase
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Items fetched but not yet yielded
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Yield the next item, fetching a page if the buffer is empty
    pub async fn next(&mut self) -> Option<JsonValue> {
        loop {
            if self.phase.is_terminal() {
                return None;
            }
            if self.cap_reached() {
                self.phase = IterPhase::Exhausted;
                return None;
            }
            if let Some(item) = self.buffer.pop_front() {
                self.state.yielded += 1;
                self.settle();
                return Some(item);
            }
            self.fetch_page().await;
        }
    }

    /// Number of results the search matches, without touching the cursor
    pub async fn count(&self) -> Result<u64> {
        count_results(&self.query, self.transport).await
    }

    /// Adapt into a [`Stream`] of items
    pub fn into_stream(self) -> impl Stream<Item = JsonValue> + 'a
    where
        Q: 'a,
    {
        stream::unfold(self, |mut iter| async move {
            let item = iter.next().await?;
            Some((item, iter))
        })
    }

    fn cap_reached(&self) -> bool {
        self.options
            .max_items
            .is_some_and(|max| self.state.yielded >= max)
    }

    /// Pick the phase after an item was handed out
    fn settle(&mut self) {
        self.phase = if self.cap_reached() {
            IterPhase::Exhausted
        } else if !self.buffer.is_empty() {
            IterPhase::HasBufferedItems
        } else if self.state.past_last_page() {
            IterPhase::Exhausted
        } else {
            IterPhase::Fetching
        };
    }

    async fn fetch_page(&mut self) {
        if self.state.past_last_page() {
            self.phase = IterPhase::Exhausted;
            return;
        }

        let page = self.state.next_page;
        self.state.next_page += 1;
        self.state.fetches += 1;
        self.phase = IterPhase::Fetching;

        debug!(facet = Q::FACET, page, "Downloading page");
        match self.download(page).await {
            Ok(facet_page) => {
                self.state
                    .learn_totals(facet_page.pages, facet_page.total_results);
                if facet_page.results.is_empty() {
                    self.phase = IterPhase::Exhausted;
                } else {
                    debug!(
                        facet = Q::FACET,
                        page,
                        items = facet_page.results.len(),
                        "Page received"
                    );
                    self.buffer.extend(facet_page.results);
                    self.phase = IterPhase::HasBufferedItems;
                }
            }
            Err(e) => {
                warn!(facet = Q::FACET, page, error = %e, "Failed to obtain a page of results");
                self.phase = IterPhase::Failed;
            }
        }
    }

    async fn download(&self, page: u32) -> Result<FacetPage> {
        let payload = self
            .query
            .page_request(page, Q::MAX_PAGE_SIZE, &self.options)?;
        let response = self.transport.execute(self.query.path(), &payload).await?;
        FacetPage::from_response(&response, Q::FACET)
    }
}

/// Ask the service how many results `query` matches
///
/// An `error` field in the response is logged and counts as zero results.
/// Transport failures are returned.
pub async fn count_results<Q, T>(query: &Q, transport: &T) -> Result<u64>
where
    Q: PagedQuery,
    T: Transport + ?Sized,
{
    let payload = query.count_request()?;
    let response = transport.execute(query.path(), &payload).await?;
    match FacetPage::from_response(&response, Q::FACET) {
        Ok(page) => Ok(page.total_results),
        Err(e) if e.is_remote() => {
            warn!(facet = Q::FACET, error = %e, "Failed to count results");
            Ok(0)
        }
        Err(e) => Err(e),
    }
}
