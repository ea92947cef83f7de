//! Pagination module
//!
//! # Overview
//!
//! [`QueryIter`] walks the list facet of an event or article search page by
//! page. The page size is always the largest one the facet allows, so a
//! small `max_items` still downloads a full first page.
//!
//! ```rust,ignore
//! let mut iter = QueryEventsIter::new(query, &registry, IterOptions::new().max_items(200));
//! while let Some(event) = iter.next().await {
//!     println!("{}", event["uri"]);
//! }
//! ```

mod iter;
mod types;

pub use iter::{count_results, QueryArticlesIter, QueryEventsIter, QueryIter};
pub use types::{FacetPage, IterOptions, IterPhase, PageState, PagedQuery};
