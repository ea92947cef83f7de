//! Result requests
//!
//! A search asks for exactly one result facet: a page of events, a concept
//! aggregate, a time distribution and so on. Each facet is a small struct that
//! checks its bounds on construction and flattens into `resultType` plus
//! facet-prefixed parameters (`eventsPage`, `conceptAggrSampleSize`, ...).

mod articles;
mod events;
mod params;
mod return_info;

pub use articles::{
    RequestArticles, RequestArticlesCategoryAggr, RequestArticlesConceptAggr,
    RequestArticlesInfo, RequestArticlesKeywordAggr, RequestArticlesSourceAggr,
    RequestArticlesTimeAggr, RequestArticlesUriWgtList,
};
pub use events::{
    ConceptMatrixMeasure, RequestEvents, RequestEventsCategoryAggr, RequestEventsConceptAggr,
    RequestEventsConceptGraph, RequestEventsConceptMatrix, RequestEventsConceptTrends,
    RequestEventsDateMentionAggr, RequestEventsEventClusters, RequestEventsInfo,
    RequestEventsKeywordAggr, RequestEventsLocAggr, RequestEventsLocTimeAggr,
    RequestEventsRecentActivity, RequestEventsSourceAggr, RequestEventsTimeAggr,
    RequestEventsUriWgtList,
};
pub use return_info::{
    ArticleInfoFlags, CategoryInfoFlags, ConceptInfoFlags, EventInfoFlags, LocationInfoFlags,
    ReturnInfo, SourceInfoFlags,
};

use crate::types::JsonObject;

/// A result facet that can be added to a search request
pub trait ResultRequest {
    /// Value of the `resultType` parameter
    fn result_type(&self) -> &'static str;

    /// `resultType` plus all facet parameters
    fn params(&self) -> JsonObject;
}

#[cfg(test)]
mod tests;
