//! Event search

use super::{comma_joined, complex_from_str, complex_from_value, Query, SearchFilters, Selection};
use crate::error::Result;
use crate::query::ComplexEventQuery;
use crate::request::{RequestEvents, ResultRequest};
use crate::types::{JsonObject, JsonValue};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq)]
struct EventConditions {
    filters: SearchFilters,
    min_articles_in_event: u32,
    max_articles_in_event: Option<u32>,
}

impl EventConditions {
    fn write(&self, out: &mut JsonObject) {
        self.filters.write(out);
        if self.min_articles_in_event > 0 {
            out.insert(
                "minArticlesInEvent".to_string(),
                json!(self.min_articles_in_event),
            );
        }
        if let Some(max) = self.max_articles_in_event {
            out.insert("maxArticlesInEvent".to_string(), json!(max));
        }
    }
}

/// Search for events
///
/// ```rust,ignore
/// let query = QueryEvents::new(
///     SearchFilters::new()
///         .condition(Field::ConceptUri, "http://en.wikipedia.org/wiki/Apple_Inc."),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QueryEvents {
    selection: Selection<EventConditions>,
    requested_result: RequestEvents,
}

impl Default for QueryEvents {
    fn default() -> Self {
        Self::new(SearchFilters::default())
    }
}

impl QueryEvents {
    /// Events matching all of `filters`
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            selection: Selection::Filters(EventConditions {
                filters,
                ..EventConditions::default()
            }),
            requested_result: RequestEvents::default(),
        }
    }

    /// Events described by a complex query
    pub fn with_complex_query(query: &ComplexEventQuery) -> Self {
        Self::from_selection(Selection::Complex(query.to_value().to_string()))
    }

    /// Events described by a complex query given as JSON text
    pub fn with_complex_query_str(query: &str) -> Result<Self> {
        Ok(Self::from_selection(Selection::Complex(complex_from_str(
            query,
        )?)))
    }

    /// Events described by a complex query given as a JSON object
    pub fn with_complex_query_value(query: &JsonValue) -> Result<Self> {
        Ok(Self::from_selection(Selection::Complex(
            complex_from_value(query)?,
        )))
    }

    /// Compute results over exactly these events
    pub fn with_event_uri_list<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_selection(Selection::Uris {
            key: "eventUriList",
            value: JsonValue::String(comma_joined(uris)),
        })
    }

    /// Compute results over these `uri:weight` pairs
    pub fn with_event_uri_wgt_list<I, S>(uri_wgts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_selection(Selection::Uris {
            key: "eventUriWgtList",
            value: JsonValue::String(comma_joined(uri_wgts)),
        })
    }

    fn from_selection(selection: Selection<EventConditions>) -> Self {
        Self {
            selection,
            requested_result: RequestEvents::default(),
        }
    }

    /// Only events reported in at least `count` articles
    ///
    /// Fails on complex-query and URI-list searches.
    pub fn min_articles_in_event(mut self, count: u32) -> Result<Self> {
        self.selection
            .filters_mut("minArticlesInEvent")?
            .min_articles_in_event = count;
        Ok(self)
    }

    /// Only events reported in at most `count` articles
    ///
    /// Fails on complex-query and URI-list searches.
    pub fn max_articles_in_event(mut self, count: u32) -> Result<Self> {
        self.selection
            .filters_mut("maxArticlesInEvent")?
            .max_articles_in_event = Some(count);
        Ok(self)
    }

    /// Replace the requested result facet
    pub fn set_requested_result(&mut self, request: impl Into<RequestEvents>) {
        self.requested_result = request.into();
    }

    #[must_use]
    pub fn requested_result(mut self, request: impl Into<RequestEvents>) -> Self {
        self.set_requested_result(request);
        self
    }

    pub fn result(&self) -> &RequestEvents {
        &self.requested_result
    }
}

impl Query for QueryEvents {
    fn path(&self) -> &'static str {
        "/json/event"
    }

    fn params(&self) -> JsonObject {
        let mut out = JsonObject::new();
        out.insert("action".to_string(), json!("getEvents"));
        self.selection.write(&mut out, EventConditions::write);
        out
    }

    fn result_params(&self) -> JsonObject {
        self.requested_result.params()
    }
}
