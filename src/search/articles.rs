//! Article search

use super::{complex_from_str, complex_from_value, Query, SearchFilters, Selection};
use crate::error::Result;
use crate::query::{ArticleFilter, ComplexArticleQuery};
use crate::request::{RequestArticles, ResultRequest};
use crate::types::{JsonObject, JsonValue};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq)]
struct ArticleConditions {
    filters: SearchFilters,
    article_filter: ArticleFilter,
}

impl ArticleConditions {
    fn write(&self, out: &mut JsonObject) {
        self.filters.write(out);
        self.article_filter.write_flat(out);
    }
}

/// Search for articles
#[derive(Debug, Clone, PartialEq)]
pub struct QueryArticles {
    selection: Selection<ArticleConditions>,
    requested_result: RequestArticles,
}

impl Default for QueryArticles {
    fn default() -> Self {
        Self::new(SearchFilters::default())
    }
}

impl QueryArticles {
    /// Articles matching all of `filters`
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            selection: Selection::Filters(ArticleConditions {
                filters,
                article_filter: ArticleFilter::default(),
            }),
            requested_result: RequestArticles::default(),
        }
    }

    /// Articles described by a complex query
    pub fn with_complex_query(query: &ComplexArticleQuery) -> Self {
        Self::from_selection(Selection::Complex(query.to_value().to_string()))
    }

    /// Articles described by a complex query given as JSON text
    pub fn with_complex_query_str(query: &str) -> Result<Self> {
        Ok(Self::from_selection(Selection::Complex(complex_from_str(
            query,
        )?)))
    }

    /// Articles described by a complex query given as a JSON object
    pub fn with_complex_query_value(query: &JsonValue) -> Result<Self> {
        Ok(Self::from_selection(Selection::Complex(
            complex_from_value(query)?,
        )))
    }

    /// Compute results over exactly these articles
    pub fn with_article_uri_list<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let uris: Vec<JsonValue> = uris
            .into_iter()
            .map(|uri| JsonValue::String(uri.as_ref().to_string()))
            .collect();
        Self::from_selection(Selection::Uris {
            key: "articleUri",
            value: JsonValue::Array(uris),
        })
    }

    fn from_selection(selection: Selection<ArticleConditions>) -> Self {
        Self {
            selection,
            requested_result: RequestArticles::default(),
        }
    }

    /// Apply secondary article filters
    ///
    /// Fails on complex-query and URI-list searches; a complex query
    /// carries its own filter. Social thresholds are only honored by
    /// complex queries.
    pub fn article_filter(mut self, filter: ArticleFilter) -> Result<Self> {
        filter.validate()?;
        self.selection.filters_mut("articleFilter")?.article_filter = filter;
        Ok(self)
    }

    /// Replace the requested result facet
    pub fn set_requested_result(&mut self, request: impl Into<RequestArticles>) {
        self.requested_result = request.into();
    }

    #[must_use]
    pub fn requested_result(mut self, request: impl Into<RequestArticles>) -> Self {
        self.set_requested_result(request);
        self
    }

    pub fn result(&self) -> &RequestArticles {
        &self.requested_result
    }
}

impl Query for QueryArticles {
    fn path(&self) -> &'static str {
        "/json/article"
    }

    fn params(&self) -> JsonObject {
        let mut out = JsonObject::new();
        out.insert("action".to_string(), json!("getArticles"));
        self.selection.write(&mut out, ArticleConditions::write);
        out
    }

    fn result_params(&self) -> JsonObject {
        self.requested_result.params()
    }
}
