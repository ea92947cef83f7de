//! Complex queries: a query tree plus a secondary filter record
//!
//! A complex query is submitted as one JSON document (`$query` and an
//! optional `$filter`) instead of discrete top-level request fields.

use super::tree::QueryTree;
use crate::error::{check_range, Error, Result};
use crate::types::{
    DataType, DuplicateFilter, EventFilter, HasDuplicateFilter, JsonObject, JsonValue,
};
use serde_json::json;

/// Check an optional sentiment bound pair
fn validate_sentiment(min: Option<f64>, max: Option<f64>) -> Result<()> {
    for (name, value) in [("minSentiment", min), ("maxSentiment", max)] {
        if let Some(value) = value {
            if !(-1.0..=1.0).contains(&value) {
                return Err(Error::invalid(
                    name,
                    format!("{value} is outside the range [-1, 1]"),
                ));
            }
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(Error::invalid(
                "minSentiment",
                format!("{min} is greater than maxSentiment {max}"),
            ));
        }
    }
    Ok(())
}

fn write_sentiment(out: &mut JsonObject, min: Option<f64>, max: Option<f64>) {
    if let Some(min) = min {
        out.insert("minSentiment".to_string(), json!(min));
    }
    if let Some(max) = max {
        out.insert("maxSentiment".to_string(), json!(max));
    }
}

// ============================================================================
// Article Filter
// ============================================================================

/// Secondary filters applied to matching articles
///
/// Every field defaults to "no filtering" and is omitted from the request
/// while left at that default.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleFilter {
    /// Content types to search (news only by default)
    pub data_types: Vec<DataType>,
    /// Minimum article sentiment in [-1, 1]
    pub min_sentiment: Option<f64>,
    /// Maximum article sentiment in [-1, 1]
    pub max_sentiment: Option<f64>,
    /// Minimum number of social media shares
    pub min_social_score: u32,
    /// Minimum number of Facebook shares
    pub min_facebook_shares: u32,
    /// Start of the source rank window (0-90, multiple of 10)
    pub start_source_rank_percentile: u32,
    /// End of the source rank window (10-100, multiple of 10)
    pub end_source_rank_percentile: u32,
    pub is_duplicate: DuplicateFilter,
    pub has_duplicate: HasDuplicateFilter,
    pub has_event: EventFilter,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            data_types: vec![DataType::News],
            min_sentiment: None,
            max_sentiment: None,
            min_social_score: 0,
            min_facebook_shares: 0,
            start_source_rank_percentile: 0,
            end_source_rank_percentile: 100,
            is_duplicate: DuplicateFilter::KeepAll,
            has_duplicate: HasDuplicateFilter::KeepAll,
            has_event: EventFilter::KeepAll,
        }
    }
}

impl ArticleFilter {
    /// Create a filter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data_types(mut self, data_types: Vec<DataType>) -> Self {
        self.data_types = data_types;
        self
    }

    #[must_use]
    pub fn sentiment(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_sentiment = min;
        self.max_sentiment = max;
        self
    }

    #[must_use]
    pub fn min_social_score(mut self, score: u32) -> Self {
        self.min_social_score = score;
        self
    }

    #[must_use]
    pub fn min_facebook_shares(mut self, shares: u32) -> Self {
        self.min_facebook_shares = shares;
        self
    }

    #[must_use]
    pub fn source_rank_percentile(mut self, start: u32, end: u32) -> Self {
        self.start_source_rank_percentile = start;
        self.end_source_rank_percentile = end;
        self
    }

    #[must_use]
    pub fn is_duplicate(mut self, mode: DuplicateFilter) -> Self {
        self.is_duplicate = mode;
        self
    }

    #[must_use]
    pub fn has_duplicate(mut self, mode: HasDuplicateFilter) -> Self {
        self.has_duplicate = mode;
        self
    }

    #[must_use]
    pub fn has_event(mut self, mode: EventFilter) -> Self {
        self.has_event = mode;
        self
    }

    /// Check every bounded field
    pub fn validate(&self) -> Result<()> {
        if self.data_types.is_empty() {
            return Err(Error::invalid("dataType", "at least one data type is required"));
        }
        validate_sentiment(self.min_sentiment, self.max_sentiment)?;

        let start = self.start_source_rank_percentile;
        let end = self.end_source_rank_percentile;
        check_range("startSourceRankPercentile", i64::from(start), 0, 90)?;
        check_range("endSourceRankPercentile", i64::from(end), 10, 100)?;
        for (name, value) in [
            ("startSourceRankPercentile", start),
            ("endSourceRankPercentile", end),
        ] {
            if value % 10 != 0 {
                return Err(Error::invalid(name, format!("{value} is not a multiple of 10")));
            }
        }
        if start >= end {
            return Err(Error::invalid(
                "startSourceRankPercentile",
                format!("{start} must be lower than endSourceRankPercentile {end}"),
            ));
        }
        Ok(())
    }

    fn data_type_value(&self) -> Option<JsonValue> {
        match self.data_types.as_slice() {
            [DataType::News] => None,
            [single] => Some(json!(single.as_str())),
            many => Some(json!(many.iter().map(DataType::as_str).collect::<Vec<_>>())),
        }
    }

    fn write_rank_window(&self, out: &mut JsonObject) {
        if self.start_source_rank_percentile != 0 {
            out.insert(
                "startSourceRankPercentile".to_string(),
                json!(self.start_source_rank_percentile),
            );
        }
        if self.end_source_rank_percentile != 100 {
            out.insert(
                "endSourceRankPercentile".to_string(),
                json!(self.end_source_rank_percentile),
            );
        }
    }

    /// Serialize as the `$filter` record of a complex query
    pub fn to_complex_filter(&self) -> JsonObject {
        let mut out = JsonObject::new();
        if let Some(data_type) = self.data_type_value() {
            out.insert("dataType".to_string(), data_type);
        }
        write_sentiment(&mut out, self.min_sentiment, self.max_sentiment);
        if self.min_social_score > 0 {
            out.insert("minSocialScore".to_string(), json!(self.min_social_score));
        }
        if self.min_facebook_shares > 0 {
            out.insert(
                "minFacebookShares".to_string(),
                json!(self.min_facebook_shares),
            );
        }
        self.write_rank_window(&mut out);
        if self.is_duplicate != DuplicateFilter::KeepAll {
            out.insert("isDuplicate".to_string(), json!(self.is_duplicate.as_str()));
        }
        if self.has_duplicate != HasDuplicateFilter::KeepAll {
            out.insert("hasDuplicate".to_string(), json!(self.has_duplicate.as_str()));
        }
        if self.has_event != EventFilter::KeepAll {
            out.insert("hasEvent".to_string(), json!(self.has_event.as_str()));
        }
        out
    }

    /// Write as flat parameters of an article search request
    ///
    /// Social thresholds only exist in the complex form and are skipped here.
    pub fn write_flat(&self, out: &mut JsonObject) {
        if let Some(data_type) = self.data_type_value() {
            out.insert("dataType".to_string(), data_type);
        }
        write_sentiment(out, self.min_sentiment, self.max_sentiment);
        self.write_rank_window(out);
        if self.is_duplicate != DuplicateFilter::KeepAll {
            out.insert(
                "isDuplicateFilter".to_string(),
                json!(self.is_duplicate.as_str()),
            );
        }
        if self.has_duplicate != HasDuplicateFilter::KeepAll {
            out.insert(
                "hasDuplicateFilter".to_string(),
                json!(self.has_duplicate.as_str()),
            );
        }
        if self.has_event != EventFilter::KeepAll {
            out.insert("eventFilter".to_string(), json!(self.has_event.as_str()));
        }
    }
}

// ============================================================================
// Complex Queries
// ============================================================================

/// Article search built from a query tree and an article filter
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexArticleQuery {
    query: QueryTree,
    filter: ArticleFilter,
}

impl ComplexArticleQuery {
    /// Wrap a query tree with a validated filter
    pub fn new(query: impl Into<QueryTree>, filter: ArticleFilter) -> Result<Self> {
        filter.validate()?;
        Ok(Self {
            query: query.into(),
            filter,
        })
    }

    /// Wrap a query tree without secondary filters
    pub fn unfiltered(query: impl Into<QueryTree>) -> Self {
        Self {
            query: query.into(),
            filter: ArticleFilter::default(),
        }
    }

    /// Serialize as `{"$query": .., "$filter": ..}`
    pub fn to_value(&self) -> JsonValue {
        let mut out = JsonObject::new();
        out.insert("$query".to_string(), self.query.to_value());
        let filter = self.filter.to_complex_filter();
        if !filter.is_empty() {
            out.insert("$filter".to_string(), JsonValue::Object(filter));
        }
        JsonValue::Object(out)
    }
}

/// Event search built from a query tree and optional sentiment bounds
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexEventQuery {
    query: QueryTree,
    min_sentiment: Option<f64>,
    max_sentiment: Option<f64>,
}

impl ComplexEventQuery {
    /// Wrap a query tree without secondary filters
    pub fn new(query: impl Into<QueryTree>) -> Self {
        Self {
            query: query.into(),
            min_sentiment: None,
            max_sentiment: None,
        }
    }

    /// Only keep events whose average sentiment lies in the window
    pub fn with_sentiment(mut self, min: Option<f64>, max: Option<f64>) -> Result<Self> {
        validate_sentiment(min, max)?;
        self.min_sentiment = min;
        self.max_sentiment = max;
        Ok(self)
    }

    /// Serialize as `{"$query": .., "$filter": ..}`
    pub fn to_value(&self) -> JsonValue {
        let mut out = JsonObject::new();
        out.insert("$query".to_string(), self.query.to_value());
        let mut filter = JsonObject::new();
        write_sentiment(&mut filter, self.min_sentiment, self.max_sentiment);
        if !filter.is_empty() {
            out.insert("$filter".to_string(), JsonValue::Object(filter));
        }
        JsonValue::Object(out)
    }
}
