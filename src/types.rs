//! Common types used throughout the client
//!
//! This module contains shared type definitions, type aliases,
//! and the small enums that appear in several request shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Sorting
// ============================================================================

/// Ordering requested from the service for list results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum SortBy {
    /// Relevance to the query
    #[default]
    #[serde(rename = "rel")]
    #[value(name = "rel")]
    Relevance,
    /// Publication or event date
    #[serde(rename = "date")]
    Date,
    /// Number of articles in the event
    #[serde(rename = "size")]
    Size,
    /// Amount of shares on social media
    #[serde(rename = "socialScore")]
    #[value(name = "socialScore")]
    SocialScore,
    /// Frequency of query term matches
    #[serde(rename = "fq")]
    Fq,
    /// No specific ordering
    #[serde(rename = "none")]
    None,
}

impl SortBy {
    /// Wire value of this ordering
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "rel",
            SortBy::Date => "date",
            SortBy::Size => "size",
            SortBy::SocialScore => "socialScore",
            SortBy::Fq => "fq",
            SortBy::None => "none",
        }
    }
}

// ============================================================================
// Keyword Location
// ============================================================================

/// Where keywords are searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeywordLoc {
    #[default]
    #[serde(rename = "body")]
    Body,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "body,title")]
    BodyAndTitle,
}

impl KeywordLoc {
    /// Wire value of this location
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordLoc::Body => "body",
            KeywordLoc::Title => "title",
            KeywordLoc::BodyAndTitle => "body,title",
        }
    }
}

// ============================================================================
// Article Filters
// ============================================================================

/// Kind of content to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// News articles
    #[default]
    News,
    /// Press releases
    Pr,
    /// Blog posts
    Blog,
}

impl DataType {
    /// Wire value of this data type
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::News => "news",
            DataType::Pr => "pr",
            DataType::Blog => "blog",
        }
    }
}

/// Handling of articles that are duplicates of other articles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateFilter {
    #[default]
    KeepAll,
    SkipDuplicates,
    KeepOnlyDuplicates,
}

impl DuplicateFilter {
    /// Wire value of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateFilter::KeepAll => "keepAll",
            DuplicateFilter::SkipDuplicates => "skipDuplicates",
            DuplicateFilter::KeepOnlyDuplicates => "keepOnlyDuplicates",
        }
    }
}

/// Handling of articles that were later copied by other sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HasDuplicateFilter {
    #[default]
    KeepAll,
    SkipHasDuplicates,
    KeepOnlyHasDuplicates,
}

impl HasDuplicateFilter {
    /// Wire value of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            HasDuplicateFilter::KeepAll => "keepAll",
            HasDuplicateFilter::SkipHasDuplicates => "skipHasDuplicates",
            HasDuplicateFilter::KeepOnlyHasDuplicates => "keepOnlyHasDuplicates",
        }
    }
}

/// Handling of articles depending on whether they describe a known event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventFilter {
    #[default]
    KeepAll,
    SkipArticlesWithoutEvent,
    KeepOnlyArticlesWithoutEvent,
}

impl EventFilter {
    /// Wire value of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            EventFilter::KeepAll => "keepAll",
            EventFilter::SkipArticlesWithoutEvent => "skipArticlesWithoutEvent",
            EventFilter::KeepOnlyArticlesWithoutEvent => "keepOnlyArticlesWithoutEvent",
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Encode a date the way the service expects it (`YYYY-MM-DD`)
pub fn encode_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_wire_values() {
        assert_eq!(SortBy::default(), SortBy::Relevance);
        assert_eq!(SortBy::Relevance.as_str(), "rel");
        assert_eq!(SortBy::SocialScore.as_str(), "socialScore");

        let json = serde_json::to_string(&SortBy::Date).unwrap();
        assert_eq!(json, "\"date\"");
    }

    #[test]
    fn test_keyword_loc_serde() {
        let loc: KeywordLoc = serde_json::from_str("\"body,title\"").unwrap();
        assert_eq!(loc, KeywordLoc::BodyAndTitle);
        assert_eq!(KeywordLoc::default().as_str(), "body");
    }

    #[test]
    fn test_filter_modes_serde() {
        let json = serde_json::to_string(&DuplicateFilter::SkipDuplicates).unwrap();
        assert_eq!(json, "\"skipDuplicates\"");
        assert_eq!(
            EventFilter::SkipArticlesWithoutEvent.as_str(),
            "skipArticlesWithoutEvent"
        );
        assert_eq!(HasDuplicateFilter::default().as_str(), "keepAll");
    }

    #[test]
    fn test_encode_date() {
        let date = NaiveDate::from_ymd_opt(2014, 5, 2).unwrap();
        assert_eq!(encode_date(date), "2014-05-02");
    }
}
