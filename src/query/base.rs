//! Leaf conditions of a query tree

use super::items::{Field, QueryItems};
use super::tree::QueryTree;
use crate::error::Result;
use crate::types::{encode_date, JsonObject, JsonValue, KeywordLoc};
use chrono::NaiveDate;
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
enum DateMention {
    Single(NaiveDate),
    Many(Vec<NaiveDate>),
}

/// A set of conditions that must all hold
///
/// Unset conditions, and parameters left at their default, are absent from
/// the serialized form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseQuery {
    conditions: BTreeMap<Field, QueryItems>,
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
    date_mention: Option<DateMention>,
    keyword_loc: KeywordLoc,
    articles_in_event: Option<(u32, u32)>,
    exclude: Option<Box<QueryTree>>,
}

impl BaseQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the condition for a field; `None` leaves the query unchanged
    #[must_use]
    pub fn add_condition(mut self, field: Field, value: impl Into<Option<QueryItems>>) -> Self {
        if let Some(value) = value.into() {
            self.conditions.insert(field, value);
        }
        self
    }

    fn with_items(self, field: Field, items: QueryItems) -> Self {
        self.add_condition(field, items)
    }

    /// Set the condition for a field from an untyped JSON value
    pub fn add_condition_json(self, field: Field, value: &JsonValue) -> Result<Self> {
        let items = QueryItems::from_json(field.name(), value)?;
        Ok(self.add_condition(field, items))
    }

    #[must_use]
    pub fn keyword(self, value: impl Into<QueryItems>) -> Self {
        self.with_items(Field::Keyword, value.into())
    }

    #[must_use]
    pub fn concept_uri(self, value: impl Into<QueryItems>) -> Self {
        self.with_items(Field::ConceptUri, value.into())
    }

    #[must_use]
    pub fn category_uri(self, value: impl Into<QueryItems>) -> Self {
        self.with_items(Field::CategoryUri, value.into())
    }

    #[must_use]
    pub fn source_uri(self, value: impl Into<QueryItems>) -> Self {
        self.with_items(Field::SourceUri, value.into())
    }

    #[must_use]
    pub fn location_uri(self, value: impl Into<QueryItems>) -> Self {
        self.with_items(Field::LocationUri, value.into())
    }

    #[must_use]
    pub fn lang(self, value: impl Into<QueryItems>) -> Self {
        self.with_items(Field::Lang, value.into())
    }

    #[must_use]
    pub fn author_uri(self, value: impl Into<QueryItems>) -> Self {
        self.with_items(Field::AuthorUri, value.into())
    }

    #[must_use]
    pub fn date_start(mut self, date: NaiveDate) -> Self {
        self.date_start = Some(date);
        self
    }

    #[must_use]
    pub fn date_end(mut self, date: NaiveDate) -> Self {
        self.date_end = Some(date);
        self
    }

    /// Match content mentioning this date
    #[must_use]
    pub fn date_mention(mut self, date: NaiveDate) -> Self {
        self.date_mention = Some(DateMention::Single(date));
        self
    }

    /// Match content mentioning any of these dates
    #[must_use]
    pub fn date_mentions(mut self, dates: Vec<NaiveDate>) -> Self {
        self.date_mention = Some(DateMention::Many(dates));
        self
    }

    #[must_use]
    pub fn keyword_loc(mut self, loc: KeywordLoc) -> Self {
        self.keyword_loc = loc;
        self
    }

    /// Restrict events to a size window (only meaningful for event searches)
    #[must_use]
    pub fn articles_in_event(mut self, min: u32, max: u32) -> Self {
        self.articles_in_event = Some((min, max));
        self
    }

    /// Remove results that match `exclude`
    #[must_use]
    pub fn exclude(mut self, exclude: impl Into<QueryTree>) -> Self {
        self.exclude = Some(Box::new(exclude.into()));
        self
    }

    /// Serialize into the nested query structure
    pub fn to_object(&self) -> JsonObject {
        let mut out = JsonObject::new();

        for (field, items) in &self.conditions {
            if !items.is_empty() {
                out.insert(field.name().to_string(), items.to_tree_value());
            }
        }

        if let Some(date) = self.date_start {
            out.insert("dateStart".to_string(), json!(encode_date(date)));
        }
        if let Some(date) = self.date_end {
            out.insert("dateEnd".to_string(), json!(encode_date(date)));
        }
        match &self.date_mention {
            Some(DateMention::Single(date)) => {
                out.insert("dateMention".to_string(), json!(encode_date(*date)));
            }
            Some(DateMention::Many(dates)) => {
                let dates: Vec<String> = dates.iter().copied().map(encode_date).collect();
                out.insert("dateMention".to_string(), json!(dates));
            }
            None => {}
        }

        if self.keyword_loc != KeywordLoc::Body {
            out.insert("keywordLoc".to_string(), json!(self.keyword_loc.as_str()));
        }

        if let Some((min, max)) = self.articles_in_event {
            out.insert("minArticlesInEvent".to_string(), json!(min));
            out.insert("maxArticlesInEvent".to_string(), json!(max));
        }

        if let Some(exclude) = &self.exclude {
            out.insert("$not".to_string(), exclude.to_value());
        }

        out
    }
}
