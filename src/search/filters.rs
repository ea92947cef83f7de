//! Flat search conditions shared by event and article searches

use crate::query::{Field, QueryItems};
use crate::types::{encode_date, JsonObject, KeywordLoc};
use chrono::NaiveDate;
use serde_json::json;
use std::collections::BTreeMap;

/// Positive and negative conditions sent as discrete request fields
///
/// Positive conditions carry their `<field>Oper` when given as an AND/OR
/// set. Negative (`ignore*`) conditions always match any of their values, so
/// no operator is sent for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    conditions: BTreeMap<Field, QueryItems>,
    ignored: BTreeMap<Field, QueryItems>,
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
    date_mention_start: Option<NaiveDate>,
    date_mention_end: Option<NaiveDate>,
    keyword_loc: KeywordLoc,
    ignore_keyword_loc: KeywordLoc,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require results to match `value` on `field`
    #[must_use]
    pub fn condition(mut self, field: Field, value: impl Into<QueryItems>) -> Self {
        self.conditions.insert(field, value.into());
        self
    }

    /// Drop results that match any of `value` on `field`
    #[must_use]
    pub fn ignore(mut self, field: Field, value: impl Into<QueryItems>) -> Self {
        self.ignored.insert(field, value.into());
        self
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

    /// Only results that mention a date on or after `date`
    #[must_use]
    pub fn date_mention_start(mut self, date: NaiveDate) -> Self {
        self.date_mention_start = Some(date);
        self
    }

    /// Only results that mention a date on or before `date`
    #[must_use]
    pub fn date_mention_end(mut self, date: NaiveDate) -> Self {
        self.date_mention_end = Some(date);
        self
    }

    #[must_use]
    pub fn keyword_loc(mut self, loc: KeywordLoc) -> Self {
        self.keyword_loc = loc;
        self
    }

    #[must_use]
    pub fn ignore_keyword_loc(mut self, loc: KeywordLoc) -> Self {
        self.ignore_keyword_loc = loc;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn write(&self, out: &mut JsonObject) {
        for (field, items) in &self.conditions {
            items.write_flat(out, field.name(), field.oper_name());
        }

        let dates = [
            ("dateStart", self.date_start),
            ("dateEnd", self.date_end),
            ("dateMentionStart", self.date_mention_start),
            ("dateMentionEnd", self.date_mention_end),
        ];
        for (name, date) in dates {
            if let Some(date) = date {
                out.insert(name.to_string(), json!(encode_date(date)));
            }
        }

        for (field, items) in &self.ignored {
            items.write_flat(out, field.ignore_name(), None);
        }

        if self.keyword_loc != KeywordLoc::Body {
            out.insert("keywordLoc".to_string(), json!(self.keyword_loc.as_str()));
        }
        if self.ignore_keyword_loc != KeywordLoc::Body {
            out.insert(
                "ignoreKeywordLoc".to_string(),
                json!(self.ignore_keyword_loc.as_str()),
            );
        }
    }
}
