//! Single filter conditions
//!
//! A condition value is either a plain string or an ordered set of strings
//! joined with AND/OR. The same value serializes two ways: nested under
//! `$and`/`$or` inside a query tree, or as a flat list with a sibling
//! `<field>Oper` parameter on a plain search request.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde_json::json;

/// Boolean join applied to a set of values or subqueries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    /// Key used inside a query tree (`$and` / `$or`)
    pub fn tree_key(&self) -> &'static str {
        match self {
            Combinator::And => "$and",
            Combinator::Or => "$or",
        }
    }

    /// Value used for flat `<field>Oper` parameters
    pub fn oper(&self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }

    fn from_tree_key(key: &str) -> Option<Self> {
        match key {
            "$and" => Some(Combinator::And),
            "$or" => Some(Combinator::Or),
            _ => None,
        }
    }
}

/// Value of a single filter condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryItems {
    /// A single value
    Scalar(String),
    /// Several values joined by a combinator
    Combined {
        combinator: Combinator,
        items: Vec<String>,
    },
}

impl QueryItems {
    /// All of the given values must match
    pub fn and<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::combined(Combinator::And, items)
    }

    /// Any of the given values may match
    pub fn or<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::combined(Combinator::Or, items)
    }

    /// Build a combined value; duplicates keep their first position
    pub fn combined<I, S>(combinator: Combinator, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for item in items {
            let item = item.into();
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Self::Combined {
            combinator,
            items: unique,
        }
    }

    /// A condition with no values constrains nothing
    pub fn is_empty(&self) -> bool {
        match self {
            QueryItems::Scalar(_) => false,
            QueryItems::Combined { items, .. } => items.is_empty(),
        }
    }

    /// Values carried by this condition
    pub fn items(&self) -> Vec<&str> {
        match self {
            QueryItems::Scalar(value) => vec![value.as_str()],
            QueryItems::Combined { items, .. } => items.iter().map(String::as_str).collect(),
        }
    }

    /// Serialize for use inside a query tree
    pub fn to_tree_value(&self) -> JsonValue {
        match self {
            QueryItems::Scalar(value) => JsonValue::String(value.clone()),
            QueryItems::Combined { combinator, items } => {
                let mut out = JsonObject::new();
                out.insert(combinator.tree_key().to_string(), json!(items));
                JsonValue::Object(out)
            }
        }
    }

    /// Write as flat request parameters (`name` plus optional `oper_name`)
    pub fn write_flat(&self, out: &mut JsonObject, name: &str, oper_name: Option<&str>) {
        if self.is_empty() {
            return;
        }
        match self {
            QueryItems::Scalar(value) => {
                out.insert(name.to_string(), JsonValue::String(value.clone()));
            }
            QueryItems::Combined { combinator, items } => {
                out.insert(name.to_string(), json!(items));
                if let Some(oper_name) = oper_name {
                    out.insert(oper_name.to_string(), json!(combinator.oper()));
                }
            }
        }
    }

    /// Parse a dynamically typed condition value
    ///
    /// Accepts `null` (no condition), a string, or `{"$and"|"$or": [strings]}`.
    pub fn from_json(name: &str, value: &JsonValue) -> Result<Option<Self>> {
        match value {
            JsonValue::Null => Ok(None),
            JsonValue::String(s) => Ok(Some(QueryItems::Scalar(s.clone()))),
            JsonValue::Object(map) if map.len() == 1 => {
                let (key, values) = map.iter().next().ok_or_else(|| {
                    Error::invalid_type(name, "expected a single $and/$or key")
                })?;
                let combinator = Combinator::from_tree_key(key).ok_or_else(|| {
                    Error::invalid_type(name, format!("unknown combinator '{key}'"))
                })?;
                let values = values.as_array().ok_or_else(|| {
                    Error::invalid_type(name, format!("'{key}' must hold a list of strings"))
                })?;
                let items = values
                    .iter()
                    .map(|v| {
                        v.as_str().map(String::from).ok_or_else(|| {
                            Error::invalid_type(name, format!("'{key}' must hold only strings"))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Some(Self::combined(combinator, items)))
            }
            other => Err(Error::invalid_type(
                name,
                format!(
                    "expected null, a string or a $and/$or object, got {}",
                    json_kind(other)
                ),
            )),
        }
    }
}

impl From<&str> for QueryItems {
    fn from(value: &str) -> Self {
        QueryItems::Scalar(value.to_string())
    }
}

impl From<String> for QueryItems {
    fn from(value: String) -> Self {
        QueryItems::Scalar(value)
    }
}

impl From<&String> for QueryItems {
    fn from(value: &String) -> Self {
        QueryItems::Scalar(value.clone())
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a list",
        JsonValue::Object(_) => "an object",
    }
}

/// Fixed vocabulary of filterable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Keyword,
    ConceptUri,
    CategoryUri,
    SourceUri,
    SourceLocationUri,
    SourceGroupUri,
    AuthorUri,
    LocationUri,
    Lang,
}

impl Field {
    /// Wire name of the positive condition
    pub fn name(&self) -> &'static str {
        match self {
            Field::Keyword => "keyword",
            Field::ConceptUri => "conceptUri",
            Field::CategoryUri => "categoryUri",
            Field::SourceUri => "sourceUri",
            Field::SourceLocationUri => "sourceLocationUri",
            Field::SourceGroupUri => "sourceGroupUri",
            Field::AuthorUri => "authorUri",
            Field::LocationUri => "locationUri",
            Field::Lang => "lang",
        }
    }

    /// Flat-form operator parameter, for fields that accept one
    pub fn oper_name(&self) -> Option<&'static str> {
        match self {
            Field::Keyword => Some("keywordOper"),
            Field::ConceptUri => Some("conceptOper"),
            Field::CategoryUri => Some("categoryOper"),
            Field::SourceUri => Some("sourceOper"),
            Field::SourceGroupUri => Some("sourceGroupOper"),
            Field::AuthorUri => Some("authorOper"),
            Field::SourceLocationUri | Field::LocationUri | Field::Lang => None,
        }
    }

    /// Wire name of the negative (`ignore*`) condition
    pub fn ignore_name(&self) -> &'static str {
        match self {
            Field::Keyword => "ignoreKeywords",
            Field::ConceptUri => "ignoreConceptUri",
            Field::CategoryUri => "ignoreCategoryUri",
            Field::SourceUri => "ignoreSourceUri",
            Field::SourceLocationUri => "ignoreSourceLocationUri",
            Field::SourceGroupUri => "ignoreSourceGroupUri",
            Field::AuthorUri => "ignoreAuthorUri",
            Field::LocationUri => "ignoreLocationUri",
            Field::Lang => "ignoreLang",
        }
    }
}
