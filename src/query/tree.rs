//! Boolean combinations of queries

use super::base::BaseQuery;
use super::items::Combinator;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// A rooted boolean tree over condition sets
///
/// Every `And`/`Or` node holds at least one child; the constructors refuse
/// empty lists. Any node may carry an `exclude` subtree whose matches are
/// removed from the positive result.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryTree {
    /// A single set of conditions
    Leaf(BaseQuery),
    /// All children must match
    And(Combination),
    /// Any child may match
    Or(Combination),
}

/// Children of an `And`/`Or` node, never empty
///
/// Only [`QueryTree::and`], [`QueryTree::or`] and [`QueryTree::combine`]
/// build one.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    children: Vec<QueryTree>,
    exclude: Option<Box<QueryTree>>,
}

impl Combination {
    pub fn children(&self) -> &[QueryTree] {
        &self.children
    }

    pub fn exclude(&self) -> Option<&QueryTree> {
        self.exclude.as_deref()
    }
}

impl QueryTree {
    /// Combine subqueries with AND
    pub fn and(children: Vec<QueryTree>, exclude: Option<QueryTree>) -> Result<Self> {
        Self::combine(Combinator::And, children, exclude)
    }

    /// Combine subqueries with OR
    pub fn or(children: Vec<QueryTree>, exclude: Option<QueryTree>) -> Result<Self> {
        Self::combine(Combinator::Or, children, exclude)
    }

    /// Combine subqueries with the given combinator
    pub fn combine(
        combinator: Combinator,
        children: Vec<QueryTree>,
        exclude: Option<QueryTree>,
    ) -> Result<Self> {
        if children.is_empty() {
            return Err(Error::empty_combination(combinator.name()));
        }
        let combination = Combination {
            children,
            exclude: exclude.map(Box::new),
        };
        Ok(match combinator {
            Combinator::And => QueryTree::And(combination),
            Combinator::Or => QueryTree::Or(combination),
        })
    }

    /// Serialize into the nested query structure
    pub fn to_value(&self) -> JsonValue {
        JsonValue::Object(self.to_object())
    }

    /// Serialize into a JSON object
    pub fn to_object(&self) -> JsonObject {
        let (combinator, combination) = match self {
            QueryTree::Leaf(base) => return base.to_object(),
            QueryTree::And(combination) => (Combinator::And, combination),
            QueryTree::Or(combination) => (Combinator::Or, combination),
        };

        let mut out = JsonObject::new();
        out.insert(
            combinator.tree_key().to_string(),
            JsonValue::Array(combination.children.iter().map(QueryTree::to_value).collect()),
        );
        if let Some(exclude) = combination.exclude() {
            out.insert("$not".to_string(), exclude.to_value());
        }
        out
    }
}

impl From<BaseQuery> for QueryTree {
    fn from(base: BaseQuery) -> Self {
        QueryTree::Leaf(base)
    }
}
