//! Query model
//!
//! Builds the nested JSON query structure understood by the search service:
//!
//! - [`QueryItems`]: value of one condition (plain string or AND/OR set)
//! - [`BaseQuery`]: a set of conditions on fixed [`Field`]s
//! - [`QueryTree`]: AND/OR combinations with optional exclusion
//! - [`ComplexArticleQuery`] / [`ComplexEventQuery`]: a tree plus a filter record
//!
//! Conditions without values and parameters at their default are left out
//! of the serialized form entirely; the service treats a present field as an
//! override.

mod base;
mod complex;
mod items;
mod tree;

pub use base::BaseQuery;
pub use complex::{ArticleFilter, ComplexArticleQuery, ComplexEventQuery};
pub use items::{Combinator, Field, QueryItems};
pub use tree::{Combination, QueryTree};
