//! Search requests
//!
//! [`QueryEvents`] and [`QueryArticles`] hold what to search for and which
//! result facet to return. A search is either a set of flat conditions, a
//! complex query document, or an explicit list of URIs; the last two bypass
//! the flat conditions entirely.

mod articles;
mod events;
mod filters;

pub use articles::QueryArticles;
pub use events::QueryEvents;
pub use filters::SearchFilters;

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// A request that can be sent to the search service
pub trait Query: Send + Sync {
    /// Endpoint path, relative to the service host
    fn path(&self) -> &'static str;

    /// Search parameters, without any result facet
    fn params(&self) -> JsonObject;

    /// Parameters of the currently requested result facet
    fn result_params(&self) -> JsonObject;

    /// Full request body
    fn payload(&self) -> JsonObject {
        let mut payload = self.params();
        payload.extend(self.result_params());
        payload
    }
}

/// What a search runs over
#[derive(Debug, Clone, PartialEq)]
enum Selection<F> {
    /// Discrete condition fields
    Filters(F),
    /// Serialized complex query document
    Complex(String),
    /// Explicit URIs; no query is evaluated
    Uris { key: &'static str, value: JsonValue },
}

impl<F> Selection<F> {
    /// Condition fields, or an error naming what replaced them
    fn filters_mut(&mut self, param: &str) -> Result<&mut F> {
        match self {
            Selection::Filters(filters) => Ok(filters),
            Selection::Complex(_) => Err(Error::mutually_exclusive(param, "query")),
            Selection::Uris { key, .. } => Err(Error::mutually_exclusive(param, *key)),
        }
    }

    fn write(&self, out: &mut JsonObject, write_filters: impl FnOnce(&F, &mut JsonObject)) {
        match self {
            Selection::Filters(filters) => write_filters(filters, out),
            Selection::Complex(query) => {
                out.insert("query".to_string(), JsonValue::String(query.clone()));
            }
            Selection::Uris { key, value } => {
                out.insert((*key).to_string(), value.clone());
            }
        }
    }
}

/// Check that a complex query given as text is valid JSON
fn complex_from_str(query: &str) -> Result<String> {
    serde_json::from_str::<JsonValue>(query)
        .map_err(|e| Error::invalid("query", format!("not a valid JSON document: {e}")))?;
    Ok(query.to_string())
}

/// Serialize a complex query given as a JSON value
fn complex_from_value(query: &JsonValue) -> Result<String> {
    if !query.is_object() {
        return Err(Error::invalid_type(
            "query",
            "a complex query must be a JSON object",
        ));
    }
    Ok(query.to_string())
}

fn comma_joined<I, S>(uris: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    uris.into_iter()
        .map(|uri| uri.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests;
