//! Label to URI lookups
//!
//! Searches filter by URIs, while people think in labels. The suggest
//! endpoints return candidate entities for a label prefix, best match first.

use super::transport::Transport;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

/// Kind of entity to look up
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SuggestKind {
    Concepts,
    Locations,
    Categories,
    Sources,
}

impl SuggestKind {
    pub fn path(&self) -> &'static str {
        match self {
            SuggestKind::Concepts => "/json/suggestConceptsFast",
            SuggestKind::Locations => "/json/suggestLocationsFast",
            SuggestKind::Categories => "/json/suggestCategoriesFast",
            SuggestKind::Sources => "/json/suggestSourcesFast",
        }
    }

    fn payload(&self, prefix: &str, lang: &str) -> JsonObject {
        let mut payload = JsonObject::new();
        payload.insert("prefix".to_string(), json!(prefix));
        payload.insert("page".to_string(), json!(1));
        payload.insert("count".to_string(), json!(20));
        match self {
            SuggestKind::Concepts => {
                payload.insert("lang".to_string(), json!(lang));
            }
            SuggestKind::Locations => {
                payload.insert("lang".to_string(), json!(lang));
                payload.insert("source".to_string(), json!(["place", "country"]));
            }
            SuggestKind::Categories | SuggestKind::Sources => {}
        }
        payload
    }
}

/// One candidate entity
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Suggestion {
    pub uri: String,
    /// Entity type, e.g. `person`, `org`, `wiki`, `place`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// A plain label, or labels keyed by language
    #[serde(default)]
    pub label: Option<JsonValue>,
    /// Source name (news sources only)
    #[serde(default)]
    pub title: Option<String>,
}

impl Suggestion {
    /// Human-readable name
    pub fn display_label(&self) -> Option<&str> {
        match &self.label {
            Some(JsonValue::String(label)) => Some(label),
            Some(JsonValue::Object(labels)) => labels
                .get("eng")
                .or_else(|| labels.values().next())
                .and_then(JsonValue::as_str),
            _ => self.title.as_deref(),
        }
    }
}

/// Candidates whose label starts with `prefix`
pub async fn suggest<T: Transport + ?Sized>(
    transport: &T,
    kind: SuggestKind,
    prefix: &str,
    lang: &str,
) -> Result<Vec<Suggestion>> {
    let response = transport
        .execute(kind.path(), &kind.payload(prefix, lang))
        .await?;

    if let Some(error) = response.get("error") {
        let message = error
            .as_str()
            .map_or_else(|| error.to_string(), str::to_string);
        return Err(Error::remote(message));
    }

    let suggestions: Vec<Suggestion> = response
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match Suggestion::deserialize(item) {
                    Ok(suggestion) => Some(suggestion),
                    Err(e) => {
                        warn!(?kind, error = %e, "Skipping malformed suggestion");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default();
    debug!(?kind, prefix, found = suggestions.len(), "Suggestions received");
    Ok(suggestions)
}

/// URI of the best match for `label`, if any
pub async fn get_uri<T: Transport + ?Sized>(
    transport: &T,
    kind: SuggestKind,
    label: &str,
    lang: &str,
) -> Result<Option<String>> {
    let suggestions = suggest(transport, kind, label, lang).await?;
    Ok(suggestions.into_iter().next().map(|s| s.uri))
}
