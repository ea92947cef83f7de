//! HTTP transport for the search service

use super::lookup::{get_uri, suggest, SuggestKind, Suggestion};
use super::transport::Transport;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{count_results, IterOptions, PagedQuery, QueryIter};
use crate::search::Query;
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use tracing::debug;

/// Client for the Event Registry search service
///
/// Sends each request as a JSON POST to `host + path` with the API key
/// added to the body.
#[derive(Debug)]
pub struct EventRegistry {
    http: HttpClient,
    api_key: String,
}

impl EventRegistry {
    /// Fails when no API key is configured
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let http = HttpClient::with_config(config.http_config())?;
        Ok(Self { http, api_key })
    }

    /// Run a search with its current result facet
    pub async fn exec_query<Q: Query + ?Sized>(&self, query: &Q) -> Result<JsonValue> {
        self.execute(query.path(), &query.payload()).await
    }

    /// Iterate over every item of a search
    pub fn iter<Q: PagedQuery>(&self, query: Q, options: IterOptions) -> QueryIter<'_, Q, Self> {
        QueryIter::new(query, self, options)
    }

    /// Number of results a search matches
    pub async fn count<Q: PagedQuery>(&self, query: &Q) -> Result<u64> {
        count_results(query, self).await
    }

    pub async fn suggest(
        &self,
        kind: SuggestKind,
        prefix: &str,
        lang: &str,
    ) -> Result<Vec<Suggestion>> {
        suggest(self, kind, prefix, lang).await
    }

    pub async fn get_concept_uri(&self, label: &str) -> Result<Option<String>> {
        get_uri(self, SuggestKind::Concepts, label, "eng").await
    }

    pub async fn get_location_uri(&self, label: &str) -> Result<Option<String>> {
        get_uri(self, SuggestKind::Locations, label, "eng").await
    }

    pub async fn get_category_uri(&self, label: &str) -> Result<Option<String>> {
        get_uri(self, SuggestKind::Categories, label, "eng").await
    }

    pub async fn get_news_source_uri(&self, label: &str) -> Result<Option<String>> {
        get_uri(self, SuggestKind::Sources, label, "eng").await
    }
}

#[async_trait]
impl Transport for EventRegistry {
    async fn execute(&self, path: &str, payload: &JsonObject) -> Result<JsonValue> {
        let mut body = payload.clone();
        body.insert("apiKey".to_string(), JsonValue::String(self.api_key.clone()));
        debug!(path, "Sending request");
        self.http.post_json(path, &JsonValue::Object(body)).await
    }
}
