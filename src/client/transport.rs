//! The seam between search requests and the network

use crate::error::Result;
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;

/// Executes one search request
///
/// Implementations return the decoded response document. A document holding
/// an `error` field is still `Ok`: interpreting it is up to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, path: &str, payload: &JsonObject) -> Result<JsonValue>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(&self, path: &str, payload: &JsonObject) -> Result<JsonValue> {
        (**self).execute(path, payload).await
    }
}
