//! Flattening of result requests into request parameters

use super::return_info::{prefixed, ReturnInfo};
use crate::error::{check_range, Result};
use crate::types::{JsonObject, JsonValue, SortBy};

/// Builds `resultType` plus facet-prefixed parameters
pub(crate) struct FacetParams {
    prefix: &'static str,
    out: JsonObject,
}

impl FacetParams {
    pub(crate) fn new(result_type: &'static str) -> Self {
        let mut out = JsonObject::new();
        out.insert(
            "resultType".to_string(),
            JsonValue::String(result_type.to_string()),
        );
        Self {
            prefix: result_type,
            out,
        }
    }

    pub(crate) fn set(mut self, name: &str, value: impl Into<JsonValue>) -> Self {
        self.out.insert(prefixed(self.prefix, name), value.into());
        self
    }

    pub(crate) fn set_opt<V: Into<JsonValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    pub(crate) fn sort(self, sort_by: SortBy, ascending: bool) -> Self {
        self.set("sortBy", sort_by.as_str())
            .set("sortByAsc", ascending)
    }

    /// Copy the non-default return options under this facet's prefix
    pub(crate) fn return_info(mut self, info: &ReturnInfo) -> Self {
        self.out.extend(info.params(self.prefix));
        self
    }

    pub(crate) fn build(self) -> JsonObject {
        self.out
    }
}

/// Page numbers start at 1
pub(crate) fn check_page(name: &str, page: u32) -> Result<()> {
    check_range(name, i64::from(page), 1, i64::from(u32::MAX))
}

/// Counts and sample sizes lie in `1..=max`
pub(crate) fn check_max(name: &str, value: u32, max: u32) -> Result<()> {
    check_range(name, i64::from(value), 1, i64::from(max))
}
