//! HTTP client module
//!
//! Thin wrapper over reqwest used by the search client.
//!
//! # Features
//!
//! - **JSON POST**: request bodies and responses are JSON documents
//! - **Rate Limiting**: optional token bucket rate limiter using governor
//! - **Status Classification**: 429 and other non-success statuses become typed errors

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
