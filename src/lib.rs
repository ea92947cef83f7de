// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Event Registry client
//!
//! Typed query builders and a lazy, paginating client for the Event Registry
//! news and event search API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eventregistry::client::EventRegistry;
//! use eventregistry::config::ClientConfig;
//! use eventregistry::pagination::IterOptions;
//! use eventregistry::query::Field;
//! use eventregistry::search::{QueryArticles, SearchFilters};
//! use eventregistry::SortBy;
//!
//! #[tokio::main]
//! async fn main() -> eventregistry::Result<()> {
//!     let config = ClientConfig::default().apply_env();
//!     let er = EventRegistry::new(&config)?;
//!
//!     let obama = er.get_concept_uri("Barack Obama").await?.unwrap_or_default();
//!     let query = QueryArticles::new(SearchFilters::new().condition(Field::ConceptUri, obama));
//!
//!     let mut iter = er.iter(query, IterOptions::new().sort(SortBy::Date, false).max_items(500));
//!     while let Some(article) = iter.next().await {
//!         println!("{}", article["url"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  query        BaseQuery, QueryTree, Complex*Query, filters   │
//! │  request      what a search returns (list page, aggregates)  │
//! │  search       QueryEvents / QueryArticles → request payload  │
//! ├──────────────────────────────────────────────────────────────┤
//! │  pagination   QueryIter: one page at a time, optional cap    │
//! │  client       Transport seam, EventRegistry, lookups         │
//! │  http         reqwest POST, optional rate limit              │
//! ├──────────────────────────────────────────────────────────────┤
//! │  config, output (CSV / JSON lines), cli                      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Filter conditions and composite query trees
pub mod query;

/// Result-request descriptors
pub mod request;

/// Event and article searches
pub mod search;

/// Lazy iteration over search results
pub mod pagination;

/// HTTP client with rate limiting
pub mod http;

/// Service client, transport seam and lookups
pub mod client;

/// Client configuration
pub mod config;

/// CSV and JSON-lines export
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::{EventRegistry, Transport};
pub use config::ClientConfig;
pub use pagination::{IterOptions, QueryIter};
pub use search::{Query, QueryArticles, QueryEvents, SearchFilters};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
