//! Output module
//!
//! Writes items yielded by a search iterator to a file or stdout.
//!
//! # Overview
//!
//! - CSV: one headerless row per item (`date,url,sentiment,wgt` for
//!   articles, `date,uri,articles,wgt` for events)
//! - JSON lines: each item as returned by the service

mod writer;

pub use writer::{ArticleRow, EventRow, ItemKind, OutputFormat, ResultWriter};

#[cfg(test)]
mod tests;
