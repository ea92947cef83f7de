//! CLI module
//!
//! Command-line interface for searching and exporting results.
//!
//! # Commands
//!
//! - `articles` - Export matching articles as CSV or JSON lines
//! - `events` - Export matching events
//! - `count` - Print how many results a search matches
//! - `suggest` - Look up concept, location, category or source URIs

mod commands;
mod runner;

pub use commands::{Cli, Commands, ExportArgs, FilterArgs, SearchKind};
pub use runner::Runner;
