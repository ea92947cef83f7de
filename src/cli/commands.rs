//! CLI commands and argument parsing

use crate::client::SuggestKind;
use crate::output::OutputFormat;
use crate::types::SortBy;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Search Event Registry for news articles and events
#[derive(Parser, Debug)]
#[command(name = "er-query")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides config file and environment)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Service host, e.g. https://eventregistry.org
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export matching articles
    Articles(ExportArgs),

    /// Export matching events
    Events(ExportArgs),

    /// Print the number of matching results
    Count {
        /// What to count
        #[arg(value_enum)]
        kind: SearchKind,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Look up entity URIs for a label prefix
    Suggest {
        #[arg(value_enum)]
        kind: SuggestKind,

        /// Label prefix
        prefix: String,

        /// Language of the labels
        #[arg(long, default_value = "eng")]
        lang: String,
    },
}

/// Which list facet a command works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    Articles,
    Events,
}

/// Search conditions shared by every search command
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keyword or phrase (repeatable)
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Concept label, resolved to a URI before searching (repeatable)
    #[arg(long = "concept")]
    pub concepts: Vec<String>,

    /// Concept URI (repeatable)
    #[arg(long = "concept-uri")]
    pub concept_uris: Vec<String>,

    /// Category URI (repeatable)
    #[arg(long = "category-uri")]
    pub category_uris: Vec<String>,

    /// News source URI (repeatable)
    #[arg(long = "source-uri")]
    pub source_uris: Vec<String>,

    /// Location URI (repeatable)
    #[arg(long = "location-uri")]
    pub location_uris: Vec<String>,

    /// Language code, e.g. eng (repeatable)
    #[arg(long = "lang")]
    pub langs: Vec<String>,

    /// First day of the date window
    #[arg(long)]
    pub date_start: Option<NaiveDate>,

    /// Last day of the date window
    #[arg(long)]
    pub date_end: Option<NaiveDate>,

    /// Match any of several values instead of all of them
    #[arg(long)]
    pub any: bool,
}

/// Arguments of the export commands
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Result ordering
    #[arg(long, value_enum)]
    pub sort_by: Option<SortBy>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub ascending: bool,

    /// Stop after this many items
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,
}
