//! CSV and JSON-lines writers for search results

use crate::error::Result;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// File format for exported items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Headerless CSV with a fixed column set
    #[default]
    Csv,
    /// One JSON document per line
    Json,
}

/// Which row layout applies to CSV output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Article,
    Event,
}

/// CSV columns for one article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleRow {
    pub date: String,
    pub url: String,
    pub sentiment: Option<f64>,
    pub wgt: Option<i64>,
}

/// CSV columns for one event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRow {
    #[serde(rename(deserialize = "eventDate"))]
    pub date: String,
    pub uri: String,
    #[serde(rename(deserialize = "totalArticleCount"))]
    pub article_count: Option<u64>,
    pub wgt: Option<i64>,
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

/// Streams items to `W` in the chosen format
pub struct ResultWriter<W: Write> {
    sink: Sink<W>,
    kind: ItemKind,
    written: usize,
}

impl ResultWriter<BufWriter<File>> {
    /// Create (or truncate) a file for output
    pub fn create(path: impl AsRef<Path>, format: OutputFormat, kind: ItemKind) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), format, kind))
    }
}

impl<W: Write> ResultWriter<W> {
    pub fn new(writer: W, format: OutputFormat, kind: ItemKind) -> Self {
        let sink = match format {
            OutputFormat::Csv => Sink::Csv(
                csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(writer),
            ),
            OutputFormat::Json => Sink::Json(writer),
        };
        Self {
            sink,
            kind,
            written: 0,
        }
    }

    pub fn write_item(&mut self, item: &JsonValue) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(csv) => match self.kind {
                ItemKind::Article => csv.serialize(ArticleRow::deserialize(item)?)?,
                ItemKind::Event => csv.serialize(EventRow::deserialize(item)?)?,
            },
            Sink::Json(out) => {
                serde_json::to_writer(&mut *out, item)?;
                out.write_all(b"\n")?;
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Items written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush buffered output and return the underlying writer
    pub fn finish(self) -> Result<W> {
        match self.sink {
            Sink::Csv(csv) => csv
                .into_inner()
                .map_err(|e| e.into_error().into()),
            Sink::Json(mut out) => {
                out.flush()?;
                Ok(out)
            }
        }
    }
}
