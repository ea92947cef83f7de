//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ExportArgs, FilterArgs, SearchKind};
use crate::client::{EventRegistry, SuggestKind};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::output::{ItemKind, ResultWriter};
use crate::pagination::{IterOptions, IterPhase, PagedQuery, QueryIter};
use crate::query::{Combinator, Field, QueryItems};
use crate::search::{QueryArticles, QueryEvents, SearchFilters};
use std::io::{self, BufWriter, Write};
use tracing::{debug, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let registry = EventRegistry::new(&self.client_config()?)?;

        match &self.cli.command {
            Commands::Articles(args) => {
                let filters = resolve_filters(&registry, &args.filters).await?;
                self.export(&registry, QueryArticles::new(filters), args, ItemKind::Article)
                    .await
            }
            Commands::Events(args) => {
                let filters = resolve_filters(&registry, &args.filters).await?;
                self.export(&registry, QueryEvents::new(filters), args, ItemKind::Event)
                    .await
            }
            Commands::Count { kind, filters } => {
                let filters = resolve_filters(&registry, filters).await?;
                let total = match kind {
                    SearchKind::Articles => registry.count(&QueryArticles::new(filters)).await?,
                    SearchKind::Events => registry.count(&QueryEvents::new(filters)).await?,
                };
                println!("{total}");
                Ok(())
            }
            Commands::Suggest { kind, prefix, lang } => {
                self.suggest(&registry, *kind, prefix, lang).await
            }
        }
    }

    /// Config file, then environment, then command-line flags
    fn client_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        let mut config = config.apply_env();
        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(host) = &self.cli.host {
            config.host = host.clone();
        }
        Ok(config)
    }

    async fn export<Q: PagedQuery>(
        &self,
        registry: &EventRegistry,
        query: Q,
        args: &ExportArgs,
        kind: ItemKind,
    ) -> Result<()> {
        let mut options = IterOptions::new();
        if let Some(sort_by) = args.sort_by {
            options = options.sort(sort_by, args.ascending);
        }
        if let Some(max_items) = args.max_items {
            options = options.max_items(max_items);
        }

        let mut iter = registry.iter(query, options);
        let written = match &args.output {
            Some(path) => {
                let writer = ResultWriter::create(path, args.format, kind)?;
                let written = write_all(&mut iter, writer).await?;
                info!(path = %path.display(), items = written, "Export finished");
                written
            }
            None => {
                let writer = ResultWriter::new(BufWriter::new(io::stdout()), args.format, kind);
                write_all(&mut iter, writer).await?
            }
        };

        if iter.phase() == IterPhase::Failed {
            warn!(items = written, "Export stopped early, a page could not be fetched");
        }
        debug!(fetches = iter.state().fetches, items = written, "Iteration done");
        Ok(())
    }

    async fn suggest(
        &self,
        registry: &EventRegistry,
        kind: SuggestKind,
        prefix: &str,
        lang: &str,
    ) -> Result<()> {
        for suggestion in registry.suggest(kind, prefix, lang).await? {
            println!(
                "{}\t{}",
                suggestion.uri,
                suggestion.display_label().unwrap_or_default()
            );
        }
        Ok(())
    }
}

async fn write_all<Q, W>(
    iter: &mut QueryIter<'_, Q, EventRegistry>,
    mut writer: ResultWriter<W>,
) -> Result<usize>
where
    Q: PagedQuery,
    W: Write,
{
    while let Some(item) = iter.next().await {
        writer.write_item(&item)?;
    }
    let written = writer.written();
    writer.finish()?;
    Ok(written)
}

/// Turn concept labels into URIs, then build the filters
async fn resolve_filters(registry: &EventRegistry, args: &FilterArgs) -> Result<SearchFilters> {
    let mut concept_uris = args.concept_uris.clone();
    for label in &args.concepts {
        let uri = registry
            .get_concept_uri(label)
            .await?
            .ok_or_else(|| Error::invalid("concept", format!("no concept matches '{label}'")))?;
        debug!(label = %label, uri = %uri, "Resolved concept");
        concept_uris.push(uri);
    }
    Ok(build_filters(args, &concept_uris))
}

fn build_filters(args: &FilterArgs, concept_uris: &[String]) -> SearchFilters {
    let combinator = if args.any {
        Combinator::Or
    } else {
        Combinator::And
    };

    let mut filters = SearchFilters::new();
    let fields = [
        (Field::Keyword, args.keywords.as_slice()),
        (Field::ConceptUri, concept_uris),
        (Field::CategoryUri, args.category_uris.as_slice()),
        (Field::SourceUri, args.source_uris.as_slice()),
        (Field::LocationUri, args.location_uris.as_slice()),
        (Field::Lang, args.langs.as_slice()),
    ];
    for (field, values) in fields {
        if let Some(items) = to_items(values, combinator) {
            filters = filters.condition(field, items);
        }
    }

    if let Some(date) = args.date_start {
        filters = filters.date_start(date);
    }
    if let Some(date) = args.date_end {
        filters = filters.date_end(date);
    }
    filters
}

fn to_items(values: &[String], combinator: Combinator) -> Option<QueryItems> {
    match values {
        [] => None,
        [single] => Some(QueryItems::Scalar(single.clone())),
        many => Some(QueryItems::combined(combinator, many.iter().cloned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Query;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_single_values_are_scalars() {
        let args = FilterArgs {
            keywords: strings(&["Tesla"]),
            langs: strings(&["eng"]),
            ..FilterArgs::default()
        };
        let payload = QueryArticles::new(build_filters(&args, &[])).payload();

        assert_eq!(payload["keyword"], json!("Tesla"));
        assert_eq!(payload["lang"], json!("eng"));
        assert!(!payload.contains_key("keywordOper"));
    }

    #[test]
    fn test_any_switches_to_or() {
        let args = FilterArgs {
            keywords: strings(&["Tesla", "SpaceX"]),
            any: true,
            ..FilterArgs::default()
        };
        let payload = QueryEvents::new(build_filters(&args, &[])).payload();

        assert_eq!(payload["keyword"], json!(["Tesla", "SpaceX"]));
        assert_eq!(payload["keywordOper"], json!("or"));
    }

    #[test]
    fn test_concept_uris_and_date_window() {
        let args = FilterArgs {
            concept_uris: strings(&["http://en.wikipedia.org/wiki/Apple_Inc."]),
            date_start: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_end: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..FilterArgs::default()
        };
        let resolved = strings(&[
            "http://en.wikipedia.org/wiki/Apple_Inc.",
            "http://en.wikipedia.org/wiki/Tim_Cook",
        ]);
        let payload = QueryArticles::new(build_filters(&args, &resolved)).payload();

        assert_eq!(
            payload["conceptUri"],
            json!([
                "http://en.wikipedia.org/wiki/Apple_Inc.",
                "http://en.wikipedia.org/wiki/Tim_Cook"
            ])
        );
        assert_eq!(payload["conceptOper"], json!("and"));
        assert_eq!(payload["dateStart"], json!("2024-01-01"));
        assert_eq!(payload["dateEnd"], json!("2024-01-31"));
    }

    #[test]
    fn test_no_values_no_condition() {
        assert_eq!(to_items(&[], Combinator::And), None);
        assert!(build_filters(&FilterArgs::default(), &[]).is_empty());
    }
}
