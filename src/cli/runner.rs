//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{FailureCollector, SourceConfig, CONFIG_PROPERTIES};
use crate::error::{Error, Result};
use crate::model::EntityKind;
use crate::output::{write_json_lines_to_path, write_records_to_parquet};
use crate::schema::SchemaCache;
use crate::source::{BatchSource, ReadConfig, ReadOutput};
use crate::split::PageRangePlanner;
use crate::transform::Record;
use serde_json::{json, Value};
use std::path::Path;

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
        match &self.cli.command {
            Commands::Spec => self.spec(),
            Commands::Datasets => self.datasets(),
            Commands::Validate => self.validate(),
            Commands::Schema { dataset } => self.schema(dataset.as_deref()),
            Commands::Splits { pages, per_page } => self.splits(*pages, *per_page),
            Commands::Read {
                pages,
                per_page,
                parallelism,
                max_records,
                no_fail_fast,
                output,
            } => {
                let read_config = ReadConfig::new()
                    .with_parallelism(*parallelism)
                    .with_fail_fast(!*no_fail_fast)
                    .with_max_records(max_records.unwrap_or(0));
                self.read(
                    PageRangePlanner::new(*pages, *per_page),
                    &read_config,
                    output.as_deref(),
                )
                .await
            }
        }
    }

    /// Load configuration, inline JSON first, then the config file
    fn load_config(&self) -> Result<SourceConfig> {
        if let Some(json_str) = &self.cli.config_json {
            return SourceConfig::from_json_str(json_str)
                .map_err(|e| Error::config(format!("Invalid config JSON: {e}")));
        }

        match &self.cli.config {
            Some(path) => SourceConfig::from_file(path),
            None => Err(Error::config(
                "Configuration not specified (use -C or --config-json)",
            )),
        }
    }

    fn source(&self, planner: PageRangePlanner) -> Result<BatchSource> {
        let config = self.load_config()?;
        Ok(BatchSource::from_config(&config)?.with_planner(planner))
    }

    /// Show the accepted configuration properties
    fn spec(&self) -> Result<()> {
        self.output_message(&json!({
            "type": "SPEC",
            "spec": {
                "name": crate::NAME,
                "version": crate::VERSION,
                "properties": CONFIG_PROPERTIES,
                "datasets": EntityKind::labels().collect::<Vec<_>>()
            }
        }));
        Ok(())
    }

    /// List dataset labels
    fn datasets(&self) -> Result<()> {
        for kind in EntityKind::ALL {
            self.output_message(&json!({
                "type": "DATASET",
                "dataset": {
                    "label": kind.label(),
                    "entity": kind.shape().name,
                    "resource": kind.resource_path()
                }
            }));
        }
        Ok(())
    }

    /// Print every validation failure; fail when there is any
    fn validate(&self) -> Result<()> {
        let config = self.load_config()?;
        let mut collector = FailureCollector::new();
        config.validate(&mut collector);

        for failure in collector.failures() {
            self.output_message(&json!({
                "type": "VALIDATION_FAILURE",
                "failure": {
                    "property": failure.property,
                    "message": failure.message
                }
            }));
        }
        collector.into_result()?;

        let kind = config.resolve_kind()?;
        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!("Configuration is valid for dataset '{}'", kind.label())
            }
        }));
        Ok(())
    }

    /// Show the derived schema
    fn schema(&self, dataset: Option<&str>) -> Result<()> {
        let kind = match dataset {
            Some(label) => EntityKind::from_label(label)?,
            None => self.load_config()?.resolve_kind()?,
        };
        let schema = SchemaCache::global().get_or_build(kind)?;

        self.output_message(&json!({
            "type": "SCHEMA",
            "dataset": kind.label(),
            "schema": schema.to_avro_json()
        }));
        Ok(())
    }

    /// Show the planned cursors
    fn splits(&self, pages: u32, per_page: u32) -> Result<()> {
        let source = self.source(PageRangePlanner::new(pages, per_page))?;
        for split in source.plan_splits()? {
            self.output_message(&json!({
                "type": "SPLIT",
                "split": split.link()
            }));
        }
        Ok(())
    }

    /// Read the dataset and emit or write its records
    async fn read(
        &self,
        planner: PageRangePlanner,
        read_config: &ReadConfig,
        output: Option<&Path>,
    ) -> Result<()> {
        if self.cli.format == OutputFormat::Parquet && output.is_none() {
            return Err(Error::config("Parquet output requires --output"));
        }

        let source = self.source(planner)?;
        let result = source.read(read_config).await?;

        match output {
            Some(path) => {
                let rows = match self.cli.format {
                    OutputFormat::Parquet => {
                        write_records_to_parquet(path, &result.schema, &result.records, None)?
                    }
                    OutputFormat::Json | OutputFormat::Pretty => {
                        write_json_lines_to_path(path, &result.records)?
                    }
                };
                tracing::info!(rows, path = %path.display(), "Wrote records");
            }
            None => {
                for record in &result.records {
                    self.output_message(&record_message(source.config().label(), record));
                }
            }
        }

        self.output_message(&stats_message(&result));
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json | OutputFormat::Parquet => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

fn record_message(dataset: &str, record: &Record) -> Value {
    json!({
        "type": "RECORD",
        "record": {
            "dataset": dataset,
            "data": record
        }
    })
}

fn stats_message(result: &ReadOutput) -> Value {
    let stats = &result.stats;
    json!({
        "type": "STATS",
        "stats": {
            "dataset": result.schema.name,
            "splitsPlanned": stats.splits_planned,
            "splitsRead": stats.splits_read,
            "splitsFailed": stats.splits_failed,
            "recordsRead": stats.records_read,
            "durationMs": stats.duration_ms
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttrValue;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("github-batch-source").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_read_flags() {
        let cli = parse(&[
            "--config-json",
            "{}",
            "read",
            "--pages",
            "3",
            "--per-page",
            "50",
            "--no-fail-fast",
            "--format",
            "parquet",
            "-o",
            "out.parquet",
        ]);

        assert_eq!(cli.format, OutputFormat::Parquet);
        match cli.command {
            Commands::Read {
                pages,
                per_page,
                parallelism,
                max_records,
                no_fail_fast,
                output,
            } => {
                assert_eq!(pages, 3);
                assert_eq!(per_page, 50);
                assert_eq!(parallelism, 4);
                assert_eq!(max_records, None);
                assert!(no_fail_fast);
                assert_eq!(output, Some("out.parquet".into()));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_inline_config_takes_precedence() {
        let cli = parse(&[
            "-C",
            "/nonexistent/config.yaml",
            "--config-json",
            r#"{"repoOwner":"octocat"}"#,
            "validate",
        ]);
        let config = Runner::new(cli).load_config().unwrap();
        assert_eq!(config.repo_owner.as_deref(), Some("octocat"));
    }

    #[test]
    fn test_missing_config_is_error() {
        let err = Runner::new(parse(&["validate"])).load_config().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_validate_reports_failures() {
        let cli = parse(&["--config-json", r#"{"repoOwner":"octocat"}"#, "validate"]);
        let err = Runner::new(cli).validate().unwrap_err();
        match err {
            Error::InvalidConfig { failures } => assert_eq!(failures.len(), 3),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_schema_for_explicit_dataset() {
        let runner = Runner::new(parse(&["schema", "--dataset", "Branches"]));
        assert!(runner.schema(Some("Branches")).is_ok());
        assert!(matches!(
            runner.schema(Some("Stargazers")),
            Err(Error::UnknownDataset { .. })
        ));
    }

    #[test]
    fn test_record_message_keeps_field_order() {
        let schema = SchemaCache::global()
            .get_or_build(EntityKind::TrafficReferrer)
            .unwrap();
        let instance = crate::model::EntityValue::new("TrafficReferrer")
            .with("referrer", AttrValue::String("google.com".into()))
            .with("count", AttrValue::Integer(12))
            .with("uniques", AttrValue::Integer(1));
        let record = crate::transform::transform(&instance, &schema).unwrap();

        assert_eq!(
            record_message("Traffic:Referrers", &record).to_string(),
            r#"{"type":"RECORD","record":{"dataset":"Traffic:Referrers","data":{"referrer":"google.com","count":12,"uniques":1}}}"#
        );
    }

    #[tokio::test]
    async fn test_parquet_requires_output() {
        let cli = parse(&["--config-json", "{}", "--format", "parquet", "read"]);
        let err = Runner::new(cli).run().await.unwrap_err();
        assert!(err.to_string().contains("--output"));
    }
}
