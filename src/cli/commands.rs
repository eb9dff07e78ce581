//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// GitHub repository batch source CLI
#[derive(Parser, Debug)]
#[command(name = "github-batch-source")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON or YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline configuration JSON, takes precedence over --config
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the configuration properties
    Spec,

    /// List supported dataset labels
    Datasets,

    /// Validate the configuration
    Validate,

    /// Show the schema derived for a dataset
    Schema {
        /// Dataset label (defaults to the configured one)
        #[arg(long)]
        dataset: Option<String>,
    },

    /// Show the planned page cursors
    Splits {
        /// Number of pages to plan
        #[arg(long, default_value = "1")]
        pages: u32,

        /// Items per page
        #[arg(long, default_value = "100")]
        per_page: u32,
    },

    /// Read records from the configured dataset
    Read {
        /// Number of pages to plan
        #[arg(long, default_value = "1")]
        pages: u32,

        /// Items per page
        #[arg(long, default_value = "100")]
        per_page: u32,

        /// Pages fetched concurrently
        #[arg(long, default_value = "4")]
        parallelism: usize,

        /// Maximum records to emit
        #[arg(long)]
        max_records: Option<usize>,

        /// Skip pages that fail to fetch instead of aborting
        #[arg(long)]
        no_fail_fast: bool,

        /// Output file (stdout when omitted; required for parquet)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
    /// Parquet file (read only)
    Parquet,
}
