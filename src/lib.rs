//! # GitHub Batch Source
//!
//! Reads one collection of a GitHub repository (branches, commits,
//! releases, ...) as records conforming to a schema derived from the
//! entity's static shape.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use github_batch_source::{BatchSource, ReadConfig, Result, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = SourceConfig::from_file("github.yaml")?;
//!     let source = BatchSource::from_config(&config)?;
//!
//!     let output = source.read(&ReadConfig::default()).await?;
//!     println!("{} records", output.records.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        BatchSource                            │
//! │  schema() → Schema   plan_splits() → [Split]   read() → Records│
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬────────────┬───────────┐
//! │  Model   │  Schema   │    Reader     │   Fetch    │  Output   │
//! ├──────────┼───────────┼───────────────┼────────────┼───────────┤
//! │ Shapes   │ Inference │ State machine │ HTTP GET   │ Arrow     │
//! │ Registry │ Cache     │ Transform     │ Decode     │ Parquet   │
//! │          │           │               │            │ JSON lines│
//! └──────────┴───────────┴───────────────┴────────────┴───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_self)]
#![allow(clippy::unused_async)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Entity shapes and the dataset registry
pub mod model;

/// Schema derivation from entity shapes
pub mod schema;

/// Entity instance to record conversion
pub mod transform;

/// Response body decoding
pub mod decode;

/// HTTP client
pub mod http;

/// Page fetching
pub mod fetch;

/// Split cursors and planning
pub mod split;

/// Per-split reader
pub mod reader;

/// Whole-dataset reads
pub mod source;

/// Arrow/Parquet/JSON output
pub mod output;

/// Source configuration and validation
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{FailureCollector, SourceConfig, ValidatedConfig, ValidationFailure};
pub use error::{Error, Result};
pub use fetch::{HttpPageFetcher, PageFetcher};
pub use model::{EntityKind, EntityValue};
pub use reader::SplitReader;
pub use schema::{build_schema, Schema, SchemaCache};
pub use source::{BatchSource, ReadConfig, ReadOutput, ReadStats};
pub use split::{Split, SplitPlanner};
pub use transform::{transform, FieldValue, Record};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
