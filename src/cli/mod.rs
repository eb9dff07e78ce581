//! CLI module
//!
//! Command-line interface for inspecting and reading a GitHub dataset.
//!
//! # Commands
//!
//! - `spec` - Describe the accepted configuration properties
//! - `datasets` - List the supported dataset labels
//! - `validate` - Validate a configuration
//! - `schema` - Show the schema derived for a dataset
//! - `splits` - Show the planned page cursors
//! - `read` - Fetch, transform and emit records

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
