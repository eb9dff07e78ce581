//! Output module
//!
//! Converts records to Arrow and writes them out.
//!
//! # Overview
//!
//! - `schema_to_arrow` / `records_to_batch` map derived schemas and records
//!   onto Arrow
//! - `ParquetWriter` writes Parquet files
//! - `write_json_lines` writes newline-delimited JSON

mod schema;
mod writer;

pub use schema::{records_to_batch, schema_to_arrow};
pub use writer::{
    write_json_lines, write_json_lines_to_path, write_records_to_parquet, ParquetWriter,
    ParquetWriterConfig,
};
