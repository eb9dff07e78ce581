//! Record file writers
//!
//! Parquet through Arrow, and newline-delimited JSON.

use super::schema::{records_to_batch, schema_to_arrow};
use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::transform::Record;
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Configuration for Parquet writer
#[derive(Debug, Clone)]
pub struct ParquetWriterConfig {
    compression: Compression,
    row_group_size: usize,
}

impl Default for ParquetWriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::SNAPPY,
            row_group_size: 1024 * 1024,
        }
    }
}

impl ParquetWriterConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set compression algorithm
    #[must_use]
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Set row group size
    #[must_use]
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Use no compression
    #[must_use]
    pub fn uncompressed(mut self) -> Self {
        self.compression = Compression::UNCOMPRESSED;
        self
    }

    #[must_use]
    pub fn compression(&self) -> Compression {
        self.compression
    }

    #[must_use]
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    fn build_properties(&self) -> WriterProperties {
        WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build()
    }
}

/// Parquet file writer for records of one schema
pub struct ParquetWriter {
    writer: ArrowWriter<File>,
    schema: Schema,
    rows_written: usize,
}

impl ParquetWriter {
    /// Create the file and write its header
    pub fn new(path: impl AsRef<Path>, schema: &Schema, config: &ParquetWriterConfig) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|e| {
            Error::output(format!(
                "Failed to create file '{}': {e}",
                path.as_ref().display()
            ))
        })?;

        let props = config.build_properties();
        let writer = ArrowWriter::try_new(file, Arc::new(schema_to_arrow(schema)), Some(props))?;

        Ok(Self {
            writer,
            schema: schema.clone(),
            rows_written: 0,
        })
    }

    /// Convert and write a batch of records
    pub fn write_records(&mut self, records: &[Record]) -> Result<()> {
        let batch = records_to_batch(&self.schema, records)?;
        self.write(&batch)
    }

    /// Write an already converted RecordBatch
    pub fn write(&mut self, batch: &RecordBatch) -> Result<()> {
        self.writer.write(batch)?;
        self.rows_written += batch.num_rows();
        Ok(())
    }

    /// Get the number of rows written so far
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Close the writer and finalize the file
    pub fn close(self) -> Result<usize> {
        let rows = self.rows_written;
        self.writer.close()?;
        Ok(rows)
    }
}

/// Write records to a new Parquet file, returning the row count
pub fn write_records_to_parquet(
    path: impl AsRef<Path>,
    schema: &Schema,
    records: &[Record],
    config: Option<&ParquetWriterConfig>,
) -> Result<usize> {
    let default_config = ParquetWriterConfig::default();
    let config = config.unwrap_or(&default_config);

    let mut writer = ParquetWriter::new(path, schema, config)?;
    writer.write_records(records)?;
    writer.close()
}

/// Write one JSON object per line, fields in schema order
pub fn write_json_lines<W: Write>(mut out: W, records: &[Record]) -> Result<usize> {
    for record in records {
        serde_json::to_writer(&mut out, record)
            .map_err(|e| Error::output(format!("Failed to serialize record: {e}")))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(records.len())
}

/// Write records as JSON lines to a new file
pub fn write_json_lines_to_path(path: impl AsRef<Path>, records: &[Record]) -> Result<usize> {
    let file = File::create(path.as_ref()).map_err(|e| {
        Error::output(format!(
            "Failed to create file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    write_json_lines(BufWriter::new(file), records)
}
