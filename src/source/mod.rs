//! Batch source engine
//!
//! Ties the pieces together for a host engine:
//! - `BatchSource::plan_splits` produces the cursors
//! - `BatchSource::open_reader` creates one reader per cursor
//! - `BatchSource::read` runs every split locally and collects records

mod types;

pub use types::{ReadConfig, ReadOutput, ReadStats};

use crate::config::{SourceConfig, ValidatedConfig};
use crate::error::Result;
use crate::fetch::{HttpPageFetcher, PageFetcher};
use crate::reader::SplitReader;
use crate::schema::{Schema, SchemaCache};
use crate::split::{PageRangePlanner, Split, SplitPlanner};
use crate::transform::{transform, Record};
use futures::stream::{self, StreamExt};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Batch source for one configured dataset
pub struct BatchSource {
    config: Arc<ValidatedConfig>,
    fetcher: Arc<dyn PageFetcher>,
    planner: Box<dyn SplitPlanner>,
}

impl BatchSource {
    /// Create a source fetching over HTTP, planning a single default page
    pub fn new(config: ValidatedConfig) -> Result<Self> {
        let fetcher = HttpPageFetcher::new(config.kind, &config.api_base)?;
        Ok(Self {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
            planner: Box::new(PageRangePlanner::default()),
        })
    }

    /// Validate a raw configuration and create a source from it
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::new(config.validated()?)
    }

    /// Replace the page fetcher
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn PageFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Replace the split planner
    #[must_use]
    pub fn with_planner(mut self, planner: impl SplitPlanner + 'static) -> Self {
        self.planner = Box::new(planner);
        self
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Schema of the configured dataset, from the process-wide cache
    pub fn schema(&self) -> Result<Arc<Schema>> {
        SchemaCache::global().get_or_build(self.config.kind)
    }

    /// Cursors for the configured dataset
    pub fn plan_splits(&self) -> Result<Vec<Split>> {
        let splits = self.planner.plan(&self.config)?;
        info!(
            "Planned {} splits for {} of {}/{}",
            splits.len(),
            self.config.label(),
            self.config.owner,
            self.config.repo
        );
        Ok(splits)
    }

    /// Reader for one cursor, sharing this source's config and fetcher
    pub fn open_reader(&self, split: Split) -> SplitReader {
        SplitReader::new(split, Arc::clone(&self.config), Arc::clone(&self.fetcher))
    }

    /// Read one split to completion and transform its rows
    pub async fn read_split(&self, split: Split, schema: &Schema) -> Result<Vec<Record>> {
        let mut reader = self.open_reader(split);
        let result = drain(&mut reader, schema).await;
        reader.close();
        result
    }

    /// Read every planned split, at most `parallelism` at a time
    ///
    /// Output keeps split order. Without `fail_fast` a split that fails to
    /// fetch or decode is skipped and counted; contract violations always
    /// abort the read.
    pub async fn read(&self, read_config: &ReadConfig) -> Result<ReadOutput> {
        let start = Instant::now();
        let schema = self.schema()?;
        let splits = self.plan_splits()?;

        let mut stats = ReadStats::new();
        stats.splits_planned = splits.len();

        let mut results = stream::iter(splits)
            .map(|split| {
                let schema = Arc::clone(&schema);
                async move {
                    let result = self.read_split(split.clone(), &schema).await;
                    (split, result)
                }
            })
            .buffered(read_config.parallelism.max(1));

        let mut records = Vec::new();
        while let Some((split, result)) = results.next().await {
            match result {
                Ok(batch) => {
                    info!("Read {} records from {}", batch.len(), split);
                    stats.add_split_read();
                    records.extend(batch);
                }
                Err(e) if read_config.fail_fast || !e.is_transport_error() => return Err(e),
                Err(e) => {
                    warn!("Skipping split {}: {}", split, e);
                    stats.add_split_failed();
                }
            }

            if read_config.max_records > 0 && records.len() >= read_config.max_records {
                records.truncate(read_config.max_records);
                break;
            }
        }

        drop(results);

        stats.records_read = records.len();
        stats.set_duration(start.elapsed().as_millis() as u64);
        info!(
            "Read {} records from {}/{} splits in {}ms",
            stats.records_read, stats.splits_read, stats.splits_planned, stats.duration_ms
        );

        Ok(ReadOutput {
            schema,
            records,
            stats,
        })
    }
}

async fn drain(reader: &mut SplitReader, schema: &Schema) -> Result<Vec<Record>> {
    reader.initialize().await?;
    let mut records = Vec::new();
    while reader.advance()? {
        if let Some(row) = reader.current_row() {
            records.push(transform(row, schema)?);
        }
    }
    Ok(records)
}

impl fmt::Debug for BatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchSource")
            .field("config", &self.config)
            .field("planner", &self.planner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
