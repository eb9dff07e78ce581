//! Read configuration and results

use crate::schema::Schema;
use crate::transform::Record;
use std::sync::Arc;

/// Configuration for a whole-dataset read
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Splits read concurrently
    pub parallelism: usize,
    /// Abort on the first failed split
    pub fail_fast: bool,
    /// Maximum records to return (0 = unlimited)
    pub max_records: usize,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            parallelism: 4,
            fail_fast: true,
            max_records: 0,
        }
    }
}

impl ReadConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set concurrent split count (at least 1)
    #[must_use]
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }

    /// Set fail fast mode
    #[must_use]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Set max records
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }
}

/// Statistics from a read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadStats {
    pub splits_planned: usize,
    pub splits_read: usize,
    pub splits_failed: usize,
    pub records_read: usize,
    pub duration_ms: u64,
}

impl ReadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_split_read(&mut self) {
        self.splits_read += 1;
    }

    pub fn add_split_failed(&mut self) {
        self.splits_failed += 1;
    }

    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

/// Records produced by a read, in split order
#[derive(Debug, Clone)]
pub struct ReadOutput {
    pub schema: Arc<Schema>,
    pub records: Vec<Record>,
    pub stats: ReadStats,
}
