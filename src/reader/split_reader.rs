//! Per-split reader
//!
//! Fetches its cursor's page once during [`SplitReader::initialize`], then
//! hands rows out one at a time. Out-of-order calls fail with
//! [`Error::ReaderState`] instead of returning stale data.

use super::types::ReaderState;
use crate::config::ValidatedConfig;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::model::EntityValue;
use crate::split::Split;
use crate::types::DEFAULT_PAGE_SIZE;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

const CLOSED: &str = "CLOSED";

/// Reads the rows of one split
pub struct SplitReader {
    split: Split,
    config: Arc<ValidatedConfig>,
    fetcher: Arc<dyn PageFetcher>,
    state: ReaderState,
    rows: Vec<EntityValue>,
    /// Number of rows made current so far
    consumed: usize,
    closed: bool,
}

impl SplitReader {
    pub fn new(split: Split, config: Arc<ValidatedConfig>, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            split,
            config,
            fetcher,
            state: ReaderState::Created,
            rows: Vec::new(),
            consumed: 0,
            closed: false,
        }
    }

    pub fn split(&self) -> &Split {
        &self.split
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Fetch the page. Must be called exactly once, before [`advance`](Self::advance).
    ///
    /// On failure the reader moves to `Failed` and yields no rows.
    pub async fn initialize(&mut self) -> Result<()> {
        self.ensure_open("initialize")?;
        if self.state != ReaderState::Created {
            return Err(Error::reader_state("initialize", self.state.as_str()));
        }

        let rows = match self.fetcher.fetch(&self.split, &self.config.token).await {
            Ok(rows) => rows,
            Err(e) => {
                self.state = ReaderState::Failed;
                return Err(e);
            }
        };
        debug!("Initialized reader for {} with {} rows", self.split, rows.len());

        self.rows = rows;
        self.consumed = 0;
        self.state = ReaderState::Initialized;
        Ok(())
    }

    /// Make the next row current; `false` once the page is exhausted
    pub fn advance(&mut self) -> Result<bool> {
        self.ensure_open("advance")?;
        match self.state {
            ReaderState::Created | ReaderState::Failed => {
                Err(Error::reader_state("advance", self.state.as_str()))
            }
            ReaderState::Exhausted => Ok(false),
            ReaderState::Initialized | ReaderState::Iterating => {
                if self.consumed < self.rows.len() {
                    self.consumed += 1;
                    self.state = ReaderState::Iterating;
                    Ok(true)
                } else {
                    self.state = ReaderState::Exhausted;
                    Ok(false)
                }
            }
        }
    }

    /// Row made current by the last successful [`advance`](Self::advance)
    ///
    /// `None` before the first advance, after exhaustion and after close.
    pub fn current_row(&self) -> Option<&EntityValue> {
        if self.closed || self.state != ReaderState::Iterating {
            return None;
        }
        self.rows.get(self.consumed.checked_sub(1)?)
    }

    /// Rows consumed over the default page size
    ///
    /// A rough heuristic: the page length is not known up front, and the
    /// value exceeds 1.0 for pages larger than the default size.
    pub fn progress(&self) -> f32 {
        self.consumed as f32 / DEFAULT_PAGE_SIZE as f32
    }

    /// Number of rows made current so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Release the page; safe to call repeatedly from any state
    pub fn close(&mut self) {
        if !self.closed {
            debug!("Closing reader for {} after {} rows", self.split, self.consumed);
        }
        self.closed = true;
        self.rows = Vec::new();
    }

    fn ensure_open(&self, operation: &'static str) -> Result<()> {
        if self.closed {
            return Err(Error::reader_state(operation, CLOSED));
        }
        Ok(())
    }
}

impl fmt::Debug for SplitReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitReader")
            .field("split", &self.split)
            .field("state", &self.state)
            .field("rows", &self.rows.len())
            .field("consumed", &self.consumed)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
