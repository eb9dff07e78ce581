//! Reader state

use std::fmt;

/// Lifecycle state of a [`SplitReader`](super::SplitReader)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Constructed, page not fetched
    Created,
    /// Page fetched, no row made current yet
    Initialized,
    /// A row is current
    Iterating,
    /// All rows consumed
    Exhausted,
    /// The page fetch failed; the reader yields nothing
    Failed,
}

impl ReaderState {
    pub fn as_str(self) -> &'static str {
        match self {
            ReaderState::Created => "CREATED",
            ReaderState::Initialized => "INITIALIZED",
            ReaderState::Iterating => "ITERATING",
            ReaderState::Exhausted => "EXHAUSTED",
            ReaderState::Failed => "FAILED",
        }
    }
}

impl fmt::Display for ReaderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
