//! Split types and the planner trait

use crate::config::ValidatedConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque cursor: the absolute URL of one page of a collection
///
/// Serialized verbatim; hosts never look inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Split {
    link: String,
}

impl Split {
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }

    /// Page URL this split reads
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Size estimate; cursors carry none
    pub fn length(&self) -> u64 {
        0
    }

    /// Preferred hosts; cursors have no locality
    pub fn locations(&self) -> &[String] {
        &[]
    }

    /// Serialize as UTF-8
    pub fn to_bytes(&self) -> Vec<u8> {
        self.link.as_bytes().to_vec()
    }

    /// Deserialize from [`Split::to_bytes`] output
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let link = std::str::from_utf8(bytes)
            .map_err(|e| Error::decode(format!("Split is not valid UTF-8: {e}")))?;
        Ok(Self::new(link))
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.link)
    }
}

impl From<String> for Split {
    fn from(link: String) -> Self {
        Self::new(link)
    }
}

/// Produces the cursors for a configured dataset
pub trait SplitPlanner: Send + Sync + fmt::Debug {
    fn plan(&self, config: &ValidatedConfig) -> Result<Vec<Split>>;
}
