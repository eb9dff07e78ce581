//! Page fetcher trait

use crate::error::Result;
use crate::model::EntityValue;
use crate::split::Split;
use async_trait::async_trait;

/// Fetches and decodes one page of entities
///
/// Implementations pull the whole page before returning and make exactly
/// one attempt; any failure is final for the cursor.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, cursor: &Split, credential: &str) -> Result<Vec<EntityValue>>;
}
