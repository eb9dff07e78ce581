//! HTTP page fetcher

use super::types::PageFetcher;
use crate::decode::EntityDecoder;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::model::{EntityKind, EntityValue};
use crate::split::Split;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Fetches pages from the GitHub REST API
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: HttpClient,
    decoder: EntityDecoder,
}

impl HttpPageFetcher {
    /// Fetcher for `kind`; relative cursors resolve against `api_base`
    pub fn new(kind: EntityKind, api_base: &Url) -> Result<Self> {
        let client = HttpClient::with_config(HttpClientConfig::with_base_url(api_base.as_str()))?;
        Ok(Self {
            client,
            decoder: EntityDecoder::new(kind),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, cursor: &Split, credential: &str) -> Result<Vec<EntityValue>> {
        debug!("Fetching {} page: {}", self.decoder.shape().name, cursor);

        let body = self
            .client
            .get_text(cursor.link(), RequestConfig::new().bearer(credential))
            .await?;
        let entities = self.decoder.decode(&body)?;

        debug!("Decoded {} entities from {}", entities.len(), cursor);
        Ok(entities)
    }
}
