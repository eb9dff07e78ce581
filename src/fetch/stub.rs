//! In-memory fetcher, for tests

use super::types::PageFetcher;
use crate::error::{Error, Result};
use crate::model::EntityValue;
use crate::split::Split;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Serves canned pages by cursor link; unknown links fail with 404
#[derive(Debug, Default)]
pub(crate) struct StubFetcher {
    pages: HashMap<String, Vec<EntityValue>>,
    calls: AtomicUsize,
    credentials: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(mut self, link: impl Into<String>, rows: Vec<EntityValue>) -> Self {
        self.pages.insert(link.into(), rows);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn credentials(&self) -> Vec<String> {
        self.credentials.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, cursor: &Split, credential: &str) -> Result<Vec<EntityValue>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.credentials.lock().unwrap().push(credential.to_string());
        self.pages
            .get(cursor.link())
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("no page at {cursor}")))
    }
}
