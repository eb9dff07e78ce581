//! Split planner implementations

use super::types::{Split, SplitPlanner};
use crate::config::ValidatedConfig;
use crate::error::{Error, Result};
use crate::types::DEFAULT_PAGE_SIZE;
use url::Url;

// ============================================================================
// Page Range Planner
// ============================================================================

/// Plans a fixed number of numbered pages of the configured collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRangePlanner {
    pub pages: u32,
    pub per_page: u32,
}

impl Default for PageRangePlanner {
    fn default() -> Self {
        Self {
            pages: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRangePlanner {
    pub fn new(pages: u32, per_page: u32) -> Self {
        Self { pages, per_page }
    }
}

impl SplitPlanner for PageRangePlanner {
    fn plan(&self, config: &ValidatedConfig) -> Result<Vec<Split>> {
        if self.pages == 0 {
            return Err(Error::config("Page count must be at least 1"));
        }
        if self.per_page == 0 {
            return Err(Error::config("Page size must be at least 1"));
        }

        let collection = collection_url(config)?;
        let per_page = self.per_page.to_string();

        Ok((1..=self.pages)
            .map(|page| {
                let mut url = collection.clone();
                url.query_pairs_mut()
                    .append_pair("per_page", &per_page)
                    .append_pair("page", &page.to_string());
                Split::new(url)
            })
            .collect())
    }
}

/// `<base>/repos/<owner>/<repo>/<resource>`, keeping any base path
pub fn collection_url(config: &ValidatedConfig) -> Result<Url> {
    let mut url = config.api_base.clone();
    url.set_query(None);
    {
        let mut segments = url.path_segments_mut().map_err(|()| {
            Error::config(format!(
                "API base '{}' cannot carry a path",
                config.api_base
            ))
        })?;
        segments
            .pop_if_empty()
            .push("repos")
            .push(&config.owner)
            .push(&config.repo)
            .extend(config.kind.resource_path().split('/'));
    }
    Ok(url)
}

// ============================================================================
// List Planner
// ============================================================================

/// Returns externally supplied cursors verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPlanner {
    cursors: Vec<String>,
}

impl ListPlanner {
    pub fn new<I, S>(cursors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cursors: cursors.into_iter().map(Into::into).collect(),
        }
    }
}

impl SplitPlanner for ListPlanner {
    fn plan(&self, _config: &ValidatedConfig) -> Result<Vec<Split>> {
        Ok(self.cursors.iter().cloned().map(Split::new).collect())
    }
}
