//! Page fetching
//!
//! [`PageFetcher`] is the seam between the split reader and the network.
//! [`HttpPageFetcher`] issues one authenticated GET per cursor and decodes
//! the JSON array body.

mod fetcher;
mod types;

pub use fetcher::HttpPageFetcher;
pub use types::PageFetcher;

#[cfg(test)]
pub(crate) mod stub;
