//! HTTP client module
//!
//! Single-attempt client for the GitHub REST API. There is no retry,
//! backoff or rate limiting: a failed request fails the page that issued it.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig, GITHUB_ACCEPT};
