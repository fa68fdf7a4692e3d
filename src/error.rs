// src/error.rs
//! Typed errors for the crawl.
//!
//! Detail-page problems never surface here: a job whose page cannot be fetched or read
//! simply contributes nothing. Only configuration mistakes and listing-page failures
//! reach the caller.

use thiserror::Error;

/// Rejected search or client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown job type `{0}` (expected internship, fulltime, parttime, temporary or contract)")]
    JobType(String),

    #[error("unsupported radius `{0}` (expected 5, 10, 15, 25, 50 or 100)")]
    Radius(String),

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// A page could not be fetched, or a listing page lacks what the crawl needs from it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} has no {what}")]
    MissingElement { url: String, what: &'static str },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Timeout { url }
            | FetchError::Status { url, .. }
            | FetchError::MissingElement { url, .. } => url,
        }
    }
}

/// Fatal crawl failure, naming the query and page that broke it.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("listing page {page} of query `{query}` failed: {source}")]
    Listing {
        query: String,
        page: u64,
        #[source]
        source: FetchError,
    },
}
