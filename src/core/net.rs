// src/core/net.rs
// Fetch-by-URL. The crawl only ever sees the `Fetcher` trait.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{ConfigError, FetchError};

/// One blocking GET. Returns the raw body or a `FetchError` naming the URL.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP(S) client with a per-request timeout.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ConfigError> {
        Self::from_builder(Self::builder(timeout))
    }

    fn builder(timeout: Duration) -> reqwest::blocking::ClientBuilder {
        reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
    }

    fn from_builder(builder: reqwest::blocking::ClientBuilder) -> Result<Self, ConfigError> {
        let client = builder.build().map_err(ConfigError::HttpClient)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        logd!("GET {url}");
        let resp = self.client.get(url).send().map_err(|e| transport(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        let body = resp.bytes().map_err(|e| transport(url, e))?;
        logd!("GET {url} -> {} bytes", body.len());
        Ok(body.to_vec())
    }
}

fn transport(url: &str, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout { url: s!(url) }
    } else {
        FetchError::Transport { url: s!(url), source: Box::new(e) }
    }
}

/// Canned pages keyed by exact URL. Unknown URLs answer 404.
/// Every request is recorded, so callers can check what was (not) fetched.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    pages: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self { Self::default() }

    pub fn add_page(&mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.pages.insert(url.into(), body.into());
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.add_page(url, body);
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|u| u.as_str() == url).count()
    }
}

impl Fetcher for MemoryFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requests.borrow_mut().push(s!(url));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: s!(url), status: 404 })
    }
}
