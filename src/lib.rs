// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;
pub mod tokenize;

pub mod crawl;
pub mod csv;
pub mod file;
pub mod freq;
pub mod progress;

#[cfg(feature = "cli")]
pub mod cli;

pub use crawl::{CrawlStats, JobSearch, Query, SearchReport};
pub use error::{ConfigError, CrawlError, FetchError};
pub use freq::FrequencyTable;
pub use tokenize::{tokenize, TokenCounts};
