// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{DocumentParser, HtmlParser, Node, StructuredDoc};
pub use net::{Fetcher, HttpFetcher, MemoryFetcher};
