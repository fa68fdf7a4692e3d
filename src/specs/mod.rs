// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the job site: *where the ground truth lives in the HTML*
//! and *how to read it robustly*.
//!
//! ## What lives here
//! - **Listing page** (`search`): result count, result cards → `JobStub`s, page URLs.
//! - **Detail page** (`job`): `JobStub` + detail document → `JobRecord` (or incomplete).
//!
//! ## What does **not** live here
//! - **Fetching** – specs receive parsed documents (`core::html::StructuredDoc`).
//! - **Dedup, blacklist, counting** – that is the crawl's job (`crawl`).
//!
//! ## Typical call chain
//! ```text
//! crawl::JobSearch::run → Fetcher::fetch → DocumentParser::parse
//!                       → specs::search::{result_count, job_stubs}
//!                       → specs::job::extract_record → tokenize → FrequencyTable
//! ```
//!
//! ## Conventions
//! - Every selector comes from `config::site::SiteLayout`; nothing is hard-coded here.
//! - Missing optional pieces degrade to `None`; callers decide what is fatal.
//! - Specs are testable **offline** against inline HTML fixtures.
pub mod job;
pub mod search;

pub use job::{extract_record, JobRecord};
pub use search::JobStub;
