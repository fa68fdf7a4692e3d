// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.indeed.com";
pub const SEARCH_PATH: &str = "/jobs?";
pub const DETAIL_PATH: &str = "/viewjob?jk=";
pub const USER_AGENT: &str = "job_scrape/0.1";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Pagination
pub const RESULTS_PER_PAGE: u64 = 15;
// The site advances `start` by 10 per page even though it shows 15 results.
// Kept as-is for compatibility with its paging.
pub const PAGE_OFFSET_STEP: u64 = 10;

// Listing cards carry ids like "p_<jobkey>"
pub const ID_PREFIX_LEN: usize = 2;

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "job_scrape=info";

// Export
pub const EXPORT_HEADERS: &[&str] = &["Word", "Count"];
