// src/crawl.rs
//! The crawl: queries → listing pages → unique jobs → token counts.
//!
//! One `JobSearch` owns the seen-set and the frequency table. `run` consumes it and
//! hands back a read-only `SearchReport`, so nothing can touch the aggregate afterwards.
//!
//! Order is fixed: queries as built (position-major), pages ascending, jobs in listing
//! order. Listing failures end the crawl; a broken detail page only loses that job.

use std::collections::HashSet;
use std::fmt;

use crate::config::consts::SEARCH_PATH;
use crate::config::options::{Blacklist, JobType, Radius, SearchOptions};
use crate::config::site::SiteLayout;
use crate::core::html::{DocumentParser, StructuredDoc};
use crate::core::net::Fetcher;
use crate::error::{CrawlError, FetchError};
use crate::freq::FrequencyTable;
use crate::progress::{NullProgress, Progress};
use crate::specs::{job, search, JobStub};
use crate::tokenize::tokenize;

/// One search: a position in a location, with the shared filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub title: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub radius: Option<Radius>,
}

impl Query {
    /// `<base>/jobs?q=<title>&l=<location>[&radius=<r>][&jt=<type>]`, spaces as `+`.
    pub fn search_url(&self, base_url: &str) -> String {
        let mut url = join!(
            base_url,
            SEARCH_PATH,
            "q=",
            &plus_encode(&self.title),
            "&l=",
            &plus_encode(&self.location),
        );
        if let Some(radius) = self.radius {
            url.push_str(&format!("&radius={radius}"));
        }
        if let Some(job_type) = self.job_type {
            url.push_str("&jt=");
            url.push_str(job_type.as_str());
        }
        url
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.title, self.location)
    }
}

fn plus_encode(s: &str) -> String {
    s.replace(' ', "+")
}

/// Cross product, outer over positions.
pub fn build_queries(options: &SearchOptions) -> Vec<Query> {
    let mut out = Vec::with_capacity(options.positions.len() * options.locations.len());
    for title in &options.positions {
        for location in &options.locations {
            out.push(Query {
                title: title.clone(),
                location: location.clone(),
                job_type: options.job_type,
                radius: options.radius,
            });
        }
    }
    out
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub queries: usize,
    pub listing_pages: usize,
    /// Cards seen across all pages, duplicates included.
    pub stubs: usize,
    pub duplicates: usize,
    pub details_fetched: usize,
    pub incomplete: usize,
    pub blacklisted: usize,
    pub counted: usize,
    pub tokens: u64,
}

impl fmt::Display for CrawlStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} queries, {} pages, {} jobs ({} duplicate), {} counted, {} incomplete, {} blacklisted, {} tokens",
            self.queries,
            self.listing_pages,
            self.stubs,
            self.duplicates,
            self.counted,
            self.incomplete,
            self.blacklisted,
            self.tokens,
        )
    }
}

enum JobOutcome {
    Counted(u64),
    Incomplete,
    Blacklisted,
}

pub struct JobSearch<F, P> {
    queries: Vec<Query>,
    blacklist: Blacklist,
    site: SiteLayout,
    fetcher: F,
    parser: P,
    seen: HashSet<String>,
    table: FrequencyTable,
    stats: CrawlStats,
}

impl<F: Fetcher, P: DocumentParser> JobSearch<F, P> {
    pub fn new(options: SearchOptions, fetcher: F, parser: P) -> Self {
        let queries = build_queries(&options);
        Self {
            queries,
            blacklist: options.blacklist,
            site: options.site,
            fetcher,
            parser,
            seen: HashSet::new(),
            table: FrequencyTable::new(),
            stats: CrawlStats::default(),
        }
    }

    /// Searches `run` will perform, in crawl order.
    pub fn queries(&self) -> &[Query] { &self.queries }

    /// Crawl every query to completion. The first listing failure aborts the crawl.
    pub fn run(mut self, progress: Option<&mut dyn Progress>) -> Result<SearchReport, CrawlError> {
        let mut null = NullProgress;
        let progress: &mut dyn Progress = match progress {
            Some(p) => p,
            None => &mut null,
        };

        let queries = std::mem::take(&mut self.queries);
        progress.begin(queries.len());
        logf!("crawl start: {} queries", queries.len());

        let result = queries
            .iter()
            .try_for_each(|query| self.crawl_query(query, &mut *progress));
        progress.finish();

        if let Err(e) = result {
            loge!("crawl aborted: {e}");
            return Err(e);
        }

        logf!("crawl done: {}", self.stats);
        Ok(SearchReport {
            unique_jobs: self.seen.len(),
            table: self.table,
            stats: self.stats,
        })
    }

    fn crawl_query(&mut self, query: &Query, progress: &mut dyn Progress) -> Result<(), CrawlError> {
        let search_url = query.search_url(&self.site.base_url);
        self.stats.queries += 1;
        progress.log(&format!("Searching {query}"));

        let first = self.fetch_listing(query, 0, &search_url)?;
        let total = search::result_count(&*first, &self.site).ok_or_else(|| {
            listing_error(query, 0, FetchError::MissingElement { url: search_url.clone(), what: "result count" })
        })?;
        let pages = search::page_count(total);
        logf!("{query}: {total} results, {pages} pages");

        let mut first = Some(first);
        for page in 0..pages {
            let url = search::page_url(&search_url, page);
            let doc = match first.take() {
                Some(doc) => doc,
                None => self.fetch_listing(query, page, &url)?,
            };

            let stubs = search::job_stubs(&*doc, &self.parser, &self.site).ok_or_else(|| {
                listing_error(query, page, FetchError::MissingElement { url, what: "results container" })
            })?;
            progress.log(&format!("{query}: page {}/{pages}, {} jobs", page + 1, stubs.len()));

            for stub in stubs {
                self.process(stub, &mut *progress);
            }
        }
        Ok(())
    }

    fn fetch_listing(&mut self, query: &Query, page: u64, url: &str) -> Result<Box<dyn StructuredDoc>, CrawlError> {
        let raw = self.fetcher.fetch(url).map_err(|e| listing_error(query, page, e))?;
        self.stats.listing_pages += 1;
        Ok(self.parser.parse(&raw))
    }

    fn process(&mut self, stub: JobStub, progress: &mut dyn Progress) {
        self.stats.stubs += 1;
        if !self.seen.insert(stub.id.clone()) {
            self.stats.duplicates += 1;
            logd!("job {} already seen", stub.id);
            return;
        }
        self.stats.details_fetched += 1;

        match self.fold_job(&stub) {
            JobOutcome::Counted(tokens) => {
                self.stats.counted += 1;
                self.stats.tokens += tokens;
            }
            JobOutcome::Incomplete => self.stats.incomplete += 1,
            JobOutcome::Blacklisted => self.stats.blacklisted += 1,
        }
        progress.item_done(&stub.id);
    }

    /// fetch → extract → tokenize → fold, for one unseen job.
    fn fold_job(&mut self, stub: &JobStub) -> JobOutcome {
        let raw = match self.fetcher.fetch(&stub.detail_url) {
            Ok(raw) => raw,
            Err(e) => {
                logw!("job {}: {e}", stub.id);
                return JobOutcome::Incomplete;
            }
        };
        let detail = self.parser.parse(&raw);

        let Some(record) = job::extract_record(stub, &*detail, &self.site) else {
            logd!("job {}: incomplete record", stub.id);
            return JobOutcome::Incomplete;
        };

        let counts = tokenize(Some(&record.description));
        if let Some(term) = self.blacklist.voids(&counts) {
            logd!("job {} ({} @ {}): blacklisted term {term:?}", record.id, record.title, record.company);
            return JobOutcome::Blacklisted;
        }

        self.table.absorb(&counts);
        JobOutcome::Counted(counts.total())
    }
}

fn listing_error(query: &Query, page: u64, source: FetchError) -> CrawlError {
    CrawlError::Listing { query: query.to_string(), page, source }
}

/// Frozen result of a finished crawl.
#[derive(Clone, Debug)]
pub struct SearchReport {
    table: FrequencyTable,
    stats: CrawlStats,
    unique_jobs: usize,
}

impl SearchReport {
    pub fn table(&self) -> &FrequencyTable { &self.table }
    pub fn stats(&self) -> &CrawlStats { &self.stats }
    pub fn unique_jobs(&self) -> usize { self.unique_jobs }

    /// See `FrequencyTable::top_frequencies`. `limit == 0` returns everything.
    pub fn top_frequencies(&self, limit: usize, excluding: &HashSet<String>) -> Vec<(String, u64)> {
        self.table.top_frequencies(limit, excluding)
    }

    pub fn frequency_of(&self, word: &str) -> u64 {
        self.table.frequency_of(word)
    }
}
