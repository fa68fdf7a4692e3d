// tests/crawl.rs
//
// Whole-crawl behavior against canned pages; no network.
//
mod common;

use std::collections::HashSet;

use common::*;
use job_scrape::config::options::{Blacklist, JobType};
use job_scrape::core::{HtmlParser, MemoryFetcher};
use job_scrape::error::{CrawlError, FetchError};
use job_scrape::progress::Progress;
use job_scrape::JobSearch;

fn none() -> HashSet<String> { HashSet::new() }

/// Two locations for one position; job B shows up under both.
fn overlapping_site() -> MemoryFetcher {
    MemoryFetcher::new()
        .with_page(search_url("Rust+Dev", "Austin"), listing(2, &[card("A"), card("B")]))
        .with_page(search_url("Rust+Dev", "Boston"), listing(2, &[card("B"), card("C")]))
        .with_page(detail_url("A"), detail("go go rust"))
        .with_page(detail_url("B"), detail("go rust rust"))
        .with_page(detail_url("C"), detail("python"))
}

#[test]
fn overlapping_queries_count_shared_job_once() {
    let fetcher = overlapping_site();
    let search = JobSearch::new(options(&["Rust Dev"], &["Austin", "Boston"]), &fetcher, HtmlParser);
    let report = search.run(None).unwrap();

    assert_eq!(report.frequency_of("go"), 3);
    assert_eq!(report.frequency_of("rust"), 3);
    assert_eq!(report.frequency_of("python"), 1);
    assert_eq!(report.table().total(), 7);
    assert_eq!(report.unique_jobs(), 3);

    assert_eq!(fetcher.request_count(&detail_url("B")), 1);

    let stats = report.stats();
    assert_eq!(stats.queries, 2);
    assert_eq!(stats.listing_pages, 2);
    assert_eq!(stats.stubs, 4);
    assert_eq!(stats.duplicates, 1);
    assert_eq!(stats.details_fetched, 3);
    assert_eq!(stats.counted, 3);
    assert_eq!(stats.tokens, 7);
}

#[test]
fn crawl_order_is_queries_then_pages_then_jobs() {
    let fetcher = overlapping_site();
    JobSearch::new(options(&["Rust Dev"], &["Austin", "Boston"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap();

    assert_eq!(
        fetcher.requests(),
        vec![
            search_url("Rust+Dev", "Austin"),
            detail_url("A"),
            detail_url("B"),
            search_url("Rust+Dev", "Boston"),
            detail_url("C"),
        ]
    );
}

#[test]
fn top_frequencies_after_crawl() {
    let fetcher = overlapping_site();
    let report = JobSearch::new(options(&["Rust Dev"], &["Austin", "Boston"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap();

    // go and rust tie at 3; go was inserted first
    assert_eq!(
        report.top_frequencies(0, &none()),
        vec![("go".to_string(), 3), ("rust".to_string(), 3), ("python".to_string(), 1)]
    );
    assert_eq!(report.top_frequencies(1, &none()), vec![("go".to_string(), 3)]);

    let excl: HashSet<String> = ["go".to_string()].into_iter().collect();
    assert_eq!(report.top_frequencies(1, &excl), vec![("rust".to_string(), 3)]);
}

#[test]
fn sixteen_results_fetch_offsets_zero_and_ten() {
    let base = search_url("Rust+Dev", "Austin");
    let second = format!("{base}&start=10");
    let fetcher = MemoryFetcher::new()
        .with_page(base.clone(), listing(16, &[card("A")]))
        .with_page(second.clone(), listing(16, &[card("B")]))
        .with_page(detail_url("A"), detail("alpha"))
        .with_page(detail_url("B"), detail("beta"));

    let report = JobSearch::new(options(&["Rust Dev"], &["Austin"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap();

    assert_eq!(fetcher.request_count(&base), 1);
    assert_eq!(fetcher.request_count(&second), 1);
    assert_eq!(fetcher.request_count(&format!("{base}&start=15")), 0);
    assert_eq!(report.stats().listing_pages, 2);
    assert_eq!(report.frequency_of("beta"), 1);
}

#[test]
fn same_job_on_two_pages_of_one_query() {
    let base = search_url("Rust+Dev", "Austin");
    let fetcher = MemoryFetcher::new()
        .with_page(base.clone(), listing(20, &[card("A"), card("B")]))
        .with_page(format!("{base}&start=10"), listing(20, &[card("B"), card("A")]))
        .with_page(detail_url("A"), detail("one"))
        .with_page(detail_url("B"), detail("two"));

    let report = JobSearch::new(options(&["Rust Dev"], &["Austin"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap();

    assert_eq!(report.frequency_of("one"), 1);
    assert_eq!(report.frequency_of("two"), 1);
    assert_eq!(report.stats().duplicates, 2);
}

#[test]
fn zero_results_means_no_pages() {
    let base = search_url("Cobol", "Nowhere");
    let fetcher = MemoryFetcher::new().with_page(base.clone(), listing(0, &[]));

    let report = JobSearch::new(options(&["Cobol"], &["Nowhere"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap();

    assert!(report.table().is_empty());
    assert_eq!(fetcher.requests(), vec![base]);
}

#[test]
fn blacklisted_job_contributes_nothing() {
    let fetcher = MemoryFetcher::new()
        .with_page(search_url("Rust+Dev", "Austin"), listing(2, &[card("A"), card("B")]))
        .with_page(detail_url("A"), detail("rust tokio; active Clearance required."))
        .with_page(detail_url("B"), detail("rust serde"));

    let opts = options(&["Rust Dev"], &["Austin"]).with_blacklist(Blacklist::new(["CLEARANCE"]));
    let report = JobSearch::new(opts, &fetcher, HtmlParser).run(None).unwrap();

    assert_eq!(report.frequency_of("rust"), 1);
    assert_eq!(report.frequency_of("tokio"), 0);
    assert_eq!(report.frequency_of("clearance"), 0);
    assert_eq!(report.frequency_of("serde"), 1);
    assert_eq!(report.stats().blacklisted, 1);
    assert_eq!(report.stats().counted, 1);
}

#[test]
fn broken_detail_page_only_loses_that_job() {
    // no detail page for B
    let fetcher = MemoryFetcher::new()
        .with_page(search_url("Rust+Dev", "Austin"), listing(2, &[card("A"), card("B")]))
        .with_page(search_url("Rust+Dev", "Boston"), listing(2, &[card("B"), card("C")]))
        .with_page(detail_url("A"), detail("alpha"))
        .with_page(detail_url("C"), detail("gamma"));

    let report = JobSearch::new(options(&["Rust Dev"], &["Austin", "Boston"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap();

    assert_eq!(report.frequency_of("alpha"), 1);
    assert_eq!(report.frequency_of("gamma"), 1);
    assert_eq!(report.stats().incomplete, 1);
    // seen once, never retried under the second query
    assert_eq!(fetcher.request_count(&detail_url("B")), 1);
}

#[test]
fn incomplete_card_is_skipped() {
    let mut no_company = card("B");
    no_company.company = None;
    let fetcher = MemoryFetcher::new()
        .with_page(search_url("Rust+Dev", "Austin"), listing(2, &[card("A"), no_company]))
        .with_page(detail_url("A"), detail("alpha"))
        .with_page(detail_url("B"), detail("beta"));

    let report = JobSearch::new(options(&["Rust Dev"], &["Austin"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap();

    assert_eq!(report.frequency_of("beta"), 0);
    assert_eq!(report.stats().incomplete, 1);
    assert_eq!(report.stats().counted, 1);
}

#[test]
fn listing_failure_names_query_and_page() {
    // Boston listing missing
    let fetcher = MemoryFetcher::new()
        .with_page(search_url("Rust+Dev", "Austin"), listing(1, &[card("A")]))
        .with_page(detail_url("A"), detail("alpha"));

    let err = JobSearch::new(options(&["Rust Dev"], &["Austin", "Boston"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap_err();

    match err {
        CrawlError::Listing { query, page, source } => {
            assert_eq!(query, "Rust Dev @ Boston");
            assert_eq!(page, 0);
            assert!(matches!(source, FetchError::Status { status: 404, .. }));
        }
    }
}

#[test]
fn missing_results_container_on_later_page_is_fatal() {
    let base = search_url("Rust+Dev", "Austin");
    let fetcher = MemoryFetcher::new()
        .with_page(base.clone(), listing(30, &[card("A")]))
        .with_page(format!("{base}&start=10"), "<html><body>captcha</body></html>")
        .with_page(detail_url("A"), detail("alpha"));

    let err = JobSearch::new(options(&["Rust Dev"], &["Austin"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap_err();

    let CrawlError::Listing { page, source, .. } = err;
    assert_eq!(page, 1);
    assert!(matches!(source, FetchError::MissingElement { what: "results container", .. }));
}

#[test]
fn missing_result_count_is_fatal() {
    let base = search_url("Rust+Dev", "Austin");
    let fetcher = MemoryFetcher::new().with_page(base, "<html><body>no results block</body></html>");

    let err = JobSearch::new(options(&["Rust Dev"], &["Austin"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap_err();

    let CrawlError::Listing { source, .. } = err;
    assert!(matches!(source, FetchError::MissingElement { what: "result count", .. }));
}

#[test]
fn job_type_and_radius_reach_the_url() {
    let url = format!("{}&radius=50&jt=internship", search_url("Rust+Dev", "San+Jose,+CA"));
    let fetcher = MemoryFetcher::new().with_page(url.clone(), listing(0, &[]));

    let opts = options(&["Rust Dev"], &["San Jose, CA"])
        .with_job_type("internship".parse::<JobType>().unwrap())
        .with_radius("50".parse().unwrap());
    JobSearch::new(opts, &fetcher, HtmlParser).run(None).unwrap();

    assert_eq!(fetcher.requests(), vec![url]);
}

#[derive(Default)]
struct Recorder {
    begun: Option<usize>,
    done: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.begun = Some(total); }
    fn item_done(&mut self, job_id: &str) { self.done.push(job_id.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_sees_each_unique_job() {
    let fetcher = overlapping_site();
    let mut rec = Recorder::default();
    JobSearch::new(options(&["Rust Dev"], &["Austin", "Boston"]), &fetcher, HtmlParser)
        .run(Some(&mut rec))
        .unwrap();

    assert_eq!(rec.begun, Some(2));
    assert_eq!(rec.done, vec!["A", "B", "C"]);
    assert!(rec.finished);
}

#[test]
fn progress_finishes_on_failure() {
    let fetcher = MemoryFetcher::new();
    let mut rec = Recorder::default();
    let result = JobSearch::new(options(&["Rust Dev"], &["Austin"]), &fetcher, HtmlParser)
        .run(Some(&mut rec));

    assert!(result.is_err());
    assert!(rec.finished);
}

#[test]
fn inline_markup_keeps_skill_tokens_whole() {
    let fetcher = MemoryFetcher::new()
        .with_page(search_url("Rust+Dev", "Austin"), listing(1, &[card("A")]))
        .with_page(detail_url("A"), detail("Know <b>C</b>++ and <i>Java</i>Script"));

    let report = JobSearch::new(options(&["Rust Dev"], &["Austin"]), &fetcher, HtmlParser)
        .run(None)
        .unwrap();

    assert_eq!(report.frequency_of("c++"), 1);
    assert_eq!(report.frequency_of("javascript"), 1);
    assert_eq!(report.frequency_of("c"), 0);
    assert_eq!(report.frequency_of("+"), 0);
    assert_eq!(report.table().total(), 4);
}
