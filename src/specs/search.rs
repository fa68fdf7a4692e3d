// src/specs/search.rs
//! Scraping *spec* for the search listing page.
//!
//! Purpose:
//! - Read the **result count** ("Page 1 of 1,234 jobs") so the crawl knows how many pages exist.
//! - Turn each result card into a `JobStub`: job id, detail URL and the card's
//!   title / company / location fields.
//!
//! Responsibilities:
//! - Selector lookups via `core::html::StructuredDoc`.
//! - Page arithmetic (`page_count`, `page_url`), including the site's offset quirk.
//!
//! Non-Responsibilities:
//! - **No fetching.** Callers hand in parsed documents.
//! - **No dedup.** The same id may come back on several pages; the crawl decides.

use crate::config::consts::{DETAIL_PATH, PAGE_OFFSET_STEP, RESULTS_PER_PAGE};
use crate::config::site::SiteLayout;
use crate::core::html::{DocumentParser, StructuredDoc};
use crate::core::sanitize::{clean_field, parse_count};

/// One result card. Lives for a single page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobStub {
    pub id: String,
    pub detail_url: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
}

/// Total number of results the site reports for this search.
pub fn result_count(doc: &dyn StructuredDoc, site: &SiteLayout) -> Option<u64> {
    let text = doc.find(&site.result_count)?.text().to_string();
    let lc = text.to_ascii_lowercase();

    if let Some(ix) = lc.rfind(" of ") {
        return parse_count(&text[ix + " of ".len()..]);
    }
    // No "of": take the last number, e.g. "1,234 jobs"
    text.split_whitespace().filter_map(parse_count).last()
}

pub fn page_count(results: u64) -> u64 {
    results.div_ceil(RESULTS_PER_PAGE)
}

/// Page 0 is the bare search URL; later pages add `&start=<page * 10>`.
pub fn page_url(search_url: &str, page: u64) -> String {
    if page == 0 {
        s!(search_url)
    } else {
        format!("{}&start={}", search_url, page * PAGE_OFFSET_STEP)
    }
}

pub fn detail_url(site: &SiteLayout, id: &str) -> String {
    join!(site.base_url.as_str(), DETAIL_PATH, id)
}

/// Drop the site's fixed id prefix ("p_abc123" → "abc123").
/// `None` when nothing is left.
pub fn strip_id_prefix(raw: &str, prefix_len: usize) -> Option<&str> {
    let raw = raw.trim();
    let start = match raw.char_indices().nth(prefix_len) {
        Some((ix, _)) => ix,
        None => return None,
    };
    let id = &raw[start..];
    if id.is_empty() { None } else { Some(id) }
}

/// All result cards on a listing page, in listing order.
/// `None` when the results container itself is missing.
pub fn job_stubs(
    doc: &dyn StructuredDoc,
    parser: &dyn DocumentParser,
    site: &SiteLayout,
) -> Option<Vec<JobStub>> {
    doc.find(&site.results)?;

    let cards = doc.find_all(&format!("{} {}", site.results, site.job_card));
    let mut stubs = Vec::with_capacity(cards.len());

    for card in cards {
        let Some(raw_id) = card.attr(&site.id_attr) else {
            logd!("card without `{}` attribute skipped", site.id_attr);
            continue;
        };
        let Some(id) = strip_id_prefix(raw_id, site.id_prefix_len) else {
            logd!("card id {raw_id:?} too short, skipped");
            continue;
        };

        let fields = parser.parse(card.html().as_bytes());
        let field = |selector: &str| fields.find(selector).and_then(|n| clean_field(n.text()));

        stubs.push(JobStub {
            id: s!(id),
            detail_url: detail_url(site, id),
            title: field(&site.title),
            company: field(&site.company),
            location: field(&site.location),
        });
    }
    Some(stubs)
}
