// tests/common/mod.rs
//
// Canned pages shaped like the real listing/detail markup.
//
#![allow(dead_code)]

use job_scrape::config::options::SearchOptions;
use job_scrape::config::site::SiteLayout;

pub const BASE: &str = "https://jobs.test";

pub struct Card<'a> {
    pub id: &'a str,
    pub title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
}

pub fn card(id: &str) -> Card<'_> {
    Card { id, title: Some("Rust Developer"), company: Some("Acme"), location: Some("Austin, TX") }
}

pub fn listing(total: u64, cards: &[Card]) -> String {
    let mut body = String::new();
    for c in cards {
        body.push_str(&format!(
            r#"<div class="jobsearch-SerpJobCard unifiedRow row result" id="p_{}">"#,
            c.id
        ));
        if let Some(t) = c.title {
            body.push_str(&format!(r#"<h2 class="title"><a class="jobtitle">{t}</a></h2>"#));
        }
        if let Some(co) = c.company {
            body.push_str(&format!(r#"<span class="company">{co}</span>"#));
        }
        if let Some(l) = c.location {
            body.push_str(&format!(r#"<div class="location">{l}</div>"#));
        }
        body.push_str("</div>");
    }
    format!(
        r#"<html><body>
        <div id="searchCountPages">Page 1 of {total} jobs</div>
        <table><tr><td id="resultsCol">{body}</td></tr></table>
        </body></html>"#
    )
}

pub fn detail(description: &str) -> String {
    format!(r#"<html><body><div id="jobDescriptionText"><p>{description}</p></div></body></html>"#)
}

pub fn search_url(title_plus: &str, location_plus: &str) -> String {
    format!("{BASE}/jobs?q={title_plus}&l={location_plus}")
}

pub fn detail_url(id: &str) -> String {
    format!("{BASE}/viewjob?jk={id}")
}

pub fn options<P: AsRef<str>, L: AsRef<str>>(positions: &[P], locations: &[L]) -> SearchOptions {
    SearchOptions::new(
        positions.iter().map(|p| p.as_ref().to_string()),
        locations.iter().map(|l| l.as_ref().to_string()),
    )
    .with_site(SiteLayout::default().with_base_url(BASE))
}
