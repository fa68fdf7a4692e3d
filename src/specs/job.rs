// src/specs/job.rs
//! Scraping *spec* for one job: listing card + detail page → `JobRecord`.
//!
//! Title, company and location come from the card (already on the `JobStub`);
//! the description comes from the detail page. A missing or blank field makes the
//! record incomplete (`None`). That is not an error: the job just contributes nothing.

use crate::config::site::SiteLayout;
use crate::core::html::StructuredDoc;
use super::search::JobStub;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Raw visible text; tokenizing does the normalizing.
    pub description: String,
}

pub fn extract_record(
    stub: &JobStub,
    detail: &dyn StructuredDoc,
    site: &SiteLayout,
) -> Option<JobRecord> {
    let title = stub.title.clone()?;
    let company = stub.company.clone()?;
    let location = stub.location.clone()?;

    let description = detail.find(&site.description).map(|n| s!(n.text()));
    let Some(description) = description.filter(|d| !d.trim().is_empty()) else {
        logd!("job {}: no description on detail page", stub.id);
        return None;
    };

    Some(JobRecord {
        id: stub.id.clone(),
        title,
        company,
        location,
        description,
    })
}
