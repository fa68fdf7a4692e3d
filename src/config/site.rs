// src/config/site.rs
use super::consts::{BASE_URL, ID_PREFIX_LEN};

/// Where things live in the site's markup.
/// Defaults describe the classic listing layout; override for fixtures or layout changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteLayout {
    pub base_url: String,
    /// Container holding all result cards on a listing page.
    pub results: String,
    /// One card per job inside `results`.
    pub job_card: String,
    /// Card attribute carrying the prefixed job id.
    pub id_attr: String,
    pub id_prefix_len: usize,
    /// "Page 1 of 1,234 jobs"
    pub result_count: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Full description on the detail page.
    pub description: String,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            results: s!("#resultsCol"),
            job_card: s!(".jobsearch-SerpJobCard"),
            id_attr: s!("id"),
            id_prefix_len: ID_PREFIX_LEN,
            result_count: s!("#searchCountPages"),
            title: s!(".jobtitle"),
            company: s!(".company"),
            location: s!(".location"),
            description: s!("#jobDescriptionText"),
        }
    }
}

impl SiteLayout {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
