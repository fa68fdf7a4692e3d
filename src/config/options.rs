// src/config/options.rs
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::tokenize::TokenCounts;
use super::site::SiteLayout;

/// The site's `jt=` filter values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobType {
    Internship,
    FullTime,
    PartTime,
    Temporary,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::Internship,
        JobType::FullTime,
        JobType::PartTime,
        JobType::Temporary,
        JobType::Contract,
    ];

    /// Value as the site expects it in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Internship => "internship",
            JobType::FullTime   => "fulltime",
            JobType::PartTime   => "parttime",
            JobType::Temporary  => "temporary",
            JobType::Contract   => "contract",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = s.trim().to_ascii_lowercase();
        JobType::ALL
            .into_iter()
            .find(|jt| jt.as_str() == want)
            .ok_or_else(|| ConfigError::JobType(s.to_string()))
    }
}

/// Search radius in miles. Only the site's fixed steps are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Radius(u32);

impl Radius {
    pub const ALLOWED: [u32; 6] = [5, 10, 15, 25, 50, 100];

    pub fn miles(&self) -> u32 { self.0 }
}

impl TryFrom<u32> for Radius {
    type Error = ConfigError;

    fn try_from(miles: u32) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&miles) {
            Ok(Radius(miles))
        } else {
            Err(ConfigError::Radius(miles.to_string()))
        }
    }
}

impl FromStr for Radius {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let miles: u32 = s.trim().parse().map_err(|_| ConfigError::Radius(s.to_string()))?;
        Radius::try_from(miles)
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Job-level exclusion list. Terms are stored lower-cased.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blacklist {
    terms: HashSet<String>,
}

impl Blacklist {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(&token.to_lowercase())
    }

    /// First blacklisted token of a description, if any. One hit voids the whole job.
    pub fn voids<'a>(&self, counts: &'a TokenCounts) -> Option<&'a str> {
        if self.terms.is_empty() {
            return None;
        }
        counts.tokens().find(|t| self.contains(t))
    }
}

/// Everything a crawl needs to know up front.
#[derive(Clone, Debug)]
pub struct SearchOptions {
    pub positions: Vec<String>,
    pub locations: Vec<String>,
    pub job_type: Option<JobType>,
    pub radius: Option<Radius>,
    pub blacklist: Blacklist,
    pub site: SiteLayout,
}

impl SearchOptions {
    pub fn new<P, L>(positions: P, locations: L) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            positions: positions.into_iter().map(Into::into).collect(),
            locations: locations.into_iter().map(Into::into).collect(),
            job_type: None,
            radius: None,
            blacklist: Blacklist::default(),
            site: SiteLayout::default(),
        }
    }

    pub fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = Some(job_type);
        self
    }

    pub fn with_radius(mut self, radius: Radius) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_blacklist(mut self, blacklist: Blacklist) -> Self {
        self.blacklist = blacklist;
        self
    }

    pub fn with_site(mut self, site: SiteLayout) -> Self {
        self.site = site;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}
