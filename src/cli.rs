// src/cli.rs
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use crate::config::consts::REQUEST_TIMEOUT_SECS;
use crate::config::options::{Blacklist, ExportFormat, JobType, Radius, SearchOptions};
use crate::config::site::SiteLayout;
use crate::core::{HtmlParser, HttpFetcher};
use crate::crawl::JobSearch;
use crate::progress::Progress;

/// Most frequent words across job postings for every position × location search.
#[derive(Debug, Parser)]
#[command(name = "job_scrape", version, about)]
pub struct Cli {
    /// Job title to search for (repeatable)
    #[arg(short = 'p', long = "position", required = true)]
    pub positions: Vec<String>,

    /// Location to search in, e.g. "San Jose, CA" (repeatable)
    #[arg(short = 'l', long = "location", required = true)]
    pub locations: Vec<String>,

    /// internship | fulltime | parttime | temporary | contract
    #[arg(long)]
    pub job_type: Option<JobType>,

    /// Search radius in miles: 5, 10, 15, 25, 50 or 100
    #[arg(long)]
    pub radius: Option<Radius>,

    /// Skip any job whose description contains this word (repeatable)
    #[arg(short = 'b', long = "blacklist")]
    pub blacklist: Vec<String>,

    /// Leave this word out of the top list (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// How many words to print; 0 prints all
    #[arg(short = 'n', long = "top", default_value_t = 0)]
    pub top: usize,

    /// Print the count of a single word (repeatable)
    #[arg(short = 'w', long = "word")]
    pub words: Vec<String>,

    /// Export the full table to a file (or directory ending in '/')
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,

    /// Export format: csv | tsv
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Override the site root
    #[arg(long)]
    pub base_url: Option<String>,

    /// No progress lines on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    pub fn search_options(&self) -> SearchOptions {
        let mut site = SiteLayout::default();
        if let Some(base) = &self.base_url {
            site = site.with_base_url(base.as_str());
        }

        let mut opts = SearchOptions::new(self.positions.iter().cloned(), self.locations.iter().cloned())
            .with_blacklist(Blacklist::new(&self.blacklist))
            .with_site(site);
        if let Some(jt) = self.job_type {
            opts = opts.with_job_type(jt);
        }
        if let Some(r) = self.radius {
            opts = opts.with_radius(r);
        }
        opts
    }

    pub fn excluded(&self) -> HashSet<String> {
        self.exclude.iter().cloned().collect()
    }
}

/// Progress lines on stderr.
struct StderrProgress {
    total: usize,
    jobs: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Running {total} searches...");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, _job_id: &str) {
        self.jobs += 1;
    }
    fn finish(&mut self) {
        eprintln!("Done: {} searches, {} unique jobs", self.total, self.jobs);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_with(cli)
}

pub fn run_with(cli: Cli) -> Result<()> {
    let fetcher = HttpFetcher::with_timeout(Duration::from_secs(cli.timeout))?;
    let search = JobSearch::new(cli.search_options(), fetcher, HtmlParser);

    let mut progress = StderrProgress { total: 0, jobs: 0 };
    let report = if cli.quiet {
        search.run(None)?
    } else {
        search.run(Some(&mut progress))?
    };

    for (word, count) in report.top_frequencies(cli.top, &cli.excluded()) {
        println!("{word}\t{count}");
    }
    for word in &cli.words {
        println!("{}\t{}", word, report.frequency_of(word));
    }

    if let Some(out) = &cli.out {
        let rows = report.top_frequencies(0, &HashSet::new());
        let path = crate::file::export_frequencies(out, cli.format, &rows, true)
            .map_err(|e| eyre!("could not export to {}: {e}", out.display()))?;
        eprintln!("Wrote {}", path.display());
    }

    eprintln!("{}", report.stats());
    Ok(())
}
