// src/bin/cli.rs
use job_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = log::init() {
        eprintln!("Warning: logging disabled: {e}");
    }
    cli::run()
}
