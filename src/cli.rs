//! Command-line surface.

use crate::catalog::Category;
use crate::fetch::{CurlClient, ImageDownloader, PageFetcher};
use crate::scraper::{ScrapeRequest, Scraper};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Bulk image scraper for the Getty museum catalog.
#[derive(Debug, Parser)]
#[command(name = "getty-scraper")]
#[command(about = "Scrape full-resolution images from the Getty catalog by category", long_about = None)]
pub struct Cli {
    /// Type of images to scrape; must be one of the fixed Getty category
    /// labels (e.g. "Paintings", "Drawings", "Manuscripts"). Run with an
    /// unknown value to see the full list.
    pub category: String,

    /// Maximum number of images to scrape (default: all of them).
    #[arg(short = 'l', long, value_name = "L")]
    pub limit: Option<usize>,

    /// Directory in which to store images (default: a fresh temp directory).
    #[arg(short = 'o', long, value_name = "O")]
    pub output: Option<PathBuf>,

    /// Results page at which to start scraping.
    #[arg(
        short = 'p',
        long,
        value_name = "P",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,

    /// Number of results to fetch per query.
    #[arg(
        long,
        value_name = "B",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub batchsize: u32,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().execute(CurlClient::new())
    }

    /// Validates the category and runs the scrape against `client`.
    /// Generic over the fetch capabilities so tests can inject fakes.
    pub fn execute<C: PageFetcher + ImageDownloader>(self, client: C) -> Result<()> {
        // Category validation happens before any network activity.
        let category = Category::parse(&self.category)?;
        let request = ScrapeRequest {
            category,
            batch_size: self.batchsize,
            start_page: self.page,
        };

        let files = Scraper::new(client).scrape(request, self.limit, self.output.as_deref())?;
        tracing::info!(count = files.len(), "scrape complete");
        Ok(())
    }
}
