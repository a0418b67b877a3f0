//! Command model for the entry point
//!
//! A run performs exactly one [`Command`]. Each variant carries parameters
//! that were validated when the command was built, so nothing touches the
//! network until the input is known to be usable.

mod prompt;

pub use prompt::{prompt_command, MenuChoice};

use crate::config::{parse_http_url, PreviewConfig, QuotesConfig};
use crate::crawler::{crawl_quotes, extract, parse_selector, Fetcher};
use crate::output::{print_preview, write_csv, WriteOutcome};
use crate::ScrapeError;
use std::path::{Path, PathBuf};

/// A fully validated unit of work
#[derive(Debug, Clone)]
pub enum Command {
    /// Crawl the paginated quote listing and save it to CSV
    Quotes(QuotesParams),

    /// Extract elements matching a selector from a single page
    Select(SelectParams),
}

/// Parameters for [`Command::Quotes`]
#[derive(Debug, Clone)]
pub struct QuotesParams {
    base_url: String,
    max_pages: u32,
    output_path: PathBuf,
}

impl QuotesParams {
    /// Validates and builds quote crawl parameters
    pub fn new(
        base_url: &str,
        max_pages: u32,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, ScrapeError> {
        Ok(Self {
            base_url: validate_http_url(base_url)?,
            max_pages,
            output_path: output_path.into(),
        })
    }

    /// Builds parameters from the `[quotes]` config section
    pub fn from_config(config: &QuotesConfig) -> Result<Self, ScrapeError> {
        Self::new(&config.base_url, config.max_pages, &config.output_path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Parameters for [`Command::Select`]
#[derive(Debug, Clone)]
pub struct SelectParams {
    url: String,
    selector: String,
    output_path: Option<PathBuf>,
}

impl SelectParams {
    /// Validates the URL and CSS selector
    ///
    /// Surrounding whitespace is ignored in both.
    pub fn new(url: &str, selector: &str) -> Result<Self, ScrapeError> {
        let url = validate_http_url(url)?;
        let selector = selector.trim();
        parse_selector(selector)?;

        Ok(Self {
            url,
            selector: selector.to_string(),
            output_path: None,
        })
    }

    /// Also save the matched elements to this CSV file
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }
}

/// Trims a URL and checks it with [`parse_http_url`]
fn validate_http_url(raw: &str) -> Result<String, ScrapeError> {
    let raw = raw.trim();
    parse_http_url(raw).map_err(|message| ScrapeError::InvalidUrl {
        url: raw.to_string(),
        message,
    })?;

    Ok(raw.to_string())
}

/// Runs a command to completion, printing progress and results
///
/// Fetch failures and empty results are reported, not returned. Only
/// failures to write an output file come back as errors.
pub async fn execute(
    command: Command,
    fetcher: &Fetcher,
    preview: &PreviewConfig,
) -> Result<(), ScrapeError> {
    match command {
        Command::Quotes(params) => {
            println!("\nStarting quote crawl of {}...", params.base_url());
            let quotes = crawl_quotes(fetcher, params.base_url(), params.max_pages()).await;
            report_write(write_csv(&quotes, params.output_path())?, params.output_path());
        }
        Command::Select(params) => {
            println!("\nScraping {}...", params.url());
            let records = extract(fetcher, params.url(), params.selector()).await;
            println!();
            print_preview(&records, preview.limit, preview.max_chars);

            if let Some(path) = params.output_path() {
                report_write(write_csv(&records, path)?, path);
            }
        }
    }

    Ok(())
}

fn report_write(outcome: WriteOutcome, path: &Path) {
    match outcome {
        WriteOutcome::Written { rows } => {
            println!("Saved {} rows to {}", rows, path.display())
        }
        WriteOutcome::Skipped => println!("No data to save"),
    }
}
