//! Quill-Scraper main entry point
//!
//! Without a subcommand the scraper runs interactively: it shows a menu and
//! prompts for parameters. The `quotes` and `select` subcommands run the same
//! operations non-interactively.

use anyhow::Context;
use clap::{Parser, Subcommand};
use quill_scraper::command::{execute, prompt_command, Command, QuotesParams, SelectParams};
use quill_scraper::config::{load_config_or_default, validate, Config};
use quill_scraper::crawler::Fetcher;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quill-Scraper: a small, polite page scraper
///
/// Fetches pages one at a time with a fixed delay, extracts records with
/// CSS selectors, and saves them to CSV.
#[derive(Parser, Debug)]
#[command(name = "quill-scraper")]
#[command(version = "1.0.0")]
#[command(about = "A small, polite page scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Crawl the paginated quotes site and save the quotes to CSV
    Quotes {
        /// Site root to crawl
        #[arg(long)]
        base_url: Option<String>,

        /// Maximum number of pages to request
        #[arg(long)]
        max_pages: Option<u32>,

        /// CSV file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract every element matching a CSS selector from one page
    Select {
        /// Page to fetch
        url: String,

        /// CSS selector, e.g. "h1", ".title", "#content"
        selector: String,

        /// Number of results to preview
        #[arg(long)]
        limit: Option<usize>,

        /// Also save the matched elements to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Every failure is reported here; the process always exits 0
    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        println!("Error: {}", e);
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quill_scraper=info,warn"),
            1 => EnvFilter::new("quill_scraper=debug,info"),
            2 => EnvFilter::new("quill_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Resolves the command, then builds the client and executes it
async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let command = match cli.mode {
        Some(mode) => resolve_mode(mode, &mut config)?,
        None => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout();
            match prompt_command(&mut input, &mut output, &config)? {
                Some(command) => command,
                None => return Ok(()),
            }
        }
    };

    let fetcher = Fetcher::new(&config.client).context("Failed to build HTTP client")?;
    execute(command, &fetcher, &config.preview).await?;

    Ok(())
}

/// Turns subcommand flags into a validated command, applying overrides
///
/// Overridden values go through the same validation as the config file.
fn resolve_mode(mode: Mode, config: &mut Config) -> anyhow::Result<Command> {
    let command = match mode {
        Mode::Quotes {
            base_url,
            max_pages,
            output,
        } => {
            if let Some(base_url) = base_url {
                config.quotes.base_url = base_url;
            }
            if let Some(max_pages) = max_pages {
                config.quotes.max_pages = max_pages;
            }
            if let Some(output) = output {
                config.quotes.output_path = output.to_string_lossy().into_owned();
            }
            validate(config).context("Invalid command-line option")?;
            Command::Quotes(QuotesParams::from_config(&config.quotes)?)
        }
        Mode::Select {
            url,
            selector,
            limit,
            output,
        } => {
            if let Some(limit) = limit {
                config.preview.limit = limit;
            }
            validate(config).context("Invalid command-line option")?;
            let params = SelectParams::new(&url, &selector)?;
            Command::Select(match output {
                Some(path) => params.with_output(path),
                None => params,
            })
        }
    };

    Ok(command)
}
