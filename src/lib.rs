//! Quill-Scraper: a small, polite page scraper
//!
//! This crate fetches pages over HTTP, extracts records from HTML with
//! selector queries, and saves the results to CSV. Everything runs strictly
//! sequentially with a fixed delay between successful requests.

pub mod command;
pub mod config;
pub mod crawler;
pub mod model;
pub mod output;

use thiserror::Error;

/// Main error type for Quill-Scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] crawler::FetchError),

    #[error("No elements matched '{selector}' at {url}")]
    EmptyMatch { url: String, selector: String },

    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Quill-Scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use command::{Command, QuotesParams, SelectParams};
pub use config::Config;
pub use crawler::{crawl_quotes, extract, Fetcher};
pub use model::{ElementRecord, QuoteRecord};
pub use output::{write_csv, TabularRecord, WriteOutcome};
