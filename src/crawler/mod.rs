//! Crawler module for page fetching and extraction
//!
//! This module contains the scraping logic:
//! - HTTP fetching with a post-success delay
//! - HTML parsing behind a small query trait
//! - Paginated quote crawling
//! - Generic CSS selector extraction

mod fetcher;
mod pagination;
mod parser;
mod selector;

pub use fetcher::{build_http_client, FetchError, Fetcher};
pub use pagination::{crawl_pages, crawl_quotes, extract_quotes, page_url, CrawlReport, StopReason};
pub use parser::{element_text, parse, parse_selector, HtmlDocument, NodeQuery};
pub use selector::{extract, select_records};
