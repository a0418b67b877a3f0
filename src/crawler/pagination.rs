//! Paginated quote crawler
//!
//! Walks `{base}/page/1/`, `{base}/page/2/`, ... one page at a time. The walk
//! ends on the first of:
//! - a failed fetch (records gathered so far are kept)
//! - a page with no quote blocks
//! - the page cap

use crate::crawler::fetcher::{FetchError, Fetcher};
use crate::crawler::parser::{element_text, parse, HtmlDocument, NodeQuery};
use crate::model::QuoteRecord;
use crate::output::print_quote;
use scraper::ElementRef;

const QUOTE_TAG: &str = "div";
const QUOTE_CLASS: &str = "quote";
const TEXT_TAG: &str = "span";
const TEXT_CLASS: &str = "text";
const AUTHOR_TAG: &str = "small";
const AUTHOR_CLASS: &str = "author";
const TAG_TAG: &str = "a";
const TAG_CLASS: &str = "tag";

/// Why a paginated crawl stopped
#[derive(Debug)]
pub enum StopReason {
    /// A page could not be fetched
    FetchFailed(FetchError),

    /// A page contained no quote blocks
    EmptyPage { page: u32 },

    /// The page cap was reached
    PageCap,
}

/// Outcome of a paginated crawl
#[derive(Debug)]
pub struct CrawlReport {
    /// Extracted records, in page order
    pub records: Vec<QuoteRecord>,

    /// Number of fetch attempts, successful or not
    pub pages_fetched: u32,

    /// What ended the crawl
    pub stop_reason: StopReason,
}

/// Builds the URL of a numbered listing page
pub fn page_url(base_url: &str, page: u32) -> String {
    format!("{}/page/{}/", base_url.trim_end_matches('/'), page)
}

/// Crawls up to `max_pages` listing pages and returns every quote found
///
/// Partial results are valid output: if page `k` fails, the records from
/// pages `1..k` are returned.
///
/// # Example
///
/// ```no_run
/// use quill_scraper::config::ClientConfig;
/// use quill_scraper::crawler::{crawl_quotes, Fetcher};
///
/// # async fn example() {
/// let fetcher = Fetcher::new(&ClientConfig::default()).unwrap();
/// let quotes = crawl_quotes(&fetcher, "http://quotes.toscrape.com", 3).await;
/// println!("Collected {} quotes", quotes.len());
/// # }
/// ```
pub async fn crawl_quotes(fetcher: &Fetcher, base_url: &str, max_pages: u32) -> Vec<QuoteRecord> {
    crawl_pages(fetcher, base_url, max_pages).await.records
}

/// Crawls listing pages and reports how the crawl ended
pub async fn crawl_pages(fetcher: &Fetcher, base_url: &str, max_pages: u32) -> CrawlReport {
    let mut records = Vec::new();
    let mut pages_fetched = 0;
    let mut page = 1;

    let stop_reason = loop {
        if page > max_pages {
            break StopReason::PageCap;
        }

        let url = page_url(base_url, page);
        pages_fetched += 1;

        let body = match fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Request failed: {}", e);
                break StopReason::FetchFailed(e);
            }
        };

        let Some(page_records) = scan_page(Some(&body)) else {
            println!("No more content");
            tracing::info!("Page {} has no quote blocks, stopping", page);
            break StopReason::EmptyPage { page };
        };

        tracing::debug!("Page {} yielded {} quotes", page, page_records.len());
        for record in &page_records {
            print_quote(record);
        }
        records.extend(page_records);

        page += 1;
    };

    tracing::info!(
        "Crawl finished after {} page(s) with {} quotes",
        pages_fetched,
        records.len()
    );

    CrawlReport {
        records,
        pages_fetched,
        stop_reason,
    }
}

/// Parses one listing page; `None` means no content or no quote blocks at all
fn scan_page(body: Option<&str>) -> Option<Vec<QuoteRecord>> {
    let document = parse(body)?;
    let blocks = document.find_all(QUOTE_TAG, QUOTE_CLASS);
    if blocks.is_empty() {
        return None;
    }
    Some(quotes_from_blocks(&blocks))
}

/// Extracts every well-formed quote block from a listing page
pub fn extract_quotes(document: &HtmlDocument) -> Vec<QuoteRecord> {
    quotes_from_blocks(&document.find_all(QUOTE_TAG, QUOTE_CLASS))
}

/// Blocks missing a text or author element are skipped with a warning
fn quotes_from_blocks(blocks: &[ElementRef<'_>]) -> Vec<QuoteRecord> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| {
            let record = extract_quote(block);
            if record.is_none() {
                tracing::warn!("Skipping malformed quote block #{}", index + 1);
            }
            record
        })
        .collect()
}

fn extract_quote(block: &ElementRef<'_>) -> Option<QuoteRecord> {
    let text = element_text(&block.find_first(TEXT_TAG, TEXT_CLASS)?);
    let author = element_text(&block.find_first(AUTHOR_TAG, AUTHOR_CLASS)?);
    let tags = block
        .find_all(TAG_TAG, TAG_CLASS)
        .iter()
        .map(element_text)
        .collect();

    Some(QuoteRecord::new(text, author, tags))
}
