//! Generic selector extraction
//!
//! Fetches a single page and returns every element matching a CSS selector.

use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::{element_text, parse, HtmlDocument, NodeQuery};
use crate::model::ElementRecord;
use crate::ScrapeError;

/// Fetches `url` once and extracts all elements matching `selector`
///
/// Failure is reported uniformly as an empty result: an unreachable page, an
/// invalid selector, and a selector with no matches all yield `vec![]`. The
/// cause is logged.
pub async fn extract(fetcher: &Fetcher, url: &str, selector: &str) -> Vec<ElementRecord> {
    let body = match fetcher.fetch(url).await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!("Request failed: {}", e);
            None
        }
    };

    let Some(document) = parse(body.as_deref()) else {
        return Vec::new();
    };

    match select_records(&document, selector) {
        Ok(records) => {
            if records.is_empty() {
                tracing::info!(
                    "{}",
                    ScrapeError::EmptyMatch {
                        url: url.to_string(),
                        selector: selector.to_string(),
                    }
                );
            }
            records
        }
        Err(e) => {
            tracing::warn!("{}", e);
            Vec::new()
        }
    }
}

/// Runs `selector` against a parsed page, in document order
pub fn select_records(
    document: &HtmlDocument,
    selector: &str,
) -> Result<Vec<ElementRecord>, ScrapeError> {
    let records = document
        .select_all(selector)?
        .iter()
        .map(|element| ElementRecord::new(element_text(element).trim(), element.html()))
        .collect();
    Ok(records)
}
