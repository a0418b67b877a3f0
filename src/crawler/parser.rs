//! HTML parser adapter
//!
//! Wraps `scraper` behind a narrow query interface. Callers only need three
//! capabilities:
//! - find the first element with a given tag and class
//! - find all elements with a given tag and class
//! - select all elements matching a CSS selector
//!
//! Parsing is lenient: html5ever recovers from malformed markup instead of
//! failing, so [`parse`] never returns an error.

use crate::ScrapeError;
use scraper::{CaseSensitivity, ElementRef, Html, Selector};

/// A parsed HTML document
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// The underlying `scraper` document
    pub fn html(&self) -> &Html {
        &self.html
    }
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("errors", &self.html.errors.len())
            .finish()
    }
}

/// Parses HTML text, passing "no content" straight through
///
/// # Example
///
/// ```
/// use quill_scraper::crawler::{parse, NodeQuery};
///
/// assert!(parse(None).is_none());
///
/// let doc = parse(Some(r#"<div class="quote">Hi</div>"#)).unwrap();
/// assert_eq!(doc.find_all("div", "quote").len(), 1);
/// ```
pub fn parse(html: Option<&str>) -> Option<HtmlDocument> {
    html.map(HtmlDocument::parse)
}

/// Parses a CSS selector, mapping failures to [`ScrapeError::InvalidSelector`]
pub fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Concatenates every descendant text node of an element, untrimmed
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

/// Query capabilities shared by documents and elements
///
/// When implemented for an element, lookups are scoped to its descendants.
pub trait NodeQuery {
    /// All elements in scope, in document order
    fn elements(&self) -> Vec<ElementRef<'_>>;

    /// All elements in scope matching a CSS selector, in document order
    fn select_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, ScrapeError>;

    /// All elements with the given tag name carrying the given class
    fn find_all(&self, tag: &str, class: &str) -> Vec<ElementRef<'_>> {
        self.elements()
            .into_iter()
            .filter(|el| matches_tag_and_class(el, tag, class))
            .collect()
    }

    /// The first element with the given tag name carrying the given class
    fn find_first(&self, tag: &str, class: &str) -> Option<ElementRef<'_>> {
        self.elements()
            .into_iter()
            .find(|el| matches_tag_and_class(el, tag, class))
    }
}

impl NodeQuery for HtmlDocument {
    fn elements(&self) -> Vec<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect::<Vec<_>>()
    }

    fn select_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).collect::<Vec<_>>())
    }
}

impl NodeQuery for ElementRef<'_> {
    fn elements(&self) -> Vec<ElementRef<'_>> {
        // descendants() yields the element itself first
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .collect::<Vec<_>>()
    }

    fn select_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
        let selector = parse_selector(selector)?;
        Ok(self.select(&selector).collect::<Vec<_>>())
    }
}

fn matches_tag_and_class(element: &ElementRef<'_>, tag: &str, class: &str) -> bool {
    let value = element.value();
    value.name().eq_ignore_ascii_case(tag) && value.has_class(class, CaseSensitivity::CaseSensitive)
}
