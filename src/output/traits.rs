//! Tabular record trait
//!
//! Every record type that can be written to CSV declares its header at
//! compile time, so all rows in one file share the same columns.

use crate::model::{ElementRecord, QuoteRecord};
use std::borrow::Cow;

/// A record with a fixed, ordered set of named fields
pub trait TabularRecord {
    /// Column names, in output order
    const HEADERS: &'static [&'static str];

    /// Field values, in the same order as [`Self::HEADERS`]
    fn row(&self) -> Vec<Cow<'_, str>>;
}

impl TabularRecord for QuoteRecord {
    const HEADERS: &'static [&'static str] = &["text", "author", "tags"];

    fn row(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.text.as_str()),
            Cow::Borrowed(self.author.as_str()),
            Cow::Owned(self.joined_tags()),
        ]
    }
}

impl TabularRecord for ElementRecord {
    const HEADERS: &'static [&'static str] = &["text", "html"];

    fn row(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.text.as_str()),
            Cow::Borrowed(self.html.as_str()),
        ]
    }
}
