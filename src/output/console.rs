//! Console rendering of extracted records

use crate::model::{ElementRecord, QuoteRecord};

const SEPARATOR_WIDTH: usize = 50;

/// Prints one quote as author, text, and tags lines followed by a separator
pub fn print_quote(record: &QuoteRecord) {
    println!("{}", format_quote(record));
}

/// Formats a quote the way [`print_quote`] prints it
pub fn format_quote(record: &QuoteRecord) -> String {
    format!(
        "Author: {}\nQuote: {}\nTags: {}\n{}",
        record.author,
        record.text,
        record.joined_tags(),
        "-".repeat(SEPARATOR_WIDTH)
    )
}

/// Prints a numbered preview of selector results
pub fn print_preview(records: &[ElementRecord], limit: usize, max_chars: usize) {
    for line in preview_lines(records, limit, max_chars) {
        println!("{}", line);
    }
}

/// Builds the preview: a count line, then up to `limit` numbered entries
///
/// Each entry shows at most `max_chars` characters of text followed by `...`.
/// An empty slice produces a single "nothing found" line.
pub fn preview_lines(records: &[ElementRecord], limit: usize, max_chars: usize) -> Vec<String> {
    if records.is_empty() {
        return vec!["No matching elements found".to_string()];
    }

    let mut lines = vec![format!("Found {} elements:", records.len())];
    lines.extend(
        records
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, record)| format!("{}. {}...", i + 1, truncate_chars(&record.text, max_chars))),
    );
    lines
}

/// Returns at most `max_chars` characters of `text`, never splitting a char
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
