//! Output module for extracted records
//!
//! This module handles:
//! - Writing fixed-schema records to CSV files
//! - Printing records and result previews to the console

mod console;
mod csv_writer;
mod traits;

pub use console::{format_quote, preview_lines, print_preview, print_quote, truncate_chars};
pub use csv_writer::{write_csv, WriteOutcome};
pub use traits::TabularRecord;
