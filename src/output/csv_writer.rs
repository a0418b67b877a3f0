//! CSV output
//!
//! Writes a header row followed by one row per record. Rows end with `\n`
//! and quoting follows the `csv` crate's RFC 4180 rules.

use crate::output::traits::TabularRecord;
use crate::ScrapeError;
use std::path::Path;

/// What [`write_csv`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// There was nothing to write; no file was touched
    Skipped,

    /// The file was (re)written with this many data rows
    Written { rows: usize },
}

/// Writes records to a CSV file, overwriting any existing file
///
/// An empty slice is a silent no-op: the path is left untouched and
/// [`WriteOutcome::Skipped`] is returned.
///
/// # Arguments
///
/// * `records` - Records to write, in output order
/// * `path` - Destination file
///
/// # Returns
///
/// * `Ok(WriteOutcome)` - Whether anything was written
/// * `Err(ScrapeError)` - Failed to create or write the file
pub fn write_csv<R: TabularRecord>(records: &[R], path: &Path) -> Result<WriteOutcome, ScrapeError> {
    if records.is_empty() {
        tracing::debug!("No records for {}, skipping write", path.display());
        return Ok(WriteOutcome::Skipped);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;

    writer.write_record(R::HEADERS)?;
    for record in records {
        writer.write_record(record.row().iter().map(|field| field.as_bytes()))?;
    }
    writer.flush()?;

    tracing::info!("Saved {} rows to {}", records.len(), path.display());

    Ok(WriteOutcome::Written {
        rows: records.len(),
    })
}
