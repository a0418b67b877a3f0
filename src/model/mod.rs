//! Extracted record types
//!
//! Each extraction mode produces exactly one record type, so every record in
//! a batch shares the same field set.

mod element;
mod quote;

pub use element::ElementRecord;
pub use quote::{QuoteRecord, TAG_SEPARATOR};
