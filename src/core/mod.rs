//! Core data types for sequence identifier extraction.
//!
//! - [`Entry`]: a `(database, accession)` pair taken from one report hit
//! - [`HitRange`]: the inclusive, 1-based range of hit ranks to extract
//! - [`SummaryReport`]: accepted entries plus per-line diagnostics
//!
//! ## Hit ranks
//!
//! Every non-blank line of the summary table gets a rank, whether or not it
//! parses. Ranks are only used to select a range and are not stored on the
//! entry.
//!
//! [`Entry`]: entry::Entry
//! [`HitRange`]: types::HitRange
//! [`SummaryReport`]: types::SummaryReport

pub mod entry;
pub mod types;
