//! # blast2seqids
//!
//! A library for extracting sequence identifiers from BLAST reports.
//!
//! A BLAST report lists its hits in a summary table before the alignments.
//! Each line of that table names a database entry, either pipe-delimited
//! (`sp|Q61285|ABCD2_MOUSE ...`) or in the PDB seqres layout
//! (`4f4c_A mol:protein ...`). `blast2seqids` turns these lines into
//! `database:accession` addresses (USA, Uniform Sequence Address) that
//! sequence retrieval tools accept directly.
//!
//! ## Features
//!
//! - **Hit ranges**: extract only hits `from..=to` of the table
//! - **Error tolerance**: unparsable lines are reported and skipped
//! - **Duplicate-preserving**: one address per hit, multi-chain structures included
//! - **Gzip input**: compressed reports are detected and decompressed
//!
//! ## Example
//!
//! ```rust
//! use blast2seqids::format::usa::format_usa;
//! use blast2seqids::parsing::summary::parse_summary_text;
//! use blast2seqids::HitRange;
//!
//! let report_text = "Sequences producing significant alignments:     (bits) Value\n\
//!                    \n\
//!                    sp|Q61285|ABCD2_MOUSE RecName: Full=ATP-binding cassette  1508   0.0\n\
//!                    sp|Q9QY44|ABCD2_RAT RecName: Full=ATP-binding cassette    1502   0.0\n\
//!                    \n";
//!
//! let report = parse_summary_text(report_text, HitRange::all()).unwrap();
//! assert!(report.errors.is_empty());
//! assert_eq!(format_usa(&report.entries), "sp:Q61285\nsp:Q9QY44\n");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Entry, hit range and report types
//! - [`parsing`]: Report locator, summary parser and hit line tokenizer
//! - [`format`]: USA, JSON and TSV output
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod format;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::entry::Entry;
pub use core::types::*;
pub use format::usa::{format_usa, write_usa};
pub use parsing::summary::{parse_summary, parse_summary_file, ParseError};
