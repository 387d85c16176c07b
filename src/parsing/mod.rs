//! Parsers for extracting sequence identifiers from BLAST reports.
//!
//! Parsing happens in one forward pass:
//!
//! - **locator**: drops the report header up to the summary table marker
//! - **summary**: walks the table, applies the hit range and collects
//!   entries and per-line errors
//! - **hit**: tokenizes a single summary line
//! - **input**: opens plain or gzipped reports and splits them into lines
//!
//! ## Example
//!
//! ```rust,no_run
//! use blast2seqids::core::types::HitRange;
//! use blast2seqids::parsing::summary::parse_summary_file;
//! use std::path::Path;
//!
//! // Hits 10 to 15 of a report
//! let range = HitRange::new(10, Some(15)).unwrap();
//! let report = parse_summary_file(Path::new("blast.txt"), range).unwrap();
//!
//! for entry in &report.entries {
//!     println!("{entry}");
//! }
//! for error in &report.errors {
//!     eprintln!("{error}");
//! }
//! ```
//!
//! ## Supported hit lines
//!
//! | Layout | Example |
//! |--------|---------|
//! | Generic | `sp\|Q61285\|ABCD2_MOUSE RecName: ...  1508   0.0` |
//! | Structure | `4f4c_A mol:protein length:1284  MULTIDRUG ...  1000   0.0` |

pub mod hit;
pub mod input;
pub mod locator;
pub mod summary;
