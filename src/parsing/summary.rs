//! Parser for the summary table of a BLAST report.
//!
//! The table is read from the line after the summary marker (see
//! [`locator`](crate::parsing::locator)) until a blank line, the first
//! alignment (`>`), or the end of input. Every non-blank line in between is a
//! candidate hit and gets a 1-based rank.
//!
//! Candidates outside the requested [`HitRange`] are skipped without being
//! parsed. Candidates inside it either become an
//! [`Entry`](crate::core::entry::Entry) or an error
//! message; a bad line never stops the parse.

use std::io::{self, BufRead};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::types::{HitRange, SummaryReport};
use crate::parsing::hit::{hit_error_message, parse_hit_line};
use crate::parsing::input::{open_report, report_lines};
use crate::parsing::locator::locate_summary;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open report '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Check whether a line closes the summary table
#[must_use]
pub fn is_table_end(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('>')
}

/// Parse the summary table from the lines of a report
///
/// # Errors
///
/// Returns `ParseError::Io` if reading a line fails. Unparsable hit lines are
/// reported in [`SummaryReport::errors`], not as an error.
pub fn parse_summary<I>(lines: I, range: HitRange) -> Result<SummaryReport, ParseError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut report = SummaryReport::default();
    let mut rank = 0usize;

    for line in locate_summary(lines) {
        let line = line?;

        if is_table_end(&line) {
            break;
        }

        rank += 1;
        if range.is_past(rank) {
            debug!(rank, %range, "Reached end of requested range");
            break;
        }
        if !range.contains(rank) {
            continue;
        }

        if let Some(entry) = parse_hit_line(&line) {
            report.entries.push(entry);
        } else {
            let message = hit_error_message(&line);
            debug!(rank, "{message}");
            report.errors.push(message);
        }
    }

    debug!(
        candidates = rank,
        entries = report.entries.len(),
        errors = report.errors.len(),
        "Parsed summary table"
    );

    Ok(report)
}

/// Parse the summary table from a buffered reader
///
/// # Errors
///
/// Returns `ParseError::Io` if the reader fails.
pub fn parse_summary_reader<R: BufRead>(
    reader: R,
    range: HitRange,
) -> Result<SummaryReport, ParseError> {
    parse_summary(report_lines(reader), range)
}

/// Parse the summary table from report text
///
/// # Errors
///
/// Never fails for in-memory text; the `Result` mirrors the other entry points.
pub fn parse_summary_text(text: &str, range: HitRange) -> Result<SummaryReport, ParseError> {
    parse_summary(text.lines().map(|line| Ok(line.to_string())), range)
}

/// Parse the summary table of a report file (plain or gzipped)
///
/// # Errors
///
/// Returns `ParseError::Open` if the file cannot be opened, or
/// `ParseError::Io` if reading it fails.
pub fn parse_summary_file(path: &Path, range: HitRange) -> Result<SummaryReport, ParseError> {
    let reader = open_report(path)?;
    debug!(path = %path.display(), %range, "Parsing report");
    parse_summary_reader(reader, range)
}
