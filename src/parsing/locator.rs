//! Locates the summary table inside a BLAST report.
//!
//! Both legacy BLAST 2.x and BLAST+ text reports introduce the per-hit
//! summary with a header like:
//!
//! ```text
//!                                                                  Score    E
//! Sequences producing significant alignments:                      (bits) Value
//!
//! sp|Q61285|ABCD2_MOUSE RecName: Full=ATP-binding cassette sub-fam...  1508   0.0
//! ```
//!
//! Everything up to and including the marker line is dropped, as are the
//! blank separator lines right after it, so the first line yielded is the
//! first hit.

use std::io;

/// Start of the line introducing the summary table
pub const SUMMARY_MARKER: &str = "Sequences producing significant alignments";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocatorState {
    BeforeTable,
    InTable,
    Done,
}

/// Lazy iterator over the lines of a report, starting at the first summary hit
///
/// Forward-only: to read the table again, reopen the underlying source.
#[derive(Debug)]
pub struct SummaryLines<I> {
    lines: I,
    state: LocatorState,
}

/// Wrap a line iterator so that it yields the report from the first summary hit on
///
/// A report without a summary marker yields nothing.
pub fn locate_summary<I>(lines: I) -> SummaryLines<I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    SummaryLines {
        lines: lines.into_iter(),
        state: LocatorState::BeforeTable,
    }
}

/// Check whether a line is the summary table header
#[must_use]
pub fn is_summary_marker(line: &str) -> bool {
    line.trim_start().starts_with(SUMMARY_MARKER)
}

impl<I> SummaryLines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    /// Consume the report header and return the first line of the table
    fn seek_table(&mut self) -> Option<io::Result<String>> {
        // Stays Done unless a table line is found
        self.state = LocatorState::Done;

        loop {
            match self.lines.next()? {
                Ok(line) if is_summary_marker(&line) => break,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
        }

        loop {
            match self.lines.next()? {
                Ok(line) if line.trim().is_empty() => {}
                first => {
                    self.state = LocatorState::InTable;
                    return Some(first);
                }
            }
        }
    }
}

impl<I> Iterator for SummaryLines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            LocatorState::BeforeTable => self.seek_table(),
            LocatorState::InTable => self.lines.next(),
            LocatorState::Done => None,
        }
    }
}
