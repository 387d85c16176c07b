//! USA (Uniform Sequence Address) output.
//!
//! One `database:accession` record per line, in input order. Duplicates are
//! kept, so multi-chain structure hits appear once per chain.

use std::io::{self, Write};

use crate::core::entry::Entry;

/// Format entries as USA text
#[must_use]
pub fn format_usa(entries: &[Entry]) -> String {
    entries.iter().map(|entry| format!("{entry}\n")).collect()
}

/// Write entries as USA text
///
/// # Errors
///
/// Returns any error raised by `writer`.
pub fn write_usa<W: Write>(writer: &mut W, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    Ok(())
}
