//! Output formats for extracted identifiers.
//!
//! - **usa**: `database:accession` lines, the input format of sequence retrieval tools
//! - **json**: entries and per-line errors as one JSON document
//! - **tsv**: a `database`/`accession` table with a header row

use std::io::{self, Write};

use crate::core::types::SummaryReport;

pub mod usa;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Usa,
    Json,
    Tsv,
}

/// Write the entries of `report` in the requested format
///
/// Errors are only part of the JSON output; other formats leave reporting
/// them to the caller.
///
/// # Errors
///
/// Returns any error raised by `writer` or by JSON serialization.
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &SummaryReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Usa => usa::write_usa(writer, &report.entries),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)
        }
        OutputFormat::Tsv => {
            writeln!(writer, "database\taccession")?;
            for entry in &report.entries {
                writeln!(writer, "{}\t{}", entry.database, entry.accession)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::Entry;

    fn sample_report() -> SummaryReport {
        SummaryReport {
            entries: vec![Entry::new("sp", "P33311"), Entry::new("pdb", "4f4c")],
            errors: vec!["ERROR cannot parse hit junk : skip this Hit".to_string()],
        }
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_report_usa() {
        assert_eq!(render(OutputFormat::Usa), "sp:P33311\npdb:4f4c\n");
    }

    #[test]
    fn test_write_report_tsv() {
        assert_eq!(
            render(OutputFormat::Tsv),
            "database\taccession\nsp\tP33311\npdb\t4f4c\n"
        );
    }

    #[test]
    fn test_write_report_json() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value["entries"][0]["database"], "sp");
        assert_eq!(value["entries"][1]["accession"], "4f4c");
        assert_eq!(value["errors"].as_array().unwrap().len(), 1);

        let parsed: SummaryReport = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, sample_report());
    }
}
