//! Command-line interface for blast2seqids.
//!
//! ## Usage
//!
//! ```text
//! # All hits of a report, as USA lines on stdout
//! blast2seqids report.txt
//!
//! # Hits 10 to 15, written to a file
//! blast2seqids report.txt --from 10 --to 15 -o ids.usa
//!
//! # Pipe from blastall, gzipped reports are detected automatically
//! blastall -p blastp -d swissprot -i query.fa | blast2seqids -
//!
//! # JSON output (entries and unparsable lines) for scripting
//! blast2seqids report.txt --format json
//! ```

use clap::Parser;

use crate::format::OutputFormat;

pub mod extract;

#[derive(Parser)]
#[command(name = "blast2seqids")]
#[command(version)]
#[command(about = "Extract sequence identifiers from a BLAST report as USA addresses")]
#[command(
    long_about = "blast2seqids reads the summary table of a BLAST report and prints one 'database:accession' line (Uniform Sequence Address) per hit.\n\nLines of the table that cannot be parsed are reported as warnings and skipped; the remaining hits are still written."
)]
pub struct Cli {
    #[command(flatten)]
    pub extract: extract::ExtractArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "usa")]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["blast2seqids", "report.txt"]).unwrap();
        assert_eq!(cli.extract.from, 1);
        assert_eq!(cli.extract.to, None);
        assert!(cli.extract.output.is_none());
        assert_eq!(cli.format, OutputFormat::Usa);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_range_and_format() {
        let cli = Cli::try_parse_from([
            "blast2seqids",
            "-",
            "--from",
            "10",
            "--to",
            "15",
            "-f",
            "json",
            "-o",
            "ids.json",
        ])
        .unwrap();
        assert_eq!(cli.extract.input.as_os_str(), "-");
        assert_eq!(cli.extract.from, 10);
        assert_eq!(cli.extract.to, Some(15));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["blast2seqids"]).is_err());
    }
}
