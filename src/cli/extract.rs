use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::{info, warn};

use crate::core::types::{HitRange, SummaryReport};
use crate::format::{write_report, OutputFormat};
use crate::parsing::input::decompress_if_gzipped;
use crate::parsing::summary::{parse_summary_file, parse_summary_reader};

#[derive(Args)]
pub struct ExtractArgs {
    /// BLAST report (plain text or gzipped)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Rank of the first hit to extract (1-based)
    #[arg(long, default_value = "1")]
    pub from: usize,

    /// Rank of the last hit to extract (inclusive, default: end of table)
    #[arg(long)]
    pub to: Option<usize>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the extraction
///
/// # Errors
///
/// Returns an error if the range is invalid, the report cannot be read, or
/// the output cannot be written. Unparsable hit lines only produce warnings.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let range = HitRange::new(args.from, args.to)?;
    let report = parse_input(&args.input, range)?;

    if verbose {
        info!(
            input = %args.input.display(),
            %range,
            entries = report.entries.len(),
            errors = report.errors.len(),
            "Extracted identifiers"
        );
    }

    for error in &report.errors {
        warn!("{error}");
    }
    if report.is_empty() && !report.has_errors() {
        warn!("No hits found in range {range}");
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create output file '{}'", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_output(&mut writer, &report, format)
                .with_context(|| format!("Cannot write output file '{}'", path.display()))?;
        }
        None => {
            let mut writer = io::stdout().lock();
            write_output(&mut writer, &report, format).context("Cannot write to stdout")?;
        }
    }

    Ok(())
}

fn parse_input(input: &Path, range: HitRange) -> anyhow::Result<SummaryReport> {
    if input.as_os_str() == "-" {
        let reader = decompress_if_gzipped(BufReader::new(io::stdin()))
            .context("Cannot read report from stdin")?;
        return Ok(parse_summary_reader(reader, range)?);
    }

    Ok(parse_summary_file(input, range)?)
}

fn write_output<W: Write>(
    writer: &mut W,
    report: &SummaryReport,
    format: OutputFormat,
) -> io::Result<()> {
    write_report(writer, report, format)?;
    writer.flush()
}
