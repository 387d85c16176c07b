use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod format;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("blast2seqids=debug,info")
    } else {
        EnvFilter::new("blast2seqids=warn")
    };

    // Warnings go to stderr so they never mix with identifiers on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::extract::run(cli.extract, cli.format, cli.verbose)?;

    Ok(())
}
