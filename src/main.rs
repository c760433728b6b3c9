use clap::Parser;
use tracing_subscriber::EnvFilter;

mod classify;
mod cli;
mod core;
mod matching;
mod parsing;
mod pileup;
mod report;
mod targets;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("bam_triage=debug,info")
    } else {
        EnvFilter::new("bam_triage=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Sort(args) => {
            cli::sort::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Pileup(args) => {
            cli::pileup::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Targets(args) => {
            cli::targets::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
