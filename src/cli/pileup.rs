use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::bam::read_bam_file;
use crate::pileup::{window_composition, GenomicWindow, PositionCounts};

#[derive(Args)]
pub struct PileupArgs {
    /// Input BAM file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Genomic window as NAME:START-END (1-based, inclusive)
    #[arg(short, long)]
    pub region: String,
}

/// Execute pileup subcommand
///
/// # Errors
///
/// Returns an error if the region is malformed, names an unknown reference
/// sequence, or the input cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PileupArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let window = GenomicWindow::parse(&args.region)?;

    let (header, records) = read_bam_file(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    if verbose {
        eprintln!(
            "Tallying {} positions on {} over {} records",
            window.len(),
            window.reference_name,
            records.len()
        );
    }

    let rows = window_composition(&header, &records, &window)?;
    print_rows(&rows, format)?;
    Ok(())
}

const COLUMNS: [&str; 10] = [
    "position", "A", "C", "G", "T", "Del", "Ins_A", "Ins_C", "Ins_G", "Ins_T",
];

fn print_rows(rows: &[PositionCounts], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", COLUMNS.join("  "));
            for row in rows {
                println!(
                    "{}  {}  {}  {}  {}  {}  {}  {}  {}  {}",
                    row.position,
                    row.a,
                    row.c,
                    row.g,
                    row.t,
                    row.deletion,
                    row.ins_a,
                    row.ins_c,
                    row.ins_g,
                    row.ins_t
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormat::Tsv => {
            println!("{}", COLUMNS.join("\t"));
            for row in rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    row.position,
                    row.a,
                    row.c,
                    row.g,
                    row.t,
                    row.deletion,
                    row.ins_a,
                    row.ins_c,
                    row.ins_g,
                    row.ins_t
                );
            }
        }
    }
    Ok(())
}
