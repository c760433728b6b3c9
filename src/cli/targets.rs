use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::targets::parse_targets_file;
use crate::targets::store::TargetIndex;

#[derive(Args)]
pub struct TargetsArgs {
    /// Target definition file to validate and list
    #[arg(required = true)]
    pub file: PathBuf,
}

/// Execute targets subcommand
///
/// Parses and validates a definition file the same way `sort` would, then
/// lists each target with both orientations. Exits with an error on the same
/// conditions that would abort a sort run (duplicate sequence, invalid base,
/// malformed line).
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TargetsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let entries = parse_targets_file(&args.file)
        .with_context(|| format!("reading targets from {}", args.file.display()))?;
    let index = TargetIndex::from_entries(entries)?;

    if verbose {
        eprintln!(
            "{}: {} targets, {} groups",
            args.file.display(),
            index.len(),
            index.distinct_labels().len()
        );
    }

    match format {
        OutputFormat::Text => {
            for target in index.iter() {
                println!(
                    "{}  len={}  {}  (rc {})",
                    target.label,
                    target.sequence.len(),
                    target.sequence,
                    target.reverse_complement
                );
            }
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = index
                .iter()
                .map(|target| {
                    serde_json::json!({
                        "label": target.label.as_str(),
                        "length": target.sequence.len(),
                        "sequence": target.sequence,
                        "reverse_complement": target.reverse_complement,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Tsv => {
            println!("label\tlength\tsequence\treverse_complement");
            for target in index.iter() {
                println!(
                    "{}\t{}\t{}\t{}",
                    target.label,
                    target.sequence.len(),
                    target.sequence,
                    target.reverse_complement
                );
            }
        }
    }

    Ok(())
}
