use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::classify::batch::triage_reads;
use crate::classify::classifier::{ClassifierConfig, DEFAULT_QUALITY_THRESHOLD};
use crate::cli::OutputFormat;
use crate::parsing::bam::{aligned_read_from_record, read_bam_file};
use crate::parsing::targets::parse_targets_file;
use crate::report::summary::TriageSummary;
use crate::report::writer::write_bucket_bams;
use crate::targets::store::TargetIndex;

#[derive(Args)]
pub struct SortArgs {
    /// Input BAM file, or a folder whose .bam files are all sorted
    #[arg(required = true)]
    pub input: PathBuf,

    /// Target definition file (one label<TAB>sequence entry per line)
    #[arg(short, long)]
    pub targets: PathBuf,

    /// Directory for grouped BAM output (one subfolder per input file)
    #[arg(short, long, default_value = "triage")]
    pub output_dir: PathBuf,

    /// Minimum mapping quality; reads below it go to bad_quality unmatched
    #[arg(long, default_value_t = DEFAULT_QUALITY_THRESHOLD)]
    pub min_mapping_quality: u8,

    /// Permitted edits relative to target length for tolerant matching
    /// (0 = exact or reverse-complement containment only)
    #[arg(long, default_value_t = 0.0)]
    pub tolerance: f64,

    /// Classify and summarize only; skip writing grouped BAM files
    #[arg(long)]
    pub no_bam_output: bool,
}

/// Execute sort subcommand
///
/// # Errors
///
/// Returns an error if the target definitions are invalid, an input cannot
/// be read, or grouped output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SortArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if !(0.0..1.0).contains(&args.tolerance) {
        anyhow::bail!("--tolerance must be in [0, 1), got {}", args.tolerance);
    }

    // Bad target configuration aborts before any read is classified
    let entries = parse_targets_file(&args.targets)
        .with_context(|| format!("reading targets from {}", args.targets.display()))?;
    let index = TargetIndex::from_entries(entries)?;

    if verbose {
        eprintln!(
            "Loaded {} targets ({} groups)",
            index.len(),
            index.distinct_labels().len()
        );
    }

    let inputs = collect_bam_files(&args.input)?;
    if inputs.is_empty() {
        anyhow::bail!("No .bam files found in {}", args.input.display());
    }

    let config = ClassifierConfig {
        quality_threshold: args.min_mapping_quality,
        tolerance: args.tolerance,
    };

    let mut summaries = Vec::with_capacity(inputs.len());

    for path in &inputs {
        let (header, records) =
            read_bam_file(path).with_context(|| format!("reading {}", path.display()))?;

        let reads = records
            .iter()
            .map(aligned_read_from_record)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("decoding records from {}", path.display()))?;

        let result = triage_reads(&reads, &index, &config);

        if !args.no_bam_output {
            let subdir = args.output_dir.join(input_stem(path));
            write_bucket_bams(&subdir, &header, &records, &result)
                .with_context(|| format!("writing grouped output to {}", subdir.display()))?;
            if verbose {
                eprintln!("Wrote grouped BAM files to {}", subdir.display());
            }
        }

        summaries.push(TriageSummary::from_result(path.display().to_string(), &result));
    }

    print_summaries(&summaries, format)?;
    Ok(())
}

/// A single .bam path as-is; a folder expands to its .bam files sorted by name
fn collect_bam_files(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(input)
        .with_context(|| format!("listing {}", input.display()))?
    {
        let path = entry?.path();
        let is_bam = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("bam"));
        if path.is_file() && is_bam {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn input_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string())
}

fn print_summaries(summaries: &[TriageSummary], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for summary in summaries {
                print!("{}", summary.to_text());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summaries)?);
        }
        OutputFormat::Tsv => {
            println!("source\tbucket\tcount");
            for summary in summaries {
                print!("{}", summary.to_tsv());
            }
        }
    }
    Ok(())
}
