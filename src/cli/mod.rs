//! Command-line interface for bam-triage.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **sort**: Classify reads from BAM files into grouped BAM files + summary
//! - **pileup**: Per-position base composition within a genomic window
//! - **targets**: Validate and list a target definition file
//!
//! ## Usage
//!
//! ```text
//! # Sort one BAM file into grouped outputs
//! bam-triage sort sample.bam --targets sequences.txt --output-dir sorted
//!
//! # Sort every BAM file in a folder
//! bam-triage sort runs/ --targets sequences.txt --output-dir sorted
//!
//! # Allow one edit per target during matching
//! bam-triage sort sample.bam --targets sequences.txt --tolerance 1
//!
//! # JSON summary for scripting
//! bam-triage sort sample.bam --targets sequences.txt --format json
//!
//! # Window composition
//! bam-triage pileup sample.bam --region chr10:125815045-125815075
//!
//! # Check a target definition file
//! bam-triage targets sequences.txt
//! ```

use clap::{Parser, Subcommand};

pub mod pileup;
pub mod sort;
pub mod targets;

#[derive(Parser)]
#[command(name = "bam-triage")]
#[command(version)]
#[command(about = "Sort aligned reads into named groups by target sequence matching")]
#[command(
    long_about = "bam-triage classifies the reads of BAM files against a small set of named target sequences.\n\nEach read's sequence is reconstructed along its CIGAR, matched against every target in both orientations (exactly or within a configurable tolerance), and routed into one group, \"others\", or \"bad_quality\". Grouped reads are written back as one BAM per bucket together with per-bucket counts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort reads from BAM files into grouped BAM files and a summary
    Sort(sort::SortArgs),

    /// Tally per-position base composition within a genomic window
    Pileup(pileup::PileupArgs),

    /// Validate and list a target definition file
    Targets(targets::TargetsArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
