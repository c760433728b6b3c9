//! # bam-triage
//!
//! A library for sorting aligned reads from BAM files into named groups.
//!
//! Amplicon and editing experiments often produce BAM files whose reads come
//! from a handful of known constructs. Deciding which construct each read
//! belongs to is awkward with generic tooling: the read's stored sequence has
//! to be reconstructed along its CIGAR first, a match may sit on either
//! strand, and sequencing noise means exact substring search alone misses
//! near-identical reads.
//!
//! `bam-triage` solves this by matching every read's reconstructed sequence
//! against a small ordered set of target sequences and routing each read into
//! exactly one bucket: a named group, "others", or "bad_quality".
//!
//! ## Features
//!
//! - **CIGAR-faithful reconstruction**: deletions become gaps, insertions are
//!   kept, clipped bases are excluded
//! - **Orientation-aware matching**: forward sequence, then precomputed
//!   reverse complement
//! - **Tolerant matching**: sliding-window LCS similarity with a configurable
//!   edit tolerance per target
//! - **Deterministic tie-break**: first target in definition order wins, so
//!   reclassification always reproduces the same buckets
//! - **Grouped output**: one BAM per bucket plus per-bucket counts
//! - **Window composition**: per-position base/insertion/deletion tallies
//!   over a genomic window
//!
//! ## Example
//!
//! ```rust
//! use bam_triage::classify::{classify, ClassifierConfig};
//! use bam_triage::core::read::{AlignedRead, CigarOp, CigarOpKind};
//! use bam_triage::targets::store::TargetIndex;
//!
//! let index = TargetIndex::from_entries(vec![
//!     ("guide_1".to_string(), "ACGTAC".to_string()),
//! ])
//! .unwrap();
//!
//! let read = AlignedRead::new(
//!     "read_1",
//!     Some("TTACGTACTT".to_string()),
//!     vec![CigarOp::new(CigarOpKind::Match, 10)],
//! )
//! .with_mapping_quality(60);
//!
//! let outcome = classify(&read, &index, &ClassifierConfig::default());
//! assert_eq!(outcome.bucket_name(), "guide_1");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Read, edit script, and outcome types
//! - [`targets`]: Target index with precomputed reverse complements
//! - [`matching`]: Sequence reconstruction and the matching engine
//! - [`classify`]: Per-read classifier and the parallel batch driver
//! - [`parsing`]: BAM and target definition parsers
//! - [`report`]: Grouped BAM output and summaries
//! - [`pileup`]: Per-position window composition
//! - [`cli`]: Command-line interface implementation

pub mod classify;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod pileup;
pub mod report;
pub mod targets;
pub mod utils;

// Re-export commonly used types for convenience
pub use classify::batch::{triage_reads, TriageResult};
pub use classify::classifier::{classify, ClassifierConfig};
pub use core::read::{AlignedRead, CigarOp, CigarOpKind};
pub use core::types::{GroupLabel, Outcome};
pub use matching::engine::{Matcher, MatcherConfig};
pub use targets::store::{Target, TargetError, TargetIndex};
