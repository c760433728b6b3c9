//! Parsers for alignment containers and target definitions.
//!
//! This module provides:
//!
//! - **BAM files** ([`bam`]): header + record reading via noodles, and
//!   conversion of raw records into [`crate::core::read::AlignedRead`]
//! - **Target definition lists** ([`targets`]): line-oriented
//!   `label<TAB>sequence` files
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use bam_triage::parsing::bam::{aligned_read_from_record, read_bam_file};
//! use bam_triage::parsing::targets::parse_targets_file;
//!
//! let entries = parse_targets_file(Path::new("sequences.txt")).unwrap();
//! let (header, records) = read_bam_file(Path::new("sample.bam")).unwrap();
//!
//! for record in &records {
//!     let read = aligned_read_from_record(record).unwrap();
//!     println!("{}: mapq {}", read.name, read.mapping_quality);
//! }
//! ```

pub mod bam;
pub mod targets;

pub use bam::ParseError;
