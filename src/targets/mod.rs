//! Target sequence storage and indexing.
//!
//! The [`store::TargetIndex`] holds the small set of named target sequences
//! reads are matched against. Each entry pairs a group label with a canonical
//! uppercase sequence and its precomputed reverse complement, so the matcher
//! never recomputes orientations per read.
//!
//! Definition order is preserved and significant: during matching, the first
//! target satisfying any acceptance criterion wins.
//!
//! ## Example
//!
//! ```rust
//! use bam_triage::targets::store::TargetIndex;
//!
//! let index = TargetIndex::from_entries(vec![
//!     ("guide_1".to_string(), "AACGTT".to_string()),
//!     ("guide_2".to_string(), "GGCCAA".to_string()),
//! ])
//! .unwrap();
//!
//! for target in index.iter() {
//!     println!("{}: {} / {}", target.label, target.sequence, target.reverse_complement);
//! }
//! ```

pub mod store;

pub use store::{Target, TargetError, TargetIndex};
