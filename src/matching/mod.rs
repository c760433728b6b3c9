//! Read reconstruction and target matching.
//!
//! This module provides the core matching functionality:
//!
//! - [`reconstruct::reconstruct`]: Expand a read's stored subsequence along
//!   its edit script into one linear sequence on the reference axis
//! - [`engine::Matcher`]: Decide whether a reconstructed sequence matches any
//!   indexed target
//! - [`similarity::similarity_ratio`]: LCS-based similarity in [0, 1] used by
//!   the tolerant sliding-window search
//!
//! ## Matching Algorithm
//!
//! For each target, in definition order:
//!
//! 1. **Exact containment**: the oriented target occurs as a contiguous
//!    substring of the read — fast path, short-circuits the tolerance search
//! 2. **Tolerant sliding window**: every window of the oriented target's
//!    length, left to right, accepted when its similarity ratio reaches
//!    `1 - tolerance / len(target)`
//!
//! The forward sequence is tried before the reverse complement, and the
//! first target/orientation/offset satisfying any criterion wins. There is
//! deliberately no best-of-all comparison: changing the tie-break would
//! change classification outcomes for ambiguous reads.
//!
//! ## Example
//!
//! ```rust
//! use bam_triage::matching::engine::{Matcher, MatcherConfig};
//! use bam_triage::targets::store::TargetIndex;
//!
//! let index = TargetIndex::from_entries(vec![
//!     ("guide_1".to_string(), "AACGTT".to_string()),
//! ])
//! .unwrap();
//!
//! let matcher = Matcher::with_config(&index, MatcherConfig { tolerance: 1.0 });
//! if let Some(m) = matcher.find_match("TTAACGTTAA") {
//!     println!("{} ({})", m.target.label, m.orientation);
//! }
//! ```

pub mod engine;
pub mod reconstruct;
pub mod similarity;

pub use engine::{Matcher, MatcherConfig, TargetMatch};
pub use reconstruct::reconstruct;
