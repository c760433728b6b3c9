//! Read classification.
//!
//! [`classifier::classify`] is the per-read state machine with three terminal
//! outcomes and no retries:
//!
//! 1. Mapping quality below threshold → "bad_quality"; matching is never
//!    attempted (low-quality reads are unreliable to match, and the gate is
//!    cheaper than reconstruction)
//! 2. No stored subsequence, or no target matched → "others"
//! 3. Otherwise → the matched target's group
//!
//! [`batch::triage_reads`] applies the classifier to a whole collection in
//! parallel and folds the per-read results into a deterministic partition.
//! Classification of one read is independent of all others, so the only
//! ordering requirement is the final fold, which always runs in input order.

pub mod batch;
pub mod classifier;

pub use batch::{triage_reads, GroupBucket, TriageResult};
pub use classifier::{classify, ClassifierConfig, DEFAULT_QUALITY_THRESHOLD};
