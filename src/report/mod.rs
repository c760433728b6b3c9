//! Grouped output and classification summaries.
//!
//! [`writer::write_bucket_bams`] persists the partition back into alignment
//! containers, one BAM per bucket, under the input file's header.
//! [`summary::TriageSummary`] is the serializable per-input summary rendered
//! by the CLI as text, TSV, or JSON.

pub mod summary;
pub mod writer;

pub use summary::{BucketCount, TriageSummary};
pub use writer::{write_bucket_bams, ReportError};
