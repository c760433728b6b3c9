use serde::Serialize;

use crate::classify::batch::TriageResult;

/// One summary row: a bucket and how many reads landed in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub bucket: String,
    pub count: usize,
}

/// Per-input classification summary handed to reporting.
///
/// Buckets are listed in a stable order: groups in target definition order,
/// then "others", then "bad_quality". Counts always sum to `total_reads`.
#[derive(Debug, Clone, Serialize)]
pub struct TriageSummary {
    /// Input file the reads came from
    pub source: String,

    /// Creation timestamp, RFC 3339
    pub created_at: String,

    pub total_reads: usize,

    pub buckets: Vec<BucketCount>,
}

impl TriageSummary {
    #[must_use]
    pub fn from_result(source: impl Into<String>, result: &TriageResult) -> Self {
        let buckets = result
            .counts()
            .into_iter()
            .map(|(bucket, count)| BucketCount { bucket, count })
            .collect();

        Self {
            source: source.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
            total_reads: result.total(),
            buckets,
        }
    }

    /// Render as an aligned text table
    #[must_use]
    pub fn to_text(&self) -> String {
        let width = self
            .buckets
            .iter()
            .map(|row| row.bucket.len())
            .chain(std::iter::once("total".len()))
            .max()
            .unwrap_or(0);

        let mut out = format!("{}\n", self.source);
        for row in &self.buckets {
            out.push_str(&format!("  {:<width$}  {}\n", row.bucket, row.count));
        }
        out.push_str(&format!("  {:<width$}  {}\n", "total", self.total_reads));
        out
    }

    /// Render as TSV rows: source, bucket, count
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        for row in &self.buckets {
            out.push_str(&format!("{}\t{}\t{}\n", self.source, row.bucket, row.count));
        }
        out
    }
}
