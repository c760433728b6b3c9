use serde::{Deserialize, Serialize};

/// Name of a read group, taken from the target definition list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupLabel(pub String);

impl GroupLabel {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bucket name used for reads that match no target
pub const OTHER_BUCKET: &str = "others";

/// Bucket name used for reads below the mapping quality threshold
pub const BAD_QUALITY_BUCKET: &str = "bad_quality";

/// Terminal outcome of classifying one read
///
/// Every read ends in exactly one of these three buckets. The outcome is a
/// deterministic function of the read, the target index, the quality
/// threshold, and the tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Matched a target; carries the target's group label
    Grouped(GroupLabel),
    /// Reconstructable but matched no target (or carried no sequence)
    Other,
    /// Mapping quality below threshold; matching was never attempted
    BadQuality,
}

impl Outcome {
    /// Bucket name for file naming and summary rows
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        match self {
            Self::Grouped(label) => label.as_str(),
            Self::Other => OTHER_BUCKET,
            Self::BadQuality => BAD_QUALITY_BUCKET,
        }
    }

    #[must_use]
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped(_))
    }
}

/// Orientation in which a target matched a read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Forward,
    ReverseComplement,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::ReverseComplement => write!(f, "reverse complement"),
        }
    }
}
