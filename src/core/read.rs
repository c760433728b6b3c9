use serde::{Deserialize, Serialize};

/// One step of a read's alignment edit script (CIGAR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CigarOpKind {
    /// Alignment match, may be a sequence match or mismatch (M)
    Match,
    /// Insertion to the reference (I)
    Insertion,
    /// Deletion from the reference (D)
    Deletion,
    /// Skipped region from the reference (N)
    Skip,
    /// Soft clip: bases present in the stored sequence but not aligned (S)
    SoftClip,
    /// Hard clip: bases absent from the stored sequence (H)
    HardClip,
    /// Silent padding (P)
    Pad,
    /// Sequence match (=)
    SequenceMatch,
    /// Sequence mismatch (X)
    SequenceMismatch,
}

impl CigarOpKind {
    /// Whether this operation consumes bases of the stored read sequence
    #[must_use]
    pub fn consumes_query(self) -> bool {
        matches!(
            self,
            Self::Match
                | Self::Insertion
                | Self::SoftClip
                | Self::SequenceMatch
                | Self::SequenceMismatch
        )
    }

    /// Whether this operation consumes positions on the reference axis
    #[must_use]
    pub fn consumes_reference(self) -> bool {
        matches!(
            self,
            Self::Match | Self::Deletion | Self::Skip | Self::SequenceMatch | Self::SequenceMismatch
        )
    }
}

/// A (kind, length) edit-script step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CigarOp {
    pub kind: CigarOpKind,
    pub len: usize,
}

impl CigarOp {
    #[must_use]
    pub fn new(kind: CigarOpKind, len: usize) -> Self {
        Self { kind, len }
    }
}

/// An aligned read as obtained from the alignment container
///
/// Immutable once converted from a BAM record. `sequence` is `None` for
/// records that carry no stored subsequence; such reads cannot be matched and
/// classify as "other". A record without a mapping quality carries 255, the
/// container convention for "unavailable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRead {
    /// Read identifier (QNAME)
    pub name: String,

    /// Stored subsequence, uppercase over {A,C,G,T,N}; `None` when absent
    pub sequence: Option<String>,

    /// Edit script mapping the stored subsequence onto the reference axis
    pub cigar: Vec<CigarOp>,

    /// Mapping quality (MAPQ); 255 when unavailable
    pub mapping_quality: u8,
}

impl AlignedRead {
    pub fn new(name: impl Into<String>, sequence: Option<String>, cigar: Vec<CigarOp>) -> Self {
        Self {
            name: name.into(),
            sequence,
            cigar,
            mapping_quality: 255,
        }
    }

    #[must_use]
    pub fn with_mapping_quality(mut self, mapping_quality: u8) -> Self {
        self.mapping_quality = mapping_quality;
        self
    }
}
