//! Per-position base composition within a genomic window.
//!
//! For every 1-based reference position of a window, counts how many reads
//! carry each base there, how many are deleted there, and the bases of
//! insertions anchored there. Insertions are attributed to the reference
//! position immediately before the inserted bases, matching how pileup
//! viewers report indels.
//!
//! This is an independent counting pass over raw records; it shares the edit
//! script vocabulary with classification but none of its state.

use noodles::bam;
use noodles::sam;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::read::{AlignedRead, CigarOpKind};
use crate::parsing::bam::{aligned_read_from_record, ParseError};

#[derive(Error, Debug)]
pub enum PileupError {
    #[error("Invalid region '{0}': expected NAME:START-END with 1 <= START <= END")]
    InvalidRegion(String),

    #[error("Reference sequence '{0}' not found in header")]
    UnknownReference(String),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A 1-based inclusive genomic window on a named reference sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicWindow {
    pub reference_name: String,
    pub start: usize,
    pub end: usize,
}

impl GenomicWindow {
    /// Parse `NAME:START-END` (1-based, inclusive).
    ///
    /// # Errors
    ///
    /// Returns `PileupError::InvalidRegion` if the text does not have the
    /// expected shape or the bounds are out of order.
    pub fn parse(text: &str) -> Result<Self, PileupError> {
        let invalid = || PileupError::InvalidRegion(text.to_string());

        let (name, range) = text.rsplit_once(':').ok_or_else(invalid)?;
        let (start, end) = range.split_once('-').ok_or_else(invalid)?;

        let start: usize = start.trim().parse().map_err(|_| invalid())?;
        let end: usize = end.trim().parse().map_err(|_| invalid())?;

        if name.is_empty() || start == 0 || start > end {
            return Err(invalid());
        }

        Ok(Self {
            reference_name: name.to_string(),
            start,
            end,
        })
    }

    /// Number of positions covered by the window
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false // start <= end is enforced at construction
    }

    /// Slot index for a reference position, or None when outside the window
    fn slot(&self, position: usize) -> Option<usize> {
        if position >= self.start && position <= self.end {
            Some(position - self.start)
        } else {
            None
        }
    }
}

/// Composition counts for one reference position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PositionCounts {
    /// 1-based reference position
    pub position: usize,
    pub a: u64,
    pub c: u64,
    pub g: u64,
    pub t: u64,
    /// Reads deleted at this position
    pub deletion: u64,
    /// Inserted bases anchored at this position, by base
    pub ins_a: u64,
    pub ins_c: u64,
    pub ins_g: u64,
    pub ins_t: u64,
}

impl PositionCounts {
    fn count_base(&mut self, base: char) {
        match base {
            'A' => self.a += 1,
            'C' => self.c += 1,
            'G' => self.g += 1,
            'T' => self.t += 1,
            _ => {}
        }
    }

    fn count_insertion(&mut self, base: char) {
        match base {
            'A' => self.ins_a += 1,
            'C' => self.ins_c += 1,
            'G' => self.ins_g += 1,
            'T' => self.ins_t += 1,
            _ => {}
        }
    }
}

/// Tally per-position composition for all records overlapping the window.
///
/// Every position of the window gets a row, covered or not, so downstream
/// tables always have `window.len()` rows in positional order.
///
/// # Errors
///
/// Returns `PileupError::UnknownReference` if the window names a reference
/// sequence absent from the header, or a parse error if a record cannot be
/// decoded.
pub fn window_composition(
    header: &sam::Header,
    records: &[bam::Record],
    window: &GenomicWindow,
) -> Result<Vec<PositionCounts>, PileupError> {
    let reference_id = header
        .reference_sequences()
        .keys()
        .position(|name| name.to_string() == window.reference_name)
        .ok_or_else(|| PileupError::UnknownReference(window.reference_name.clone()))?;

    let mut counts: Vec<PositionCounts> = (window.start..=window.end)
        .map(|position| PositionCounts {
            position,
            ..PositionCounts::default()
        })
        .collect();

    let mut seen = 0usize;
    for record in records {
        let Some(Ok(id)) = record.reference_sequence_id() else {
            continue;
        };
        if id != reference_id {
            continue;
        }
        let Some(Ok(alignment_start)) = record.alignment_start() else {
            continue;
        };

        let read = aligned_read_from_record(record)?;
        accumulate_read(&mut counts, window, usize::from(alignment_start), &read);
        seen += 1;
    }

    debug!(
        reference = %window.reference_name,
        start = window.start,
        end = window.end,
        records = seen,
        "tallied window composition"
    );

    Ok(counts)
}

/// Walk one read's edit script against the reference axis and add its
/// contribution to the window counts.
fn accumulate_read(
    counts: &mut [PositionCounts],
    window: &GenomicWindow,
    alignment_start: usize,
    read: &AlignedRead,
) {
    let Some(sequence) = read.sequence.as_deref() else {
        return;
    };
    let bases = sequence.as_bytes();

    let mut ref_pos = alignment_start;
    let mut read_pos = 0usize;

    for op in &read.cigar {
        match op.kind {
            CigarOpKind::Match | CigarOpKind::SequenceMatch | CigarOpKind::SequenceMismatch => {
                for k in 0..op.len {
                    if let Some(slot) = window.slot(ref_pos + k) {
                        if let Some(&base) = bases.get(read_pos + k) {
                            counts[slot].count_base(char::from(base));
                        }
                    }
                }
                ref_pos += op.len;
                read_pos += op.len;
            }
            CigarOpKind::Insertion => {
                if let Some(slot) = ref_pos.checked_sub(1).and_then(|p| window.slot(p)) {
                    for k in 0..op.len {
                        if let Some(&base) = bases.get(read_pos + k) {
                            counts[slot].count_insertion(char::from(base));
                        }
                    }
                }
                read_pos += op.len;
            }
            CigarOpKind::Deletion => {
                for k in 0..op.len {
                    if let Some(slot) = window.slot(ref_pos + k) {
                        counts[slot].deletion += 1;
                    }
                }
                ref_pos += op.len;
            }
            CigarOpKind::Skip => ref_pos += op.len,
            CigarOpKind::SoftClip => read_pos += op.len,
            CigarOpKind::HardClip | CigarOpKind::Pad => {}
        }
    }
}
