use std::fs::File;
use std::path::Path;

use noodles::bam;
use noodles::sam;
use noodles::sam::alignment::record::cigar::op::Kind;
use thiserror::Error;
use tracing::debug;

use crate::core::read::{AlignedRead, CigarOp, CigarOpKind};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Read a BAM file into its header and raw records.
///
/// Records are kept in stored order; the raw records are retained so grouped
/// output can write them back unchanged.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::Noodles` if the header is invalid.
pub fn read_bam_file(path: &Path) -> Result<(sam::Header, Vec<bam::Record>), ParseError> {
    let mut reader = File::open(path).map(bam::io::Reader::new)?;

    let header = reader
        .read_header()
        .map_err(|e| ParseError::Noodles(e.to_string()))?;

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(result?);
    }

    debug!(
        path = %path.display(),
        records = records.len(),
        "read alignment records"
    );

    Ok((header, records))
}

/// Convert a raw BAM record into the read representation classification
/// works on: identifier, decoded stored subsequence, edit script, and
/// mapping quality.
///
/// A record without stored bases yields `sequence: None`; a record without a
/// mapping quality yields 255, the container convention.
///
/// # Errors
///
/// Returns `ParseError::Io` if a CIGAR operation cannot be decoded.
pub fn aligned_read_from_record(record: &bam::Record) -> Result<AlignedRead, ParseError> {
    let name = record
        .name()
        .map(|name| name.to_string())
        .unwrap_or_default();

    let sequence = record.sequence();
    let sequence = if sequence.is_empty() {
        None
    } else {
        Some(
            sequence
                .iter()
                .map(|base| char::from(base.to_ascii_uppercase()))
                .collect::<String>(),
        )
    };

    let mut cigar = Vec::new();
    for op in record.cigar().iter() {
        let op = op?;
        cigar.push(CigarOp::new(kind_from_noodles(op.kind()), op.len()));
    }

    let mapping_quality = record.mapping_quality().map(u8::from).unwrap_or(255);

    Ok(AlignedRead {
        name,
        sequence,
        cigar,
        mapping_quality,
    })
}

fn kind_from_noodles(kind: Kind) -> CigarOpKind {
    match kind {
        Kind::Match => CigarOpKind::Match,
        Kind::Insertion => CigarOpKind::Insertion,
        Kind::Deletion => CigarOpKind::Deletion,
        Kind::Skip => CigarOpKind::Skip,
        Kind::SoftClip => CigarOpKind::SoftClip,
        Kind::HardClip => CigarOpKind::HardClip,
        Kind::Pad => CigarOpKind::Pad,
        Kind::SequenceMatch => CigarOpKind::SequenceMatch,
        Kind::SequenceMismatch => CigarOpKind::SequenceMismatch,
    }
}
