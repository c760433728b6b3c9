//! Shared fixtures: build small BAM files on disk for pipeline tests.

use std::fs::File;
use std::num::NonZeroUsize;
use std::path::Path;

use bstr::BString;
use noodles::bam;
use noodles::core::Position;
use noodles::sam;
use noodles::sam::alignment::io::Write as AlignmentWrite;
use noodles::sam::alignment::record::cigar::op::{Kind, Op};
use noodles::sam::alignment::record::{Flags, MappingQuality};
use noodles::sam::alignment::record_buf::{Cigar, QualityScores, RecordBuf, Sequence};
use noodles::sam::header::record::value::{map::ReferenceSequence, Map};

/// Header with a single reference sequence "chr1"
pub fn test_header() -> sam::Header {
    let mut builder = sam::Header::builder();
    let reference = Map::<ReferenceSequence>::new(NonZeroUsize::new(10_000).unwrap());
    builder = builder.add_reference_sequence(b"chr1", reference);
    builder.build()
}

/// A mapped record on chr1 with uniform base qualities
pub fn mapped_record(
    name: &str,
    sequence: &str,
    cigar: Vec<(Kind, usize)>,
    alignment_start: usize,
    mapping_quality: u8,
) -> RecordBuf {
    let ops: Vec<Op> = cigar.into_iter().map(|(kind, len)| Op::new(kind, len)).collect();

    RecordBuf::builder()
        .set_name(BString::from(name))
        .set_sequence(Sequence::from(sequence.as_bytes().to_vec()))
        .set_quality_scores(QualityScores::from(vec![30; sequence.len()]))
        .set_reference_sequence_id(0)
        .set_alignment_start(Position::try_from(alignment_start).unwrap())
        .set_cigar(Cigar::from(ops))
        .set_flags(Flags::empty())
        .set_mapping_quality(MappingQuality::new(mapping_quality).unwrap())
        .build()
}

/// Write records to a BAM file at `path`
pub fn write_bam(path: &Path, header: &sam::Header, records: &[RecordBuf]) {
    let mut writer = bam::io::Writer::new(File::create(path).unwrap());
    writer.write_header(header).unwrap();
    for record in records {
        writer.write_alignment_record(header, record).unwrap();
    }
    writer.get_mut().try_finish().unwrap();
}
