//! Window composition over a real BAM file.

mod common;

use noodles::sam::alignment::record::cigar::op::Kind;

use bam_triage::parsing::bam::read_bam_file;
use bam_triage::pileup::{window_composition, GenomicWindow, PileupError};

use common::{mapped_record, test_header, write_bam};

#[test]
fn test_window_composition_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let bam_path = dir.path().join("sample.bam");

    let header = test_header();
    write_bam(
        &bam_path,
        &header,
        &[
            // ACGT aligned at 100..=103
            mapped_record("r0", "ACGT", vec![(Kind::Match, 4)], 100, 60),
            // AT spanning a 2-base deletion at 101..=102
            mapped_record(
                "r1",
                "AT",
                vec![(Kind::Match, 1), (Kind::Deletion, 2), (Kind::Match, 1)],
                100,
                60,
            ),
            // GG inserted after position 101
            mapped_record(
                "r2",
                "ACGGGT",
                vec![(Kind::Match, 2), (Kind::Insertion, 2), (Kind::Match, 2)],
                100,
                60,
            ),
        ],
    );

    let (read_header, records) = read_bam_file(&bam_path).unwrap();
    let window = GenomicWindow::parse("chr1:100-103").unwrap();
    let rows = window_composition(&read_header, &records, &window).unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].position, 100);

    // Position 100: A from r0, A from r1, A from r2
    assert_eq!(rows[0].a, 3);
    // Position 101: C from r0 and r2, deleted in r1, insertion anchor for r2
    assert_eq!(rows[1].c, 2);
    assert_eq!(rows[1].deletion, 1);
    assert_eq!(rows[1].ins_g, 2);
    // Position 102: G from r0 and r2, deleted in r1
    assert_eq!(rows[2].g, 2);
    assert_eq!(rows[2].deletion, 1);
    // Position 103: T from all three
    assert_eq!(rows[3].t, 3);
}

#[test]
fn test_unknown_reference_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let bam_path = dir.path().join("sample.bam");

    let header = test_header();
    write_bam(
        &bam_path,
        &header,
        &[mapped_record("r0", "ACGT", vec![(Kind::Match, 4)], 100, 60)],
    );

    let (read_header, records) = read_bam_file(&bam_path).unwrap();
    let window = GenomicWindow::parse("chr2:100-103").unwrap();

    let result = window_composition(&read_header, &records, &window);
    assert!(matches!(result, Err(PileupError::UnknownReference(_))));
}
