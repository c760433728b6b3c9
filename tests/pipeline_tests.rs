//! End-to-end pipeline tests: write a real BAM file, classify its reads,
//! write grouped output, and read it back.

mod common;

use noodles::sam::alignment::record::cigar::op::Kind;

use bam_triage::classify::batch::triage_reads;
use bam_triage::classify::classifier::ClassifierConfig;
use bam_triage::parsing::bam::{aligned_read_from_record, read_bam_file};
use bam_triage::report::writer::write_bucket_bams;
use bam_triage::targets::store::TargetIndex;

use common::{mapped_record, test_header, write_bam};

fn targets() -> TargetIndex {
    // AACGAACG reverse complements to CGTTCGTT
    TargetIndex::from_entries(vec![
        ("guide_1".to_string(), "ACGTACGT".to_string()),
        ("guide_2".to_string(), "AACGAACG".to_string()),
    ])
    .unwrap()
}

/// r0: exact guide_1; r1: guide_2 via reverse complement; r2: no match;
/// r3: matches guide_1 but fails the quality gate; r4: guide_1 behind a
/// soft clip; r5: one substitution off guide_1
fn test_records() -> Vec<noodles::sam::alignment::RecordBuf> {
    vec![
        mapped_record("r0", "TTACGTACGTTT", vec![(Kind::Match, 12)], 100, 60),
        mapped_record("r1", "TTCGTTCGTTTT", vec![(Kind::Match, 12)], 200, 60),
        mapped_record("r2", "GGGGGGGGGGGG", vec![(Kind::Match, 12)], 300, 60),
        mapped_record("r3", "TTACGTACGTTT", vec![(Kind::Match, 12)], 400, 10),
        mapped_record(
            "r4",
            "NNACGTACGT",
            vec![(Kind::SoftClip, 2), (Kind::Match, 8)],
            500,
            60,
        ),
        mapped_record("r5", "ACGTACTT", vec![(Kind::Match, 8)], 600, 60),
    ]
}

#[test]
fn test_sort_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let bam_path = dir.path().join("sample.bam");

    let header = test_header();
    write_bam(&bam_path, &header, &test_records());

    let (read_header, records) = read_bam_file(&bam_path).unwrap();
    assert_eq!(records.len(), 6);

    let reads: Vec<_> = records
        .iter()
        .map(|record| aligned_read_from_record(record).unwrap())
        .collect();
    assert_eq!(reads[0].name, "r0");
    assert_eq!(reads[0].mapping_quality, 60);
    assert_eq!(reads[3].mapping_quality, 10);

    let result = triage_reads(&reads, &targets(), &ClassifierConfig::default());

    assert_eq!(result.groups[0].label.as_str(), "guide_1");
    assert_eq!(result.groups[0].members, vec![0, 4]);
    assert_eq!(result.groups[1].label.as_str(), "guide_2");
    assert_eq!(result.groups[1].members, vec![1]);
    assert_eq!(result.other, vec![2, 5]);
    assert_eq!(result.bad_quality, vec![3]);

    // Conservation: every read lands in exactly one bucket
    let counted: usize = result.counts().iter().map(|(_, n)| n).sum();
    assert_eq!(counted, reads.len());

    // Grouped output round-trips with the expected record counts
    let out_dir = dir.path().join("sorted");
    let written = write_bucket_bams(&out_dir, &read_header, &records, &result).unwrap();
    assert_eq!(written.len(), 4);

    let expected = [("guide_1", 2), ("guide_2", 1), ("others", 2), ("bad_quality", 1)];
    for (bucket, count) in expected {
        let path = out_dir.join(format!("{bucket}.bam"));
        let (_, bucket_records) = read_bam_file(&path).unwrap();
        assert_eq!(bucket_records.len(), count, "bucket {bucket}");
    }
}

#[test]
fn test_tolerance_boundary_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let bam_path = dir.path().join("sample.bam");

    let header = test_header();
    // One substituted base inside an 8-base target window
    write_bam(
        &bam_path,
        &header,
        &[mapped_record("r0", "ACGTACTT", vec![(Kind::Match, 8)], 100, 60)],
    );

    let (_, records) = read_bam_file(&bam_path).unwrap();
    let reads: Vec<_> = records
        .iter()
        .map(|record| aligned_read_from_record(record).unwrap())
        .collect();

    let exact = ClassifierConfig {
        tolerance: 0.0,
        ..ClassifierConfig::default()
    };
    let result = triage_reads(&reads, &targets(), &exact);
    assert_eq!(result.other, vec![0]);

    let tolerant = ClassifierConfig {
        tolerance: 1.0,
        ..ClassifierConfig::default()
    };
    let result = triage_reads(&reads, &targets(), &tolerant);
    assert_eq!(result.groups[0].members, vec![0]);
}

#[test]
fn test_reclassification_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let bam_path = dir.path().join("sample.bam");

    let header = test_header();
    write_bam(&bam_path, &header, &test_records());

    let (_, records) = read_bam_file(&bam_path).unwrap();
    let reads: Vec<_> = records
        .iter()
        .map(|record| aligned_read_from_record(record).unwrap())
        .collect();

    let config = ClassifierConfig::default();
    let index = targets();
    let first = triage_reads(&reads, &index, &config);
    let second = triage_reads(&reads, &index, &config);

    assert_eq!(first.outcomes, second.outcomes);
    assert_eq!(first.other, second.other);
    assert_eq!(first.bad_quality, second.bad_quality);
}

#[test]
fn test_definition_order_decides_ties() {
    let dir = tempfile::tempdir().unwrap();
    let bam_path = dir.path().join("sample.bam");

    let header = test_header();
    // The read contains both targets' forward sequences
    write_bam(
        &bam_path,
        &header,
        &[mapped_record(
            "r0",
            "ACGTACGTAACGAACG",
            vec![(Kind::Match, 16)],
            100,
            60,
        )],
    );

    let (_, records) = read_bam_file(&bam_path).unwrap();
    let reads: Vec<_> = records
        .iter()
        .map(|record| aligned_read_from_record(record).unwrap())
        .collect();

    let forward = TargetIndex::from_entries(vec![
        ("guide_1".to_string(), "ACGTACGT".to_string()),
        ("guide_2".to_string(), "AACGAACG".to_string()),
    ])
    .unwrap();
    let reversed = TargetIndex::from_entries(vec![
        ("guide_2".to_string(), "AACGAACG".to_string()),
        ("guide_1".to_string(), "ACGTACGT".to_string()),
    ])
    .unwrap();

    let config = ClassifierConfig::default();
    let result = triage_reads(&reads, &forward, &config);
    assert_eq!(result.outcomes[0].bucket_name(), "guide_1");

    let result = triage_reads(&reads, &reversed, &config);
    assert_eq!(result.outcomes[0].bucket_name(), "guide_2");
}
