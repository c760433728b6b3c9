use std::collections::HashMap;

use rayon::prelude::*;

use crate::classify::classifier::{classify, ClassifierConfig};
use crate::core::read::AlignedRead;
use crate::core::types::{GroupLabel, Outcome, BAD_QUALITY_BUCKET, OTHER_BUCKET};
use crate::targets::store::TargetIndex;

/// Reads routed to one named group, as indices into the input collection
#[derive(Debug, Clone)]
pub struct GroupBucket {
    pub label: GroupLabel,
    pub members: Vec<usize>,
}

/// The partition of an input read collection into buckets.
///
/// `outcomes` holds one result per read in input order; the bucket index
/// lists partition `0..outcomes.len()` — every read index appears in exactly
/// one bucket. Group buckets follow the target definition order and exist
/// even when empty, so summaries always list every configured group.
#[derive(Debug, Clone)]
pub struct TriageResult {
    pub outcomes: Vec<Outcome>,
    pub groups: Vec<GroupBucket>,
    pub other: Vec<usize>,
    pub bad_quality: Vec<usize>,
}

impl TriageResult {
    /// Total number of classified reads
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// (bucket name, count) rows: groups in definition order, then "others",
    /// then "bad_quality"
    #[must_use]
    pub fn counts(&self) -> Vec<(String, usize)> {
        let mut rows: Vec<(String, usize)> = self
            .groups
            .iter()
            .map(|bucket| (bucket.label.to_string(), bucket.members.len()))
            .collect();
        rows.push((OTHER_BUCKET.to_string(), self.other.len()));
        rows.push((BAD_QUALITY_BUCKET.to_string(), self.bad_quality.len()));
        rows
    }
}

/// Classify every read of a collection and partition the indices by outcome.
///
/// Classification runs in parallel: each read's outcome is written to its own
/// slot, indexed by read position, and the slots are folded sequentially in
/// input order afterwards. The partition is therefore identical regardless of
/// worker scheduling.
#[must_use]
pub fn triage_reads(
    reads: &[AlignedRead],
    index: &TargetIndex,
    config: &ClassifierConfig,
) -> TriageResult {
    let outcomes: Vec<Outcome> = reads
        .par_iter()
        .map(|read| classify(read, index, config))
        .collect();

    let mut groups: Vec<GroupBucket> = index
        .distinct_labels()
        .into_iter()
        .map(|label| GroupBucket {
            label: label.clone(),
            members: Vec::new(),
        })
        .collect();

    let slot_by_label: HashMap<GroupLabel, usize> = groups
        .iter()
        .enumerate()
        .map(|(slot, bucket)| (bucket.label.clone(), slot))
        .collect();

    let mut other = Vec::new();
    let mut bad_quality = Vec::new();

    for (read_index, outcome) in outcomes.iter().enumerate() {
        match outcome {
            Outcome::Grouped(label) => {
                let slot = slot_by_label
                    .get(label)
                    .copied()
                    .expect("classifier only returns labels present in the index");
                groups[slot].members.push(read_index);
            }
            Outcome::Other => other.push(read_index),
            Outcome::BadQuality => bad_quality.push(read_index),
        }
    }

    TriageResult {
        outcomes,
        groups,
        other,
        bad_quality,
    }
}
