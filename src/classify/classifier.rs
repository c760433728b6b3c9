use crate::core::read::AlignedRead;
use crate::core::types::Outcome;
use crate::matching::engine::{Matcher, MatcherConfig, DEFAULT_TOLERANCE};
use crate::matching::reconstruct::reconstruct;
use crate::targets::store::TargetIndex;

/// Default minimum mapping quality for a read to be matched at all
pub const DEFAULT_QUALITY_THRESHOLD: u8 = 40;

/// Configuration for classifying reads
#[derive(Debug, Clone, Copy)]
pub struct ClassifierConfig {
    /// Reads below this mapping quality go to "bad_quality" unmatched
    pub quality_threshold: u8,

    /// Permitted edit fraction for the tolerant window search
    pub tolerance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            quality_threshold: DEFAULT_QUALITY_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Classify one read into exactly one terminal outcome.
///
/// The quality gate precedes reconstruction and matching: a low-quality read
/// is never matched, even if its sequence would satisfy a target exactly.
/// Reads whose record carries no stored subsequence, and reads matching no
/// target, classify as "other". This function is pure; accumulating reads
/// into group containers belongs to the calling pipeline.
#[must_use]
pub fn classify(read: &AlignedRead, index: &TargetIndex, config: &ClassifierConfig) -> Outcome {
    if read.mapping_quality < config.quality_threshold {
        return Outcome::BadQuality;
    }

    let Some(sequence) = reconstruct(read) else {
        return Outcome::Other;
    };

    let matcher = Matcher::with_config(
        index,
        MatcherConfig {
            tolerance: config.tolerance,
        },
    );

    match matcher.find_match(&sequence) {
        Some(matched) => Outcome::Grouped(matched.target.label.clone()),
        None => Outcome::Other,
    }
}
