use crate::core::types::Orientation;
use crate::matching::similarity::similarity_ratio;
use crate::targets::store::{Target, TargetIndex};

/// Default permitted edit fraction relative to target length
pub const DEFAULT_TOLERANCE: f64 = 0.0;

/// Configuration for the matching engine
#[derive(Debug, Clone, Copy)]
pub struct MatcherConfig {
    /// Permitted edit fraction in [0, 1) relative to target length; a window
    /// is accepted when its similarity ratio reaches `1 - tolerance / len(target)`
    pub tolerance: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// A target satisfied by a read, with the orientation that satisfied it
#[derive(Debug, Clone, Copy)]
pub struct TargetMatch<'a> {
    pub target: &'a Target,
    pub orientation: Orientation,
}

/// Decides whether a reconstructed read sequence matches any indexed target.
///
/// Targets are tried in definition order; for each target the forward
/// sequence is tried before its reverse complement, exact containment before
/// the tolerant sliding window, and window offsets left to right. The first
/// acceptance wins — there is no best-of-all comparison, which keeps
/// classification reproducible for ambiguous reads.
pub struct Matcher<'a> {
    index: &'a TargetIndex,
    config: MatcherConfig,
}

impl<'a> Matcher<'a> {
    /// Create a matcher with the default configuration
    pub fn new(index: &'a TargetIndex) -> Self {
        Self {
            index,
            config: MatcherConfig::default(),
        }
    }

    /// Create a matcher with a custom configuration
    pub fn with_config(index: &'a TargetIndex, config: MatcherConfig) -> Self {
        Self { index, config }
    }

    /// Find the first target satisfied by `read_sequence`, or None.
    pub fn find_match(&self, read_sequence: &str) -> Option<TargetMatch<'a>> {
        for target in self.index.iter() {
            let oriented = [
                (Orientation::Forward, target.sequence.as_str()),
                (
                    Orientation::ReverseComplement,
                    target.reverse_complement.as_str(),
                ),
            ];

            for (orientation, sequence) in oriented {
                if read_sequence.contains(sequence) {
                    return Some(TargetMatch {
                        target,
                        orientation,
                    });
                }

                if self.window_match(read_sequence, sequence) {
                    return Some(TargetMatch {
                        target,
                        orientation,
                    });
                }
            }
        }

        None
    }

    /// Slide a window of the oriented target's length across the read and
    /// accept the first offset whose similarity ratio meets the threshold.
    fn window_match(&self, read_sequence: &str, oriented: &str) -> bool {
        // With tolerance 0 the threshold is 1.0, and a ratio of 1.0 means the
        // window equals the target, which exact containment already tested.
        if self.config.tolerance <= 0.0 {
            return false;
        }

        let window = oriented.len();
        if window == 0 || window > read_sequence.len() {
            return false;
        }

        #[allow(clippy::cast_precision_loss)]
        let threshold = 1.0 - self.config.tolerance / window as f64;

        for start in 0..=(read_sequence.len() - window) {
            let candidate = &read_sequence[start..start + window];
            if similarity_ratio(candidate, oriented) >= threshold {
                return true;
            }
        }

        false
    }
}
