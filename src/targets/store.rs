use std::collections::HashMap;
use thiserror::Error;

use crate::core::sequence::reverse_complement;
use crate::core::types::GroupLabel;
use crate::utils::validation::{check_target_limit, normalize_sequence};

#[derive(Error, Debug)]
pub enum TargetError {
    #[error("Duplicate target sequence '{sequence}' (labels '{first}' and '{second}')")]
    DuplicateSequence {
        sequence: String,
        first: String,
        second: String,
    },

    #[error("Target '{label}' has an invalid sequence '{sequence}': expected bases A, C, G, T, or N")]
    InvalidSequence { label: String, sequence: String },

    #[error("Too many targets: {0} exceeds maximum allowed (10000)")]
    TooManyTargets(usize),
}

/// A named target sequence with its precomputed reverse complement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Group label reads matching this target are routed to
    pub label: GroupLabel,

    /// Canonical sequence, uppercase over {A,C,G,T,N}
    pub sequence: String,

    /// Reverse complement of `sequence`, computed once at index build time
    pub reverse_complement: String,
}

/// The ordered set of target sequences reads are matched against
///
/// Built once from the definition list and read-only thereafter, so it can be
/// shared across classification workers without synchronization. Iteration
/// order is the definition order, which is significant: the first satisfying
/// target wins during matching.
#[derive(Debug, Clone, Default)]
pub struct TargetIndex {
    targets: Vec<Target>,
    sequence_to_index: HashMap<String, usize>,
}

impl TargetIndex {
    /// Build an index from ordered (label, sequence) pairs.
    ///
    /// Sequences are normalized to uppercase on ingestion. Two entries with
    /// the same label are allowed and feed the same group; two entries with
    /// the same sequence are not.
    ///
    /// # Errors
    ///
    /// Returns `TargetError::InvalidSequence` if a sequence is empty or
    /// contains a character outside {A,C,G,T,N} (case-insensitive),
    /// `TargetError::DuplicateSequence` if the same sequence string appears
    /// twice, or `TargetError::TooManyTargets` if the limit is exceeded.
    pub fn from_entries<I>(entries: I) -> Result<Self, TargetError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut index = Self::default();

        for (label, raw_sequence) in entries {
            if check_target_limit(index.targets.len()).is_some() {
                return Err(TargetError::TooManyTargets(index.targets.len() + 1));
            }

            let sequence = normalize_sequence(&raw_sequence).ok_or_else(|| {
                TargetError::InvalidSequence {
                    label: label.clone(),
                    sequence: raw_sequence.clone(),
                }
            })?;

            if let Some(&existing) = index.sequence_to_index.get(&sequence) {
                return Err(TargetError::DuplicateSequence {
                    sequence,
                    first: index.targets[existing].label.to_string(),
                    second: label,
                });
            }

            index
                .sequence_to_index
                .insert(sequence.clone(), index.targets.len());
            index.targets.push(Target {
                label: GroupLabel::new(label),
                reverse_complement: reverse_complement(&sequence),
                sequence,
            });
        }

        Ok(index)
    }

    /// Targets in definition order
    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    /// Distinct group labels in first-appearance order
    #[must_use]
    pub fn distinct_labels(&self) -> Vec<&GroupLabel> {
        let mut seen = Vec::new();
        for target in &self.targets {
            if !seen.contains(&&target.label) {
                seen.push(&target.label);
            }
        }
        seen
    }

    /// Number of targets in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
