use crate::core::read::{AlignedRead, CigarOpKind};
use crate::core::sequence::GAP;

/// Expand a read's stored subsequence along its edit script.
///
/// The result is the read as it appears against the reference axis: match and
/// insertion steps copy bases from the stored subsequence, deletion steps
/// emit gap placeholders, soft clips are consumed without output, and hard
/// clips touch nothing (their bases are already absent from the record). Any
/// other step kind is a no-op.
///
/// Returns `None` when the record carries no stored subsequence (e.g. an
/// unmapped or sequence-less record); callers treat this as unmatchable, not
/// as an error.
#[must_use]
pub fn reconstruct(read: &AlignedRead) -> Option<String> {
    let sequence = read.sequence.as_deref()?;
    let mut expanded = String::with_capacity(sequence.len());
    let mut cursor = 0usize;

    for op in &read.cigar {
        match op.kind {
            CigarOpKind::Match | CigarOpKind::Insertion => {
                // Clamp rather than panic on an edit script that overruns the
                // stored subsequence; the cursor still advances the full step.
                let end = cursor.saturating_add(op.len).min(sequence.len());
                if cursor < end {
                    expanded.push_str(&sequence[cursor..end]);
                }
                cursor = cursor.saturating_add(op.len);
            }
            CigarOpKind::Deletion => {
                for _ in 0..op.len {
                    expanded.push(GAP);
                }
            }
            CigarOpKind::SoftClip => {
                cursor = cursor.saturating_add(op.len);
            }
            CigarOpKind::HardClip => {}
            _ => {}
        }
    }

    Some(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::read::CigarOp;

    fn read(sequence: &str, cigar: &[(CigarOpKind, usize)]) -> AlignedRead {
        AlignedRead::new(
            "r1",
            Some(sequence.to_string()),
            cigar.iter().map(|&(kind, len)| CigarOp::new(kind, len)).collect(),
        )
    }

    #[test]
    fn test_deletion_becomes_gaps() {
        let read = read(
            "ACGTACGT",
            &[
                (CigarOpKind::Match, 4),
                (CigarOpKind::Deletion, 2),
                (CigarOpKind::Match, 4),
            ],
        );
        assert_eq!(reconstruct(&read).unwrap(), "ACGT--ACGT");
    }

    #[test]
    fn test_soft_clips_are_excluded() {
        let read = read(
            "NNACGTNN",
            &[
                (CigarOpKind::SoftClip, 2),
                (CigarOpKind::Match, 4),
                (CigarOpKind::SoftClip, 2),
            ],
        );
        assert_eq!(reconstruct(&read).unwrap(), "ACGT");
    }

    #[test]
    fn test_insertion_keeps_bases() {
        let read = read(
            "ACGTAACC",
            &[
                (CigarOpKind::Match, 4),
                (CigarOpKind::Insertion, 2),
                (CigarOpKind::Match, 2),
            ],
        );
        assert_eq!(reconstruct(&read).unwrap(), "ACGTAACC");
    }

    #[test]
    fn test_hard_clip_is_ignored() {
        let read = read(
            "ACGT",
            &[
                (CigarOpKind::HardClip, 3),
                (CigarOpKind::Match, 4),
                (CigarOpKind::HardClip, 5),
            ],
        );
        assert_eq!(reconstruct(&read).unwrap(), "ACGT");
    }

    #[test]
    fn test_skip_and_pad_are_noops() {
        let read = read(
            "ACGT",
            &[
                (CigarOpKind::Match, 2),
                (CigarOpKind::Skip, 10),
                (CigarOpKind::Pad, 2),
                (CigarOpKind::Match, 2),
            ],
        );
        assert_eq!(reconstruct(&read).unwrap(), "ACGT");
    }

    #[test]
    fn test_missing_sequence_yields_none() {
        let read = AlignedRead::new("r1", None, vec![CigarOp::new(CigarOpKind::Match, 4)]);
        assert!(reconstruct(&read).is_none());
    }

    #[test]
    fn test_overrunning_script_does_not_panic() {
        let read = read("ACGT", &[(CigarOpKind::Match, 10)]);
        assert_eq!(reconstruct(&read).unwrap(), "ACGT");
    }

    #[test]
    fn test_empty_cigar_yields_empty_sequence() {
        let read = read("ACGT", &[]);
        assert_eq!(reconstruct(&read).unwrap(), "");
    }
}
