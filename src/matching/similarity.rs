/// Safely convert usize to f64 for ratio calculations
///
/// This function explicitly handles the precision loss that occurs when
/// converting usize to f64 on 64-bit platforms. Window and target lengths are
/// well within the safe range of f64 mantissa precision.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Symmetric similarity ratio in [0, 1] between two sequences.
///
/// Defined as `2 * LCS(a, b) / (len(a) + len(b))`, where LCS is the longest
/// common subsequence: 1.0 for identical strings, 0.0 for fully dissimilar
/// ones. Two empty strings are identical and score 1.0.
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let lcs = lcs_length(a.as_bytes(), b.as_bytes());
    2.0 * count_to_f64(lcs) / count_to_f64(total)
}

/// Length of the longest common subsequence, rolling-row dynamic programming.
fn lcs_length(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
