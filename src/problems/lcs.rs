//! Pairwise LCS helpers built on zero-penalty alignment.
//!
//! Under [`Scoring::LCS`] the alignment score counts matched characters, so
//! the table corner is the LCS length and the matched diagonal steps of any
//! optimal alignment path spell out one longest common subsequence.

use crate::problems::pairwise::{PairwiseAlignment, Scoring};

/// Length of the longest common subsequence of `s` and `t`.
pub fn lcs_length(s: &[u8], t: &[u8]) -> u32 {
    let score = PairwiseAlignment::new(s, t, Scoring::LCS).score();
    debug_assert!(score >= 0);
    score as u32
}

/// One longest common subsequence of `s` and `t`.
pub fn lcs(s: &[u8], t: &[u8]) -> Vec<u8> {
    let path = PairwiseAlignment::new(s, t, Scoring::LCS).path();
    let mut out = Vec::new();
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        // A diagonal step over equal characters is part of the LCS.
        if b.0 == a.0 + 1 && b.1 == a.1 + 1 && s[a.0] == t[a.1] {
            out.push(s[a.0]);
        }
    }
    out
}
