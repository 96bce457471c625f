//! Three-sequence longest common subsequence over a dense 3-D table.
//!
//! Layers are positions in `s`; the frontier at layer `i` is the full 2-D
//! plane of LCS lengths for `s[0..i]` against every prefix pair of `t` and
//! `u`. All boundary planes (any index zero) stay at zero.
//!
//! Recurrence, for `i, j, k >= 1`: when `s[i-1]`, `t[j-1]`, `u[k-1]` are all
//! equal, the cell is the `(i-1, j-1, k-1)` diagonal plus one; otherwise it
//! is the maximum over the three neighbors reached by decrementing exactly
//! one index.

use crate::engine::TableEngine;
use crate::table::ScoreTable3;
use crate::traits::TableProblem;

/// A fixed three-way LCS instance.
#[derive(Clone)]
pub struct TripleLcs<'a> {
    pub s: &'a [u8],
    pub t: &'a [u8],
    pub u: &'a [u8],
}

/// One DP plane: LCS lengths for all prefix pairs of `t` and `u` at a fixed
/// prefix of `s`. Flat row-major, `cols = u.len() + 1`.
#[derive(Clone, Debug)]
pub struct PlaneFrontier {
    pub scores: Vec<u32>,
    pub cols: usize,
}

impl PlaneFrontier {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            scores: vec![0; rows * cols],
            cols,
        }
    }

    #[inline]
    fn at(&self, j: usize, k: usize) -> u32 {
        self.scores[j * self.cols + k]
    }

    #[inline]
    fn set(&mut self, j: usize, k: usize, value: u32) {
        self.scores[j * self.cols + k] = value;
    }
}

impl<'a> TripleLcs<'a> {
    pub fn new(s: &'a [u8], t: &'a [u8], u: &'a [u8]) -> Self {
        Self { s, t, u }
    }

    fn m(&self) -> usize {
        self.t.len()
    }

    fn p(&self) -> usize {
        self.u.len()
    }

    /// Length of the longest subsequence common to all three sequences.
    pub fn length(&self) -> u32 {
        TableEngine::new(self.clone()).score()
    }

    /// The full `(|s| + 1) × (|t| + 1) × (|u| + 1)` score table.
    pub fn table(&self) -> ScoreTable3<u32> {
        let layers = TableEngine::new(self.clone()).fill();
        ScoreTable3::from_layers(
            layers.into_iter().map(|f| f.scores).collect(),
            self.m() + 1,
            self.p() + 1,
        )
    }
}

impl TableProblem for TripleLcs<'_> {
    type Frontier = PlaneFrontier;
    type Cost = u32;

    fn num_layers(&self) -> usize {
        self.s.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        // i = 0: nothing of s consumed, whole plane is zero.
        PlaneFrontier::zeroed(self.m() + 1, self.p() + 1)
    }

    fn forward_step(&self, layer: usize, prev: &Self::Frontier) -> Self::Frontier {
        let ch = self.s[layer];
        let m = self.m();
        let p = self.p();
        let mut next = PlaneFrontier::zeroed(m + 1, p + 1);

        for j in 1..=m {
            for k in 1..=p {
                let value = if self.t[j - 1] == ch && self.u[k - 1] == ch {
                    prev.at(j - 1, k - 1) + 1
                } else {
                    prev.at(j, k).max(next.at(j - 1, k)).max(next.at(j, k - 1))
                };
                next.set(j, k, value);
            }
        }

        next
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost {
        frontier_t.at(self.m(), self.p())
    }
}

/// Length of the longest common subsequence of three sequences.
pub fn triple_lcs_length(s1: &[u8], s2: &[u8], s3: &[u8]) -> u32 {
    TripleLcs::new(s1, s2, s3).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences() {
        assert_eq!(triple_lcs_length(b"AAAA", b"AAAA", b"AAAA"), 4);
        assert_eq!(triple_lcs_length(b"ACGT", b"ACGT", b"ACGT"), 4);
    }

    #[test]
    fn empty_inputs_yield_zero() {
        assert_eq!(triple_lcs_length(b"", b"", b""), 0);
        assert_eq!(triple_lcs_length(b"ABC", b"", b"ABC"), 0);
        assert_eq!(triple_lcs_length(b"", b"XYZ", b"XYZ"), 0);
    }

    #[test]
    fn disjoint_alphabets_share_nothing() {
        assert_eq!(triple_lcs_length(b"AAA", b"CCC", b"GGG"), 0);
    }

    #[test]
    fn mixed_example() {
        // Only "GT" is common to all three.
        assert_eq!(triple_lcs_length(b"ACGT", b"AGT", b"CGT"), 2);
    }

    #[test]
    fn table_corner_matches_len() {
        let problem = TripleLcs::new(b"ACGT", b"AGT", b"CGT");
        let tab = problem.table();
        assert_eq!(tab.dims(), (5, 4, 4));
        assert_eq!(tab.at(4, 3, 3), problem.length());
        // Boundary planes stay zero.
        assert_eq!(tab.at(0, 3, 3), 0);
        assert_eq!(tab.at(4, 0, 3), 0);
        assert_eq!(tab.at(4, 3, 0), 0);
    }
}
