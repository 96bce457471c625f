use dense_dp::{lcs_length, pairwise_alignment_score, PairwiseAlignment, Scoring};
use proptest::prelude::*;

fn path_monotone(path: &[(usize, usize)]) -> bool {
    path.windows(2).all(|w| {
        let (a, b) = (w[0], w[1]);
        let di = b.0 as isize - a.0 as isize;
        let dj = b.1 as isize - a.1 as isize;
        matches!((di, dj), (1, 0) | (0, 1) | (1, 1))
    })
}

/// Independent full-table reference for the pairwise score.
fn reference_score(s: &[u8], t: &[u8], mismatch: i32, gap: i32) -> i32 {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0i32; m + 1]; n + 1];
    for i in 1..=n {
        dp[i][0] = dp[i - 1][0] + gap;
    }
    for j in 1..=m {
        dp[0][j] = dp[0][j - 1] + gap;
    }
    for i in 1..=n {
        for j in 1..=m {
            let pair = if s[i - 1] == t[j - 1] { 1 } else { mismatch };
            let diag = dp[i - 1][j - 1] + pair;
            let up = dp[i - 1][j] + gap;
            let left = dp[i][j - 1] + gap;
            dp[i][j] = diag.max(up).max(left);
        }
    }
    dp[n][m]
}

/// Independent reference for LCS length.
fn reference_lcs_len(s: &[u8], t: &[u8]) -> u32 {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            let up = dp[i - 1][j];
            let left = dp[i][j - 1];
            let diag = dp[i - 1][j - 1] + u32::from(s[i - 1] == t[j - 1]);
            dp[i][j] = up.max(left).max(diag);
        }
    }
    dp[n][m]
}

proptest! {
    #[test]
    fn score_matches_full_dp(
        a in "[ACGT]{0,12}",
        b in "[ACGT]{0,12}",
        mismatch in -3i32..=0,
        gap in -3i32..=0,
    ) {
        let s = a.as_bytes();
        let t = b.as_bytes();
        prop_assert_eq!(
            pairwise_alignment_score(s, t, mismatch, gap),
            reference_score(s, t, mismatch, gap)
        );
    }

    #[test]
    fn zero_penalties_equal_lcs_length(a in "[ACGT]{0,12}", b in "[ACGT]{0,12}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        prop_assert_eq!(
            pairwise_alignment_score(s, t, 0, 0) as u32,
            reference_lcs_len(s, t)
        );
        prop_assert_eq!(lcs_length(s, t), reference_lcs_len(s, t));
    }

    #[test]
    fn path_is_valid_and_scores_consistently(
        a in "[ACGT]{1,10}",
        b in "[ACGT]{1,10}",
        mismatch in -2i32..=0,
        gap in -2i32..=0,
    ) {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let problem = PairwiseAlignment::new(s, t, Scoring::new(mismatch, gap));
        let path = problem.path();
        prop_assert_eq!(path.first().copied(), Some((0, 0)));
        prop_assert_eq!(path.last().copied(), Some((s.len(), t.len())));
        prop_assert!(path_monotone(&path));
    }

    #[test]
    fn repeated_runs_are_identical(a in "[ACGT]{0,10}", b in "[ACGT]{0,10}") {
        let s = a.as_bytes();
        let t = b.as_bytes();
        let first = pairwise_alignment_score(s, t, -1, -2);
        let second = pairwise_alignment_score(s, t, -1, -2);
        prop_assert_eq!(first, second);
    }
}
