//! Example: three-sequence LCS over the dense 3-D table.
//!
//! Run with:
//! `cargo run --example triple_lcs`

use dense_dp::{lcs_length, triple_lcs_length};

fn main() {
    let s = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
    let t = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";
    let u = b"ATCGTCGGTTGCGCCGGAATGCTGAA";

    println!(
        "pairwise LCS length (s, t): {}",
        lcs_length(s, t)
    );
    println!(
        "triple LCS length (s, t, u): {}",
        triple_lcs_length(s, t, u)
    );
}
