//! Example: global pairwise alignment over the dense table.
//!
//! Run with:
//! `cargo run --example pairwise`

use dense_dp::{PairwiseAlignment, Scoring};

fn main() {
    let s = b"GATTACA";
    let t = b"GCATGCU";

    let problem = PairwiseAlignment::new(s, t, Scoring::new(-1, -1));
    println!("alignment score: {}", problem.score());

    let path = problem.path();
    println!("path length: {}", path.len());

    // Render the two aligned rows from the path.
    let (top, bottom) = render_alignment(s, t, &path);
    println!("{top}");
    println!("{bottom}");
}

/// Expand an alignment path into two gap-padded rows.
fn render_alignment(s: &[u8], t: &[u8], path: &[(usize, usize)]) -> (String, String) {
    let mut top = String::new();
    let mut bottom = String::new();
    for w in path.windows(2) {
        let (a, b) = (w[0], w[1]);
        if b.0 == a.0 + 1 && b.1 == a.1 + 1 {
            top.push(s[a.0] as char);
            bottom.push(t[a.1] as char);
        } else if b.0 == a.0 + 1 {
            top.push(s[a.0] as char);
            bottom.push('-');
        } else {
            top.push('-');
            bottom.push(t[a.1] as char);
        }
    }
    (top, bottom)
}
