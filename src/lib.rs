//! Dense-table dynamic programming for sequence comparison.
//!
//! This crate computes optimal global alignment scores and longest-common-
//! subsequence lengths by filling dense score tables.
//!
//! ## Core idea
//! 1. Model your recurrence as a *layered* DP: layer `i` is the table slice
//!    for prefixes of length `i` of the primary sequence.
//! 2. Implement the [`TableProblem`] trait for that recurrence.
//! 3. Let [`TableEngine`] drive the forward pass: rolling for score-only
//!    queries, or retaining every layer to materialize the dense table for
//!    backtracking.
//!
//! Every call allocates its own table (proportional to the product of the
//! input lengths) and discards it afterwards; there is no shared state, so
//! independent invocations can run concurrently.
//!
//! ## Quick start
//! ```
//! use dense_dp::{pairwise_alignment_score, triple_lcs_length};
//!
//! // Zero penalties turn global alignment into plain LCS length.
//! assert_eq!(pairwise_alignment_score(b"ACTG", b"AG", 0, 0), 2);
//! assert_eq!(triple_lcs_length(b"AAAA", b"AAAA", b"AAAA"), 4);
//! ```
//!
//! ## Built-in problems
//! The `problems` module contains the supported recurrences:
//! - Global pairwise alignment with additive match/mismatch/gap scoring
//!   (Needleman–Wunsch style), including path reconstruction.
//! - Pairwise LCS (zero-penalty alignment) with subsequence extraction.
//! - Three-sequence LCS over a 3-D table.
//!
//! They also serve as templates for plugging further dense-table recurrences
//! into the engine.

pub mod engine;
pub mod problems;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::engine::TableEngine;
pub use crate::problems::lcs::{lcs, lcs_length};
pub use crate::problems::pairwise::{pairwise_alignment_score, PairwiseAlignment, Scoring};
pub use crate::problems::triple_lcs::{triple_lcs_length, TripleLcs};
pub use crate::table::{ScoreTable, ScoreTable3};
pub use crate::traits::TableProblem;
