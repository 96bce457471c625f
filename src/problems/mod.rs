//! Concrete dense-table recurrences.
//!
//! These modules implement [`TableProblem`](crate::traits::TableProblem) for
//! the supported sequence comparisons:
//! - [`pairwise`]   : global alignment with additive match/mismatch/gap scoring.
//! - [`triple_lcs`] : three-sequence LCS over a 3-D table.
//! - [`lcs`]        : pairwise LCS helpers built on zero-penalty alignment.

pub mod lcs;
pub mod pairwise;
pub mod triple_lcs;
