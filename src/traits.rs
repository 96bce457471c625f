//! Core trait for dense-table dynamic programs.
//!
//! To run your recurrence through the dense-table engine, implement
//! [`TableProblem`] for a struct that captures your instance (sequences,
//! scoring parameters, dimensions).
//!
//! The trait encodes a layered view of the score table:
//! - There are `T = num_layers()` steps; layer `i` holds the table values for
//!   prefixes of length `i` of the primary sequence.
//! - A *frontier* is one complete layer (a DP row for pairwise problems, a
//!   2-D plane for three-sequence problems).
//! - `forward_step` maps the frontier at layer `i` to the frontier at
//!   layer `i + 1` using only fixed problem data.
//!
//! The engine either rolls a single frontier forward (score-only) or keeps
//! every layer, which materializes the full dense table for backtracking.

/// A dense-table dynamic program instance.
///
/// A `TableProblem` corresponds to a *fixed* instance: in practice, a struct
/// borrowing the input sequences plus any scoring parameters.
pub trait TableProblem {
    /// Representation of one table layer (row, plane, ...).
    type Frontier: Clone;

    /// Objective value read off the final frontier.
    ///
    /// Must support ordering so callers can compare outcomes.
    type Cost: Copy + Ord;

    /// Number of DP steps `T`.
    ///
    /// The engine initializes a frontier at layer 0, applies `forward_step`
    /// for `i = 0..T`, and reads the result off the frontier at layer `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0: the empty-prefix base case.
    fn init_frontier(&self) -> Self::Frontier;

    /// One DP step, from layer `layer` to `layer + 1`.
    ///
    /// Must depend only on `frontier` and fixed problem data, so that
    /// repeated runs over the same instance produce identical tables.
    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier;

    /// Extract the objective from the frontier at layer `T`.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;
}
