//! Generic dense-table DP engine.
//!
//! The engine drives the forward pass of a [`TableProblem`] in one of two
//! regimes:
//! - [`score`](TableEngine::score) rolls a single frontier from layer 0 to
//!   layer `T`, keeping O(W) values live (W = frontier width), and reads the
//!   objective off the final frontier.
//! - [`fill`](TableEngine::fill) retains every frontier, which is exactly the
//!   dense score table: `T + 1` layers covering all prefix lengths of the
//!   primary sequence. Problems use it for backtracking.
//!
//! Each call allocates its own frontiers and touches no shared state, so
//! independent invocations are safe to run concurrently.

use crate::traits::TableProblem;

/// Dense-table DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use dense_dp::{problems::pairwise::PairwiseAlignment, Scoring, TableEngine};
///
/// let problem = PairwiseAlignment::new(b"ACTG", b"AG", Scoring::LCS);
/// let engine = TableEngine::new(problem);
/// assert_eq!(engine.score(), 2);
/// ```
pub struct TableEngine<P: TableProblem> {
    problem: P,
}

impl<P: TableProblem> TableEngine<P> {
    /// Create an engine over a fixed problem instance.
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Expose mutable reference if callers need to adjust the instance.
    pub fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    /// Compute the objective with a rolling frontier.
    ///
    /// Only two layers are ever live; nothing is retained after the call.
    pub fn score(&self) -> P::Cost {
        let t = self.problem.num_layers();
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("score", layers = t);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = self.problem.init_frontier();
        for layer in 0..t {
            frontier = self.problem.forward_step(layer, &frontier);
        }
        self.problem.extract_cost(&frontier)
    }

    /// Build the dense table: every frontier from layer 0 through layer `T`.
    ///
    /// The returned vector has length `T + 1`; index `i` is the frontier for
    /// prefixes of length `i`. The table belongs to the caller and is
    /// discarded when dropped.
    pub fn fill(&self) -> Vec<P::Frontier> {
        let t = self.problem.num_layers();
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill_table", layers = t);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut layers = Vec::with_capacity(t + 1);
        layers.push(self.problem.init_frontier());
        for layer in 0..t {
            #[cfg(feature = "tracing")]
            let step_span = tracing::trace_span!("forward_step", layer);
            #[cfg(feature = "tracing")]
            let _step = step_span.enter();
            let next = self.problem.forward_step(layer, &layers[layer]);
            layers.push(next);
        }
        layers
    }
}
