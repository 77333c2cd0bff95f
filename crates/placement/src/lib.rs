//! Replica placement solvers for QoS-constrained content distribution.
//!
//! Given a connected server topology, per-node storage costs and QoS
//! requirements, a root holding the authoritative copy, and the cost-model
//! parameters `alpha`/`mu`, the solvers here compute a replica set such that
//! every node reaches some copy within its requirement, at (or near) minimum
//! storage-plus-update cost:
//!
//! - [`ExhaustiveSearch`] proves the optimum by subset enumeration
//! - [`CoverDistance`], [`CoverCost`], [`DynamicCost`] approximate it in
//!   polynomial time with different greedy covering rules
//!
//! All solvers are deterministic and return a [`Solution`] that never lists
//! the root.

pub mod solution;
pub mod strategy;

pub use solution::Solution;
pub use strategy::greedy::{run_greedy, CoverageHeuristic, GreedyContext};
pub use strategy::{
    CoverCost, CoverDistance, DynamicCost, ExhaustiveSearch, PlacementStrategy,
};

use corelib::{PlacementProblem, Result};

/// Provably optimal placement by exhaustive subset enumeration.
pub fn solve_exact(problem: &PlacementProblem<'_>) -> Result<Solution> {
    ExhaustiveSearch::new().solve(problem)
}

/// Greedy placement scoring candidates by coverage size and distance from
/// the root.
pub fn solve_cover_distance(problem: &PlacementProblem<'_>) -> Result<Solution> {
    CoverDistance.solve(problem)
}

/// Greedy placement scoring candidates by replica cost per node covered.
pub fn solve_cover_cost(problem: &PlacementProblem<'_>) -> Result<Solution> {
    CoverCost.solve(problem)
}

/// Set-cover-style greedy placement over per-node coverer counts.
pub fn solve_dynamic_cost(problem: &PlacementProblem<'_>) -> Result<Solution> {
    DynamicCost.solve(problem)
}
