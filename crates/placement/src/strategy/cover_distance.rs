//! Cover-distance greedy variant.
//!
//! Candidate-centric coverage: placing a replica at `i` covers every node
//! within `i`'s own QoS radius. The score rewards candidates that reach many
//! nodes and penalizes those far from the root (expensive to keep updated):
//!
//! `f(i) = |c(i)| + ((1 - alpha) / alpha) * d(root, i)`
//!
//! With `alpha = 0` the balance factor is infinite; every candidate at
//! positive distance from the root scores `+∞` and the framework falls back
//! to its first-seen tie-break.

use crate::solution::Solution;
use crate::strategy::greedy::{run_greedy, CoverageHeuristic, GreedyContext};
use crate::strategy::PlacementStrategy;
use corelib::{NodeId, PlacementProblem, Result};

/// Greedy placement by coverage size and distance from the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverDistance;

impl CoverageHeuristic for CoverDistance {
    fn name(&self) -> &'static str {
        "cover-distance"
    }

    /// Who would `candidate` reach: nodes within `qos(candidate)` of it.
    fn coverage_set(&self, ctx: &GreedyContext<'_>, candidate: NodeId) -> Vec<NodeId> {
        let radius = ctx.qos(candidate);
        ctx.nodes()
            .filter(|&v| ctx.distance(candidate, v) <= radius)
            .collect()
    }

    fn score(&self, ctx: &GreedyContext<'_>, candidate: NodeId, coverage: &[NodeId]) -> f64 {
        let alpha = ctx.problem().params().alpha;
        let from_root = ctx.distance(ctx.root(), candidate);
        let penalty = if alpha == 0.0 {
            if from_root > 0.0 {
                f64::INFINITY
            } else {
                0.0
            }
        } else {
            ((1.0 - alpha) / alpha) * from_root
        };
        coverage.len() as f64 + penalty
    }
}

impl PlacementStrategy for CoverDistance {
    fn solve(&self, problem: &PlacementProblem<'_>) -> Result<Solution> {
        run_greedy(problem, self)
    }

    fn name(&self) -> &'static str {
        "cover-distance"
    }
}
