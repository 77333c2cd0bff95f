//! Generic greedy covering framework.
//!
//! All greedy variants share one loop: start from the root alone, and while
//! any node's requirement is unmet, place a replica at the unsatisfied
//! candidate with the best heuristic score, then recompute which nodes are
//! still unmet against the full node list (one new replica can satisfy
//! several nodes at once). The loop terminates in at most `n` iterations
//! because a placed candidate always satisfies at least itself.
//!
//! What varies per variant is injected through [`CoverageHeuristic`]: the
//! definition of a candidate's coverage set and the score derived from it.
//! Variants are data values implementing two pure functions, not a class
//! hierarchy.

use crate::solution::Solution;
use corelib::{DistanceMatrix, NodeId, PlacementProblem, Result};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Read-only per-invocation state shared with the heuristic callbacks.
///
/// Carries the problem, the distance matrix, and the per-node replica costs
/// memoized once for the whole solve.
pub struct GreedyContext<'a> {
    problem: &'a PlacementProblem<'a>,
    distances: &'a DistanceMatrix,
    replica_costs: HashMap<NodeId, f64>,
}

impl<'a> GreedyContext<'a> {
    pub fn problem(&self) -> &PlacementProblem<'a> {
        self.problem
    }

    pub fn root(&self) -> NodeId {
        self.problem.root()
    }

    pub fn distance(&self, u: NodeId, v: NodeId) -> f64 {
        self.distances[(u, v)]
    }

    pub fn qos(&self, node: NodeId) -> f64 {
        self.problem.qos(node)
    }

    /// Memoized `replica_cost` of the underlying cost model.
    pub fn replica_cost(&self, node: NodeId) -> f64 {
        self.replica_costs[&node]
    }

    /// All node ids, in the deterministic topology order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.problem.topology().nodes()
    }
}

/// A greedy variant: a coverage rule plus a scoring heuristic.
///
/// Both functions are pure; lower scores win, ties go to the candidate seen
/// first in topology order.
pub trait CoverageHeuristic {
    /// Variant name (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Nodes that would become satisfied if a replica were placed at
    /// `candidate`.
    fn coverage_set(&self, ctx: &GreedyContext<'_>, candidate: NodeId) -> Vec<NodeId>;

    /// Heuristic weight of `candidate` given its coverage set. Lower is
    /// better; `f64::INFINITY` marks a candidate that should not be chosen
    /// unless nothing better exists.
    fn score(&self, ctx: &GreedyContext<'_>, candidate: NodeId, coverage: &[NodeId]) -> f64;
}

/// Run the shared greedy loop with the given variant.
pub fn run_greedy(
    problem: &PlacementProblem<'_>,
    heuristic: &dyn CoverageHeuristic,
) -> Result<Solution> {
    let distances = DistanceMatrix::build(problem.topology())?;
    let model = problem.cost_model(&distances);
    let ctx = GreedyContext {
        problem,
        distances: &distances,
        replica_costs: model.replica_cost_table().into_iter().collect(),
    };

    let root = problem.root();
    let mut placement: BTreeSet<NodeId> = BTreeSet::from([root]);
    let mut unsatisfied = problem.unsatisfied(&placement, &distances);

    while !unsatisfied.is_empty() {
        // First candidate is the incumbent; only a strictly smaller score
        // replaces it. That keeps ties deterministic and copes with all-∞
        // scores.
        let mut chosen = unsatisfied[0];
        let coverage = heuristic.coverage_set(&ctx, chosen);
        let mut best_score = heuristic.score(&ctx, chosen, &coverage);
        for &candidate in unsatisfied.iter().skip(1) {
            let coverage = heuristic.coverage_set(&ctx, candidate);
            let score = heuristic.score(&ctx, candidate, &coverage);
            if score < best_score {
                chosen = candidate;
                best_score = score;
            }
        }

        placement.insert(chosen);
        unsatisfied = problem.unsatisfied(&placement, &distances);
        debug!(
            variant = heuristic.name(),
            replica = %chosen,
            score = best_score,
            remaining = unsatisfied.len(),
            "placed replica"
        );
    }

    placement.remove(&root);
    let cost = model.placement_cost(placement.iter().copied());
    Ok(Solution::new(placement.into_iter().collect(), cost))
}
