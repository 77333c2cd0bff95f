//! Storage-plus-update cost model.
//!
//! Cost is additive and separable across replicas: the cost of a placement
//! is the sum of per-replica costs, each depending only on that replica's
//! storage cost and its distance from the root. This separability is what
//! lets the exact solver score subsets cheaply and the greedy solvers score
//! candidates incrementally.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::node::NodeId;
use crate::problem::PlacementProblem;
use serde::{Deserialize, Serialize};

/// Scalar parameters of the cost model.
///
/// `alpha` balances storage cost against update-propagation cost; `mu`
/// scales update cost by the content's update rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParams {
    pub alpha: f64,
    pub mu: f64,
}

impl CostParams {
    /// Validate and construct cost parameters.
    ///
    /// # Errors
    /// `InvalidParameter` unless `alpha ∈ [0, 1]` and `mu ≥ 0` (both finite).
    pub fn new(alpha: f64, mu: f64) -> Result<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(Error::InvalidParameter(format!(
                "alpha must be in [0, 1], got {alpha}"
            )));
        }
        if !mu.is_finite() || mu < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "mu must be non-negative, got {mu}"
            )));
        }
        Ok(Self { alpha, mu })
    }
}

/// Pure per-replica and per-placement cost functions for one instance.
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    problem: &'a PlacementProblem<'a>,
    distances: &'a DistanceMatrix,
}

impl<'a> CostModel<'a> {
    pub(crate) fn new(problem: &'a PlacementProblem<'a>, distances: &'a DistanceMatrix) -> Self {
        Self { problem, distances }
    }

    /// Cost of holding one replica at `node`:
    /// `alpha * storage(node) + (1 - alpha) * mu * d(root, node)`.
    ///
    /// The root holds the original, not a replica, and costs 0.
    pub fn replica_cost(&self, node: NodeId) -> f64 {
        let root = self.problem.root();
        if node == root {
            return 0.0;
        }
        let CostParams { alpha, mu } = self.problem.params();
        alpha * self.problem.storage_cost(node)
            + (1.0 - alpha) * mu * self.distances[(root, node)]
    }

    /// Total cost of a replica set: sum of `replica_cost` over its members,
    /// with the root contributing nothing.
    pub fn placement_cost<I>(&self, replicas: I) -> f64
    where
        I: IntoIterator<Item = NodeId>,
    {
        replicas.into_iter().map(|r| self.replica_cost(r)).sum()
    }

    /// Per-node replica costs memoized for one solver invocation, in the
    /// topology's node order.
    pub fn replica_cost_table(&self) -> Vec<(NodeId, f64)> {
        self.problem
            .topology()
            .nodes()
            .map(|n| (n, self.replica_cost(n)))
            .collect()
    }
}
