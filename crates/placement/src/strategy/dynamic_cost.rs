//! Dynamic-cost greedy variant.
//!
//! A local-ratio greedy akin to weighted set cover. Each outer iteration
//! recomputes, for every unsatisfied node, the set of *coverers* that could
//! satisfy it (other nodes within its QoS radius):
//!
//! - a node nobody can cover is forced into the placement (no choice);
//! - otherwise the node with the fewest coverers picks, among itself and its
//!   coverers, the candidate with the lowest replica cost per unsatisfied
//!   node it would cover.
//!
//! Exactly one replica is placed per iteration and the unsatisfied set is
//! then recomputed from scratch, so no node is ever examined against a stale
//! placement. Placements only grow and a satisfied node never becomes
//! unsatisfied again, which bounds the loop at one iteration per node.

use crate::solution::Solution;
use crate::strategy::PlacementStrategy;
use corelib::{DistanceMatrix, NodeId, PlacementProblem, Result};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Greedy placement by replica cost per unit of remaining coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicCost;

impl PlacementStrategy for DynamicCost {
    fn solve(&self, problem: &PlacementProblem<'_>) -> Result<Solution> {
        let distances = DistanceMatrix::build(problem.topology())?;
        let model = problem.cost_model(&distances);
        let replica_costs: HashMap<NodeId, f64> =
            model.replica_cost_table().into_iter().collect();
        let nodes: Vec<NodeId> = problem.topology().nodes().collect();

        let root = problem.root();
        let mut placement: BTreeSet<NodeId> = BTreeSet::from([root]);

        loop {
            let unsatisfied = problem.unsatisfied(&placement, &distances);
            if unsatisfied.is_empty() {
                break;
            }

            // Coverers of each unsatisfied node, in topology order.
            let coverers: Vec<(NodeId, Vec<NodeId>)> = unsatisfied
                .iter()
                .map(|&n| {
                    let radius = problem.qos(n);
                    let covering = nodes
                        .iter()
                        .copied()
                        .filter(|&u| u != n && distances[(n, u)] <= radius)
                        .collect();
                    (n, covering)
                })
                .collect();

            // A node with no coverers can only be satisfied by itself.
            if let Some(&(forced, _)) = coverers.iter().find(|(_, c)| c.is_empty()) {
                placement.insert(forced);
                debug!(variant = "dynamic-cost", replica = %forced, "forced uncoverable node");
                continue;
            }

            // How many unsatisfied nodes each candidate would cover.
            let mut covered_count: HashMap<NodeId, usize> = HashMap::new();
            for (_, covering) in &coverers {
                for &u in covering {
                    *covered_count.entry(u).or_insert(0) += 1;
                }
            }

            // The hardest-to-cover node chooses; `min_by_key` keeps the
            // first on ties, i.e. topology order.
            let Some((target, target_coverers)) = coverers
                .iter()
                .min_by_key(|(_, c)| c.len())
                .map(|(n, c)| (*n, c))
            else {
                break; // unreachable: `unsatisfied` is non-empty
            };

            // Candidate pool: the node itself or one of its coverers, rated
            // by replica cost per unsatisfied node covered. The target
            // itself is not in its own coverer list, so its coefficient
            // defaults to 1 when it covers no one else.
            let target_coef = covered_count.get(&target).copied().unwrap_or(1) as f64;
            let mut chosen = target;
            let mut best_ratio = replica_costs[&target] / target_coef;
            for &u in target_coverers {
                let ratio = replica_costs[&u] / covered_count[&u] as f64;
                if ratio < best_ratio {
                    chosen = u;
                    best_ratio = ratio;
                }
            }

            placement.insert(chosen);
            debug!(
                variant = "dynamic-cost",
                replica = %chosen,
                target = %target,
                ratio = best_ratio,
                "placed replica"
            );
        }

        placement.remove(&root);
        let cost = model.placement_cost(placement.iter().copied());
        Ok(Solution::new(placement.into_iter().collect(), cost))
    }

    fn name(&self) -> &'static str {
        "dynamic-cost"
    }
}
