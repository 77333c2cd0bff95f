//! QoS satisfaction predicates.
//!
//! Pure, side-effect-free checks of a candidate placement against every
//! node's requirement, always evaluated fresh against the current placement.
//! A replica trivially satisfies itself (`d(n, n) = 0` and requirements are
//! non-negative), which is what guarantees the greedy solvers terminate.

use crate::distance::DistanceMatrix;
use crate::node::NodeId;
use crate::problem::PlacementProblem;
use std::collections::BTreeSet;

impl PlacementProblem<'_> {
    /// Whether `node`'s requirement is met by `placement`: membership, or a
    /// replica within `qos(node)`.
    pub fn is_satisfied(
        &self,
        node: NodeId,
        placement: &BTreeSet<NodeId>,
        distances: &DistanceMatrix,
    ) -> bool {
        if placement.contains(&node) {
            return true;
        }
        let requirement = self.qos(node);
        placement
            .iter()
            .any(|&replica| distances[(node, replica)] <= requirement)
    }

    /// Whether every node of the topology is satisfied by `placement`.
    pub fn all_satisfied(&self, placement: &BTreeSet<NodeId>, distances: &DistanceMatrix) -> bool {
        self.topology()
            .nodes()
            .all(|node| self.is_satisfied(node, placement, distances))
    }

    /// Nodes from `nodes` whose requirement `placement` does not meet,
    /// preserving the input order.
    pub fn unsatisfied_from(
        &self,
        nodes: impl IntoIterator<Item = NodeId>,
        placement: &BTreeSet<NodeId>,
        distances: &DistanceMatrix,
    ) -> Vec<NodeId> {
        nodes
            .into_iter()
            .filter(|&node| !self.is_satisfied(node, placement, distances))
            .collect()
    }

    /// Unsatisfied nodes over the whole topology, in topology order.
    pub fn unsatisfied(
        &self,
        placement: &BTreeSet<NodeId>,
        distances: &DistanceMatrix,
    ) -> Vec<NodeId> {
        self.unsatisfied_from(self.topology().nodes(), placement, distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostParams;
    use crate::topology::Topology;
    use std::collections::HashMap;

    fn path4() -> Topology {
        Topology::from_links([
            (NodeId(0), NodeId(1)),
            (NodeId(1), NodeId(2)),
            (NodeId(2), NodeId(3)),
        ])
        .unwrap()
    }

    fn uniform(n: u32, value: f64) -> HashMap<NodeId, f64> {
        (0..n).map(|i| (NodeId(i), value)).collect()
    }

    fn placement(ids: &[u32]) -> BTreeSet<NodeId> {
        ids.iter().map(|&i| NodeId(i)).collect()
    }

    #[test]
    fn test_member_is_always_satisfied() {
        let topology = path4();
        let problem = PlacementProblem::new(
            &topology,
            uniform(4, 1.0),
            uniform(4, 0.0),
            NodeId(0),
            CostParams::new(0.5, 1.0).unwrap(),
        )
        .unwrap();
        let distances = DistanceMatrix::build(&topology).unwrap();

        assert!(problem.is_satisfied(NodeId(3), &placement(&[0, 3]), &distances));
    }

    #[test]
    fn test_nearest_replica_within_requirement() {
        let topology = path4();
        let mut qos = uniform(4, 0.0);
        qos.insert(NodeId(2), 1.0);
        let problem = PlacementProblem::new(
            &topology,
            uniform(4, 1.0),
            qos,
            NodeId(0),
            CostParams::new(0.5, 1.0).unwrap(),
        )
        .unwrap();
        let distances = DistanceMatrix::build(&topology).unwrap();

        // Node 2 tolerates distance 1; replica at 1 is enough, root alone is not.
        assert!(problem.is_satisfied(NodeId(2), &placement(&[0, 1]), &distances));
        assert!(!problem.is_satisfied(NodeId(2), &placement(&[0]), &distances));
    }

    #[test]
    fn test_unsatisfied_preserves_order() {
        let topology = path4();
        let problem = PlacementProblem::new(
            &topology,
            uniform(4, 1.0),
            uniform(4, 0.0),
            NodeId(0),
            CostParams::new(0.5, 1.0).unwrap(),
        )
        .unwrap();
        let distances = DistanceMatrix::build(&topology).unwrap();

        // qos = 0 everywhere: only placement members are satisfied.
        let missing = problem.unsatisfied(&placement(&[0, 2]), &distances);
        assert_eq!(missing, vec![NodeId(1), NodeId(3)]);
        assert!(!problem.all_satisfied(&placement(&[0, 2]), &distances));
        assert!(problem.all_satisfied(&placement(&[0, 1, 2, 3]), &distances));
    }
}
