//! Solver output: a replica set and its total cost.

use corelib::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A feasible replica placement and its storage-plus-update cost.
///
/// The root is never listed: it always holds the original and costs nothing.
/// Replicas are sorted by id, so equal placements compare equal regardless
/// of the order a solver discovered them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub replicas: Vec<NodeId>,
    pub cost: f64,
}

impl Solution {
    pub(crate) fn new(mut replicas: Vec<NodeId>, cost: f64) -> Self {
        replicas.sort_unstable();
        Self { replicas, cost }
    }

    /// The replica set as an ordered set.
    pub fn replica_set(&self) -> BTreeSet<NodeId> {
        self.replicas.iter().copied().collect()
    }

    /// Number of replicas (excluding the root).
    pub fn replica_count(&self) -> usize {
        self.replicas.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_serializes_for_callers() {
        let solution = Solution::new(vec![NodeId(2)], 1.5);
        let json = serde_json::to_string(&solution).unwrap();
        assert_eq!(json, r#"{"replicas":[2],"cost":1.5}"#);
    }

    #[test]
    fn test_replicas_are_canonically_sorted() {
        let a = Solution::new(vec![NodeId(3), NodeId(1)], 4.0);
        let b = Solution::new(vec![NodeId(1), NodeId(3)], 4.0);
        assert_eq!(a, b);
        assert_eq!(a.replicas, vec![NodeId(1), NodeId(3)]);
        assert_eq!(a.replica_count(), 2);
    }
}
