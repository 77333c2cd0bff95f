//! Node identifiers for the placement topology.
//!
//! Nodes represent servers in the content-distribution network. They are
//! identified by a compact `NodeId` that is cheap to compare and hash; all
//! per-node attributes (storage cost, QoS requirement) live in the
//! [`PlacementProblem`](crate::problem::PlacementProblem), keyed by id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact identifier for a server in the topology.
///
/// Newtype over `u32` so comparisons and hashing are very fast. Ids are
/// opaque to the solvers; only the topology gives them meaning.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        NodeId(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_ordering_and_display() {
        assert!(NodeId(1) < NodeId(2));
        assert_eq!(NodeId(7).to_string(), "n7");
    }

    #[test]
    fn test_node_id_serde_round_trip() {
        let id = NodeId(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        assert_eq!(serde_json::from_str::<NodeId>(&json).unwrap(), id);
    }
}
