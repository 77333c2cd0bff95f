//! Distance oracle: all-pairs shortest-path distances over the topology.
//!
//! Built once per optimization call and immutable afterward. Construction
//! runs Dijkstra from every node, so it is correct for any connected,
//! undirected graph, weighted or unweighted. A disconnected topology fails
//! construction, so no infinity ever leaks into downstream cost computations.

use crate::error::{Error, Result};
use crate::node::NodeId;
use crate::topology::Topology;
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use std::collections::HashMap;
use std::ops::Index;
use tracing::debug;

/// Dense matrix of shortest-path distances between every pair of nodes.
///
/// Invariants: `d(n, n) = 0` for every node, the matrix is symmetric, and
/// the triangle inequality holds (all inherited from shortest paths).
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    order: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    dist: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute all-pairs shortest-path distances for `topology`.
    ///
    /// # Errors
    /// `DisconnectedTopology` naming the first unreachable pair found.
    pub fn build(topology: &Topology) -> Result<Self> {
        let order: Vec<NodeId> = topology.nodes().collect();
        let n = order.len();
        let mut dist = vec![0.0; n * n];

        for (i, &from) in order.iter().enumerate() {
            let reached = dijkstra(
                topology.graph(),
                NodeIndex::new(i),
                None,
                |edge| *edge.weight(),
            );
            for (j, &to) in order.iter().enumerate() {
                match reached.get(&NodeIndex::new(j)) {
                    Some(&d) => dist[i * n + j] = d,
                    None => return Err(Error::DisconnectedTopology { from, to }),
                }
            }
        }

        let index = order.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        debug!(nodes = n, "distance matrix built");
        Ok(Self { order, index, dist })
    }

    /// Shortest-path distance from `u` to `v`, or `None` if either id is not
    /// part of the topology this matrix was built from.
    pub fn get(&self, u: NodeId, v: NodeId) -> Option<f64> {
        let i = *self.index.get(&u)?;
        let j = *self.index.get(&v)?;
        Some(self.dist[i * self.order.len() + j])
    }

    /// Number of nodes covered by the matrix.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Node ids in the same deterministic order the topology enumerates them.
    pub fn nodes(&self) -> &[NodeId] {
        &self.order
    }
}

/// Indexing sugar for ids known to belong to the matrix's topology.
///
/// Panics on foreign ids, like slice indexing; use [`DistanceMatrix::get`]
/// when membership is not guaranteed.
impl Index<(NodeId, NodeId)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (u, v): (NodeId, NodeId)) -> &f64 {
        let i = self.index[&u];
        let j = self.index[&v];
        &self.dist[i * self.order.len() + j]
    }
}
