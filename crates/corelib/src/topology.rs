//! Network topology: the undirected server graph.
//!
//! The topology is owned by the caller and only ever read by the core (to
//! build the [`DistanceMatrix`](crate::distance::DistanceMatrix)). Edges
//! carry a non-negative weight, defaulting to 1 for hop-count distances.
//!
//! Node enumeration order is insertion order. Solvers iterate nodes in this
//! order everywhere, which is what makes their tie-breaking deterministic.

use crate::error::{Error, Result};
use crate::node::NodeId;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Undirected, weighted server graph.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    graph: UnGraph<NodeId, f64>,
    index: HashMap<NodeId, NodeIndex>,
}

impl Topology {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a topology from unit-weight links, adding nodes as they appear.
    pub fn from_links<I>(links: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut topology = Self::new();
        for (a, b) in links {
            topology.add_link(a, b)?;
        }
        Ok(topology)
    }

    /// Add a node. Returns `false` if the id was already present.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        let ix = self.graph.add_node(id);
        self.index.insert(id, ix);
        true
    }

    /// Add an undirected edge with the given weight, inserting either
    /// endpoint if it is not yet a node.
    ///
    /// # Errors
    /// `InvalidParameter` if the weight is negative or not finite, or if the
    /// endpoints are the same node.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "edge {a}-{b} has invalid weight {weight}"
            )));
        }
        if a == b {
            return Err(Error::InvalidParameter(format!("self-loop on {a}")));
        }
        self.add_node(a);
        self.add_node(b);
        self.graph.add_edge(self.index[&a], self.index[&b], weight);
        Ok(())
    }

    /// Add an undirected unit-weight link (hop-count distances).
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        self.add_edge(a, b, 1.0)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `id` is a node of this topology.
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterate node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_weights().copied()
    }

    pub(crate) fn graph(&self) -> &UnGraph<NodeId, f64> {
        &self.graph
    }
}
