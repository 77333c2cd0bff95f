//! A fully validated replica-placement instance.
//!
//! Bundles the caller's topology, per-node storage costs and QoS
//! requirements, the root node, and the cost-model parameters. Construction
//! validates everything up front, so solvers never re-check inputs and every
//! per-node lookup afterwards is infallible.

use crate::cost::{CostModel, CostParams};
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::node::NodeId;
use crate::topology::Topology;
use std::collections::HashMap;

/// Immutable inputs for one optimization run.
///
/// The topology stays owned by the caller; the problem only reads it.
#[derive(Debug, Clone)]
pub struct PlacementProblem<'a> {
    topology: &'a Topology,
    storage: HashMap<NodeId, f64>,
    qos: HashMap<NodeId, f64>,
    root: NodeId,
    params: CostParams,
}

impl<'a> PlacementProblem<'a> {
    /// Validate and construct a placement instance.
    ///
    /// # Errors
    /// - `InvalidRoot` if `root` is not a node of `topology`.
    /// - `InvalidParameter` if either mapping misses a node or carries a
    ///   negative (or non-finite) value. `params` are validated by
    ///   [`CostParams::new`] before they get here.
    pub fn new(
        topology: &'a Topology,
        storage_costs: HashMap<NodeId, f64>,
        qos_requirements: HashMap<NodeId, f64>,
        root: NodeId,
        params: CostParams,
    ) -> Result<Self> {
        if !topology.contains(root) {
            return Err(Error::InvalidRoot(root));
        }
        for node in topology.nodes() {
            check_total(&storage_costs, node, "storage cost")?;
            check_total(&qos_requirements, node, "QoS requirement")?;
        }
        Ok(Self {
            topology,
            storage: storage_costs,
            qos: qos_requirements,
            root,
            params,
        })
    }

    pub fn topology(&self) -> &Topology {
        self.topology
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn params(&self) -> CostParams {
        self.params
    }

    /// Storage cost of holding a replica at `node`.
    ///
    /// Panics on ids outside the topology; the mapping is total over it.
    pub fn storage_cost(&self, node: NodeId) -> f64 {
        self.storage[&node]
    }

    /// Maximum distance `node` tolerates to its nearest replica.
    ///
    /// Panics on ids outside the topology; the mapping is total over it.
    pub fn qos(&self, node: NodeId) -> f64 {
        self.qos[&node]
    }

    /// Cost model for this instance over a prebuilt distance matrix.
    pub fn cost_model<'b>(&'b self, distances: &'b DistanceMatrix) -> CostModel<'b> {
        CostModel::new(self, distances)
    }
}

fn check_total(map: &HashMap<NodeId, f64>, node: NodeId, what: &str) -> Result<()> {
    match map.get(&node) {
        None => Err(Error::InvalidParameter(format!("missing {what} for {node}"))),
        Some(&v) if !v.is_finite() || v < 0.0 => Err(Error::InvalidParameter(format!(
            "{what} for {node} must be non-negative, got {v}"
        ))),
        Some(_) => Ok(()),
    }
}
