//! Error types for the placement core.
//!
//! Every failure here is a precondition violation reported immediately to the
//! caller: the core is pure computation with no transient failure modes, so
//! nothing is retried or swallowed.

use crate::node::NodeId;
use thiserror::Error;

/// Result type alias for the placement core.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or solving a placement instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The topology is not connected: some pair of nodes has no path.
    #[error("disconnected topology: no path from {from} to {to}")]
    DisconnectedTopology { from: NodeId, to: NodeId },

    /// The designated root is not a node of the topology.
    #[error("root {0} is not a node of the topology")]
    InvalidRoot(NodeId),

    /// A cost-model parameter, storage cost, QoS requirement, or edge weight
    /// is out of its valid domain, or a per-node mapping is not total.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No replica subset (including the full node set) satisfies every
    /// requirement. Unreachable for validated inputs on a connected graph;
    /// detected and reported rather than returning a placeholder result.
    #[error("no replica placement satisfies every QoS requirement")]
    InfeasibleInstance,

    /// The exhaustive solver refused to enumerate this instance because its
    /// subset space exceeds the configured cap.
    #[error("instance too large for exhaustive search: {non_root_nodes} non-root nodes exceeds the cap of {max_subsets} subsets")]
    InstanceTooLarge {
        non_root_nodes: usize,
        max_subsets: u64,
    },

    /// Internal error (a solver bug, never an input problem).
    #[error("internal error: {0}")]
    Internal(String),
}
