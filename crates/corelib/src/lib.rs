//! Core library for QoS-aware replica placement.
//!
//! This crate provides the fundamental abstractions the placement solvers
//! build on:
//! - Node identifiers and the undirected server topology
//! - The distance oracle (all-pairs shortest paths)
//! - The storage-plus-update cost model
//! - QoS satisfaction predicates
//! - Validated problem instances and the error taxonomy

pub mod cost;
pub mod distance;
pub mod error;
pub mod node;
pub mod problem;
pub mod satisfaction;
pub mod topology;

pub use cost::{CostModel, CostParams};
pub use distance::DistanceMatrix;
pub use error::{Error, Result};
pub use node::NodeId;
pub use problem::PlacementProblem;
pub use topology::Topology;
