//! Placement strategy abstractions.
//!
//! A placement strategy decides which nodes hold replicas so that every
//! node's QoS requirement is met, and what that placement costs. Different
//! strategies trade optimality for running time:
//!
//! - **ExhaustiveSearch**: provably optimal, exponential in node count
//! - **CoverDistance**: greedy, favors candidates that reach many nodes
//! - **CoverCost**: greedy, favors the cheapest cost per node covered
//! - **DynamicCost**: set-cover-style greedy over per-node coverer counts

pub mod cover_cost;
pub mod cover_distance;
pub mod dynamic_cost;
pub mod exact;
pub mod greedy;

pub use cover_cost::CoverCost;
pub use cover_distance::CoverDistance;
pub use dynamic_cost::DynamicCost;
pub use exact::ExhaustiveSearch;

use crate::solution::Solution;
use corelib::{PlacementProblem, Result};

/// Trait for replica placement strategies.
///
/// A strategy consumes a validated [`PlacementProblem`] and produces a
/// feasible [`Solution`]: every node reaches some replica (or the root)
/// within its QoS requirement.
///
/// # Determinism
///
/// Implementations must be deterministic: the same problem always yields
/// the same replica set and cost. Ties are broken by the topology's node
/// enumeration order.
pub trait PlacementStrategy {
    /// Compute a replica placement for `problem`.
    ///
    /// # Errors
    /// `DisconnectedTopology` if the distance oracle finds an unreachable
    /// pair, before any placement work begins. Strategy-specific errors are
    /// documented on each implementation.
    fn solve(&self, problem: &PlacementProblem<'_>) -> Result<Solution>;

    /// Get the strategy name (for logging/debugging).
    fn name(&self) -> &'static str;
}
