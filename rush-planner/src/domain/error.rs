//! Domain error types.
//!
//! These errors represent graph edits that would break an invariant of the
//! model. Search failures are not errors; they are reported as failed
//! results.

use super::NodeId;

/// Errors from editing the graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A node with this id already exists
    #[error("duplicate node id {0}")]
    DuplicateNode(NodeId),

    /// No node with this id exists
    #[error("node {0} not found")]
    UnknownNode(NodeId),

    /// Edge index out of range
    #[error("edge {0} not found")]
    UnknownEdge(usize),

    /// An edge cannot start and end at the same node
    #[error("edge from {0} to itself is not allowed")]
    SelfLoop(NodeId),

    /// Costs must be finite and non-negative
    #[error("invalid cost {0}: must be finite and non-negative")]
    InvalidCost(f64),

    /// Heuristic values must be finite and non-negative
    #[error("invalid heuristic {0}: must be finite and non-negative")]
    InvalidHeuristic(f64),

    /// Node names cannot be blank
    #[error("node name must not be empty")]
    EmptyName,

    /// Some node already holds the largest id
    #[error("no node ids left to assign")]
    IdSpaceExhausted,
}
