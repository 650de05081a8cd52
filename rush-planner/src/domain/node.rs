//! Graph node types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable integer identifier of a node.
///
/// Identifiers are assigned by whoever builds the graph and never reused
/// while the node exists. They carry no ordering meaning beyond being
/// comparable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A location in the road graph.
///
/// `x`/`y` are layout coordinates kept only so snapshots round-trip; no
/// search strategy reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default)]
    pub is_goal: bool,
    /// Estimated remaining cost to the nearest goal.
    #[serde(default)]
    pub h: f64,
    /// Latest acceptable arrival cost. Only meaningful on goals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<f64>,
}

impl Node {
    /// Create a plain node with no flags, zero heuristic and no deadline.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            x: 0.0,
            y: 0.0,
            is_start: false,
            is_goal: false,
            h: 0.0,
            deadline: None,
        }
    }

    /// Mark this node as the search origin.
    pub fn start(mut self) -> Self {
        self.is_start = true;
        self
    }

    /// Mark this node as a goal with an optional deadline.
    pub fn goal(mut self, deadline: Option<f64>) -> Self {
        self.is_goal = true;
        self.deadline = deadline;
        self
    }

    /// Set the heuristic estimate.
    pub fn with_h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Set the layout position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}
