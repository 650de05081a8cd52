//! Road segments between nodes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Error returned when parsing an unknown direction tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction: {0:?} (expected forward, reverse or both)")]
pub struct InvalidDirection(String);

/// Which way a one-way edge may be travelled, relative to its stored
/// `from`/`to` orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Only `from` → `to`.
    Forward,
    /// Only `to` → `from`.
    Reverse,
    /// Either way.
    Both,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
            Direction::Both => "both",
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Direction::Forward),
            "reverse" => Ok(Direction::Reverse),
            "both" => Ok(Direction::Both),
            other => Err(InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weighted connection between two nodes.
///
/// Edges are undirected unless `is_one_way` is set *and* one-way mode is
/// active for the search; in that case `direction` decides which way the
/// edge can be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub base_cost: f64,
    #[serde(default)]
    pub is_one_way: bool,
    #[serde(default = "default_direction")]
    pub direction: Direction,
}

fn default_direction() -> Direction {
    Direction::Both
}

impl Edge {
    /// Create a two-way edge.
    pub fn new(from: NodeId, to: NodeId, base_cost: f64) -> Self {
        Self {
            from,
            to,
            base_cost,
            is_one_way: false,
            direction: Direction::Both,
        }
    }

    /// Whether this edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }

    /// Whether the direction tag allows leaving `node` along this edge.
    ///
    /// Ignores `is_one_way`; callers decide whether the tag applies.
    pub fn allows_departure_from(&self, node: NodeId) -> bool {
        match self.direction {
            Direction::Forward => self.from == node,
            Direction::Reverse => self.to == node,
            Direction::Both => self.from == node || self.to == node,
        }
    }
}
