//! One-way traffic restrictions.
//!
//! Restrictions live outside the edge list. While one-way mode is active they
//! do two things: travel in the restricted direction is charged a fixed peak
//! cost, and [`apply_restrictions`] turns the matching edges into one-way
//! edges so the restricted direction drops out of neighbor expansion.
//!
//! Once applied, the conversion is sticky: switching one-way mode off does
//! not restore the previous `is_one_way`/`direction` values. While the mode
//! is off those fields are ignored by the cost model, so the leftover tags
//! only matter again when the mode is re-enabled, and re-applying is
//! idempotent.

use serde::{Deserialize, Serialize};

use super::{Direction, Edge, NodeId};

/// A direction-restricted override on the road between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    pub from: NodeId,
    pub to: NodeId,
    /// Travel direction, relative to `from` → `to`, that is restricted.
    pub restricted_direction: Direction,
    /// Cost charged (before the time-slot multiplier) for restricted travel.
    pub peak_cost: f64,
}

impl Restriction {
    pub fn new(from: NodeId, to: NodeId, restricted_direction: Direction, peak_cost: f64) -> Self {
        Self {
            from,
            to,
            restricted_direction,
            peak_cost,
        }
    }

    /// Whether this restriction covers the road between `a` and `b`.
    pub fn covers(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Whether travelling `origin` → `target` goes the restricted way.
    pub fn restricts(&self, origin: NodeId, target: NodeId) -> bool {
        let forward = self.from == origin && self.to == target;
        let reverse = self.from == target && self.to == origin;
        match self.restricted_direction {
            Direction::Forward => forward,
            Direction::Reverse => reverse,
            Direction::Both => forward || reverse,
        }
    }

    /// The direction tag `edge` must carry so that only the unrestricted way
    /// remains usable.
    fn permitted_direction(&self, edge: &Edge) -> Direction {
        let restricted_origin = match self.restricted_direction {
            Direction::Forward => self.from,
            Direction::Reverse => self.to,
            Direction::Both => return Direction::Both,
        };
        if edge.from == restricted_origin {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

/// Convert edges covered by a restriction into one-way edges.
///
/// Returns the edges unchanged when `enabled` is false. Applying the same
/// restrictions twice yields the same edges as applying them once.
pub fn apply_restrictions(
    edges: &[Edge],
    restrictions: &[Restriction],
    enabled: bool,
) -> Vec<Edge> {
    if !enabled {
        return edges.to_vec();
    }

    edges
        .iter()
        .map(|edge| {
            match restrictions.iter().find(|r| r.covers(edge.from, edge.to)) {
                Some(restriction) => Edge {
                    is_one_way: true,
                    direction: restriction.permitted_direction(edge),
                    ..edge.clone()
                },
                None => edge.clone(),
            }
        })
        .collect()
}
