//! Time- and direction-aware view of a graph.

use crate::domain::{Cost, NodeId, Restriction, TimeSlot};

use super::Graph;

/// A read-only view of a [`Graph`] under one traffic configuration.
///
/// Every search strategy works against a `RoadView`. It borrows the graph,
/// so the configuration cannot change underneath a running search.
#[derive(Debug, Clone, Copy)]
pub struct RoadView<'a> {
    graph: &'a Graph,
    restrictions: &'a [Restriction],
    time_slot: TimeSlot,
    one_way: bool,
}

impl<'a> RoadView<'a> {
    pub fn new(
        graph: &'a Graph,
        restrictions: &'a [Restriction],
        time_slot: TimeSlot,
        one_way: bool,
    ) -> Self {
        Self {
            graph,
            restrictions,
            time_slot,
            one_way,
        }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub fn time_slot(&self) -> TimeSlot {
        self.time_slot
    }

    pub fn one_way(&self) -> bool {
        self.one_way
    }

    fn multiplier(&self) -> f64 {
        self.time_slot.multiplier()
    }

    /// Cost of travelling directly from `from` to `to`.
    ///
    /// Uses the first edge joining the two nodes in either orientation.
    /// Returns [`Cost::UNREACHABLE`] if there is no such edge, or if one-way
    /// mode forbids the requested direction.
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Cost {
        let Some(edge) = self.graph.edges().iter().find(|e| e.connects(from, to)) else {
            return Cost::UNREACHABLE;
        };

        if self.one_way {
            let restriction = self.restrictions.iter().find(|r| r.covers(from, to));
            if let Some(r) = restriction.filter(|r| r.restricts(from, to)) {
                return Cost::new(r.peak_cost * self.multiplier());
            }
            if edge.is_one_way && !edge.allows_departure_from(from) {
                return Cost::UNREACHABLE;
            }
        }

        Cost::new(edge.base_cost * self.multiplier())
    }

    /// Nodes reachable in one step from `node`, deduplicated, in edge order.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for edge in self.graph.edges() {
            let Some(other) = edge.other_end(node) else {
                continue;
            };
            if self.one_way && edge.is_one_way && !edge.allows_departure_from(node) {
                continue;
            }
            if !out.contains(&other) {
                out.push(other);
            }
        }
        out
    }

    /// Sum of edge costs along `path`, unrounded.
    ///
    /// Empty and single-node paths cost nothing. Any missing hop makes the
    /// whole path unreachable.
    pub fn path_cost(&self, path: &[NodeId]) -> Cost {
        path.windows(2)
            .map(|hop| self.edge_cost(hop[0], hop[1]))
            .fold(Cost::ZERO, |total, hop| total + hop)
    }

    /// Each edge's cost under the active time slot, rounded for display.
    pub fn scaled_edge_costs(&self) -> Vec<Cost> {
        self.graph
            .edges()
            .iter()
            .map(|e| Cost::new(e.base_cost * self.multiplier()).rounded())
            .collect()
    }

    /// Heuristic value of `node`, or `None` if it does not exist.
    pub fn heuristic(&self, node: NodeId) -> Option<f64> {
        self.graph.node(node).map(|n| n.h)
    }
}
