//! The road graph and its cost model.
//!
//! [`Graph`] owns the node and edge collections and enforces the structural
//! invariants (unique ids, endpoints that exist, non-negative costs).
//! [`RoadView`] layers the active time slot and one-way configuration on top
//! and answers the cost and neighbor queries the search strategies need.

mod scenario;
mod view;

pub use scenario::{SCENARIO_LABEL, colombo_restrictions, colombo_scenario};
pub use view::RoadView;

use std::collections::HashSet;

use crate::domain::{Direction, Edge, GraphError, Node, NodeId};

/// Partial update to a node. `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct NodeUpdate {
    pub name: Option<String>,
    pub h: Option<f64>,
    /// `Some(None)` clears the deadline.
    pub deadline: Option<Option<f64>>,
    pub is_goal: Option<bool>,
}

/// Partial update to an edge. `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct EdgeUpdate {
    pub base_cost: Option<f64>,
    pub is_one_way: Option<bool>,
    pub direction: Option<Direction>,
}

/// Nodes and edges, in insertion order.
///
/// Insertion order is part of the contract: neighbor lists, and therefore
/// every strategy's tie-breaking, follow the edge order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from existing collections, validating every invariant.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut seen = HashSet::new();
        for node in &nodes {
            if !seen.insert(node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }
            check_heuristic(node.h)?;
        }

        let graph = Self { nodes, edges: Vec::new() };
        for edge in &edges {
            graph.check_edge(edge)?;
        }

        Ok(Self { edges, ..graph })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// The search origin: the first node flagged as start.
    pub fn start(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.is_start)
    }

    /// Number of nodes flagged as start. Anything but 1 is a malformed graph.
    pub fn start_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_start).count()
    }

    /// All goal nodes, in node order.
    pub fn goals(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.is_goal).collect()
    }

    pub fn is_goal(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.is_goal)
    }

    /// The id a newly added node should receive: one past the current maximum.
    ///
    /// Fails once a node holds the largest representable id.
    pub fn next_id(&self) -> Result<NodeId, GraphError> {
        match self.nodes.iter().map(|n| n.id.0).max() {
            None => Ok(NodeId(0)),
            Some(max) => max
                .checked_add(1)
                .map(NodeId)
                .ok_or(GraphError::IdSpaceExhausted),
        }
    }

    /// Add a node.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.contains(node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        if node.name.trim().is_empty() {
            return Err(GraphError::EmptyName);
        }
        check_heuristic(node.h)?;
        self.nodes.push(node);
        Ok(())
    }

    /// Apply a partial update to a node.
    pub fn update_node(&mut self, id: NodeId, update: NodeUpdate) -> Result<&Node, GraphError> {
        if update.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err(GraphError::EmptyName);
        }
        if let Some(h) = update.h {
            check_heuristic(h)?;
        }

        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(GraphError::UnknownNode(id))?;

        if let Some(name) = update.name {
            node.name = name;
        }
        if let Some(h) = update.h {
            node.h = h;
        }
        if let Some(deadline) = update.deadline {
            node.deadline = deadline;
        }
        if let Some(is_goal) = update.is_goal {
            node.is_goal = is_goal;
        }
        Ok(node)
    }

    /// Make `id` the only start node.
    pub fn set_start(&mut self, id: NodeId) -> Result<(), GraphError> {
        if !self.contains(id) {
            return Err(GraphError::UnknownNode(id));
        }
        for node in &mut self.nodes {
            node.is_start = node.id == id;
        }
        Ok(())
    }

    /// Remove a node together with every edge touching it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let pos = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or(GraphError::UnknownNode(id))?;
        self.edges.retain(|e| e.from != id && e.to != id);
        Ok(self.nodes.remove(pos))
    }

    /// Append an edge.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        self.check_edge(&edge)?;
        self.edges.push(edge);
        Ok(())
    }

    /// Apply a partial update to the edge at `index`.
    pub fn update_edge(&mut self, index: usize, update: EdgeUpdate) -> Result<&Edge, GraphError> {
        if let Some(cost) = update.base_cost {
            check_cost(cost)?;
        }
        let edge = self
            .edges
            .get_mut(index)
            .ok_or(GraphError::UnknownEdge(index))?;

        if let Some(cost) = update.base_cost {
            edge.base_cost = cost;
        }
        if let Some(is_one_way) = update.is_one_way {
            edge.is_one_way = is_one_way;
        }
        if let Some(direction) = update.direction {
            edge.direction = direction;
        }
        Ok(edge)
    }

    /// Remove the edge at `index`.
    pub fn remove_edge(&mut self, index: usize) -> Result<Edge, GraphError> {
        if index >= self.edges.len() {
            return Err(GraphError::UnknownEdge(index));
        }
        Ok(self.edges.remove(index))
    }

    /// Replace the edge list wholesale, e.g. after the restriction transform.
    ///
    /// The caller guarantees the new edges reference the same nodes.
    pub(crate) fn replace_edges(&mut self, edges: Vec<Edge>) {
        self.edges = edges;
    }

    fn check_edge(&self, edge: &Edge) -> Result<(), GraphError> {
        if edge.from == edge.to {
            return Err(GraphError::SelfLoop(edge.from));
        }
        for id in [edge.from, edge.to] {
            if !self.contains(id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        check_cost(edge.base_cost)
    }
}

fn check_cost(cost: f64) -> Result<(), GraphError> {
    if cost.is_finite() && cost >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidCost(cost))
    }
}

fn check_heuristic(h: f64) -> Result<(), GraphError> {
    if h.is_finite() && h >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidHeuristic(h))
    }
}
