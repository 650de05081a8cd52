//! The editable planning session: graph, restrictions and configuration.
//!
//! Every mutation goes through [`Workspace`] so the restriction transform
//! stays settled before any search runs. Searches borrow the workspace
//! immutably through [`Workspace::planner`].

use std::path::Path;

use tracing::{info, warn};

use crate::domain::{
    Cost, Edge, GraphError, Node, NodeId, Restriction, TimeSlot, apply_restrictions,
};
use crate::graph::{
    EdgeUpdate, Graph, NodeUpdate, SCENARIO_LABEL, colombo_restrictions, colombo_scenario,
};
use crate::planner::{Planner, SearchConfig};
use crate::snapshot::{Snapshot, SnapshotError, SnapshotMetadata};

/// Fields for a node created through [`Workspace::add_node`].
#[derive(Debug, Clone, Default)]
pub struct NewNode {
    pub name: String,
    pub h: f64,
    pub is_goal: bool,
    pub deadline: Option<f64>,
    pub x: f64,
    pub y: f64,
}

impl NewNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A graph under edit together with its search settings.
#[derive(Debug, Clone)]
pub struct Workspace {
    graph: Graph,
    restrictions: Vec<Restriction>,
    config: SearchConfig,
    scenario: String,
}

impl Default for Workspace {
    /// The Colombo scenario with default settings.
    fn default() -> Self {
        Self::new(
            colombo_scenario(),
            colombo_restrictions(),
            SearchConfig::default(),
        )
    }
}

impl Workspace {
    /// Create a workspace, applying restrictions if one-way mode is on.
    pub fn new(graph: Graph, restrictions: Vec<Restriction>, config: SearchConfig) -> Self {
        let mut workspace = Self {
            graph,
            restrictions,
            config,
            scenario: SCENARIO_LABEL.to_string(),
        };
        workspace.settle_restrictions();
        workspace
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// A planner over the current state.
    pub fn planner(&self) -> Planner<'_> {
        Planner::new(&self.graph, &self.restrictions, self.config)
    }

    /// Each edge's cost under the active time slot, rounded, in edge order.
    pub fn scaled_edge_costs(&self) -> Vec<Cost> {
        self.planner().view().scaled_edge_costs()
    }

    // ========== Node edits ==========

    /// Add a node with the next free id.
    pub fn add_node(&mut self, new: NewNode) -> Result<&Node, GraphError> {
        let id = self.graph.next_id()?;
        let mut node = Node::new(id, new.name).with_h(new.h).at(new.x, new.y);
        if new.is_goal {
            node = node.goal(new.deadline);
        }
        self.graph.add_node(node)?;
        info!(node = %id, "node added");
        self.graph.node(id).ok_or(GraphError::UnknownNode(id))
    }

    pub fn update_node(&mut self, id: NodeId, update: NodeUpdate) -> Result<&Node, GraphError> {
        let node = self.graph.update_node(id, update)?;
        info!(node = %id, "node updated");
        Ok(node)
    }

    /// Make `id` the single start node.
    pub fn set_start(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.graph.set_start(id)?;
        info!(node = %id, "start node set");
        Ok(())
    }

    /// Delete a node and every edge touching it.
    pub fn delete_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let edges_before = self.graph.edges().len();
        let node = self.graph.remove_node(id)?;
        info!(
            node = %id,
            edges_removed = edges_before - self.graph.edges().len(),
            "node deleted"
        );
        Ok(node)
    }

    // ========== Edge edits ==========

    /// Append a two-way edge and return its index.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        base_cost: f64,
        is_one_way: bool,
    ) -> Result<usize, GraphError> {
        let edge = Edge {
            is_one_way,
            ..Edge::new(from, to, base_cost)
        };
        self.graph.add_edge(edge)?;
        let index = self.graph.edges().len() - 1;
        info!(%from, %to, index, "edge added");
        Ok(index)
    }

    pub fn update_edge(&mut self, index: usize, update: EdgeUpdate) -> Result<&Edge, GraphError> {
        let edge = self.graph.update_edge(index, update)?;
        info!(index, "edge updated");
        Ok(edge)
    }

    pub fn delete_edge(&mut self, index: usize) -> Result<Edge, GraphError> {
        let edge = self.graph.remove_edge(index)?;
        info!(index, "edge deleted");
        Ok(edge)
    }

    // ========== Configuration ==========

    pub fn set_time_slot(&mut self, time_slot: TimeSlot) {
        self.config.time_slot = time_slot;
        info!(time_slot = time_slot.key(), "time slot changed");
    }

    /// Toggle one-way mode. Turning it on converts restricted edges to
    /// one-way edges; turning it off leaves them converted.
    pub fn set_one_way(&mut self, enabled: bool) {
        self.config.one_way_enabled = enabled;
        self.settle_restrictions();
        info!(enabled, "one-way mode changed");
    }

    /// Set the depth-limited search bound. Range checks happen at the HTTP
    /// boundary.
    pub fn set_depth_limit(&mut self, depth_limit: u32) {
        self.config.depth_limit = depth_limit;
        info!(depth_limit, "depth limit changed");
    }

    fn settle_restrictions(&mut self) {
        let edges = apply_restrictions(
            self.graph.edges(),
            &self.restrictions,
            self.config.one_way_enabled,
        );
        self.graph.replace_edges(edges);
    }

    // ========== Snapshots ==========

    /// Capture the current state, stamped with the current time.
    pub fn export(&self) -> Snapshot {
        Snapshot {
            nodes: self.graph.nodes().to_vec(),
            edges: self.graph.edges().to_vec(),
            time_slot: Some(self.config.time_slot),
            one_way_enabled: Some(self.config.one_way_enabled),
            metadata: Some(SnapshotMetadata::now(&self.scenario)),
        }
    }

    /// Replace the graph, and any configuration the snapshot carries.
    ///
    /// The snapshot is fully validated first; on error nothing changes.
    pub fn import(&mut self, snapshot: Snapshot) -> Result<(), SnapshotError> {
        let graph = Graph::from_parts(snapshot.nodes, snapshot.edges).inspect_err(|e| {
            warn!(error = %e, "rejected snapshot import");
        })?;

        self.graph = graph;
        if let Some(time_slot) = snapshot.time_slot {
            self.config.time_slot = time_slot;
        }
        if let Some(enabled) = snapshot.one_way_enabled {
            self.config.one_way_enabled = enabled;
        }
        if let Some(metadata) = snapshot.metadata {
            self.scenario = metadata.scenario;
        }
        self.settle_restrictions();

        info!(
            nodes = self.graph.nodes().len(),
            edges = self.graph.edges().len(),
            time_slot = self.config.time_slot.key(),
            one_way = self.config.one_way_enabled,
            "snapshot imported"
        );
        Ok(())
    }

    /// Parse and import a JSON snapshot.
    pub fn import_json(&mut self, bytes: &[u8]) -> Result<(), SnapshotError> {
        let snapshot = Snapshot::from_json(bytes).inspect_err(|e| {
            warn!(error = %e, "rejected snapshot import");
        })?;
        self.import(snapshot)
    }

    /// Write the current state to a snapshot file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        self.export().save(path)?;
        info!(path = %path.display(), "snapshot saved");
        Ok(())
    }

    /// Import a snapshot file.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let snapshot = Snapshot::load(path)?;
        self.import(snapshot)?;
        info!(path = %path.display(), "snapshot loaded");
        Ok(())
    }
}
