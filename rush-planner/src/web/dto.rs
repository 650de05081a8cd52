//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Cost, Direction, Edge, NodeId, TimeSlot};
use crate::graph::{EdgeUpdate, Graph, NodeUpdate};
use crate::planner::{
    Algorithm, AlgorithmProperties, AlgorithmResult, Comparison, ComparisonStats, DeadlineStatus,
    DeadlineVerdict, SearchConfig,
};
use crate::workspace::NewNode;

// ========== Requests ==========

/// Request to add a node.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNodeRequest {
    pub name: String,

    /// Heuristic estimate (defaults to 0)
    #[serde(default)]
    pub h: f64,

    #[serde(default)]
    pub is_goal: bool,

    /// Deadline in minutes, kept only for goals
    pub deadline: Option<f64>,

    #[serde(default)]
    pub x: f64,

    #[serde(default)]
    pub y: f64,
}

impl AddNodeRequest {
    pub fn into_new_node(self) -> NewNode {
        NewNode {
            name: self.name,
            h: self.h,
            is_goal: self.is_goal,
            deadline: self.deadline,
            x: self.x,
            y: self.y,
        }
    }
}

/// Partial node update. Absent fields are left alone; `"deadline": null`
/// clears the deadline.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNodeRequest {
    pub name: Option<String>,
    pub h: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub deadline: Option<Option<f64>>,
    pub is_goal: Option<bool>,
}

impl UpdateNodeRequest {
    pub fn into_update(self) -> NodeUpdate {
        NodeUpdate {
            name: self.name,
            h: self.h,
            deadline: self.deadline,
            is_goal: self.is_goal,
        }
    }
}

/// Distinguish an explicit `null` from an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

/// Request to add an edge.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEdgeRequest {
    pub from: NodeId,
    pub to: NodeId,
    pub base_cost: f64,
    #[serde(default)]
    pub is_one_way: bool,
}

/// Partial edge update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEdgeRequest {
    pub base_cost: Option<f64>,
    pub is_one_way: Option<bool>,
    pub direction: Option<Direction>,
}

impl UpdateEdgeRequest {
    pub fn into_update(self) -> EdgeUpdate {
        EdgeUpdate {
            base_cost: self.base_cost,
            is_one_way: self.is_one_way,
            direction: self.direction,
        }
    }
}

/// Partial configuration change.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigRequest {
    pub time_slot: Option<TimeSlot>,
    pub one_way_enabled: Option<bool>,
    pub depth_limit: Option<u32>,
}

// ========== Responses ==========

/// An edge together with its position in the edge list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeResult {
    pub index: usize,
    #[serde(flatten)]
    pub edge: Edge,
}

/// An edge's cost under the active time slot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCostResult {
    pub index: usize,
    pub from: NodeId,
    pub to: NodeId,
    pub base_cost: f64,
    /// `baseCost × multiplier`, rounded to one decimal
    pub cost: Cost,
}

/// Active configuration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub time_slot: TimeSlot,
    pub time_slot_name: &'static str,
    pub multiplier: f64,
    pub one_way_enabled: bool,
    pub depth_limit: u32,
}

/// A strategy and its textbook properties.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub informed: bool,
    pub properties: AlgorithmProperties,
}

/// Deadline verdict.
#[derive(Debug, Serialize)]
pub struct DeadlineResult {
    pub status: DeadlineStatus,
    /// Minutes early or late; null when no route was found
    pub margin: Cost,
    pub message: String,
}

/// One strategy's result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResultDto {
    pub algorithm: &'static str,
    pub key: &'static str,
    pub path: Vec<NodeId>,
    /// Node names along `path`
    pub path_names: Vec<String>,
    pub traversal: Vec<NodeId>,
    /// Rounded cost; null when unreachable
    pub cost: Cost,
    pub nodes_expanded: usize,
    pub success: bool,
    pub goal_reached: String,
    pub deadline: DeadlineResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Only set inside a comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal: Option<bool>,
}

/// Aggregate statistics of a comparison.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStatsDto {
    pub caught: Vec<&'static str>,
    pub fastest: Vec<&'static str>,
    pub fastest_cost: Cost,
    pub most_efficient: Vec<&'static str>,
    pub fewest_nodes: Option<usize>,
    /// Percentage of runs that beat their deadline
    pub success_rate: f64,
}

/// All nine strategies side by side.
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub results: Vec<AlgorithmResultDto>,
    pub stats: ComparisonStatsDto,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl EdgeResult {
    pub fn from_edge(index: usize, edge: &Edge) -> Self {
        Self {
            index,
            edge: edge.clone(),
        }
    }
}

impl ConfigResponse {
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            time_slot: config.time_slot,
            time_slot_name: config.time_slot.name(),
            multiplier: config.time_slot.multiplier(),
            one_way_enabled: config.one_way_enabled,
            depth_limit: config.depth_limit,
        }
    }
}

impl AlgorithmInfo {
    pub fn from_algorithm(algorithm: Algorithm) -> Self {
        Self {
            key: algorithm.key(),
            name: algorithm.name(),
            informed: algorithm.is_informed(),
            properties: algorithm.properties(),
        }
    }
}

impl DeadlineResult {
    pub fn from_verdict(verdict: &DeadlineVerdict) -> Self {
        Self {
            status: verdict.status,
            margin: verdict.margin,
            message: verdict.message.clone(),
        }
    }
}

impl AlgorithmResultDto {
    /// Create from a planner result. `graph` supplies node names.
    pub fn from_result(result: &AlgorithmResult, graph: &Graph) -> Self {
        let path_names = result
            .path
            .iter()
            .map(|id| {
                graph
                    .node(*id)
                    .map(|n| n.name.clone())
                    .unwrap_or_else(|| id.to_string())
            })
            .collect();

        Self {
            algorithm: result.algorithm.name(),
            key: result.algorithm.key(),
            path: result.path.clone(),
            path_names,
            traversal: result.traversal.clone(),
            cost: result.cost,
            nodes_expanded: result.nodes_expanded,
            success: result.success,
            goal_reached: result.goal_reached.clone(),
            deadline: DeadlineResult::from_verdict(&result.deadline),
            note: result.note.clone(),
            optimal: None,
        }
    }
}

impl ComparisonStatsDto {
    pub fn from_stats(stats: &ComparisonStats) -> Self {
        let names = |algorithms: &[Algorithm]| -> Vec<&'static str> {
            algorithms.iter().map(|a| a.name()).collect()
        };
        Self {
            caught: names(&stats.caught),
            fastest: names(&stats.fastest),
            fastest_cost: stats.fastest_cost,
            most_efficient: names(&stats.most_efficient),
            fewest_nodes: stats.fewest_nodes,
            success_rate: (stats.success_rate * 100.0).round(),
        }
    }
}

impl ComparisonResponse {
    pub fn from_comparison(comparison: &Comparison, graph: &Graph) -> Self {
        let results = comparison
            .results
            .iter()
            .map(|r| AlgorithmResultDto {
                optimal: Some(comparison.stats.is_optimal(r)),
                ..AlgorithmResultDto::from_result(r, graph)
            })
            .collect();

        Self {
            results,
            stats: ComparisonStatsDto::from_stats(&comparison.stats),
        }
    }
}
