//! Deadline evaluation.
//!
//! Compares the cost of a found route against the deadline of the goal it
//! reached. Pure: no logging, no state.

use serde::Serialize;

use crate::domain::{Cost, NodeId, round_tenth};
use crate::graph::Graph;

/// Outcome of a deadline check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineStatus {
    /// Arrived on or before the deadline.
    Success,
    /// Arrived late, or never arrived.
    Missed,
    /// The goal has no deadline.
    Unknown,
}

/// A deadline verdict with its margin in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlineVerdict {
    pub status: DeadlineStatus,
    /// Absolute distance from the deadline, rounded to one decimal.
    /// Unreachable when no route was found.
    pub margin: Cost,
    pub message: String,
}

impl DeadlineVerdict {
    /// Verdict for a search that found no route.
    pub fn missed(message: impl Into<String>) -> Self {
        Self {
            status: DeadlineStatus::Missed,
            margin: Cost::UNREACHABLE,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == DeadlineStatus::Success
    }
}

/// Judge `traveled` against the deadline of `goal`.
///
/// # Examples
///
/// ```
/// use rush_planner::domain::{Cost, NodeId};
/// use rush_planner::graph::colombo_scenario;
/// use rush_planner::planner::{DeadlineStatus, evaluate_deadline};
///
/// let graph = colombo_scenario();
/// // Fort Station, deadline 25
/// let verdict = evaluate_deadline(&graph, NodeId(5), Cost::new(25.1));
/// assert_eq!(verdict.status, DeadlineStatus::Missed);
/// assert_eq!(verdict.margin, Cost::new(0.1));
/// ```
pub fn evaluate_deadline(graph: &Graph, goal: NodeId, traveled: Cost) -> DeadlineVerdict {
    let Some(deadline) = graph.node(goal).and_then(|n| n.deadline) else {
        return DeadlineVerdict {
            status: DeadlineStatus::Unknown,
            margin: Cost::ZERO,
            message: "No deadline specified".to_string(),
        };
    };

    let traveled = traveled.minutes();
    let margin = round_tenth((deadline - traveled).abs());

    if traveled <= deadline {
        DeadlineVerdict {
            status: DeadlineStatus::Success,
            margin: Cost::new(margin),
            message: format!("Train caught! Arrived {margin} minutes early"),
        }
    } else {
        DeadlineVerdict {
            status: DeadlineStatus::Missed,
            margin: Cost::new(margin),
            message: format!("Train missed! {margin} minutes late"),
        }
    }
}
