//! The result contract shared by every strategy.

use crate::domain::{Cost, NodeId};

use super::algorithm::Algorithm;
use super::compare::ComparisonStats;
use super::deadline::{DeadlineVerdict, evaluate_deadline};
use super::search::SearchContext;

/// What a single strategy run produced.
///
/// Always fully populated: failures carry an empty (or partial) path, an
/// unreachable cost and a `Missed` verdict rather than being absent.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    /// Start-to-goal route; empty on most failures.
    pub path: Vec<NodeId>,
    /// Nodes in the order the strategy discovered or expanded them.
    pub traversal: Vec<NodeId>,
    /// Rounded route cost, or unreachable.
    pub cost: Cost,
    pub nodes_expanded: usize,
    pub success: bool,
    /// Name of the goal reached, or `"None"`.
    pub goal_reached: String,
    pub deadline: DeadlineVerdict,
    pub note: Option<String>,
}

impl AlgorithmResult {
    /// A failed run.
    pub fn failure(
        algorithm: Algorithm,
        traversal: Vec<NodeId>,
        nodes_expanded: usize,
        message: &str,
    ) -> Self {
        Self {
            algorithm,
            path: Vec::new(),
            traversal,
            cost: Cost::UNREACHABLE,
            nodes_expanded,
            success: false,
            goal_reached: "None".to_string(),
            deadline: DeadlineVerdict::missed(message),
            note: None,
        }
    }

    /// A successful run ending at the last node of `path`.
    ///
    /// `cost` is the unrounded route cost; it is rounded here and then judged
    /// against the reached goal's deadline.
    pub(crate) fn found(
        ctx: &SearchContext<'_>,
        algorithm: Algorithm,
        path: Vec<NodeId>,
        traversal: Vec<NodeId>,
        cost: Cost,
        nodes_expanded: usize,
    ) -> Self {
        let goal = path.last().copied().unwrap_or(ctx.start);
        let cost = cost.rounded();
        let graph = ctx.view.graph();
        let goal_reached = graph
            .node(goal)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| format!("ID: {goal}"));

        Self {
            algorithm,
            path,
            traversal,
            cost,
            nodes_expanded,
            success: true,
            goal_reached,
            deadline: evaluate_deadline(graph, goal, cost),
            note: None,
        }
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Reached a goal and beat its deadline.
    pub fn caught_deadline(&self) -> bool {
        self.success && self.deadline.is_success()
    }
}

/// All nine strategies run against one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub results: Vec<AlgorithmResult>,
    pub stats: ComparisonStats,
}

/// What a planner call returns: one run, or a full comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Single(AlgorithmResult),
    Comparison(Comparison),
}

impl Outcome {
    /// All results carried by this outcome.
    pub fn results(&self) -> &[AlgorithmResult] {
        match self {
            Outcome::Single(result) => std::slice::from_ref(result),
            Outcome::Comparison(comparison) => &comparison.results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::DeadlineStatus;

    #[test]
    fn failure_is_fully_populated() {
        let result =
            AlgorithmResult::failure(Algorithm::Bfs, vec![NodeId(0)], 1, "No path found");

        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.traversal, vec![NodeId(0)]);
        assert!(!result.cost.is_reachable());
        assert_eq!(result.goal_reached, "None");
        assert_eq!(result.deadline.status, DeadlineStatus::Missed);
        assert_eq!(result.deadline.message, "No path found");
        assert!(!result.caught_deadline());
        assert_eq!(result.note, None);
    }

    #[test]
    fn with_note() {
        let result = AlgorithmResult::failure(Algorithm::Dls, vec![], 0, "x")
            .with_note("Depth limit: 3");
        assert_eq!(result.note.as_deref(), Some("Depth limit: 3"));
    }

    #[test]
    fn outcome_results() {
        let single = Outcome::Single(AlgorithmResult::failure(Algorithm::Ucs, vec![], 0, "x"));
        assert_eq!(single.results().len(), 1);
        assert_eq!(single.results()[0].algorithm, Algorithm::Ucs);
    }
}
