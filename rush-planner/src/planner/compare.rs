//! Aggregate statistics over a full comparison run.

use crate::domain::Cost;

use super::algorithm::Algorithm;
use super::result::{AlgorithmResult, Comparison};

/// Summary of which strategies did best.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonStats {
    /// Reached a goal and beat its deadline.
    pub caught: Vec<Algorithm>,
    /// Members of `caught` with the lowest cost.
    pub fastest: Vec<Algorithm>,
    /// That lowest cost; unreachable when nothing was caught.
    pub fastest_cost: Cost,
    /// Successful runs with the fewest expanded nodes.
    pub most_efficient: Vec<Algorithm>,
    pub fewest_nodes: Option<usize>,
    /// Share of runs whose deadline verdict is a success, in `0.0..=1.0`.
    pub success_rate: f64,
}

impl ComparisonStats {
    /// Derive statistics from a set of results.
    pub fn from_results(results: &[AlgorithmResult]) -> Self {
        let caught: Vec<&AlgorithmResult> =
            results.iter().filter(|r| r.caught_deadline()).collect();

        let fastest_cost = caught
            .iter()
            .map(|r| r.cost)
            .min_by(Cost::total_cmp)
            .unwrap_or(Cost::UNREACHABLE);
        let fastest = caught
            .iter()
            .filter(|r| fastest_cost.is_reachable() && r.cost == fastest_cost)
            .map(|r| r.algorithm)
            .collect();

        let successful: Vec<&AlgorithmResult> = results.iter().filter(|r| r.success).collect();
        let fewest_nodes = successful.iter().map(|r| r.nodes_expanded).min();
        let most_efficient = successful
            .iter()
            .filter(|r| Some(r.nodes_expanded) == fewest_nodes)
            .map(|r| r.algorithm)
            .collect();

        let on_time = results.iter().filter(|r| r.deadline.is_success()).count();
        let success_rate = if results.is_empty() {
            0.0
        } else {
            on_time as f64 / results.len() as f64
        };

        Self {
            caught: caught.iter().map(|r| r.algorithm).collect(),
            fastest,
            fastest_cost,
            most_efficient,
            fewest_nodes,
            success_rate,
        }
    }

    /// Whether `result` is among the fastest deadline-beating runs.
    pub fn is_optimal(&self, result: &AlgorithmResult) -> bool {
        result.caught_deadline() && self.fastest.contains(&result.algorithm)
    }
}

/// Bundle results with their statistics.
pub(crate) fn compare_results(results: Vec<AlgorithmResult>) -> Comparison {
    let stats = ComparisonStats::from_results(&results);
    Comparison { results, stats }
}
