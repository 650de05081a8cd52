//! Local search: steepest-descent hill climbing on the heuristic.

use std::collections::HashSet;

use crate::domain::NodeId;

use super::algorithm::Algorithm;
use super::result::AlgorithmResult;
use super::search::SearchContext;

const STUCK: &str = "Stuck at local optimum";

/// Move to the unvisited neighbor with the strictly lowest `h`, as long as
/// it improves on the current node. Stops at a goal, at a plateau or local
/// minimum, or when no unvisited neighbor is left.
///
/// Each step visits a new node, so the climb ends within |V| steps. A
/// failed climb still reports the partial path it walked.
pub(crate) fn hill_climbing(ctx: &SearchContext<'_>) -> AlgorithmResult {
    let mut current = ctx.start;
    let mut path = vec![current];
    let mut traversal = vec![current];
    let mut visited = HashSet::from([current]);
    let mut expanded = 1;

    while !ctx.is_goal(current) {
        let Some((best, best_h)) = best_unvisited(ctx, current, &visited) else {
            break;
        };
        let Some(current_h) = ctx.view.heuristic(current) else {
            break;
        };
        if best_h >= current_h {
            break;
        }

        current = best;
        visited.insert(current);
        path.push(current);
        traversal.push(current);
        expanded += 1;
    }

    if ctx.is_goal(current) {
        let cost = ctx.view.path_cost(&path);
        AlgorithmResult::found(ctx, Algorithm::HillClimbing, path, traversal, cost, expanded)
    } else {
        AlgorithmResult {
            path,
            ..AlgorithmResult::failure(Algorithm::HillClimbing, traversal, expanded, STUCK)
        }
    }
}

/// The unvisited neighbor with the lowest heuristic; the first one wins ties.
fn best_unvisited(
    ctx: &SearchContext<'_>,
    node: NodeId,
    visited: &HashSet<NodeId>,
) -> Option<(NodeId, f64)> {
    let mut best: Option<(NodeId, f64)> = None;
    for next in ctx.view.neighbors(node) {
        if visited.contains(&next) {
            continue;
        }
        let Some(h) = ctx.view.heuristic(next) else {
            continue;
        };
        if best.is_none_or(|(_, best_h)| h < best_h) {
            best = Some((next, h));
        }
    }
    best
}
