//! Priority-ordered strategies: uniform cost, greedy best-first and A*.
//!
//! All three share one loop and differ only in the priority they assign to
//! a path. The frontier pops the lowest priority first; among equal
//! priorities the path pushed earliest wins.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use tracing::trace;

use crate::domain::{Cost, NodeId};

use super::algorithm::Algorithm;
use super::result::AlgorithmResult;
use super::search::{NO_PATH, SearchContext};

/// Uniform cost search: priority is the accumulated cost `g`.
pub(crate) fn ucs(ctx: &SearchContext<'_>) -> AlgorithmResult {
    best_first(ctx, Policy::UniformCost)
}

/// Greedy best-first: priority is the heuristic `h` of the last node.
pub(crate) fn greedy(ctx: &SearchContext<'_>) -> AlgorithmResult {
    best_first(ctx, Policy::Greedy)
}

/// A*: priority is `g + h`.
pub(crate) fn astar(ctx: &SearchContext<'_>) -> AlgorithmResult {
    best_first(ctx, Policy::AStar)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    UniformCost,
    Greedy,
    AStar,
}

impl Policy {
    fn algorithm(self) -> Algorithm {
        match self {
            Policy::UniformCost => Algorithm::Ucs,
            Policy::Greedy => Algorithm::Greedy,
            Policy::AStar => Algorithm::AStar,
        }
    }

    fn priority(self, g: Cost, h: f64) -> Cost {
        match self {
            Policy::UniformCost => g,
            Policy::Greedy => Cost::new(h),
            Policy::AStar => g + Cost::new(h),
        }
    }

    /// Whether the running total `g` is the route cost. Greedy ignores edge
    /// costs while searching and prices the route afterwards.
    fn tracks_cost(self) -> bool {
        !matches!(self, Policy::Greedy)
    }
}

/// A frontier entry.
#[derive(Debug)]
struct Entry {
    priority: Cost,
    seq: usize,
    g: Cost,
    path: Vec<NodeId>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-heap of entries with insertion-order tie-breaking.
#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    pushed: usize,
}

impl Frontier {
    fn push(&mut self, priority: Cost, g: Cost, path: Vec<NodeId>) {
        let seq = self.pushed;
        self.pushed += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            g,
            path,
        }));
    }

    fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }
}

fn best_first(ctx: &SearchContext<'_>, policy: Policy) -> AlgorithmResult {
    let algorithm = policy.algorithm();
    let start_h = ctx.view.heuristic(ctx.start).unwrap_or(0.0);

    let mut frontier = Frontier::default();
    frontier.push(policy.priority(Cost::ZERO, start_h), Cost::ZERO, vec![ctx.start]);

    let mut visited = HashSet::new();
    let mut traversal = Vec::new();
    let mut expanded = 0;

    while let Some(entry) = frontier.pop() {
        let Some(&current) = entry.path.last() else {
            continue;
        };
        if !visited.insert(current) {
            continue;
        }
        traversal.push(current);
        expanded += 1;
        trace!(
            algorithm = algorithm.name(),
            node = %current,
            priority = %entry.priority,
            "expanding"
        );

        if ctx.is_goal(current) {
            let cost = if policy.tracks_cost() {
                entry.g
            } else {
                ctx.view.path_cost(&entry.path)
            };
            return AlgorithmResult::found(ctx, algorithm, entry.path, traversal, cost, expanded);
        }

        for next in ctx.view.neighbors(current) {
            if visited.contains(&next) {
                continue;
            }
            let Some(h) = ctx.view.heuristic(next) else {
                continue;
            };
            let step = ctx.view.edge_cost(current, next);
            if policy.tracks_cost() && !step.is_reachable() {
                continue;
            }

            let g = entry.g + step;
            let mut path = entry.path.clone();
            path.push(next);
            frontier.push(policy.priority(g, h), g, path);
        }
    }

    AlgorithmResult::failure(algorithm, traversal, expanded, NO_PATH)
}
