//! Uninformed strategies: BFS, DFS, depth-limited and iterative deepening.

use std::collections::{HashSet, VecDeque};

use tracing::trace;

use crate::domain::NodeId;

use super::algorithm::Algorithm;
use super::result::AlgorithmResult;
use super::search::{NO_PATH, SearchContext};

const NO_PATH_WITHIN_DEPTH: &str = "No path found within depth limit";

/// Breadth-first search over full paths.
///
/// Nodes are marked visited when enqueued, so each node enters the queue at
/// most once. The goal test happens on dequeue.
pub(crate) fn bfs(ctx: &SearchContext<'_>) -> AlgorithmResult {
    let mut queue: VecDeque<Vec<NodeId>> = VecDeque::from([vec![ctx.start]]);
    let mut visited = HashSet::from([ctx.start]);
    let mut traversal = vec![ctx.start];
    let mut expanded = 0;

    while let Some(path) = queue.pop_front() {
        let Some(&current) = path.last() else {
            continue;
        };
        expanded += 1;

        if ctx.is_goal(current) {
            let cost = ctx.view.path_cost(&path);
            return AlgorithmResult::found(ctx, Algorithm::Bfs, path, traversal, cost, expanded);
        }

        for next in ctx.view.neighbors(current) {
            if visited.insert(next) {
                traversal.push(next);
                let mut extended = path.clone();
                extended.push(next);
                queue.push_back(extended);
            }
        }
    }

    AlgorithmResult::failure(Algorithm::Bfs, traversal, expanded, NO_PATH)
}

/// Depth-first search over full paths.
///
/// Nodes are marked visited when popped; stale stack entries for an already
/// visited node are skipped without counting. Neighbors are pushed in
/// reverse so the first neighbor is explored first.
pub(crate) fn dfs(ctx: &SearchContext<'_>) -> AlgorithmResult {
    let mut stack = vec![vec![ctx.start]];
    let mut visited = HashSet::new();
    let mut traversal = Vec::new();
    let mut expanded = 0;

    while let Some(path) = stack.pop() {
        let Some(&current) = path.last() else {
            continue;
        };
        if !visited.insert(current) {
            continue;
        }
        traversal.push(current);
        expanded += 1;

        if ctx.is_goal(current) {
            let cost = ctx.view.path_cost(&path);
            return AlgorithmResult::found(ctx, Algorithm::Dfs, path, traversal, cost, expanded);
        }

        for next in ctx.view.neighbors(current).into_iter().rev() {
            if !visited.contains(&next) {
                let mut extended = path.clone();
                extended.push(next);
                stack.push(extended);
            }
        }
    }

    AlgorithmResult::failure(Algorithm::Dfs, traversal, expanded, NO_PATH)
}

/// Depth-limited search from the start node.
///
/// Always carries a `Depth limit: n` note.
pub(crate) fn dls(ctx: &SearchContext<'_>, depth_limit: u32) -> AlgorithmResult {
    let note = format!("Depth limit: {depth_limit}");
    let mut search = DepthLimited::new(ctx);
    let mut path = vec![ctx.start];

    if search.descend(&mut path, depth_limit) {
        let cost = ctx.view.path_cost(&path);
        AlgorithmResult::found(
            ctx,
            Algorithm::Dls,
            path,
            search.traversal,
            cost,
            search.expanded,
        )
        .with_note(note)
    } else {
        AlgorithmResult::failure(
            Algorithm::Dls,
            search.traversal,
            search.expanded,
            NO_PATH_WITHIN_DEPTH,
        )
        .with_note(note)
    }
}

/// Iterative deepening: depth-limited search with limits 0, 1, ..., |V|.
///
/// Expansion counts and the exploration order accumulate across iterations.
pub(crate) fn iddfs(ctx: &SearchContext<'_>) -> AlgorithmResult {
    let max_depth = ctx.view.graph().nodes().len() as u32;
    let mut search = DepthLimited::new(ctx);

    for depth in 0..=max_depth {
        let mut path = vec![ctx.start];
        if search.descend(&mut path, depth) {
            let cost = ctx.view.path_cost(&path);
            return AlgorithmResult::found(
                ctx,
                Algorithm::Iddfs,
                path,
                search.traversal,
                cost,
                search.expanded,
            );
        }
        trace!(depth, expanded = search.expanded, "IDDFS iteration exhausted");
    }

    AlgorithmResult::failure(Algorithm::Iddfs, search.traversal, search.expanded, NO_PATH)
}

/// Recursive depth-bounded descent shared by DLS and IDDFS.
struct DepthLimited<'c, 'a> {
    ctx: &'c SearchContext<'a>,
    traversal: Vec<NodeId>,
    seen: HashSet<NodeId>,
    expanded: usize,
}

impl<'c, 'a> DepthLimited<'c, 'a> {
    fn new(ctx: &'c SearchContext<'a>) -> Self {
        Self {
            ctx,
            traversal: Vec::new(),
            seen: HashSet::new(),
            expanded: 0,
        }
    }

    /// Explore below the last node of `path`. On success `path` holds the
    /// route to the goal; otherwise it is restored to its original contents.
    ///
    /// Visited tracking is per branch: a node may appear on many branches
    /// but never twice on the same one, which is exactly `path`.
    fn descend(&mut self, path: &mut Vec<NodeId>, depth: u32) -> bool {
        let Some(&current) = path.last() else {
            return false;
        };
        self.expanded += 1;
        if self.seen.insert(current) {
            self.traversal.push(current);
        }

        if self.ctx.is_goal(current) {
            return true;
        }
        if depth == 0 {
            return false;
        }

        for next in self.ctx.view.neighbors(current) {
            if path.contains(&next) {
                continue;
            }
            path.push(next);
            if self.descend(path, depth - 1) {
                return true;
            }
            path.pop();
        }
        false
    }
}
