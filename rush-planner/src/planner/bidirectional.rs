//! Bidirectional breadth-first search.
//!
//! One BFS grows from the start, another from the single goal, alternating
//! one expansion each (forward first). The backward search walks edges with
//! the same neighbor rule as the forward one. The search stops as soon as
//! an expanded node is already known to the opposite side.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use crate::domain::NodeId;

use super::algorithm::Algorithm;
use super::result::AlgorithmResult;
use super::search::{NO_PATH, SearchContext};

const SINGLE_GOAL_NOTE: &str = "Works best with single goal";

/// Paths discovered by one side, keyed by their last node.
type Discovered = HashMap<NodeId, Vec<NodeId>>;

pub(crate) fn bidirectional(ctx: &SearchContext<'_>) -> AlgorithmResult {
    let goal = match ctx.goals.as_slice() {
        [goal] => *goal,
        [] => {
            return AlgorithmResult::failure(
                Algorithm::Bidirectional,
                Vec::new(),
                0,
                "No goal node configured",
            )
            .with_note(SINGLE_GOAL_NOTE);
        }
        _ => {
            return AlgorithmResult::failure(
                Algorithm::Bidirectional,
                Vec::new(),
                0,
                "Multiple goals not supported",
            )
            .with_note(SINGLE_GOAL_NOTE);
        }
    };

    let mut forward = Side::new(ctx.start);
    let mut backward = Side::new(goal);
    let mut traversal = vec![ctx.start];
    if goal != ctx.start {
        traversal.push(goal);
    }
    let mut expanded = 0;

    while !forward.queue.is_empty() && !backward.queue.is_empty() {
        if let Some(path) = forward.queue.pop_front() {
            expanded += 1;
            if let Some(joined) = join_forward(&path, &backward.discovered) {
                return found(ctx, joined, traversal, expanded);
            }
            forward.expand(ctx, path, &mut traversal);
        }

        if let Some(path) = backward.queue.pop_front() {
            expanded += 1;
            if let Some(joined) = join_backward(&path, &forward.discovered) {
                return found(ctx, joined, traversal, expanded);
            }
            backward.expand(ctx, path, &mut traversal);
        }
    }

    AlgorithmResult::failure(Algorithm::Bidirectional, traversal, expanded, NO_PATH)
}

fn found(
    ctx: &SearchContext<'_>,
    path: Vec<NodeId>,
    traversal: Vec<NodeId>,
    expanded: usize,
) -> AlgorithmResult {
    let cost = ctx.view.path_cost(&path);
    AlgorithmResult::found(ctx, Algorithm::Bidirectional, path, traversal, cost, expanded)
}

/// One direction of the search.
struct Side {
    queue: VecDeque<Vec<NodeId>>,
    discovered: Discovered,
}

impl Side {
    fn new(root: NodeId) -> Self {
        Self {
            queue: VecDeque::from([vec![root]]),
            discovered: HashMap::from([(root, vec![root])]),
        }
    }

    fn expand(&mut self, ctx: &SearchContext<'_>, path: Vec<NodeId>, traversal: &mut Vec<NodeId>) {
        let Some(&current) = path.last() else {
            return;
        };
        trace!(node = %current, "bidirectional expanding");

        for next in ctx.view.neighbors(current) {
            if self.discovered.contains_key(&next) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(next);
            self.discovered.insert(next, extended.clone());
            self.queue.push_back(extended);
            if !traversal.contains(&next) {
                traversal.push(next);
            }
        }
    }
}

/// A forward path whose tip the backward side has reached.
fn join_forward(forward_path: &[NodeId], backward: &Discovered) -> Option<Vec<NodeId>> {
    let tip = forward_path.last()?;
    let back = backward.get(tip)?;
    let mut joined = forward_path.to_vec();
    joined.extend(back.iter().rev().skip(1));
    Some(joined)
}

/// A backward path whose tip the forward side has reached.
fn join_backward(backward_path: &[NodeId], forward: &Discovered) -> Option<Vec<NodeId>> {
    let tip = backward_path.last()?;
    let mut joined = forward.get(tip)?.clone();
    joined.extend(backward_path.iter().rev().skip(1));
    Some(joined)
}
