//! Strategy dispatch.
//!
//! The [`Planner`] resolves the start and goal nodes once, then hands a
//! [`SearchContext`] to whichever strategy was asked for. Strategies never
//! see each other's state.

use tracing::{debug, warn};

use crate::domain::{NodeId, Restriction};
use crate::graph::{Graph, RoadView};

use super::algorithm::Algorithm;
use super::compare::compare_results;
use super::config::SearchConfig;
use super::result::{AlgorithmResult, Comparison, Outcome};
use super::{bidirectional, informed, local, uninformed};

pub(crate) const NO_PATH: &str = "No path found";
pub(crate) const NO_START: &str = "Start node not found";

/// What to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRequest {
    /// One strategy.
    Single(Algorithm),
    /// Every strategy, plus aggregate statistics.
    CompareAll,
}

/// Everything a strategy needs: the cost model, the origin and the goals.
#[derive(Debug, Clone)]
pub(crate) struct SearchContext<'a> {
    pub view: RoadView<'a>,
    pub start: NodeId,
    pub goals: Vec<NodeId>,
}

impl SearchContext<'_> {
    pub fn is_goal(&self, node: NodeId) -> bool {
        self.goals.contains(&node)
    }
}

/// Runs search strategies over one graph snapshot and configuration.
///
/// The planner borrows the graph, so no edit can happen while it is alive.
pub struct Planner<'a> {
    view: RoadView<'a>,
    config: SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a Graph, restrictions: &'a [Restriction], config: SearchConfig) -> Self {
        let view = RoadView::new(
            graph,
            restrictions,
            config.time_slot,
            config.one_way_enabled,
        );
        Self { view, config }
    }

    pub fn view(&self) -> RoadView<'a> {
        self.view
    }

    /// Run a request.
    pub fn plan(&self, request: SearchRequest) -> Outcome {
        match request {
            SearchRequest::Single(algorithm) => Outcome::Single(self.run(algorithm)),
            SearchRequest::CompareAll => Outcome::Comparison(self.compare_all()),
        }
    }

    /// Run one strategy.
    pub fn run(&self, algorithm: Algorithm) -> AlgorithmResult {
        let result = match self.context() {
            Some(ctx) => self.dispatch(&ctx, algorithm),
            None => AlgorithmResult::failure(algorithm, Vec::new(), 0, NO_START),
        };

        debug!(
            algorithm = algorithm.name(),
            success = result.success,
            nodes_expanded = result.nodes_expanded,
            cost = %result.cost,
            time_slot = self.view.time_slot().key(),
            one_way = self.view.one_way(),
            "search complete"
        );
        result
    }

    /// Run every strategy in [`Algorithm::ALL`] order against the same
    /// snapshot.
    pub fn compare_all(&self) -> Comparison {
        let results: Vec<_> = Algorithm::ALL.into_iter().map(|a| self.run(a)).collect();
        compare_results(results)
    }

    fn dispatch(&self, ctx: &SearchContext<'_>, algorithm: Algorithm) -> AlgorithmResult {
        match algorithm {
            Algorithm::Bfs => uninformed::bfs(ctx),
            Algorithm::Dfs => uninformed::dfs(ctx),
            Algorithm::Dls => uninformed::dls(ctx, self.config.depth_limit),
            Algorithm::Iddfs => uninformed::iddfs(ctx),
            Algorithm::Ucs => informed::ucs(ctx),
            Algorithm::Greedy => informed::greedy(ctx),
            Algorithm::AStar => informed::astar(ctx),
            Algorithm::Bidirectional => bidirectional::bidirectional(ctx),
            Algorithm::HillClimbing => local::hill_climbing(ctx),
        }
    }

    fn context(&self) -> Option<SearchContext<'a>> {
        let graph = self.view.graph();
        let start = graph.start()?;

        let starts = graph.start_count();
        if starts > 1 {
            warn!(
                starts,
                chosen = %start.name,
                "multiple start nodes, using the first"
            );
        }

        Some(SearchContext {
            view: self.view,
            start: start.id,
            goals: graph.goals().iter().map(|n| n.id).collect(),
        })
    }
}
