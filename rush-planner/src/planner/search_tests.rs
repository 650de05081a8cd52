//! Unit tests for strategy dispatch and the nine search strategies.
//!
//! Most expectations are traced by hand against the Colombo scenario under
//! the default peak-evening slot (every edge cost doubled).

use super::*;
use crate::domain::{Cost, Edge, Node, NodeId, Restriction, TimeSlot, apply_restrictions};
use crate::graph::{Graph, NodeUpdate, colombo_restrictions, colombo_scenario};

fn ids(list: &[u32]) -> Vec<NodeId> {
    list.iter().copied().map(NodeId).collect()
}

fn run(graph: &Graph, algorithm: Algorithm) -> AlgorithmResult {
    Planner::new(graph, &[], SearchConfig::default()).run(algorithm)
}

/// The scenario with Maradana demoted, leaving Fort as the only goal.
fn fort_only() -> Graph {
    let mut graph = colombo_scenario();
    graph
        .update_node(
            NodeId(8),
            NodeUpdate {
                is_goal: Some(false),
                ..NodeUpdate::default()
            },
        )
        .unwrap();
    graph
}

/// The scenario with Fort demoted, leaving Maradana as the only goal.
fn maradana_only() -> Graph {
    let mut graph = colombo_scenario();
    graph
        .update_node(
            NodeId(5),
            NodeUpdate {
                is_goal: Some(false),
                ..NodeUpdate::default()
            },
        )
        .unwrap();
    graph
}

/// Apply the scenario restrictions to `graph`'s edges.
fn restricted(mut graph: Graph) -> (Graph, Vec<Restriction>) {
    let restrictions = colombo_restrictions();
    let edges = apply_restrictions(graph.edges(), &restrictions, true);
    graph.replace_edges(edges);
    (graph, restrictions)
}

// ========== Scenario walk-through ==========

#[test]
fn astar_catches_maradana_train() {
    let graph = colombo_scenario();
    let result = run(&graph, Algorithm::AStar);

    assert!(result.success);
    assert_eq!(result.path, ids(&[0, 7, 8]));
    assert_eq!(result.cost, Cost::new(13.0));
    assert_eq!(result.goal_reached, "Maradana Station");
    assert_eq!(result.deadline.status, DeadlineStatus::Success);
    assert_eq!(result.deadline.margin, Cost::new(14.0));
    assert_eq!(result.deadline.message, "Train caught! Arrived 14 minutes early");
    assert_eq!(result.nodes_expanded, 3);
    assert_eq!(result.traversal, ids(&[0, 7, 8]));
}

#[test]
fn ucs_finds_cheapest_route() {
    let graph = colombo_scenario();
    let result = run(&graph, Algorithm::Ucs);

    assert_eq!(result.path, ids(&[0, 7, 8]));
    assert_eq!(result.cost, Cost::new(13.0));
    assert_eq!(result.deadline.margin, Cost::new(14.0));
    // 0, 2, 3, 7, then 6 beats 4 on insertion order at g = 12
    assert_eq!(result.traversal, ids(&[0, 2, 3, 7, 6, 4, 8]));
    assert_eq!(result.nodes_expanded, 7);
}

#[test]
fn bfs_finds_fewest_hops() {
    let graph = colombo_scenario();
    let result = run(&graph, Algorithm::Bfs);

    assert_eq!(result.path, ids(&[0, 6, 5]));
    assert_eq!(result.cost, Cost::new(20.0));
    assert_eq!(result.goal_reached, "Fort Station");
    assert_eq!(result.deadline.status, DeadlineStatus::Success);
    assert_eq!(result.deadline.margin, Cost::new(5.0));
    assert_eq!(result.nodes_expanded, 7);
    // Nodes are recorded when discovered
    assert_eq!(result.traversal, ids(&[0, 2, 3, 6, 7, 4, 5, 8]));
}

#[test]
fn dfs_dives_along_first_neighbors() {
    let graph = colombo_scenario();
    let result = run(&graph, Algorithm::Dfs);

    assert!(result.success);
    assert_eq!(result.path, ids(&[0, 2, 3, 4, 5]));
    assert_eq!(result.cost, Cost::new(27.0));
    assert_eq!(result.deadline.status, DeadlineStatus::Missed);
    assert_eq!(result.deadline.margin, Cost::new(2.0));
    assert_eq!(result.deadline.message, "Train missed! 2 minutes late");
    assert_eq!(result.nodes_expanded, 5);
    assert!(!result.caught_deadline());
}

#[test]
fn dls_with_default_limit() {
    let graph = colombo_scenario();
    let result = run(&graph, Algorithm::Dls);

    assert!(result.success);
    assert_eq!(result.path, ids(&[0, 2, 7, 8]));
    assert_eq!(result.cost, Cost::new(17.0));
    assert_eq!(result.deadline.margin, Cost::new(10.0));
    assert_eq!(result.nodes_expanded, 8);
    // 6 is reached on two branches but recorded once
    assert_eq!(result.traversal, ids(&[0, 2, 3, 4, 6, 7, 8]));
    assert_eq!(result.note.as_deref(), Some("Depth limit: 3"));
}

#[test]
fn dls_too_shallow_fails_with_note() {
    let graph = colombo_scenario();
    let config = SearchConfig::new(TimeSlot::PeakEvening, false, 1);
    let result = Planner::new(&graph, &[], config).run(Algorithm::Dls);

    assert!(!result.success);
    assert!(result.path.is_empty());
    assert!(!result.cost.is_reachable());
    assert_eq!(result.deadline.message, "No path found within depth limit");
    assert_eq!(result.note.as_deref(), Some("Depth limit: 1"));
    // The start plus its four neighbors
    assert_eq!(result.nodes_expanded, 5);
}

#[test]
fn iddfs_accumulates_across_iterations() {
    let graph = colombo_scenario();
    let result = run(&graph, Algorithm::Iddfs);

    assert_eq!(result.path, ids(&[0, 6, 5]));
    assert_eq!(result.cost, Cost::new(20.0));
    // 1 at depth 0, 5 at depth 1, 11 into depth 2
    assert_eq!(result.nodes_expanded, 17);
    assert_eq!(result.traversal, ids(&[0, 2, 3, 6, 7, 4, 5]));
}

#[test]
fn greedy_follows_heuristic() {
    let graph = colombo_scenario();
    let result = run(&graph, Algorithm::Greedy);

    assert_eq!(result.path, ids(&[0, 7, 8]));
    assert_eq!(result.cost, Cost::new(13.0));
    assert_eq!(result.nodes_expanded, 3);
}

#[test]
fn hill_climbing_descends_to_goal() {
    let graph = colombo_scenario();
    let result = run(&graph, Algorithm::HillClimbing);

    assert!(result.success);
    assert_eq!(result.path, ids(&[0, 7, 8]));
    assert_eq!(result.traversal, ids(&[0, 7, 8]));
    assert_eq!(result.cost, Cost::new(13.0));
    assert_eq!(result.nodes_expanded, 3);
}

#[test]
fn hill_climbing_stuck_keeps_partial_path() {
    // 0 (h 5) -> 1 (h 2) -> 2 (h 4, goal): 2 is no improvement on 1
    let nodes = vec![
        Node::new(NodeId(0), "A").start().with_h(5.0),
        Node::new(NodeId(1), "B").with_h(2.0),
        Node::new(NodeId(2), "C").goal(None).with_h(4.0),
    ];
    let edges = vec![
        Edge::new(NodeId(0), NodeId(1), 1.0),
        Edge::new(NodeId(1), NodeId(2), 1.0),
    ];
    let graph = Graph::from_parts(nodes, edges).unwrap();
    let result = run(&graph, Algorithm::HillClimbing);

    assert!(!result.success);
    assert_eq!(result.path, ids(&[0, 1]));
    assert_eq!(result.nodes_expanded, 2);
    assert_eq!(result.deadline.message, "Stuck at local optimum");
    assert!(!result.cost.is_reachable());
}

#[test]
fn hill_climbing_prefers_node_zero_when_best() {
    // Node 0 is the best neighbor of the start and also the goal
    let nodes = vec![
        Node::new(NodeId(0), "Goal").goal(None),
        Node::new(NodeId(1), "Start").start().with_h(4.0),
        Node::new(NodeId(2), "Other").with_h(3.0),
    ];
    let edges = vec![
        Edge::new(NodeId(1), NodeId(2), 1.0),
        Edge::new(NodeId(1), NodeId(0), 1.0),
    ];
    let graph = Graph::from_parts(nodes, edges).unwrap();
    let result = run(&graph, Algorithm::HillClimbing);

    assert!(result.success);
    assert_eq!(result.path, ids(&[1, 0]));
    assert_eq!(result.deadline.status, DeadlineStatus::Unknown);
    assert_eq!(result.deadline.message, "No deadline specified");
}

// ========== Bidirectional ==========

#[test]
fn bidirectional_rejects_multiple_goals() {
    let graph = colombo_scenario();
    let result = run(&graph, Algorithm::Bidirectional);

    assert!(!result.success);
    assert_eq!(result.nodes_expanded, 0);
    assert!(result.traversal.is_empty());
    assert_eq!(result.deadline.message, "Multiple goals not supported");
    assert_eq!(result.note.as_deref(), Some("Works best with single goal"));
}

#[test]
fn bidirectional_without_goal() {
    let nodes = vec![
        Node::new(NodeId(0), "A").start(),
        Node::new(NodeId(1), "B"),
    ];
    let edges = vec![Edge::new(NodeId(0), NodeId(1), 1.0)];
    let graph = Graph::from_parts(nodes, edges).unwrap();
    let result = run(&graph, Algorithm::Bidirectional);

    assert!(!result.success);
    assert_eq!(result.deadline.message, "No goal node configured");
    assert_eq!(result.note.as_deref(), Some("Works best with single goal"));
}

#[test]
fn bidirectional_meets_in_the_middle() {
    let graph = maradana_only();
    let result = run(&graph, Algorithm::Bidirectional);

    assert!(result.success);
    assert_eq!(result.path, ids(&[0, 7, 8]));
    assert_eq!(result.cost, Cost::new(13.0));
    assert_eq!(result.nodes_expanded, 4);
    assert_eq!(result.traversal, ids(&[0, 8, 2, 3, 6, 7, 5]));
    assert_eq!(result.note, None);
}

#[test]
fn bidirectional_start_is_goal() {
    let nodes = vec![Node::new(NodeId(0), "Here").start().goal(Some(5.0))];
    let graph = Graph::from_parts(nodes, Vec::new()).unwrap();
    let result = run(&graph, Algorithm::Bidirectional);

    assert!(result.success);
    assert_eq!(result.path, ids(&[0]));
    assert_eq!(result.cost, Cost::ZERO);
    assert_eq!(result.nodes_expanded, 1);
}

// ========== Edge cases ==========

#[test]
fn missing_start_fails_every_strategy() {
    let nodes = vec![
        Node::new(NodeId(0), "A"),
        Node::new(NodeId(1), "B").goal(Some(10.0)),
    ];
    let edges = vec![Edge::new(NodeId(0), NodeId(1), 1.0)];
    let graph = Graph::from_parts(nodes, edges).unwrap();

    for algorithm in Algorithm::ALL {
        let result = run(&graph, algorithm);
        assert!(!result.success, "{algorithm:?} should fail");
        assert_eq!(result.nodes_expanded, 0);
        assert!(result.path.is_empty());
        assert_eq!(result.goal_reached, "None");
        assert_eq!(result.deadline.message, "Start node not found");
    }
}

#[test]
fn unreachable_goal_fails() {
    let nodes = vec![
        Node::new(NodeId(0), "A").start(),
        Node::new(NodeId(1), "B"),
        Node::new(NodeId(2), "Island").goal(Some(10.0)),
    ];
    let edges = vec![Edge::new(NodeId(0), NodeId(1), 1.0)];
    let graph = Graph::from_parts(nodes, edges).unwrap();

    for algorithm in Algorithm::ALL {
        let result = run(&graph, algorithm);
        assert!(!result.success, "{algorithm:?} should fail");
        assert!(!result.cost.is_reachable());
        assert_eq!(result.deadline.status, DeadlineStatus::Missed);
    }
}

#[test]
fn start_that_is_goal_costs_nothing() {
    let nodes = vec![
        Node::new(NodeId(0), "Here").start().goal(Some(5.0)),
        Node::new(NodeId(1), "There"),
    ];
    let edges = vec![Edge::new(NodeId(0), NodeId(1), 1.0)];
    let graph = Graph::from_parts(nodes, edges).unwrap();

    for algorithm in Algorithm::ALL {
        let result = run(&graph, algorithm);
        assert!(result.success, "{algorithm:?} should succeed");
        assert_eq!(result.path, ids(&[0]));
        assert_eq!(result.cost, Cost::ZERO);
        assert_eq!(result.deadline.margin, Cost::new(5.0));
    }
}

#[test]
fn iddfs_path_never_longer_than_bfs() {
    for graph in [colombo_scenario(), fort_only(), maradana_only()] {
        let bfs = run(&graph, Algorithm::Bfs);
        let iddfs = run(&graph, Algorithm::Iddfs);
        assert!(iddfs.path.len() <= bfs.path.len());
    }
}

#[test]
fn runs_are_deterministic() {
    let graph = colombo_scenario();
    let planner = Planner::new(&graph, &[], SearchConfig::default());
    for algorithm in Algorithm::ALL {
        assert_eq!(planner.run(algorithm), planner.run(algorithm));
    }
}

#[test]
fn time_slot_scales_cost_and_margin() {
    let graph = colombo_scenario();
    let config = SearchConfig::new(TimeSlot::OffPeak, false, 3);
    let result = Planner::new(&graph, &[], config).run(Algorithm::Ucs);

    // 5 + 1.5 at x1.0
    assert_eq!(result.path, ids(&[0, 7, 8]));
    assert_eq!(result.cost, Cost::new(6.5));
    assert_eq!(result.deadline.margin, Cost::new(20.5));
}

/// S-A 1, S-B 2, A-C 1, B-C 1, C-G 3 with h(A) = 4. The heuristic never
/// overestimates but drops by more than the edge cost from A to S.
fn inconsistent_heuristic_graph() -> Graph {
    let nodes = vec![
        Node::new(NodeId(0), "S").start(),
        Node::new(NodeId(1), "A").with_h(4.0),
        Node::new(NodeId(2), "B"),
        Node::new(NodeId(3), "C"),
        Node::new(NodeId(4), "G").goal(None),
    ];
    let edges = vec![
        Edge::new(NodeId(0), NodeId(1), 1.0),
        Edge::new(NodeId(0), NodeId(2), 2.0),
        Edge::new(NodeId(1), NodeId(3), 1.0),
        Edge::new(NodeId(2), NodeId(3), 1.0),
        Edge::new(NodeId(3), NodeId(4), 3.0),
    ];
    Graph::from_parts(nodes, edges).unwrap()
}

#[test]
fn astar_can_miss_optimum_with_inconsistent_heuristic() {
    let graph = inconsistent_heuristic_graph();
    let config = SearchConfig::new(TimeSlot::OffPeak, false, 3);
    let planner = Planner::new(&graph, &[], config);

    let ucs = planner.run(Algorithm::Ucs);
    assert_eq!(ucs.path, ids(&[0, 1, 3, 4]));
    assert_eq!(ucs.cost, Cost::new(5.0));

    // C is closed via B before the cheaper route through A is popped
    let astar = planner.run(Algorithm::AStar);
    assert_eq!(astar.path, ids(&[0, 2, 3, 4]));
    assert_eq!(astar.cost, Cost::new(6.0));
}

// ========== One-way mode ==========

#[test]
fn one_way_blocks_restricted_direction() {
    let (graph, restrictions) = restricted(fort_only());
    let config = SearchConfig::new(TimeSlot::PeakEvening, true, 3);
    let result = Planner::new(&graph, &restrictions, config).run(Algorithm::Bfs);

    // Union Place -> Fort is closed, so BFS goes round via Kollupitiya
    assert_eq!(result.path, ids(&[0, 3, 4, 5]));
    assert_eq!(result.cost, Cost::new(24.0));
    assert_eq!(result.deadline.margin, Cost::new(1.0));
    assert_eq!(result.nodes_expanded, 8);
}

#[test]
fn one_way_off_ignores_leftover_tags() {
    let (graph, restrictions) = restricted(fort_only());
    let result = Planner::new(&graph, &restrictions, SearchConfig::default()).run(Algorithm::Bfs);

    assert_eq!(result.path, ids(&[0, 6, 5]));
    assert_eq!(result.cost, Cost::new(20.0));
}

#[test]
fn one_way_keeps_maradana_route() {
    let (graph, restrictions) = restricted(colombo_scenario());
    let config = SearchConfig::new(TimeSlot::PeakEvening, true, 3);
    let result = Planner::new(&graph, &restrictions, config).run(Algorithm::AStar);

    assert_eq!(result.path, ids(&[0, 7, 8]));
    assert_eq!(result.cost, Cost::new(13.0));
}

// ========== Comparison ==========

#[test]
fn compare_all_runs_every_strategy_in_order() {
    let graph = colombo_scenario();
    let planner = Planner::new(&graph, &[], SearchConfig::default());
    let comparison = planner.compare_all();

    let order: Vec<_> = comparison.results.iter().map(|r| r.algorithm).collect();
    assert_eq!(order, Algorithm::ALL.to_vec());
}

#[test]
fn compare_all_stats_for_scenario() {
    let graph = colombo_scenario();
    let planner = Planner::new(&graph, &[], SearchConfig::default());
    let stats = planner.compare_all().stats;

    assert_eq!(
        stats.caught,
        vec![
            Algorithm::Bfs,
            Algorithm::Dls,
            Algorithm::Iddfs,
            Algorithm::Ucs,
            Algorithm::Greedy,
            Algorithm::AStar,
            Algorithm::HillClimbing,
        ]
    );
    assert_eq!(
        stats.fastest,
        vec![
            Algorithm::Ucs,
            Algorithm::Greedy,
            Algorithm::AStar,
            Algorithm::HillClimbing,
        ]
    );
    assert_eq!(stats.fastest_cost, Cost::new(13.0));
    assert_eq!(stats.fewest_nodes, Some(3));
    assert_eq!(
        stats.most_efficient,
        vec![Algorithm::Greedy, Algorithm::AStar, Algorithm::HillClimbing]
    );
    assert_eq!(stats.success_rate, 7.0 / 9.0);
}

#[test]
fn plan_dispatches_request() {
    let graph = colombo_scenario();
    let planner = Planner::new(&graph, &[], SearchConfig::default());

    match planner.plan(SearchRequest::Single(Algorithm::Greedy)) {
        Outcome::Single(result) => assert_eq!(result.algorithm, Algorithm::Greedy),
        other => panic!("expected a single result, got {other:?}"),
    }
    assert_eq!(planner.plan(SearchRequest::CompareAll).results().len(), 9);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Random connected-or-not graph: node 0 starts, a random subset are
    /// goals, and every heuristic is zero.
    fn graph_strategy() -> impl Strategy<Value = Graph> {
        (2u32..9)
            .prop_flat_map(|n| {
                (
                    Just(n),
                    prop::collection::vec((0..n, 0..n, 1u32..40), 0..20),
                    prop::collection::vec(any::<bool>(), n as usize),
                )
            })
            .prop_map(|(n, raw_edges, goal_flags)| {
                let nodes = (0..n)
                    .map(|i| {
                        let node = Node::new(NodeId(i), format!("N{i}"));
                        let node = if i == 0 { node.start() } else { node };
                        if goal_flags[i as usize] {
                            node.goal(Some(30.0))
                        } else {
                            node
                        }
                    })
                    .collect();
                let edges = raw_edges
                    .into_iter()
                    .filter(|(a, b, _)| a != b)
                    .map(|(a, b, half_minutes)| {
                        Edge::new(NodeId(a), NodeId(b), f64::from(half_minutes) / 2.0)
                    })
                    .collect();
                Graph::from_parts(nodes, edges).unwrap()
            })
    }

    /// Set every heuristic to half the true cost from that node to the
    /// nearest goal. A scaled-down exact distance is consistent.
    fn with_consistent_heuristic(graph: &Graph) -> Graph {
        let mut out = graph.clone();
        for node in graph.nodes() {
            let mut from_here = graph.clone();
            from_here.set_start(node.id).unwrap();
            let nearest = run(&from_here, Algorithm::Ucs);
            let h = if nearest.success {
                nearest.cost.minutes() / 2.0
            } else {
                0.0
            };
            let update = NodeUpdate {
                h: Some(h),
                ..NodeUpdate::default()
            };
            out.update_node(node.id, update).unwrap();
        }
        out
    }

    proptest! {
        #[test]
        fn successful_paths_are_valid(graph in graph_strategy()) {
            let planner = Planner::new(&graph, &[], SearchConfig::default());
            let view = planner.view();

            for result in planner.compare_all().results {
                if !result.success {
                    prop_assert!(!result.cost.is_reachable());
                    continue;
                }
                prop_assert_eq!(result.path.first(), Some(&NodeId(0)));
                let last = *result.path.last().unwrap();
                prop_assert!(graph.is_goal(last));
                for hop in result.path.windows(2) {
                    prop_assert!(view.neighbors(hop[0]).contains(&hop[1]));
                }
                prop_assert_eq!(view.path_cost(&result.path).rounded(), result.cost);
            }
        }

        #[test]
        fn ucs_is_never_beaten(graph in graph_strategy()) {
            let planner = Planner::new(&graph, &[], SearchConfig::default());
            let comparison = planner.compare_all();
            let ucs = &comparison.results[4];
            prop_assert_eq!(ucs.algorithm, Algorithm::Ucs);

            for result in comparison.results.iter().filter(|r| r.success) {
                prop_assert!(ucs.success);
                prop_assert!(ucs.cost <= result.cost, "{:?} beat UCS", result.algorithm);
            }
        }

        /// With all-zero heuristics A* degenerates to uniform cost search.
        #[test]
        fn astar_matches_ucs_on_zero_heuristic(graph in graph_strategy()) {
            let planner = Planner::new(&graph, &[], SearchConfig::default());
            let ucs = planner.run(Algorithm::Ucs);
            let astar = planner.run(Algorithm::AStar);

            prop_assert_eq!(&ucs.path, &astar.path);
            prop_assert_eq!(ucs.cost, astar.cost);
            prop_assert_eq!(ucs.nodes_expanded, astar.nodes_expanded);
        }

        #[test]
        fn astar_matches_ucs_on_consistent_heuristic(graph in graph_strategy()) {
            let graph = with_consistent_heuristic(&graph);
            let planner = Planner::new(&graph, &[], SearchConfig::default());
            let ucs = planner.run(Algorithm::Ucs);
            let astar = planner.run(Algorithm::AStar);

            prop_assert_eq!(ucs.success, astar.success);
            prop_assert_eq!(ucs.cost, astar.cost);
        }

        #[test]
        fn hill_climbing_terminates_within_node_count(graph in graph_strategy()) {
            let result = run(&graph, Algorithm::HillClimbing);
            prop_assert!(result.nodes_expanded <= graph.nodes().len());
            prop_assert!(result.path.len() <= graph.nodes().len());
        }

        #[test]
        fn iddfs_is_no_deeper_than_bfs(graph in graph_strategy()) {
            let bfs = run(&graph, Algorithm::Bfs);
            let iddfs = run(&graph, Algorithm::Iddfs);
            prop_assert_eq!(bfs.success, iddfs.success);
            if bfs.success {
                prop_assert_eq!(iddfs.path.len(), bfs.path.len());
            }
        }
    }
}
