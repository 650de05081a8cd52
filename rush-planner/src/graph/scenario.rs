//! The built-in Colombo evening-rush scenario.
//!
//! Start in Dehiwala at 5:45 PM and reach either Fort Station (train leaves
//! in 25 minutes) or Maradana Station (27 minutes). Heuristics are straight
//! estimates in minutes to the nearer station.

use crate::domain::{Direction, Edge, Node, NodeId, Restriction};

use super::Graph;

/// Label written into exported snapshot metadata.
pub const SCENARIO_LABEL: &str = "Nimal Evening Rush - Dehiwala to Fort/Maradana";

/// The default road graph.
pub fn colombo_scenario() -> Graph {
    let nodes = vec![
        Node::new(NodeId(0), "Dehiwala").start().with_h(13.0).at(100.0, 400.0),
        Node::new(NodeId(2), "Wellawatte").with_h(15.0).at(150.0, 300.0),
        Node::new(NodeId(3), "Bambalapitiya").with_h(12.0).at(250.0, 250.0),
        Node::new(NodeId(4), "Kollupitiya").with_h(10.0).at(350.0, 200.0),
        Node::new(NodeId(5), "Fort Station").goal(Some(25.0)).at(450.0, 150.0),
        Node::new(NodeId(6), "Union Place").with_h(8.0).at(300.0, 350.0),
        Node::new(NodeId(7), "Borella").with_h(3.0).at(200.0, 450.0),
        Node::new(NodeId(8), "Maradana Station").goal(Some(27.0)).at(300.0, 500.0),
    ];

    let edges = [
        (0, 2, 3.0),
        (0, 3, 4.0),
        (0, 6, 6.0),
        (0, 7, 5.0),
        (2, 3, 2.5),
        (2, 7, 4.0),
        (3, 4, 2.0),
        (3, 6, 3.5),
        (4, 5, 6.0),
        (6, 5, 4.0),
        (7, 6, 6.0),
        (7, 8, 1.5),
        (5, 8, 2.0),
    ]
    .into_iter()
    .map(|(from, to, cost)| Edge::new(NodeId(from), NodeId(to), cost))
    .collect();

    Graph { nodes, edges }
}

/// Peak-hour one-way rules around Fort.
pub fn colombo_restrictions() -> Vec<Restriction> {
    vec![
        Restriction::new(NodeId(4), NodeId(5), Direction::Reverse, 15.0),
        Restriction::new(NodeId(5), NodeId(6), Direction::Reverse, 12.0),
    ]
}
