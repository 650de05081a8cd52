//! The closed set of search strategies and their textbook properties.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when parsing an unknown strategy key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm: {0:?}")]
pub struct InvalidAlgorithm(String);

/// A search strategy.
///
/// # Examples
///
/// ```
/// use rush_planner::planner::Algorithm;
///
/// let algo: Algorithm = "astar".parse().unwrap();
/// assert_eq!(algo, Algorithm::AStar);
/// assert_eq!(algo.name(), "A*");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dls,
    Iddfs,
    Ucs,
    Greedy,
    AStar,
    Bidirectional,
    HillClimbing,
}

impl Algorithm {
    /// Every strategy, in comparison order.
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dls,
        Algorithm::Iddfs,
        Algorithm::Ucs,
        Algorithm::Greedy,
        Algorithm::AStar,
        Algorithm::Bidirectional,
        Algorithm::HillClimbing,
    ];

    /// Request key, e.g. `"hillclimbing"`.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dls => "dls",
            Algorithm::Iddfs => "iddfs",
            Algorithm::Ucs => "ucs",
            Algorithm::Greedy => "greedy",
            Algorithm::AStar => "astar",
            Algorithm::Bidirectional => "bidirectional",
            Algorithm::HillClimbing => "hillclimbing",
        }
    }

    /// Display name, e.g. `"Hill Climbing"`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dls => "DLS",
            Algorithm::Iddfs => "IDDFS",
            Algorithm::Ucs => "UCS",
            Algorithm::Greedy => "Greedy",
            Algorithm::AStar => "A*",
            Algorithm::Bidirectional => "Bidirectional",
            Algorithm::HillClimbing => "Hill Climbing",
        }
    }

    /// Whether the strategy reads node heuristics.
    pub fn is_informed(self) -> bool {
        matches!(
            self,
            Algorithm::Greedy | Algorithm::AStar | Algorithm::HillClimbing
        )
    }

    /// Complexity and guarantee metadata.
    pub fn properties(self) -> AlgorithmProperties {
        match self {
            Algorithm::Bfs => AlgorithmProperties {
                time_complexity: "O(V + E)",
                space_complexity: "O(V)",
                complete: "Yes",
                optimal: "Yes (unweighted)",
                description: "Complete and optimal for unweighted graphs",
            },
            Algorithm::Dfs => AlgorithmProperties {
                time_complexity: "O(V + E)",
                space_complexity: "O(V)",
                complete: "No",
                optimal: "No",
                description: "Not complete in infinite spaces, not optimal",
            },
            Algorithm::Dls => AlgorithmProperties {
                time_complexity: "O(b^l)",
                space_complexity: "O(l)",
                complete: "Yes (if goal ≤ l)",
                optimal: "No",
                description: "Complete if solution within depth limit l, not optimal",
            },
            Algorithm::Iddfs => AlgorithmProperties {
                time_complexity: "O(b^d)",
                space_complexity: "O(d)",
                complete: "Yes",
                optimal: "Yes (unweighted)",
                description: "Combines BFS completeness with DFS space efficiency",
            },
            Algorithm::Ucs => AlgorithmProperties {
                time_complexity: "O(b^(1+⌊C*/ε⌋))",
                space_complexity: "O(b^(1+⌊C*/ε⌋))",
                complete: "Yes",
                optimal: "Yes",
                description: "Complete and optimal for positive edge costs",
            },
            Algorithm::Greedy => AlgorithmProperties {
                time_complexity: "O(b^m)",
                space_complexity: "O(b×m)",
                complete: "No",
                optimal: "No",
                description: "Fast but can get stuck in local optima",
            },
            Algorithm::AStar => AlgorithmProperties {
                time_complexity: "O(b^d)",
                space_complexity: "O(b^d)",
                complete: "Yes",
                optimal: "Yes (admissible h)",
                description: "Complete and optimal with admissible heuristic",
            },
            Algorithm::Bidirectional => AlgorithmProperties {
                time_complexity: "O(b^(d/2))",
                space_complexity: "O(b^(d/2))",
                complete: "Yes",
                optimal: "Yes (with UCS)",
                description: "Searches from both start and goal simultaneously",
            },
            Algorithm::HillClimbing => AlgorithmProperties {
                time_complexity: "O(∞)",
                space_complexity: "O(1)",
                complete: "No",
                optimal: "No",
                description: "Can get stuck at local maxima, incomplete",
            },
        }
    }
}

impl FromStr for Algorithm {
    type Err = InvalidAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| InvalidAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptive metadata about a strategy. Not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmProperties {
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub complete: &'static str,
    pub optimal: &'static str,
    pub description: &'static str,
}
