//! Route planner running nine graph-search strategies.
//!
//! This module answers: "starting here, which goal can I reach, at what
//! cost, and do I beat its deadline?" Each strategy produces the same
//! [`AlgorithmResult`] shape so a single run and a full comparison can be
//! consumed the same way.

mod algorithm;
mod bidirectional;
mod compare;
mod config;
mod deadline;
mod informed;
mod local;
mod result;
mod search;
mod uninformed;

#[cfg(test)]
mod search_tests;

pub use algorithm::{Algorithm, AlgorithmProperties, InvalidAlgorithm};
pub use compare::ComparisonStats;
pub use config::{MAX_DEPTH_LIMIT, MIN_DEPTH_LIMIT, SearchConfig};
pub use deadline::{DeadlineStatus, DeadlineVerdict, evaluate_deadline};
pub use result::{AlgorithmResult, Comparison, Outcome};
pub use search::{Planner, SearchRequest};
