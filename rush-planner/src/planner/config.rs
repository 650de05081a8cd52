//! Search configuration for the route planner.

use serde::{Deserialize, Serialize};

use crate::domain::TimeSlot;

/// Smallest depth limit the HTTP layer accepts for depth-limited search.
pub const MIN_DEPTH_LIMIT: u32 = 1;

/// Largest depth limit the HTTP layer accepts for depth-limited search.
pub const MAX_DEPTH_LIMIT: u32 = 10;

/// Configuration parameters shared by every strategy run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Active traffic period; scales every edge cost.
    pub time_slot: TimeSlot,

    /// Whether one-way restrictions are in force.
    pub one_way_enabled: bool,

    /// Maximum depth for depth-limited search.
    pub depth_limit: u32,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(time_slot: TimeSlot, one_way_enabled: bool, depth_limit: u32) -> Self {
        Self {
            time_slot,
            one_way_enabled,
            depth_limit,
        }
    }

    /// Whether `depth` is inside the accepted depth-limit range.
    pub fn depth_limit_in_range(depth: u32) -> bool {
        (MIN_DEPTH_LIMIT..=MAX_DEPTH_LIMIT).contains(&depth)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_slot: TimeSlot::PeakEvening,
            one_way_enabled: false,
            depth_limit: 3,
        }
    }
}
