//! Traffic time slots.
//!
//! A time slot scales every edge's base cost by a fixed multiplier. Stored
//! edges are never touched; only the derived cost changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown time-slot key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time slot: {0:?}")]
pub struct InvalidTimeSlot(String);

/// A named traffic period with a cost multiplier.
///
/// # Examples
///
/// ```
/// use rush_planner::domain::TimeSlot;
///
/// let slot: TimeSlot = "peak-evening".parse().unwrap();
/// assert_eq!(slot.multiplier(), 2.0);
/// assert_eq!(slot.key(), "peak-evening");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeSlot {
    OffPeak,
    MorningRush,
    SchoolPickup,
    #[default]
    PeakEvening,
    Weekend,
}

impl TimeSlot {
    /// All slots, in display order.
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::OffPeak,
        TimeSlot::MorningRush,
        TimeSlot::SchoolPickup,
        TimeSlot::PeakEvening,
        TimeSlot::Weekend,
    ];

    /// Factor applied to every edge's base cost.
    pub fn multiplier(self) -> f64 {
        match self {
            TimeSlot::OffPeak => 1.0,
            TimeSlot::MorningRush => 1.8,
            TimeSlot::SchoolPickup => 1.3,
            TimeSlot::PeakEvening => 2.0,
            TimeSlot::Weekend => 1.25,
        }
    }

    /// Stable key used in snapshots and requests.
    pub fn key(self) -> &'static str {
        match self {
            TimeSlot::OffPeak => "off-peak",
            TimeSlot::MorningRush => "morning-rush",
            TimeSlot::SchoolPickup => "school-pickup",
            TimeSlot::PeakEvening => "peak-evening",
            TimeSlot::Weekend => "weekend",
        }
    }

    /// Human-readable label.
    pub fn name(self) -> &'static str {
        match self {
            TimeSlot::OffPeak => "Off-Peak (10 AM - 3 PM)",
            TimeSlot::MorningRush => "Morning Rush (7:30 AM - 9:15 AM)",
            TimeSlot::SchoolPickup => "School Pickup (12:45 PM - 2:15 PM)",
            TimeSlot::PeakEvening => "Evening Peak (5:45 PM - 7:30 PM)",
            TimeSlot::Weekend => "Weekend Midday (11 AM - 2 PM)",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = InvalidTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.key() == s)
            .ok_or_else(|| InvalidTimeSlot(s.to_string()))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
