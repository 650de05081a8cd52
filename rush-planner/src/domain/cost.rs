//! Travel cost in minutes.
//!
//! Costs are plain `f64` minutes with positive infinity reserved as the
//! "unreachable" sentinel. Accumulation happens at full precision; rounding
//! to one decimal is applied only when a value is reported.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A travel cost in minutes, or unreachable.
///
/// Serializes as a JSON number, or `null` when unreachable.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const UNREACHABLE: Cost = Cost(f64::INFINITY);

    pub fn new(minutes: f64) -> Self {
        Self(minutes)
    }

    pub fn minutes(self) -> f64 {
        self.0
    }

    pub fn is_reachable(self) -> bool {
        self.0.is_finite()
    }

    /// Round to one decimal place. Unreachable stays unreachable.
    pub fn rounded(self) -> Self {
        Self(round_tenth(self.0))
    }

    /// Total ordering usable for sorting and priority queues.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Round to one decimal place, halves away from zero.
pub fn round_tenth(value: f64) -> f64 {
    if value.is_finite() {
        (value * 10.0).round() / 10.0
    } else {
        value
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        self.0 += rhs.0;
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Debug for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "Cost({})", self.0)
        } else {
            f.write_str("Cost(unreachable)")
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(f, "{:.1}", self.0)
        } else {
            f.write_str("∞")
        }
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_reachable() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.map(Cost).unwrap_or(Cost::UNREACHABLE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(Cost::new(12.96).rounded(), Cost::new(13.0));
        assert_eq!(Cost::new(0.05).rounded(), Cost::new(0.1));
        assert_eq!(Cost::new(7.0).rounded(), Cost::new(7.0));
    }

    #[test]
    fn unreachable_survives_arithmetic() {
        let total = Cost::new(3.0) + Cost::UNREACHABLE;
        assert!(!total.is_reachable());
        assert!(!total.rounded().is_reachable());
    }

    #[test]
    fn ordering() {
        assert!(Cost::new(1.0) < Cost::new(2.0));
        assert!(Cost::new(1e9) < Cost::UNREACHABLE);
        assert_eq!(
            Cost::UNREACHABLE.total_cmp(&Cost::new(5.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn display() {
        assert_eq!(Cost::new(13.0).to_string(), "13.0");
        assert_eq!(Cost::UNREACHABLE.to_string(), "∞");
    }

    #[test]
    fn serde_uses_null_for_unreachable() {
        assert_eq!(serde_json::to_string(&Cost::new(2.5)).unwrap(), "2.5");
        assert_eq!(serde_json::to_string(&Cost::UNREACHABLE).unwrap(), "null");

        let back: Cost = serde_json::from_str("null").unwrap();
        assert!(!back.is_reachable());
        let back: Cost = serde_json::from_str("4.5").unwrap();
        assert_eq!(back, Cost::new(4.5));
    }
}
