//! Robot/waste tier classification
//!
//! The three tiers form a strict processing chain: Green robots collect
//! green waste and produce yellow; Yellow robots collect yellow and
//! produce red; Red robots collect red and destroy it. The tier carries
//! the complete per-tier rule table (carry capacity, product tier, zone
//! ceiling) so one shared behavior routine can serve all three — there is
//! no per-tier dispatch anywhere else in the engine.

use crate::models::zone::Zone;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tier of a robot or of a waste unit's color
///
/// Totally ordered: `Green < Yellow < Red`.
///
/// # Example
/// ```
/// use robot_mission_core_rs::Tier;
///
/// assert!(Tier::Green < Tier::Red);
/// assert_eq!(Tier::Green.carry_capacity(), 2);
/// assert_eq!(Tier::Green.product(), Some(Tier::Yellow));
/// assert_eq!(Tier::Red.product(), None); // terminal tier
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Green,
    Yellow,
    Red,
}

impl Tier {
    /// All tiers in processing order
    pub const ALL: [Tier; 3] = [Tier::Green, Tier::Yellow, Tier::Red];

    /// Maximum number of waste units a robot of this tier may hold
    ///
    /// Green and Yellow carry up to 2 (the pair consumed by a
    /// transformation); Red carries a single unit to the terminal sink.
    pub fn carry_capacity(&self) -> usize {
        match self {
            Tier::Green | Tier::Yellow => 2,
            Tier::Red => 1,
        }
    }

    /// The tier of the waste produced by this tier's transformation
    ///
    /// `None` for Red: red waste is terminal and is never upgraded.
    pub fn product(&self) -> Option<Tier> {
        match self {
            Tier::Green => Some(Tier::Yellow),
            Tier::Yellow => Some(Tier::Red),
            Tier::Red => None,
        }
    }

    /// The highest zone a robot of this tier may enter
    pub fn zone_ceiling(&self) -> Zone {
        match self {
            Tier::Green => Zone::Z1,
            Tier::Yellow => Zone::Z2,
            Tier::Red => Zone::Z3,
        }
    }

    /// Dense index for per-tier arrays (0, 1, 2)
    pub fn index(&self) -> usize {
        match self {
            Tier::Green => 0,
            Tier::Yellow => 1,
            Tier::Red => 2,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Green => write!(f, "green"),
            Tier::Yellow => write!(f, "yellow"),
            Tier::Red => write!(f, "red"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_chain() {
        assert_eq!(Tier::Green.product(), Some(Tier::Yellow));
        assert_eq!(Tier::Yellow.product(), Some(Tier::Red));
        assert_eq!(Tier::Red.product(), None);
    }

    #[test]
    fn test_ordering() {
        assert!(Tier::Green < Tier::Yellow);
        assert!(Tier::Yellow < Tier::Red);
    }

    #[test]
    fn test_capacities() {
        assert_eq!(Tier::Green.carry_capacity(), 2);
        assert_eq!(Tier::Yellow.carry_capacity(), 2);
        assert_eq!(Tier::Red.carry_capacity(), 1);
    }
}
