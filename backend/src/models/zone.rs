//! Zones and the zone-access policy
//!
//! The grid's columns are partitioned into three contiguous zones of
//! increasing radioactivity, `Z1 < Z2 < Z3`. Zone assignment is a pure
//! function of the x coordinate: the first `z_width` columns are Z1, the
//! next `z_width` are Z2, and everything to the right (including the
//! remainder columns from integer division) is Z3.
//!
//! The access policy gates every kind of movement: a robot may only stand
//! on cells whose zone is at or below its tier's ceiling. Positions with
//! no resolvable zone (out of bounds) are never allowed — fail closed.

use crate::models::grid::Position;
use crate::models::tier::Tier;
use serde::{Deserialize, Serialize};

/// One of the three radioactivity zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    Z1,
    Z2,
    Z3,
}

impl Zone {
    /// Half-open radioactivity range `[lo, hi)` for cells in this zone
    pub fn radioactivity_range(&self) -> (f64, f64) {
        match self {
            Zone::Z1 => (0.0, 0.33),
            Zone::Z2 => (0.33, 0.66),
            Zone::Z3 => (0.66, 1.0),
        }
    }
}

/// Static partition of grid columns into zones
///
/// # Example
/// ```
/// use robot_mission_core_rs::{Position, Tier, Zone, ZoneMap};
///
/// let map = ZoneMap::new(7, 2); // z_width = 2; column 6 is a remainder column
/// assert_eq!(map.zone_of(Position::new(0, 0)), Some(Zone::Z1));
/// assert_eq!(map.zone_of(Position::new(3, 1)), Some(Zone::Z2));
/// assert_eq!(map.zone_of(Position::new(6, 0)), Some(Zone::Z3));
/// assert_eq!(map.zone_of(Position::new(7, 0)), None); // out of bounds
///
/// assert!(map.is_allowed(Tier::Green, Position::new(1, 0)));
/// assert!(!map.is_allowed(Tier::Green, Position::new(2, 0)));
/// assert!(map.is_allowed(Tier::Red, Position::new(6, 1)));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneMap {
    width: u32,
    height: u32,
    z_width: u32,
}

impl ZoneMap {
    /// Create a zone map for a `width` x `height` grid
    ///
    /// `z_width = width / 3` (integer division). Callers must validate
    /// `width >= 3` so every zone has at least one column; the world's
    /// configuration check does this before construction.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            z_width: width / 3,
        }
    }

    /// Grid width in columns
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in rows
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of zones Z1 and Z2 (Z3 absorbs remainder columns)
    pub fn z_width(&self) -> u32 {
        self.z_width
    }

    /// Zone of a column, as a pure function of x
    pub fn zone_for_column(&self, x: u32) -> Zone {
        if x < self.z_width {
            Zone::Z1
        } else if x < 2 * self.z_width {
            Zone::Z2
        } else {
            Zone::Z3
        }
    }

    /// Zone of a position, `None` out of bounds
    pub fn zone_of(&self, pos: Position) -> Option<Zone> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some(self.zone_for_column(pos.x))
    }

    /// Zone-access policy: may a robot of `tier` stand on `pos`?
    ///
    /// Green: Z1 only. Yellow: Z1 and Z2. Red: anywhere. A position with
    /// no resolvable zone is never allowed.
    pub fn is_allowed(&self, tier: Tier, pos: Position) -> bool {
        match self.zone_of(pos) {
            Some(zone) => zone <= tier.zone_ceiling(),
            None => false,
        }
    }

    /// Disposal boundary column for a tier
    ///
    /// The rightmost column of the tier's zone: the only place where
    /// `dispose_waste` succeeds.
    pub fn disposal_column(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Green => self.z_width - 1,
            Tier::Yellow => 2 * self.z_width - 1,
            Tier::Red => self.width - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_columns_belong_to_z3() {
        // width 8 -> z_width 2: columns 4..8 are all Z3
        let map = ZoneMap::new(8, 1);
        for x in 4..8 {
            assert_eq!(map.zone_for_column(x), Zone::Z3);
        }
    }

    #[test]
    fn test_fail_closed_out_of_bounds() {
        let map = ZoneMap::new(6, 2);
        assert!(!map.is_allowed(Tier::Red, Position::new(6, 0)));
        assert!(!map.is_allowed(Tier::Red, Position::new(0, 2)));
    }

    #[test]
    fn test_disposal_columns() {
        let map = ZoneMap::new(9, 3);
        assert_eq!(map.disposal_column(Tier::Green), 2);
        assert_eq!(map.disposal_column(Tier::Yellow), 5);
        assert_eq!(map.disposal_column(Tier::Red), 8);
    }
}
