//! Waste units and the waste ledger
//!
//! A waste unit is either on the ground (owning a grid position) or held
//! by exactly one robot — never both. The ledger owns every live unit,
//! mints ids, and applies the lifecycle transitions; robots only keep the
//! ids of what they hold. Red units removed by a red robot's disposal
//! leave the ledger permanently: that is the only point where total waste
//! mass reaches the terminal sink.

use crate::models::grid::Position;
use crate::models::robot::RobotId;
use crate::models::tier::Tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Unique waste unit identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WasteId(pub u32);

impl fmt::Display for WasteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "waste_{}", self.0)
    }
}

/// Where a waste unit currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WasteLocation {
    /// Lying on the grid at a position
    OnGround(Position),
    /// Carried by a robot (no position of its own)
    Held(RobotId),
}

/// A single typed waste unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteUnit {
    id: WasteId,
    color: Tier,
    location: WasteLocation,
}

impl WasteUnit {
    pub fn id(&self) -> WasteId {
        self.id
    }

    pub fn color(&self) -> Tier {
        self.color
    }

    pub fn location(&self) -> WasteLocation {
        self.location
    }

    /// Ground position, `None` while held
    pub fn position(&self) -> Option<Position> {
        match self.location {
            WasteLocation::OnGround(pos) => Some(pos),
            WasteLocation::Held(_) => None,
        }
    }

    /// Holder, `None` while on the ground
    pub fn holder(&self) -> Option<RobotId> {
        match self.location {
            WasteLocation::OnGround(_) => None,
            WasteLocation::Held(id) => Some(id),
        }
    }
}

/// Ledger of all live waste units
///
/// Units are keyed by id in a BTreeMap so every scan is in ascending id
/// order — "arbitrary" choices like which of two co-located units gets
/// collected become deterministic and reproducible.
///
/// # Example
/// ```
/// use robot_mission_core_rs::{Position, Tier, WasteLedger};
///
/// let mut ledger = WasteLedger::new();
/// let id = ledger.mint_on_ground(Tier::Green, Position::new(0, 0));
///
/// assert_eq!(ledger.total(), 1);
/// assert_eq!(ledger.count_by_color(Tier::Green), 1);
/// assert_eq!(ledger.get(id).unwrap().position(), Some(Position::new(0, 0)));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WasteLedger {
    units: BTreeMap<WasteId, WasteUnit>,
    next_id: u32,
}

impl WasteLedger {
    pub fn new() -> Self {
        Self {
            units: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn mint(&mut self, color: Tier, location: WasteLocation) -> WasteId {
        let id = WasteId(self.next_id);
        self.next_id += 1;
        self.units.insert(
            id,
            WasteUnit {
                id,
                color,
                location,
            },
        );
        id
    }

    /// Create a new unit lying on the ground
    pub fn mint_on_ground(&mut self, color: Tier, pos: Position) -> WasteId {
        self.mint(color, WasteLocation::OnGround(pos))
    }

    /// Create a new unit directly in a robot's hands
    ///
    /// Used by transformation: the produced unit materializes at the
    /// robot's cell and is immediately carried.
    pub fn mint_held(&mut self, color: Tier, holder: RobotId) -> WasteId {
        self.mint(color, WasteLocation::Held(holder))
    }

    /// Look up a unit by id
    pub fn get(&self, id: WasteId) -> Option<&WasteUnit> {
        self.units.get(&id)
    }

    /// Iterate all live units in id order
    pub fn units(&self) -> impl Iterator<Item = &WasteUnit> {
        self.units.values()
    }

    /// Iterate units currently on the ground, in id order
    pub fn ground_units(&self) -> impl Iterator<Item = &WasteUnit> {
        self.units
            .values()
            .filter(|u| matches!(u.location, WasteLocation::OnGround(_)))
    }

    /// Lowest-id ground unit of a given color at a position, if any
    pub fn ground_unit_of_color_at(&self, color: Tier, pos: Position) -> Option<WasteId> {
        self.units
            .values()
            .find(|u| u.color == color && u.location == WasteLocation::OnGround(pos))
            .map(|u| u.id)
    }

    /// Is there a ground unit of this color at the position?
    pub fn has_ground_color_at(&self, color: Tier, pos: Position) -> bool {
        self.ground_unit_of_color_at(color, pos).is_some()
    }

    /// Transfer a ground unit into a robot's hands
    ///
    /// No-op (false) unless the unit exists and is on the ground.
    pub fn pick_up(&mut self, id: WasteId, holder: RobotId) -> bool {
        match self.units.get_mut(&id) {
            Some(unit) if matches!(unit.location, WasteLocation::OnGround(_)) => {
                unit.location = WasteLocation::Held(holder);
                true
            }
            _ => false,
        }
    }

    /// Put a held unit back on the ground at a position
    ///
    /// No-op (false) unless the unit exists and is held.
    pub fn put_down(&mut self, id: WasteId, pos: Position) -> bool {
        match self.units.get_mut(&id) {
            Some(unit) if matches!(unit.location, WasteLocation::Held(_)) => {
                unit.location = WasteLocation::OnGround(pos);
                true
            }
            _ => false,
        }
    }

    /// Remove a unit from the ledger (consumed by transformation, or
    /// destroyed by red disposal)
    pub fn remove(&mut self, id: WasteId) -> Option<WasteUnit> {
        self.units.remove(&id)
    }

    /// Count of live units (ground + held) of a color
    pub fn count_by_color(&self, color: Tier) -> usize {
        self.units.values().filter(|u| u.color == color).count()
    }

    /// Count of all live units, ground and held
    pub fn total(&self) -> usize {
        self.units.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_ground_and_held() {
        let mut ledger = WasteLedger::new();
        let id = ledger.mint_on_ground(Tier::Green, Position::new(2, 3));

        assert!(ledger.pick_up(id, RobotId(7)));
        let unit = ledger.get(id).unwrap();
        assert_eq!(unit.holder(), Some(RobotId(7)));
        assert_eq!(unit.position(), None);

        // Picking up again is a no-op: the unit is not on the ground
        assert!(!ledger.pick_up(id, RobotId(8)));
        assert_eq!(ledger.get(id).unwrap().holder(), Some(RobotId(7)));
    }

    #[test]
    fn test_collect_prefers_lowest_id() {
        let mut ledger = WasteLedger::new();
        let pos = Position::new(1, 1);
        let a = ledger.mint_on_ground(Tier::Yellow, pos);
        let _b = ledger.mint_on_ground(Tier::Yellow, pos);

        assert_eq!(ledger.ground_unit_of_color_at(Tier::Yellow, pos), Some(a));
    }

    #[test]
    fn test_color_filter() {
        let mut ledger = WasteLedger::new();
        let pos = Position::new(0, 0);
        ledger.mint_on_ground(Tier::Green, pos);

        assert!(ledger.has_ground_color_at(Tier::Green, pos));
        assert!(!ledger.has_ground_color_at(Tier::Yellow, pos));
    }

    #[test]
    fn test_remove_is_terminal() {
        let mut ledger = WasteLedger::new();
        let id = ledger.mint_on_ground(Tier::Red, Position::new(5, 0));
        assert_eq!(ledger.total(), 1);

        let removed = ledger.remove(id).unwrap();
        assert_eq!(removed.color(), Tier::Red);
        assert_eq!(ledger.total(), 0);
        assert!(ledger.get(id).is_none());
    }
}
