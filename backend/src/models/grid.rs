//! The grid world: positions, robot occupancy, radioactivity
//!
//! A bounded 2-D grid with no wraparound. The grid owns robot occupancy
//! (at most one robot per cell) and the per-cell radioactivity scalar
//! sampled at construction from each cell's zone range. Waste units and
//! disposal markers are not occupancy: they never block movement.
//!
//! Movement refusal is a normal outcome, not an error — robots routinely
//! probe infeasible moves while exploring, so `move_robot` answers with a
//! bool and leaves state untouched on refusal.

use crate::models::robot::RobotId;
use crate::models::tier::Tier;
use crate::models::zone::ZoneMap;
use crate::rng::RngManager;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Grid coordinate
///
/// Serializes as an `[x, y]` pair, matching the message wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position
    ///
    /// # Example
    /// ```
    /// use robot_mission_core_rs::Position;
    ///
    /// let a = Position::new(1, 2);
    /// let b = Position::new(4, 0);
    /// assert_eq!(a.manhattan_distance(b), 5);
    /// ```
    pub fn manhattan_distance(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y) = <(u32, u32)>::deserialize(deserializer)?;
        Ok(Position { x, y })
    }
}

/// Cell occupancy and radioactivity for the whole grid
///
/// # Example
/// ```
/// use robot_mission_core_rs::{GridWorld, Position, RngManager, ZoneMap};
///
/// let zones = ZoneMap::new(6, 3);
/// let mut rng = RngManager::new(1);
/// let grid = GridWorld::new(&zones, &mut rng);
///
/// // Corner cells have two orthogonal neighbors, interior cells four
/// assert_eq!(grid.neighbors(Position::new(0, 0)).len(), 2);
/// assert_eq!(grid.neighbors(Position::new(2, 1)).len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GridWorld {
    width: u32,
    height: u32,
    /// Robot occupying each cell (at most one per cell)
    occupancy: HashMap<Position, RobotId>,
    /// Reverse index: where each placed robot stands
    positions: HashMap<RobotId, Position>,
    /// Radioactivity per cell, row-major
    radioactivity: Vec<f64>,
}

impl GridWorld {
    /// Build the grid, sampling each cell's radioactivity from its zone's
    /// half-open range with the world RNG
    pub fn new(zone_map: &ZoneMap, rng: &mut RngManager) -> Self {
        let width = zone_map.width();
        let height = zone_map.height();
        let mut radioactivity = Vec::with_capacity((width * height) as usize);
        for _row in 0..height {
            for x in 0..width {
                let (lo, hi) = zone_map.zone_for_column(x).radioactivity_range();
                radioactivity.push(lo + rng.next_f64() * (hi - lo));
            }
        }
        Self {
            width,
            height,
            occupancy: HashMap::new(),
            positions: HashMap::new(),
            radioactivity,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Is a position inside the grid?
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Radioactivity of a cell (0.0 out of bounds)
    pub fn radioactivity(&self, pos: Position) -> f64 {
        if !self.in_bounds(pos) {
            return 0.0;
        }
        self.radioactivity[(pos.y * self.width + pos.x) as usize]
    }

    /// 4-connected orthogonal neighbors within bounds (no wraparound)
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(4);
        if pos.x > 0 {
            out.push(Position::new(pos.x - 1, pos.y));
        }
        if pos.x + 1 < self.width {
            out.push(Position::new(pos.x + 1, pos.y));
        }
        if pos.y > 0 {
            out.push(Position::new(pos.x, pos.y - 1));
        }
        if pos.y + 1 < self.height {
            out.push(Position::new(pos.x, pos.y + 1));
        }
        out
    }

    /// Robot standing on a cell, if any
    pub fn robot_at(&self, pos: Position) -> Option<RobotId> {
        self.occupancy.get(&pos).copied()
    }

    /// Current position of a placed robot
    pub fn position_of(&self, id: RobotId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    /// Place a robot on an unoccupied in-bounds cell
    ///
    /// Returns false (and changes nothing) if the cell is out of bounds,
    /// occupied, or the robot is already placed.
    pub fn place_robot(&mut self, id: RobotId, pos: Position) -> bool {
        if !self.in_bounds(pos)
            || self.occupancy.contains_key(&pos)
            || self.positions.contains_key(&id)
        {
            return false;
        }
        self.occupancy.insert(pos, id);
        self.positions.insert(id, pos);
        true
    }

    /// Remove a robot from the grid
    pub fn remove_robot(&mut self, id: RobotId) -> bool {
        match self.positions.remove(&id) {
            Some(pos) => {
                self.occupancy.remove(&pos);
                true
            }
            None => false,
        }
    }

    /// Move a robot, enforcing the zone-access policy and collision rule
    ///
    /// Silently refuses — returning false with no state change — when the
    /// destination is outside the mover's allowed zones or occupied by
    /// another robot. A move onto the robot's own cell is a successful
    /// no-op. First mover wins within a tick; refused moves do not retry.
    pub fn move_robot(&mut self, id: RobotId, to: Position, tier: Tier, zones: &ZoneMap) -> bool {
        let Some(from) = self.positions.get(&id).copied() else {
            return false;
        };
        if !zones.is_allowed(tier, to) {
            return false;
        }
        if let Some(occupant) = self.occupancy.get(&to) {
            if *occupant != id {
                return false;
            }
        }
        self.occupancy.remove(&from);
        self.occupancy.insert(to, id);
        self.positions.insert(id, to);
        true
    }
}
