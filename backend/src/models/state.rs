//! Simulation State
//!
//! The complete mutable state of a running mission: the grid (robot
//! occupancy + radioactivity), every robot, and the waste ledger. All
//! mutation goes through the operations here — agents never alias into
//! each other's records, and the waste lifecycle transitions keep robot
//! holdings and ledger locations in sync.
//!
//! # Critical Invariants
//!
//! 1. A robot's `held` list and the ledger's `Held` locations agree.
//! 2. At most one robot occupies a cell; `Robot::pos` agrees with the grid.
//! 3. Held counts never exceed the tier's carry capacity.
//! 4. Total waste mass only decreases, and only via transformation (2→1)
//!    or red disposal (terminal sink).

use crate::models::grid::{GridWorld, Position};
use crate::models::robot::{Robot, RobotId};
use crate::models::tier::Tier;
use crate::models::waste::{WasteId, WasteLedger};
use crate::models::zone::ZoneMap;
use std::collections::BTreeMap;

/// What a successful disposal did with the held units
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisposalOutcome {
    /// Green/Yellow: units re-placed on the ground for the next tier
    Dropped(Vec<WasteId>),
    /// Red: units removed permanently (terminal sink)
    Destroyed(Vec<WasteId>),
}

/// All robots, all waste, and the grid they live on
#[derive(Debug, Clone)]
pub struct SimulationState {
    grid: GridWorld,
    /// Robots keyed by id; BTreeMap so iteration order is id-ascending
    robots: BTreeMap<RobotId, Robot>,
    ledger: WasteLedger,
}

impl SimulationState {
    /// Create a state with an empty robot roster and waste ledger
    pub fn new(grid: GridWorld) -> Self {
        Self {
            grid,
            robots: BTreeMap::new(),
            ledger: WasteLedger::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    pub fn ledger(&self) -> &WasteLedger {
        &self.ledger
    }

    /// Mutable ledger access
    ///
    /// Primarily for world initialization and tests. Direct mutation
    /// bypasses the holdings bookkeeping; use the lifecycle operations
    /// below for anything a robot does.
    pub fn ledger_mut(&mut self) -> &mut WasteLedger {
        &mut self.ledger
    }

    pub fn robot(&self, id: RobotId) -> Option<&Robot> {
        self.robots.get(&id)
    }

    pub fn robot_mut(&mut self, id: RobotId) -> Option<&mut Robot> {
        self.robots.get_mut(&id)
    }

    /// All robots in id order
    pub fn robots(&self) -> impl Iterator<Item = &Robot> {
        self.robots.values()
    }

    pub fn num_robots(&self) -> usize {
        self.robots.len()
    }

    /// Ids of all robots of one tier, ascending
    pub fn robot_ids_of_tier(&self, tier: Tier) -> Vec<RobotId> {
        self.robots
            .values()
            .filter(|r| r.tier() == tier)
            .map(|r| r.id())
            .collect()
    }

    /// Everything occupying a cell: the robot (if any) and ground waste
    ///
    /// Waste and markers share cells freely; only robots exclude each
    /// other.
    pub fn cell_contents(&self, pos: Position) -> (Option<RobotId>, Vec<WasteId>) {
        let robot = self.grid.robot_at(pos);
        let waste = self
            .ledger
            .ground_units()
            .filter(|u| u.position() == Some(pos))
            .map(|u| u.id())
            .collect();
        (robot, waste)
    }

    /// Is the robot's single-unit cargo the product of its own tier?
    ///
    /// True only in the transient window between transforming and
    /// disposing. Green/Yellow robots in this window refuse to collect.
    pub fn is_carrying_product(&self, robot: &Robot) -> bool {
        let Some(product) = robot.tier().product() else {
            return false;
        };
        robot
            .held()
            .iter()
            .any(|wid| self.ledger.get(*wid).is_some_and(|w| w.color() == product))
    }

    // ========================================================================
    // Roster / movement
    // ========================================================================

    /// Add a robot, claiming its grid cell
    ///
    /// Returns false (and adds nothing) if the cell is occupied, out of
    /// bounds, or the id is already in use.
    pub fn add_robot(&mut self, robot: Robot) -> bool {
        if self.robots.contains_key(&robot.id()) {
            return false;
        }
        if !self.grid.place_robot(robot.id(), robot.pos()) {
            return false;
        }
        self.robots.insert(robot.id(), robot);
        true
    }

    /// Move a robot, subject to the zone-access policy and collision rule
    ///
    /// Refusal (wrong zone, occupied destination) is a silent false.
    pub fn move_robot(&mut self, id: RobotId, to: Position, zones: &ZoneMap) -> bool {
        let Some(tier) = self.robots.get(&id).map(|r| r.tier()) else {
            return false;
        };
        if !self.grid.move_robot(id, to, tier, zones) {
            return false;
        }
        if let Some(robot) = self.robots.get_mut(&id) {
            robot.set_pos(to);
        }
        true
    }

    // ========================================================================
    // Waste lifecycle operations
    // ========================================================================

    /// Collect one ground unit of the robot's color from its cell
    ///
    /// No-op (None) if there is no matching unit, the robot is at
    /// capacity, or it is carrying its transformation product. When
    /// several units match, the lowest id wins (deterministic).
    pub fn collect(&mut self, id: RobotId) -> Option<WasteId> {
        let robot = self.robots.get(&id)?;
        let tier = robot.tier();
        let pos = robot.pos();

        if robot.held_count() >= tier.carry_capacity() || self.is_carrying_product(robot) {
            return None;
        }

        let waste_id = self.ledger.ground_unit_of_color_at(tier, pos)?;
        if !self.ledger.pick_up(waste_id, id) {
            return None;
        }
        if let Some(robot) = self.robots.get_mut(&id) {
            robot.hold(waste_id);
        }
        Some(waste_id)
    }

    /// Transform two held own-color units into one next-tier unit
    ///
    /// The produced unit materializes at the robot's cell and is
    /// immediately held — it is what gets physically carried to the
    /// disposal boundary. Returns the consumed ids, the produced id, and
    /// the transformation position (for the hand-off message). No-op
    /// (None) for red robots or outside the exactly-two-own-color
    /// precondition.
    pub fn transform(&mut self, id: RobotId) -> Option<(Vec<WasteId>, WasteId, Position)> {
        let robot = self.robots.get(&id)?;
        let tier = robot.tier();
        let pos = robot.pos();
        let product = tier.product()?;

        if robot.held_count() != tier.carry_capacity() {
            return None;
        }
        let all_own_color = robot
            .held()
            .iter()
            .all(|wid| self.ledger.get(*wid).is_some_and(|w| w.color() == tier));
        if !all_own_color {
            return None;
        }

        let consumed: Vec<WasteId> = robot.held().to_vec();
        for wid in &consumed {
            self.ledger.remove(*wid);
        }
        let produced = self.ledger.mint_held(product, id);
        if let Some(robot) = self.robots.get_mut(&id) {
            robot.clear_held();
            robot.hold(produced);
        }
        Some((consumed, produced, pos))
    }

    /// Release the robot's holdings at its current cell
    ///
    /// Green/Yellow put every held unit back on the ground (promoted
    /// waste becomes collectable by the next tier); Red removes its
    /// cargo permanently. The caller enforces the boundary-column gate.
    /// No-op (None) with empty hands.
    pub fn dispose(&mut self, id: RobotId) -> Option<DisposalOutcome> {
        let robot = self.robots.get(&id)?;
        if robot.held_count() == 0 {
            return None;
        }
        let tier = robot.tier();
        let pos = robot.pos();
        let held: Vec<WasteId> = robot.held().to_vec();

        let outcome = if tier.product().is_some() {
            for wid in &held {
                self.ledger.put_down(*wid, pos);
            }
            DisposalOutcome::Dropped(held)
        } else {
            for wid in &held {
                self.ledger.remove(*wid);
            }
            DisposalOutcome::Destroyed(held)
        };
        if let Some(robot) = self.robots.get_mut(&id) {
            robot.clear_held();
        }
        Some(outcome)
    }
}
