//! World Engine
//!
//! Main simulation loop integrating all components:
//! - Zone map and grid construction (radioactivity sampling)
//! - Robot placement and initial waste scatter (bounded random search)
//! - Per-tick activation ordering (two-level shuffle)
//! - Agent perceive-deliberate-act execution
//! - Housekeeping (periodic pheromone decay)
//! - Event logging (complete simulation history)
//!
//! # Architecture
//!
//! One tick is a strict sequence:
//!
//! ```text
//! For each tick t:
//! 1. Shuffle tier-group order, then robots within each group
//! 2. For each robot, in full and in order:
//!    a. Drain inbox (hand-off messages set the target)
//!    b. Perceive own cell
//!    c. Deliberate (fixed priority rule table)
//!    d. Act (movement / collect / transform / dispose)
//! 3. Housekeeping: decay the exploration field every N ticks
//! ```
//!
//! There is no suspension point inside a tick and no parallelism:
//! first mover wins a contested cell, later movers are refused and do
//! not retry until their next activation.
//!
//! # Determinism
//!
//! All randomness is via one seeded xorshift64* generator owned by the
//! world. Same seed + same config = identical run, event for event.

use crate::behavior::{self, Action};
use crate::comms;
use crate::core::time::TimeManager;
use crate::exploration::ExplorationField;
use crate::models::event::{Event, EventLog};
use crate::models::grid::{GridWorld, Position};
use crate::models::message::Message;
use crate::models::robot::{Robot, RobotId};
use crate::models::state::{DisposalOutcome, SimulationState};
use crate::models::tier::Tier;
use crate::models::waste::WasteId;
use crate::models::zone::ZoneMap;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration
// ============================================================================

/// Complete world configuration
///
/// All parameters an external front-end may write before a run starts.
/// Zone widths are derived: `z_width = width / 3`, remainder columns
/// belong to the rightmost zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Grid width in columns (at least 3, one column per zone)
    pub width: u32,

    /// Grid height in rows (at least 1)
    pub height: u32,

    /// Initial green waste units, scattered in Z1
    #[serde(default)]
    pub initial_green_waste: usize,

    /// Initial yellow waste units, scattered in Z2
    #[serde(default)]
    pub initial_yellow_waste: usize,

    /// Initial red waste units, scattered in Z3
    #[serde(default)]
    pub initial_red_waste: usize,

    /// Green robots, starting in Z1
    #[serde(default)]
    pub green_robots: usize,

    /// Yellow robots, starting in Z1 or Z2
    #[serde(default)]
    pub yellow_robots: usize,

    /// Red robots, starting anywhere
    #[serde(default)]
    pub red_robots: usize,

    /// RNG seed for deterministic simulation
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,

    /// Ticks between pheromone decay passes
    #[serde(default = "default_decay_interval")]
    pub decay_interval: usize,

    /// Level subtracted from every cell per decay pass
    #[serde(default = "default_decay_amount")]
    pub decay_amount: f64,
}

fn default_rng_seed() -> u64 {
    12345
}

fn default_decay_interval() -> usize {
    30
}

fn default_decay_amount() -> f64 {
    1.0
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 9,
            height: 3,
            initial_green_waste: 0,
            initial_yellow_waste: 0,
            initial_red_waste: 0,
            green_robots: 0,
            yellow_robots: 0,
            red_robots: 0,
            rng_seed: default_rng_seed(),
            decay_interval: default_decay_interval(),
            decay_amount: default_decay_amount(),
        }
    }
}

/// Configuration validation errors
///
/// The only failures that stop a simulation; everything at runtime is a
/// silent refusal or no-op.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid width {width} is too narrow: three zones need at least 3 columns")]
    GridTooNarrow { width: u32 },

    #[error("grid height must be at least 1")]
    ZeroHeight,

    #[error("decay_interval must be at least 1 tick")]
    ZeroDecayInterval,

    #[error("at least one robot is required")]
    NoRobots,

    #[error("{count} {tier} robots cannot fit the {cells} cells of their start area")]
    TooManyRobots {
        tier: Tier,
        count: usize,
        cells: usize,
    },

    #[error("no free cell found for a {tier} robot after {attempts} attempts")]
    PlacementExhausted { tier: Tier, attempts: usize },
}

// ============================================================================
// Tick result and read-surface views
// ============================================================================

/// Counters from a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickResult {
    /// Tick number
    pub tick: usize,

    /// Waste units picked up this tick
    pub num_collected: usize,

    /// Transformations completed this tick
    pub num_transformed: usize,

    /// Waste units released or destroyed at a boundary this tick
    pub num_disposed: usize,

    /// Hand-off messages delivered this tick
    pub num_messages: usize,

    /// Successful robot moves this tick
    pub num_moves: usize,
}

/// Read-only robot snapshot for visualization/metrics collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RobotView {
    pub id: RobotId,
    pub tier: Tier,
    pub pos: Position,
    pub held: usize,
}

/// Read-only ground-waste snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasteView {
    pub id: WasteId,
    pub color: Tier,
    pub pos: Position,
}

// ============================================================================
// World
// ============================================================================

/// The world: owner of all simulation state and the tick loop
///
/// # Example
///
/// ```
/// use robot_mission_core_rs::{World, WorldConfig};
///
/// let config = WorldConfig {
///     width: 9,
///     height: 3,
///     initial_green_waste: 4,
///     initial_yellow_waste: 2,
///     initial_red_waste: 1,
///     green_robots: 2,
///     yellow_robots: 1,
///     red_robots: 1,
///     rng_seed: 12345,
///     ..Default::default()
/// };
///
/// let mut world = World::new(config).unwrap();
/// for _ in 0..10 {
///     let result = world.tick();
///     assert_eq!(result.tick + 1, world.current_tick());
/// }
/// ```
#[derive(Debug)]
pub struct World {
    /// Grid, robots, and the waste ledger
    state: SimulationState,

    /// Static column partition and access policy
    zone_map: ZoneMap,

    /// Per-tier pheromone levels
    field: ExplorationField,

    /// Tick counter
    time: TimeManager,

    /// Deterministic RNG (the only randomness source)
    rng: RngManager,

    /// Complete simulation history
    event_log: EventLog,

    /// Ticks between pheromone decay passes
    decay_interval: usize,
}

impl World {
    /// Create a world from configuration
    ///
    /// Validates the configuration, builds the zone map and grid, places
    /// robots by bounded random search in their tier's start area, and
    /// scatters the initial waste zone by zone.
    ///
    /// # Errors
    ///
    /// `ConfigError` on an unsatisfiable setup (degenerate grid, robot
    /// counts that cannot be placed). This is the only failure mode that
    /// stops a simulation.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        Self::validate_config(&config)?;

        let zone_map = ZoneMap::new(config.width, config.height);
        let mut rng = RngManager::new(config.rng_seed);
        let grid = GridWorld::new(&zone_map, &mut rng);
        let mut state = SimulationState::new(grid);
        let field = ExplorationField::new(config.width, config.height, config.decay_amount);
        let mut event_log = EventLog::new();

        // Place robots tier by tier; each tier starts inside the columns
        // it is allowed to work (green: Z1, yellow: Z1..Z2, red: anywhere).
        let z_width = zone_map.z_width();
        let start_areas = [
            (Tier::Green, config.green_robots, z_width),
            (Tier::Yellow, config.yellow_robots, 2 * z_width),
            (Tier::Red, config.red_robots, config.width),
        ];
        let mut next_id = 1u32;
        for (tier, count, x_end) in start_areas {
            for _ in 0..count {
                let pos = Self::find_free_cell(&state, &mut rng, x_end, config.height, tier)?;
                let added = state.add_robot(Robot::new(RobotId(next_id), tier, pos));
                debug_assert!(added, "find_free_cell returned an occupied cell");
                next_id += 1;
            }
        }

        // Scatter the initial waste. Waste shares cells freely with
        // robots and other waste; only robot-robot collisions matter.
        let scatter = [
            (Tier::Green, config.initial_green_waste, 0, z_width),
            (Tier::Yellow, config.initial_yellow_waste, z_width, 2 * z_width),
            (Tier::Red, config.initial_red_waste, 2 * z_width, config.width),
        ];
        for (color, count, x_start, x_end) in scatter {
            for _ in 0..count {
                let x = rng.range(x_start as i64, x_end as i64) as u32;
                let y = rng.range(0, config.height as i64) as u32;
                let pos = Position::new(x, y);
                let waste_id = state.ledger_mut().mint_on_ground(color, pos);
                event_log.log(Event::WastePlaced {
                    tick: 0,
                    waste_id,
                    color,
                    pos,
                });
            }
        }

        Ok(Self {
            state,
            zone_map,
            field,
            time: TimeManager::new(),
            rng,
            event_log,
            decay_interval: config.decay_interval,
        })
    }

    /// Validate configuration
    fn validate_config(config: &WorldConfig) -> Result<(), ConfigError> {
        if config.width < 3 {
            return Err(ConfigError::GridTooNarrow {
                width: config.width,
            });
        }
        if config.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if config.decay_interval == 0 {
            return Err(ConfigError::ZeroDecayInterval);
        }

        let total = config.green_robots + config.yellow_robots + config.red_robots;
        if total == 0 {
            return Err(ConfigError::NoRobots);
        }

        let z_cells = (config.width / 3) as usize * config.height as usize;
        let all_cells = config.width as usize * config.height as usize;
        if config.green_robots > z_cells {
            return Err(ConfigError::TooManyRobots {
                tier: Tier::Green,
                count: config.green_robots,
                cells: z_cells,
            });
        }
        if config.green_robots + config.yellow_robots > 2 * z_cells {
            return Err(ConfigError::TooManyRobots {
                tier: Tier::Yellow,
                count: config.green_robots + config.yellow_robots,
                cells: 2 * z_cells,
            });
        }
        if total > all_cells {
            return Err(ConfigError::TooManyRobots {
                tier: Tier::Red,
                count: total,
                cells: all_cells,
            });
        }

        Ok(())
    }

    /// Bounded random search for a robot-free cell in `[0, x_end) x [0, height)`
    fn find_free_cell(
        state: &SimulationState,
        rng: &mut RngManager,
        x_end: u32,
        height: u32,
        tier: Tier,
    ) -> Result<Position, ConfigError> {
        let attempts = (x_end as usize * height as usize * 10).max(100);
        for _ in 0..attempts {
            let x = rng.range(0, x_end as i64) as u32;
            let y = rng.range(0, height as i64) as u32;
            let pos = Position::new(x, y);
            if state.grid().robot_at(pos).is_none() {
                return Ok(pos);
            }
        }
        Err(ConfigError::PlacementExhausted { tier, attempts })
    }

    // ========================================================================
    // Accessors / read surface
    // ========================================================================

    /// Current tick (monotonically increasing)
    pub fn current_tick(&self) -> usize {
        self.time.current_tick()
    }

    /// Reference to the simulation state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable reference to the simulation state
    ///
    /// # Safety
    ///
    /// This is primarily for testing. Direct state mutation bypasses
    /// world invariants. Use with caution.
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// The static zone partition
    pub fn zone_map(&self) -> &ZoneMap {
        &self.zone_map
    }

    /// The per-tier exploration field
    pub fn exploration_field(&self) -> &ExplorationField {
        &self.field
    }

    /// Reference to the event log
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Snapshot of all robots, in id order
    pub fn robots(&self) -> Vec<RobotView> {
        self.state
            .robots()
            .map(|r| RobotView {
                id: r.id(),
                tier: r.tier(),
                pos: r.pos(),
                held: r.held_count(),
            })
            .collect()
    }

    /// Snapshot of all ground waste, in id order
    pub fn ground_waste(&self) -> Vec<WasteView> {
        self.state
            .ledger()
            .ground_units()
            .filter_map(|u| {
                u.position().map(|pos| WasteView {
                    id: u.id(),
                    color: u.color(),
                    pos,
                })
            })
            .collect()
    }

    /// Live waste units (ground + held) of one color
    pub fn waste_count(&self, color: Tier) -> usize {
        self.state.ledger().count_by_color(color)
    }

    /// All live waste units, ground and held
    pub fn total_waste_count(&self) -> usize {
        self.state.ledger().total()
    }

    // ========================================================================
    // Tick loop
    // ========================================================================

    /// Execute one simulation tick
    ///
    /// Runs the full activation pass and housekeeping; see the module
    /// docs for the exact sequence. Never fails: everything a robot
    /// cannot do this tick is silently skipped and re-evaluated on its
    /// next activation.
    pub fn tick(&mut self) -> TickResult {
        let tick = self.time.current_tick();
        let mut result = TickResult {
            tick,
            ..TickResult::default()
        };

        // STEP 1: ACTIVATION ORDER
        // Re-randomized every tick at two levels: tier-group order, then
        // robots within each group.
        let mut tiers = Tier::ALL;
        self.rng.shuffle(&mut tiers);
        let mut order: Vec<RobotId> = Vec::with_capacity(self.state.num_robots());
        for tier in tiers {
            let mut ids = self.state.robot_ids_of_tier(tier);
            self.rng.shuffle(&mut ids);
            order.extend(ids);
        }

        // STEP 2: PERCEIVE-DELIBERATE-ACT
        // Each robot runs synchronously and in full before the next starts.
        for id in order {
            self.step_robot(id, &mut result);
        }

        // STEP 3: HOUSEKEEPING
        self.time.advance_tick();
        if self.time.is_decay_due(self.decay_interval) {
            self.field.decay();
            self.event_log.log(Event::PheromoneDecay {
                tick: self.time.current_tick(),
            });
        }

        result
    }

    /// One robot's full activation
    fn step_robot(&mut self, id: RobotId, result: &mut TickResult) {
        // Hand-off messages landed while this robot was idle; drain them
        // before perceiving.
        match self.state.robot_mut(id) {
            Some(robot) => comms::drain_messages(robot),
            None => return,
        }

        // Perceive
        let Some(robot) = self.state.robot(id) else {
            return;
        };
        let tier = robot.tier();
        let pos = robot.pos();
        let waste_here = self.state.ledger().has_ground_color_at(tier, pos);

        // Deliberate
        let action = behavior::deliberate(robot, waste_here, &self.state);

        // Act
        let tick = self.time.current_tick();
        match action {
            Action::MoveToTarget => {
                if self.apply_move_to_target(id) {
                    result.num_moves += 1;
                }
            }

            Action::Collect => {
                if let Some(waste_id) = self.state.collect(id) {
                    self.set_exploring(id, false);
                    self.event_log.log(Event::Collected {
                        tick,
                        robot_id: id,
                        waste_id,
                        pos,
                    });
                    result.num_collected += 1;
                }
            }

            Action::Transform => {
                let Some(color) = tier.product() else {
                    return;
                };
                if let Some((consumed, produced, at)) = self.state.transform(id) {
                    self.set_exploring(id, false);
                    self.event_log.log(Event::Transformed {
                        tick,
                        robot_id: id,
                        consumed,
                        produced,
                        color,
                        pos: at,
                    });
                    result.num_transformed += 1;

                    // Hand-off: the closest next-tier robot is told where
                    // the promoted unit will be dropped.
                    if let Some(recipient) = comms::nearest_robot(&self.state, at, color) {
                        comms::send(&mut self.state, recipient, Message::pick_up_waste(produced, at));
                        self.event_log.log(Event::MessageSent {
                            tick,
                            from: id,
                            to: recipient,
                            waste_id: produced,
                            location: at,
                        });
                        result.num_messages += 1;
                    }
                }
            }

            Action::Dispose => {
                if pos.x == self.zone_map.disposal_column(tier) {
                    if let Some(outcome) = self.state.dispose(id) {
                        self.set_exploring(id, false);
                        let (waste_ids, destroyed) = match outcome {
                            DisposalOutcome::Dropped(ids) => (ids, false),
                            DisposalOutcome::Destroyed(ids) => (ids, true),
                        };
                        result.num_disposed += waste_ids.len();
                        self.event_log.log(Event::Disposed {
                            tick,
                            robot_id: id,
                            waste_ids,
                            destroyed,
                            pos,
                        });
                    }
                } else {
                    // Not at the boundary column yet: holdings stay put,
                    // the robot steps toward the column instead.
                    if self.move_toward_disposal(id, tier) {
                        result.num_moves += 1;
                    }
                }
            }

            Action::MoveSmartly => {
                self.set_exploring(id, true);
                if self.apply_move_smartly(id, tier) {
                    result.num_moves += 1;
                }
            }
        }
    }

    fn set_exploring(&mut self, id: RobotId, exploring: bool) {
        if let Some(robot) = self.state.robot_mut(id) {
            robot.set_exploring(exploring);
        }
    }

    /// Advance one step toward the pending hand-off target
    ///
    /// Each axis is nudged by at most one cell per tick. The target is
    /// cleared once the robot stands on it.
    fn apply_move_to_target(&mut self, id: RobotId) -> bool {
        let Some(robot) = self.state.robot(id) else {
            return false;
        };
        let Some(target) = robot.target_location() else {
            return false;
        };
        let next = behavior::step_toward(robot.pos(), target);
        let moved = self.state.move_robot(id, next, &self.zone_map);
        if let Some(robot) = self.state.robot_mut(id) {
            if robot.pos() == target {
                robot.clear_target_location();
            }
        }
        moved
    }

    /// Step along the x axis toward the tier's disposal column
    fn move_toward_disposal(&mut self, id: RobotId, tier: Tier) -> bool {
        let column = self.zone_map.disposal_column(tier);
        let Some(robot) = self.state.robot(id) else {
            return false;
        };
        let pos = robot.pos();
        if pos.x == column {
            return false;
        }
        let next = behavior::step_toward(pos, Position::new(column, pos.y));
        self.state.move_robot(id, next, &self.zone_map)
    }

    /// Exploration move: unexplored neighbors first, then least-visited
    ///
    /// The chosen cell may still be occupied — then nothing moves this
    /// tick. Either way the robot's current cell receives a pheromone
    /// deposit for its tier.
    fn apply_move_smartly(&mut self, id: RobotId, tier: Tier) -> bool {
        let Some(robot) = self.state.robot(id) else {
            return false;
        };
        let pos = robot.pos();

        let allowed: Vec<Position> = self
            .state
            .grid()
            .neighbors(pos)
            .into_iter()
            .filter(|p| self.zone_map.is_allowed(tier, *p))
            .collect();

        let mut moved = false;
        if !allowed.is_empty() {
            let unexplored: Vec<Position> = allowed
                .iter()
                .copied()
                .filter(|p| self.field.is_unexplored(tier, *p))
                .collect();

            let chosen = if unexplored.is_empty() {
                let min_level = allowed
                    .iter()
                    .map(|p| self.field.level(tier, *p))
                    .fold(f64::INFINITY, f64::min);
                let least: Vec<Position> = allowed
                    .iter()
                    .copied()
                    .filter(|p| self.field.level(tier, *p) == min_level)
                    .collect();
                self.rng.choice(&least).copied()
            } else {
                self.rng.choice(&unexplored).copied()
            };

            if let Some(to) = chosen {
                moved = self.state.move_robot(id, to, &self.zone_map);
            }
        }

        // Deposit where the robot ends up, whether or not it moved.
        if let Some(robot) = self.state.robot(id) {
            self.field.visit(tier, robot.pos());
        }
        moved
    }
}
