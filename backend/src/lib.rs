//! Robot Mission Core - Rust Engine
//!
//! Deterministic simulation of tiered robots cleaning typed radioactive
//! waste on a zoned 2-D grid.
//!
//! # Architecture
//!
//! - **core**: Tick counter and housekeeping cadence
//! - **models**: Domain types (Tier, Zone, GridWorld, WasteLedger, Robot,
//!   Message, Event)
//! - **exploration**: Per-tier pheromone field guiding search
//! - **behavior**: Shared perceive-deliberate-act rule table
//! - **comms**: Message router for transformation hand-offs
//! - **orchestrator**: World construction and the tick loop
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (one seeded RNG owned by the world)
//! 2. A waste unit is on the ground or held, never both
//! 3. Total waste mass never increases; it falls only at transformation
//!    (2→1) and red disposal (terminal sink)
//! 4. Robots never leave the zones their tier allows

// Module declarations
pub mod behavior;
pub mod comms;
pub mod core;
pub mod exploration;
pub mod models;
pub mod orchestrator;
pub mod rng;

// Re-exports for convenience
pub use crate::core::time::TimeManager;
pub use exploration::ExplorationField;
pub use models::{
    event::{Event, EventLog},
    grid::{GridWorld, Position},
    message::{Message, MessageKind},
    robot::{Robot, RobotId},
    state::{DisposalOutcome, SimulationState},
    tier::Tier,
    waste::{WasteId, WasteLedger, WasteLocation, WasteUnit},
    zone::{Zone, ZoneMap},
};
pub use orchestrator::{ConfigError, RobotView, TickResult, WasteView, World, WorldConfig};
pub use rng::RngManager;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn robot_mission_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::world::PyWorld>()?;
    Ok(())
}
