//! Event logging for simulation replay and auditing.
//!
//! The Event enum captures every engine action that changes waste or
//! message state. Events enable:
//! - Deterministic replay verification (same seed → same event log)
//! - Debugging (understand what happened and when)
//! - Metrics extraction by external collaborators
//!
//! Policy refusals (blocked moves, out-of-precondition no-ops) are NOT
//! events: they are frequent, expected, and carry no state change.

use crate::models::grid::Position;
use crate::models::robot::RobotId;
use crate::models::tier::Tier;
use crate::models::waste::WasteId;
use serde::{Deserialize, Serialize};

/// Simulation event capturing a state change.
///
/// All events include a tick number for temporal ordering. Events are
/// logged in the order they occur within a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A waste unit appeared on the ground (initial scatter)
    WastePlaced {
        tick: usize,
        waste_id: WasteId,
        color: Tier,
        pos: Position,
    },

    /// A robot picked up a unit of its own color
    Collected {
        tick: usize,
        robot_id: RobotId,
        waste_id: WasteId,
        pos: Position,
    },

    /// A robot consumed two units and produced one of the next tier
    Transformed {
        tick: usize,
        robot_id: RobotId,
        consumed: Vec<WasteId>,
        produced: WasteId,
        color: Tier,
        pos: Position,
    },

    /// A robot disposed its holdings at its boundary column
    ///
    /// `destroyed` is true only for red robots: their disposal removes
    /// the units permanently instead of re-placing them on the ground.
    Disposed {
        tick: usize,
        robot_id: RobotId,
        waste_ids: Vec<WasteId>,
        destroyed: bool,
        pos: Position,
    },

    /// A hand-off message was delivered to a next-tier robot's inbox
    MessageSent {
        tick: usize,
        from: RobotId,
        to: RobotId,
        waste_id: WasteId,
        location: Position,
    },

    /// Periodic pheromone decay ran
    PheromoneDecay { tick: usize },
}

impl Event {
    /// Tick at which the event occurred
    pub fn tick(&self) -> usize {
        match self {
            Event::WastePlaced { tick, .. }
            | Event::Collected { tick, .. }
            | Event::Transformed { tick, .. }
            | Event::Disposed { tick, .. }
            | Event::MessageSent { tick, .. }
            | Event::PheromoneDecay { tick } => *tick,
        }
    }
}

/// Append-only log of all simulation events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in log order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events from one tick, in log order
    pub fn events_at_tick(&self, tick: usize) -> Vec<&Event> {
        self.events.iter().filter(|e| e.tick() == tick).collect()
    }
}
