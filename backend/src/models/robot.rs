//! Robot (agent) model
//!
//! A robot is a tiered mobile agent with a fixed-shape knowledge record:
//! the ids of the units it carries, an optional hand-off target, a
//! transient exploration flag, and an inbox of pending messages. The
//! record deliberately has no free-form fields — every piece of agent
//! knowledge is a declared, typed slot.
//!
//! Robots never mutate each other: another robot's hand-off reaches this
//! one only through the message router's enqueue API, and the inbox is
//! drained by its owner at the start of its own activation.

use crate::models::grid::Position;
use crate::models::message::Message;
use crate::models::tier::Tier;
use crate::models::waste::WasteId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique robot identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RobotId(pub u32);

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "robot_{}", self.0)
    }
}

/// A tiered waste-collecting robot
///
/// # Example
/// ```
/// use robot_mission_core_rs::{Position, Robot, RobotId, Tier, WasteId};
///
/// let mut robot = Robot::new(RobotId(1), Tier::Green, Position::new(0, 0));
/// assert_eq!(robot.held_count(), 0);
///
/// robot.hold(WasteId(10));
/// assert_eq!(robot.held_count(), 1);
/// assert!(!robot.at_capacity());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
    id: RobotId,
    tier: Tier,
    pos: Position,

    /// Ids of held units, in pick-up order (capacity per tier)
    held: Vec<WasteId>,

    /// Pending hand-off destination from a drained message
    ///
    /// Takes absolute priority over all other behavior until reached.
    target_location: Option<Position>,

    /// True while the robot is searching rather than servicing waste
    exploring: bool,

    /// Pending messages, drained at the start of the next activation
    inbox: Vec<Message>,
}

impl Robot {
    pub fn new(id: RobotId, tier: Tier, pos: Position) -> Self {
        Self {
            id,
            tier,
            pos,
            held: Vec::new(),
            target_location: None,
            exploring: false,
            inbox: Vec::new(),
        }
    }

    pub fn id(&self) -> RobotId {
        self.id
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Update position; called only by the world after a grid move succeeds
    pub fn set_pos(&mut self, pos: Position) {
        self.pos = pos;
    }

    /// Held unit ids in pick-up order
    pub fn held(&self) -> &[WasteId] {
        &self.held
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Holding as many units as the tier allows?
    pub fn at_capacity(&self) -> bool {
        self.held.len() >= self.tier.carry_capacity()
    }

    /// Take a unit into the hands
    pub fn hold(&mut self, id: WasteId) {
        self.held.push(id);
    }

    /// Empty the hands, returning what was held
    pub fn clear_held(&mut self) -> Vec<WasteId> {
        std::mem::take(&mut self.held)
    }

    pub fn target_location(&self) -> Option<Position> {
        self.target_location
    }

    pub fn set_target_location(&mut self, pos: Position) {
        self.target_location = Some(pos);
    }

    pub fn clear_target_location(&mut self) {
        self.target_location = None;
    }

    pub fn exploring(&self) -> bool {
        self.exploring
    }

    pub fn set_exploring(&mut self, exploring: bool) {
        self.exploring = exploring;
    }

    /// Enqueue a message (router API only)
    pub fn push_message(&mut self, message: Message) {
        self.inbox.push(message);
    }

    pub fn inbox_len(&self) -> usize {
        self.inbox.len()
    }

    /// Take and clear all pending messages
    pub fn drain_inbox(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.inbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_per_tier() {
        let mut green = Robot::new(RobotId(1), Tier::Green, Position::new(0, 0));
        green.hold(WasteId(1));
        assert!(!green.at_capacity());
        green.hold(WasteId(2));
        assert!(green.at_capacity());

        let mut red = Robot::new(RobotId(2), Tier::Red, Position::new(5, 0));
        red.hold(WasteId(3));
        assert!(red.at_capacity());
    }

    #[test]
    fn test_clear_held_returns_units_in_order() {
        let mut robot = Robot::new(RobotId(1), Tier::Yellow, Position::new(2, 0));
        robot.hold(WasteId(4));
        robot.hold(WasteId(9));
        assert_eq!(robot.clear_held(), vec![WasteId(4), WasteId(9)]);
        assert_eq!(robot.held_count(), 0);
    }

    #[test]
    fn test_drain_inbox_empties() {
        use crate::models::message::Message;

        let mut robot = Robot::new(RobotId(1), Tier::Yellow, Position::new(0, 0));
        robot.push_message(Message::pick_up_waste(WasteId(1), Position::new(3, 0)));
        assert_eq!(robot.inbox_len(), 1);

        let drained = robot.drain_inbox();
        assert_eq!(drained.len(), 1);
        assert_eq!(robot.inbox_len(), 0);
    }
}
