//! Message router: point-to-point hand-off delivery
//!
//! After a transformation, the producing robot notifies the nearest
//! robot of the product's tier so it can come pick the unit up. Routing
//! is Manhattan-nearest with ties broken by lowest robot id — fully
//! deterministic under a fixed seed.
//!
//! Delivery is an explicit enqueue into the recipient's inbox; the
//! recipient drains it at the start of its own next activation (never
//! immediately — the recipient is not executing when the message lands).

use crate::models::grid::Position;
use crate::models::message::{Message, MessageKind};
use crate::models::robot::{Robot, RobotId};
use crate::models::state::SimulationState;
use crate::models::tier::Tier;

/// Manhattan-nearest robot of a tier, ties broken by lowest id
///
/// Robots iterate in ascending id order, so keeping the first strict
/// minimum implements the tie-break.
pub fn nearest_robot(state: &SimulationState, from: Position, tier: Tier) -> Option<RobotId> {
    let mut best: Option<(u32, RobotId)> = None;
    for robot in state.robots().filter(|r| r.tier() == tier) {
        let dist = robot.pos().manhattan_distance(from);
        match best {
            Some((best_dist, _)) if dist >= best_dist => {}
            _ => best = Some((dist, robot.id())),
        }
    }
    best.map(|(_, id)| id)
}

/// Deliver a message into a robot's inbox
///
/// Returns false if the recipient does not exist.
pub fn send(state: &mut SimulationState, to: RobotId, message: Message) -> bool {
    match state.robot_mut(to) {
        Some(robot) => {
            robot.push_message(message);
            true
        }
        None => false,
    }
}

/// Drain a robot's inbox at the start of its activation
///
/// Every `pick_up_waste` message sets the hand-off target (last one
/// wins) and stops exploration; the inbox is left empty.
pub fn drain_messages(robot: &mut Robot) {
    for message in robot.drain_inbox() {
        match message.kind {
            MessageKind::PickUpWaste => {
                robot.set_target_location(message.location);
                robot.set_exploring(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::GridWorld;
    use crate::models::waste::WasteId;
    use crate::models::zone::ZoneMap;
    use crate::rng::RngManager;

    fn state_9x3() -> SimulationState {
        let zones = ZoneMap::new(9, 3);
        let mut rng = RngManager::new(5);
        SimulationState::new(GridWorld::new(&zones, &mut rng))
    }

    #[test]
    fn test_nearest_by_manhattan_distance() {
        let mut state = state_9x3();
        state.add_robot(Robot::new(RobotId(1), Tier::Yellow, Position::new(5, 2)));
        state.add_robot(Robot::new(RobotId(2), Tier::Yellow, Position::new(2, 0)));

        let from = Position::new(1, 0);
        assert_eq!(nearest_robot(&state, from, Tier::Yellow), Some(RobotId(2)));
    }

    #[test]
    fn test_tie_breaks_by_lowest_id() {
        let mut state = state_9x3();
        // Both yellow robots are 2 steps from (1, 0)
        state.add_robot(Robot::new(RobotId(4), Tier::Yellow, Position::new(3, 0)));
        state.add_robot(Robot::new(RobotId(3), Tier::Yellow, Position::new(1, 2)));

        let from = Position::new(1, 0);
        assert_eq!(nearest_robot(&state, from, Tier::Yellow), Some(RobotId(3)));
    }

    #[test]
    fn test_no_robot_of_tier() {
        let mut state = state_9x3();
        state.add_robot(Robot::new(RobotId(1), Tier::Green, Position::new(0, 0)));
        assert_eq!(nearest_robot(&state, Position::new(0, 0), Tier::Red), None);
    }

    #[test]
    fn test_drain_sets_target_and_stops_exploring() {
        let mut robot = Robot::new(RobotId(1), Tier::Yellow, Position::new(0, 0));
        robot.set_exploring(true);
        robot.push_message(Message::pick_up_waste(WasteId(1), Position::new(4, 1)));
        robot.push_message(Message::pick_up_waste(WasteId(2), Position::new(2, 2)));

        drain_messages(&mut robot);
        assert_eq!(robot.target_location(), Some(Position::new(2, 2)), "last wins");
        assert!(!robot.exploring());
        assert_eq!(robot.inbox_len(), 0);
    }
}
