//! Agent behavior: the perceive-deliberate-act rule table
//!
//! One routine serves all three tiers; every tier-specific number
//! (capacity, product color, zone ceiling) comes from the `Tier` rule
//! table. Deliberation is a fixed priority list — first match wins — and
//! is pure: it reads the robot and the ledger and names an action. The
//! world applies the action; anything infeasible degrades to a no-op for
//! this tick.

use crate::models::grid::Position;
use crate::models::robot::Robot;
use crate::models::state::SimulationState;

/// What a robot wants to do this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step toward a pending hand-off target
    MoveToTarget,
    /// Pick up an own-color unit from the current cell
    Collect,
    /// Consume two held units into one of the next tier
    Transform,
    /// Release holdings (at the boundary column; steps toward it otherwise)
    Dispose,
    /// Explore: prefer unexplored, then least-visited neighbors
    MoveSmartly,
}

/// Decide on an action from current knowledge
///
/// Priority order, first match wins:
/// 1. A pending target elsewhere takes absolute priority.
/// 2. Collect own-color waste underfoot while below capacity — unless
///    the cargo is already the transformation product, in which case
///    disposing it comes first.
/// 3. A full load (Green/Yellow) gets transformed.
/// 4. A single held product unit (or any cargo, for Red) gets disposed.
/// 5. Otherwise explore.
pub fn deliberate(robot: &Robot, waste_here: bool, state: &SimulationState) -> Action {
    if let Some(target) = robot.target_location() {
        if target != robot.pos() {
            return Action::MoveToTarget;
        }
    }

    let tier = robot.tier();
    let carrying_product = state.is_carrying_product(robot);

    if waste_here && robot.held_count() < tier.carry_capacity() && !carrying_product {
        return Action::Collect;
    }
    if robot.held_count() == tier.carry_capacity() && tier.product().is_some() {
        return Action::Transform;
    }
    if robot.held_count() == 1 && (carrying_product || tier.product().is_none()) {
        return Action::Dispose;
    }
    Action::MoveSmartly
}

/// One step of target-seeking movement
///
/// Each axis is nudged by at most one cell toward the target,
/// independently — Chebyshev-style stepping.
pub fn step_toward(from: Position, target: Position) -> Position {
    let x = if from.x < target.x {
        from.x + 1
    } else if from.x > target.x {
        from.x - 1
    } else {
        from.x
    };
    let y = if from.y < target.y {
        from.y + 1
    } else if from.y > target.y {
        from.y - 1
    } else {
        from.y
    };
    Position::new(x, y)
}
