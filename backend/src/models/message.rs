//! Hand-off messages between robots
//!
//! The only message kind in the system: after a transformation, the
//! producing robot tells the nearest next-tier robot where the promoted
//! unit will be dropped. The wire shape is fixed for testability:
//!
//! ```json
//! {"kind":"pick_up_waste","waste_id":7,"location":[4,1]}
//! ```

use crate::models::grid::Position;
use crate::models::waste::WasteId;
use serde::{Deserialize, Serialize};

/// Message discriminator (exactly one kind exists)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    #[serde(rename = "pick_up_waste")]
    PickUpWaste,
}

/// A point-to-point hand-off notification
///
/// Delivered into exactly one recipient's inbox; consumed and cleared
/// once the recipient drains it at the start of its next activation.
///
/// # Example
/// ```
/// use robot_mission_core_rs::{Message, Position, WasteId};
///
/// let msg = Message::pick_up_waste(WasteId(7), Position::new(4, 1));
/// let wire = serde_json::to_string(&msg).unwrap();
/// assert_eq!(wire, r#"{"kind":"pick_up_waste","waste_id":7,"location":[4,1]}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageKind,
    pub waste_id: WasteId,
    pub location: Position,
}

impl Message {
    /// Build a `pick_up_waste` hand-off message
    pub fn pick_up_waste(waste_id: WasteId, location: Position) -> Self {
        Self {
            kind: MessageKind::PickUpWaste,
            waste_id,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_round_trip() {
        let msg = Message::pick_up_waste(WasteId(42), Position::new(2, 5));
        let wire = serde_json::to_string(&msg).unwrap();
        assert_eq!(
            wire,
            r#"{"kind":"pick_up_waste","waste_id":42,"location":[2,5]}"#
        );

        let back: Message = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, msg);
    }
}
