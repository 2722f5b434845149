//! Time management for the simulation
//!
//! The simulation operates in discrete ticks. There is no suspension point
//! within a tick; the counter only moves forward. World housekeeping
//! (pheromone decay) runs on a fixed tick cadence.

use serde::{Deserialize, Serialize};

/// Monotonically increasing tick counter
///
/// # Example
/// ```
/// use robot_mission_core_rs::TimeManager;
///
/// let mut time = TimeManager::new();
/// assert_eq!(time.current_tick(), 0);
///
/// time.advance_tick();
/// assert_eq!(time.current_tick(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeManager {
    /// Total ticks elapsed since simulation start
    current_tick: usize,
}

impl TimeManager {
    /// Create a new TimeManager starting at tick 0
    pub fn new() -> Self {
        Self { current_tick: 0 }
    }

    /// Advance time by one tick
    pub fn advance_tick(&mut self) {
        self.current_tick += 1;
    }

    /// Get the current tick (total ticks since start)
    pub fn current_tick(&self) -> usize {
        self.current_tick
    }

    /// Check whether periodic housekeeping is due at the current tick
    ///
    /// True once every `interval` ticks, never at tick 0.
    ///
    /// # Example
    /// ```
    /// use robot_mission_core_rs::TimeManager;
    ///
    /// let mut time = TimeManager::new();
    /// assert!(!time.is_decay_due(30));
    /// for _ in 0..30 {
    ///     time.advance_tick();
    /// }
    /// assert!(time.is_decay_due(30));
    /// ```
    pub fn is_decay_due(&self, interval: usize) -> bool {
        interval > 0 && self.current_tick > 0 && self.current_tick % interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let time = TimeManager::new();
        assert_eq!(time.current_tick(), 0);
    }

    #[test]
    fn test_advance() {
        let mut time = TimeManager::new();
        for _ in 0..5 {
            time.advance_tick();
        }
        assert_eq!(time.current_tick(), 5);
    }

    #[test]
    fn test_decay_cadence() {
        let mut time = TimeManager::new();
        let mut due_ticks = Vec::new();
        for _ in 0..90 {
            time.advance_tick();
            if time.is_decay_due(30) {
                due_ticks.push(time.current_tick());
            }
        }
        assert_eq!(due_ticks, vec![30, 60, 90]);
    }
}
