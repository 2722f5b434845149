//! Exploration guidance: the per-tier pheromone field
//!
//! Each tier has its own visitation ledger over the whole grid: a real-
//! valued level per cell, incremented when a robot of that tier visits
//! while exploring, and decayed toward zero on a fixed tick cadence. A
//! cell is *unexplored* for a tier iff its level is exactly zero, so
//! "unexplored-first" and "least-visited" selection are two cases of one
//! ordering on the level.
//!
//! The field is world-owned and mutated only through `visit`/`decay`;
//! robots ask "where should I go" and the behavior layer answers from a
//! read-only view.

use crate::models::grid::Position;
use crate::models::tier::Tier;
use serde::{Deserialize, Serialize};

/// Per-tier visitation levels over the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationField {
    width: u32,
    height: u32,
    /// One dense row-major level array per tier, indexed by `Tier::index`
    levels: [Vec<f64>; 3],
    /// Subtracted from every cell on each decay pass, clamped at zero
    decay_amount: f64,
}

impl ExplorationField {
    pub fn new(width: u32, height: u32, decay_amount: f64) -> Self {
        let cells = (width * height) as usize;
        Self {
            width,
            height,
            levels: [vec![0.0; cells], vec![0.0; cells], vec![0.0; cells]],
            decay_amount,
        }
    }

    fn idx(&self, pos: Position) -> Option<usize> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some((pos.y * self.width + pos.x) as usize)
    }

    /// Visitation level of a cell for a tier (0.0 out of bounds)
    pub fn level(&self, tier: Tier, pos: Position) -> f64 {
        match self.idx(pos) {
            Some(i) => self.levels[tier.index()][i],
            None => 0.0,
        }
    }

    /// Has no robot of this tier visited the cell (since the last full
    /// decay)?
    pub fn is_unexplored(&self, tier: Tier, pos: Position) -> bool {
        self.level(tier, pos) == 0.0
    }

    /// Record a visit: adds 1.0 to the cell's level for the tier
    pub fn visit(&mut self, tier: Tier, pos: Position) {
        if let Some(i) = self.idx(pos) {
            self.levels[tier.index()][i] += 1.0;
        }
    }

    /// Decay every cell of every tier by the configured amount, clamped
    /// at zero
    ///
    /// Run by the scheduler once per decay interval; fully visited ground
    /// gradually becomes worth searching again.
    pub fn decay(&mut self) {
        for tier_levels in &mut self.levels {
            for level in tier_levels.iter_mut() {
                *level = (*level - self.decay_amount).max(0.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_increments_only_own_tier() {
        let mut field = ExplorationField::new(4, 4, 1.0);
        let pos = Position::new(2, 1);

        field.visit(Tier::Green, pos);
        assert_eq!(field.level(Tier::Green, pos), 1.0);
        assert_eq!(field.level(Tier::Yellow, pos), 0.0);
        assert!(!field.is_unexplored(Tier::Green, pos));
        assert!(field.is_unexplored(Tier::Yellow, pos));
    }

    #[test]
    fn test_decay_clamps_at_zero() {
        let mut field = ExplorationField::new(2, 2, 1.5);
        let pos = Position::new(0, 0);
        field.visit(Tier::Red, pos);

        field.decay();
        assert_eq!(field.level(Tier::Red, pos), 0.0);
        field.decay();
        assert_eq!(field.level(Tier::Red, pos), 0.0, "never negative");
    }

    #[test]
    fn test_out_of_bounds_visits_ignored() {
        let mut field = ExplorationField::new(2, 2, 1.0);
        field.visit(Tier::Green, Position::new(5, 5));
        assert_eq!(field.level(Tier::Green, Position::new(5, 5)), 0.0);
    }
}
