//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! CRITICAL: All randomness in the simulation MUST go through this module —
//! activation shuffles, placement, radioactivity sampling, exploration
//! tie-breaks. One seeded instance is owned by the world.

mod xorshift;

pub use xorshift::RngManager;
