//! PyO3 FFI boundary for the Python visualization front-end
//!
//! The front-end only *writes* initial configuration and *reads*
//! simulation state (robot positions, ground waste, waste counts, tick
//! counters). The boundary is intentionally minimal: one wrapper class
//! plus dict/list conversions.

pub mod types;
pub mod world;
