//! PyO3 wrapper for World
//!
//! This module provides the Python interface to the Rust engine.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{parse_world_config, robots_to_py, tick_result_to_py, waste_to_py};
use crate::models::tier::Tier;
use crate::orchestrator::World as RustWorld;

/// Python wrapper for the Rust World
///
/// # Example (from Python)
///
/// ```python
/// from robot_mission._core import World
///
/// config = {
///     "width": 12,
///     "height": 9,
///     "initial_green_waste": 10,
///     "initial_yellow_waste": 4,
///     "initial_red_waste": 2,
///     "green_robots": 3,
///     "yellow_robots": 2,
///     "red_robots": 1,
///     "rng_seed": 12345,
/// }
///
/// world = World.new(config)
/// result = world.tick()
/// print(f"tick {result['tick']}: {result['num_collected']} collected")
/// ```
#[pyclass(name = "World")]
pub struct PyWorld {
    inner: RustWorld,
}

#[pymethods]
impl PyWorld {
    /// Create a new world from a configuration dict
    ///
    /// Raises ValueError on missing/ill-typed fields and RuntimeError on
    /// an unsatisfiable configuration (degenerate grid, robots that
    /// cannot be placed).
    #[staticmethod]
    fn new(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let rust_config = parse_world_config(config)?;

        let inner = RustWorld::new(rust_config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to create world: {}",
                e
            ))
        })?;

        Ok(PyWorld { inner })
    }

    /// Execute one simulation tick
    ///
    /// Returns a dict of per-tick counters: `tick`, `num_collected`,
    /// `num_transformed`, `num_disposed`, `num_messages`, `num_moves`.
    fn tick(&mut self, py: Python) -> PyResult<Py<PyDict>> {
        let result = self.inner.tick();
        tick_result_to_py(py, &result)
    }

    /// Get current simulation tick
    fn current_tick(&self) -> usize {
        self.inner.current_tick()
    }

    // ========================================================================
    // State Query Methods (read-only surface for charting)
    // ========================================================================

    /// All robots as dicts: `{id, tier, pos, held}`
    fn get_robots(&self, py: Python) -> PyResult<Py<PyList>> {
        robots_to_py(py, &self.inner.robots())
    }

    /// All ground waste as dicts: `{id, color, pos}`
    fn get_ground_waste(&self, py: Python) -> PyResult<Py<PyList>> {
        waste_to_py(py, &self.inner.ground_waste())
    }

    /// Live waste counts by color (ground + held), plus the total
    fn get_waste_counts(&self, py: Python) -> PyResult<Py<PyDict>> {
        let dict = PyDict::new_bound(py);
        for tier in Tier::ALL {
            dict.set_item(tier.to_string(), self.inner.waste_count(tier))?;
        }
        dict.set_item("total", self.inner.total_waste_count())?;
        Ok(dict.unbind())
    }

    /// Total number of events logged so far
    fn event_count(&self) -> usize {
        self.inner.event_log().len()
    }
}
