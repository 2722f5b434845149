//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::orchestrator::{RobotView, TickResult, WasteView, WorldConfig};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with a clear error message
fn extract_required<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Missing required field '{}'",
                key
            ))
        })?
        .extract()
}

/// Extract a field with a default value if missing
fn extract_with_default<T>(dict: &Bound<'_, PyDict>, key: &str, default: T) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(default),
    }
}

// ========================================================================
// Configuration Parser
// ========================================================================

/// Convert a Python dict to a WorldConfig
///
/// # Errors
///
/// Returns PyErr if required fields are missing or type conversions fail.
/// Range validation happens in `World::new`.
pub fn parse_world_config(py_config: &Bound<'_, PyDict>) -> PyResult<WorldConfig> {
    let defaults = WorldConfig::default();

    Ok(WorldConfig {
        width: extract_required(py_config, "width")?,
        height: extract_required(py_config, "height")?,
        initial_green_waste: extract_with_default(py_config, "initial_green_waste", 0)?,
        initial_yellow_waste: extract_with_default(py_config, "initial_yellow_waste", 0)?,
        initial_red_waste: extract_with_default(py_config, "initial_red_waste", 0)?,
        green_robots: extract_with_default(py_config, "green_robots", 0)?,
        yellow_robots: extract_with_default(py_config, "yellow_robots", 0)?,
        red_robots: extract_with_default(py_config, "red_robots", 0)?,
        rng_seed: extract_with_default(py_config, "rng_seed", defaults.rng_seed)?,
        decay_interval: extract_with_default(py_config, "decay_interval", defaults.decay_interval)?,
        decay_amount: extract_with_default(py_config, "decay_amount", defaults.decay_amount)?,
    })
}

// ========================================================================
// Result Converters
// ========================================================================

/// Convert a TickResult to a Python dict
pub fn tick_result_to_py(py: Python, result: &TickResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("tick", result.tick)?;
    dict.set_item("num_collected", result.num_collected)?;
    dict.set_item("num_transformed", result.num_transformed)?;
    dict.set_item("num_disposed", result.num_disposed)?;
    dict.set_item("num_messages", result.num_messages)?;
    dict.set_item("num_moves", result.num_moves)?;
    Ok(dict.unbind())
}

/// Convert robot snapshots to a Python list of dicts
pub fn robots_to_py(py: Python, robots: &[RobotView]) -> PyResult<Py<PyList>> {
    let list = PyList::empty_bound(py);
    for robot in robots {
        let dict = PyDict::new_bound(py);
        dict.set_item("id", robot.id.0)?;
        dict.set_item("tier", robot.tier.to_string())?;
        dict.set_item("pos", (robot.pos.x, robot.pos.y))?;
        dict.set_item("held", robot.held)?;
        list.append(dict)?;
    }
    Ok(list.unbind())
}

/// Convert ground-waste snapshots to a Python list of dicts
pub fn waste_to_py(py: Python, waste: &[WasteView]) -> PyResult<Py<PyList>> {
    let list = PyList::empty_bound(py);
    for unit in waste {
        let dict = PyDict::new_bound(py);
        dict.set_item("id", unit.id.0)?;
        dict.set_item("color", unit.color.to_string())?;
        dict.set_item("pos", (unit.pos.x, unit.pos.y))?;
        list.append(dict)?;
    }
    Ok(list.unbind())
}
